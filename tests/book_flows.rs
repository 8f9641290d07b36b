//! End-to-end flows driven through the public event and key APIs.

use std::collections::HashSet;
use zbooks::domain::PLACEHOLDER_POSTER;
use zbooks::ui::helpers::strip_ansi;
use zbooks::ui::{render, ScreenView};
use zbooks::{handle_event, initialize, map_key, AppState, BookDraft, Config, Event, Key};

const ROWS: usize = 30;
const COLS: usize = 100;

fn list_state() -> AppState {
    initialize(&Config::default())
}

fn send(state: &mut AppState, event: Event) -> bool {
    handle_event(state, &event).0
}

/// Presses `keys` the way the plugin shim does: through the keymap of the
/// current input context.
fn press(state: &mut AppState, keys: &[Key]) {
    for key in keys {
        if let Some(event) = map_key(state.input_context(), *key) {
            handle_event(state, &event);
        }
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

fn add_dune(state: &mut AppState) {
    send(state, Event::Navigate("/books/add".to_string()));
    for text in ["123", "Dune", "Herbert", "", "Desert planet"] {
        type_text(state, text);
        send(state, Event::FocusNextField);
    }
    send(state, Event::SubmitForm);
    send(state, Event::Navigate("/books".to_string()));
}

fn screen_text(state: &AppState) -> String {
    strip_ansi(&render(state, ROWS, COLS))
}

#[test]
fn adding_a_book_shows_one_card() {
    let mut state = list_state();
    add_dune(&mut state);

    assert_eq!(state.books().len(), 1);
    let book = &state.books()[0];
    assert_eq!(book.to_draft(), BookDraft::new("123", "Dune", "Herbert", "", "Desert planet"));

    let ScreenView::List(list) = state.compute_viewmodel(ROWS, COLS).screen else {
        panic!("expected the list screen");
    };
    assert_eq!(list.cards.len(), 1);
    assert_eq!(list.cards[0].title, "Dune");
    assert_eq!(list.cards[0].author, "Herbert");
    assert_eq!(list.cards[0].poster, PLACEHOLDER_POSTER);

    let text = screen_text(&state);
    assert!(text.contains("Books (1)"));
    assert!(text.contains("Dune"));
    assert!(text.contains("Details  Edit  Delete"));
}

#[test]
fn details_overlay_opens_and_dismisses() {
    let mut state = list_state();
    add_dune(&mut state);

    assert!(send(&mut state, Event::ShowDetails));
    let overlay = state.compute_viewmodel(ROWS, COLS).overlay.expect("overlay open");
    assert_eq!(overlay.isbn, "123");
    assert_eq!(overlay.author, "Herbert");
    assert_eq!(overlay.description, "Desert planet");
    assert!(screen_text(&state).contains("ISBN:"));

    assert!(send(&mut state, Event::DismissDetails));
    assert!(state.compute_viewmodel(ROWS, COLS).overlay.is_none());
    assert!(!screen_text(&state).contains("ISBN:"));
}

#[test]
fn deleting_the_only_book_empties_the_list() {
    let mut state = list_state();
    add_dune(&mut state);

    assert!(send(&mut state, Event::DeleteSelected));
    assert!(state.books().is_empty());

    let ScreenView::List(list) = state.compute_viewmodel(ROWS, COLS).screen else {
        panic!("expected the list screen");
    };
    assert!(list.cards.is_empty());
    assert!(screen_text(&state).contains("No books yet"));
}

#[test]
fn empty_form_submission_adds_an_empty_book() {
    let mut state = list_state();
    send(&mut state, Event::Navigate("/books/add".to_string()));
    send(&mut state, Event::SubmitForm);

    assert_eq!(state.books().len(), 1);
    assert_eq!(state.books()[0].to_draft(), BookDraft::default());
}

#[test]
fn consecutive_adds_get_distinct_ids() {
    let mut state = list_state();
    send(&mut state, Event::Navigate("/books/add".to_string()));
    for _ in 0..3 {
        send(&mut state, Event::SubmitForm);
    }

    let ids: HashSet<_> = state.books().iter().map(|b| b.id()).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn editing_prefills_and_updates_in_place() {
    let mut state = list_state();
    add_dune(&mut state);
    let id = state.books()[0].id();

    assert!(send(&mut state, Event::EditSelected));
    assert_eq!(state.path(), format!("/books/edit/{id}"));
    assert_eq!(state.form().map(|f| f.values().title.clone()), Some("Dune".to_string()));
    assert!(screen_text(&state).contains("Update Book"));

    // Title is the second field.
    send(&mut state, Event::FocusNextField);
    type_text(&mut state, " Messiah");
    send(&mut state, Event::SubmitForm);

    assert_eq!(state.books().len(), 1);
    assert_eq!(state.books()[0].id(), id);
    assert_eq!(state.books()[0].title, "Dune Messiah");
    assert_eq!(state.books()[0].isbn, "123");
}

#[test]
fn overlay_blocks_the_screen_beneath() {
    let mut state = list_state();
    add_dune(&mut state);
    send(&mut state, Event::ShowDetails);

    assert!(!send(&mut state, Event::DeleteSelected));
    assert!(!send(&mut state, Event::EditSelected));
    assert_eq!(state.books().len(), 1);
    assert!(state.selected_book().is_some());
}

#[test]
fn unmatched_route_renders_only_the_shell() {
    let mut state = list_state();
    add_dune(&mut state);
    send(&mut state, Event::Navigate("/shelves".to_string()));

    assert!(matches!(state.compute_viewmodel(ROWS, COLS).screen, ScreenView::Blank));
    let text = screen_text(&state);
    assert!(text.contains("Book List"));
    assert!(!text.contains("Details  Edit  Delete"));
    assert_eq!(state.books().len(), 1);
}

#[test]
fn keyboard_session_adds_views_and_deletes() {
    let mut state = list_state();

    press(&mut state, &[Key::Char('a')]);
    assert_eq!(state.path(), "/books/add");

    // Letters type into the form instead of triggering list bindings.
    let mut keys: Vec<Key> = "123".chars().map(Key::Char).collect();
    keys.push(Key::Tab);
    keys.extend("Dune".chars().map(Key::Char));
    keys.push(Key::Enter);
    press(&mut state, &keys);
    assert_eq!(state.books().len(), 1);
    assert_eq!(state.books()[0].title, "Dune");

    press(&mut state, &[Key::Ctrl('l'), Key::Enter]);
    assert_eq!(state.selected_book().map(|b| b.isbn.as_str()), Some("123"));

    press(&mut state, &[Key::Char('x')]);
    assert!(state.selected_book().is_none());
    assert_eq!(state.books().len(), 1);

    press(&mut state, &[Key::Char('x')]);
    assert!(state.books().is_empty());
}

#[test]
fn ctrl_s_submits_from_the_description() {
    let mut state = list_state();
    press(&mut state, &[Key::Ctrl('a'), Key::BackTab, Key::BackTab, Key::Char('a'), Key::Enter, Key::Char('b')]);
    assert!(state.books().is_empty());

    press(&mut state, &[Key::Ctrl('s')]);
    assert_eq!(state.books().len(), 1);
    assert_eq!(state.books()[0].description, "a\nb");
}
