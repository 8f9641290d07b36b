//! Shell state and view model computation.
//!
//! [`AppState`] is the application root. It exclusively owns the
//! [`CollectionStore`], the [`Router`], the mounted [`BookForm`] and the
//! book selected for the details overlay. Nothing outside this type holds a
//! mutable reference to any of them; every change goes through one of the
//! callback methods below, which the event handler calls.
//!
//! # State Components
//!
//! - **Store**: the book collection and its three mutations
//! - **Router**: current path, mapped to a screen on demand
//! - **Form**: mounted while an add/edit route is active
//! - **Selection**: snapshot of the book shown in the details overlay
//! - **Cursor**: keyboard position within the card grid
//! - **Status**: confirmation of the last collection change
//!
//! # Example
//!
//! ```rust
//! use zbooks::app::AppState;
//! use zbooks::domain::BookDraft;
//! use zbooks::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), "/books");
//! state.add_book(BookDraft::new("123", "Dune", "Herbert", "", "Desert planet"));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.overlay.is_none());
//! ```

use super::form::{BookForm, FormField};
use super::modes::InputContext;
use super::route::{Route, Router};
use crate::domain::{Book, BookDraft, BookId};
use crate::store::CollectionStore;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BookCard, DetailsView, EmptyState, FooterInfo, FormView, HeaderInfo, InputView, ListView,
    NavBar, NavLink, ScreenView, UIViewModel,
};

/// Application root state.
#[derive(Debug, Clone)]
pub struct AppState {
    store: CollectionStore,
    router: Router,
    form: Option<BookForm>,
    selected: Option<Book>,
    cursor: usize,
    status: Option<String>,
    viewport: (usize, usize),

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the shell with an empty collection, positioned at `start_path`.
    #[must_use]
    pub fn new(theme: Theme, start_path: &str) -> Self {
        let mut state = Self {
            store: CollectionStore::new(),
            router: Router::new(start_path),
            form: None,
            selected: None,
            cursor: 0,
            status: None,
            viewport: (24, 80),
            theme,
        };
        state.mount_screen();
        state
    }

    #[must_use]
    pub const fn store(&self) -> &CollectionStore {
        &self.store
    }

    #[must_use]
    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        self.router.path()
    }

    #[must_use]
    pub fn route(&self) -> Option<Route> {
        self.router.current()
    }

    /// Form mounted by the add/edit routes.
    #[must_use]
    pub const fn form(&self) -> Option<&BookForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut BookForm> {
        self.form.as_mut()
    }

    /// Book shown in the details overlay.
    #[must_use]
    pub const fn selected_book(&self) -> Option<&Book> {
        self.selected.as_ref()
    }

    /// Grid index of the highlighted card.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Book under the grid cursor.
    #[must_use]
    pub fn highlighted_book(&self) -> Option<&Book> {
        self.store.books().get(self.cursor)
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.selected.is_some() {
            return InputContext::Overlay;
        }
        match self.router.current() {
            Some(Route::List) => InputContext::List,
            Some(Route::AddForm | Route::EditForm(_)) => InputContext::Form,
            None => InputContext::Blank,
        }
    }

    /// Records the pane size of the last render.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
    }

    /// Moves to `path`. The form is remounted only when the matched route
    /// changes, so following a link to the screen already shown keeps its
    /// state. The details overlay is left alone.
    pub fn navigate(&mut self, path: &str) -> bool {
        let previous = self.router.current();
        if !self.router.navigate(path) {
            return false;
        }

        self.status = None;
        if self.router.current() != previous {
            self.mount_screen();
        }
        true
    }

    fn mount_screen(&mut self) {
        self.form = match self.router.current() {
            Some(Route::AddForm) => Some(BookForm::new(None)),
            Some(Route::EditForm(id)) => {
                let initial = self.store.get(id);
                tracing::debug!(book_id = %id, found = initial.is_some(), "mounting edit form");
                Some(BookForm::for_edit(id, initial))
            }
            Some(Route::List) | None => None,
        };
    }

    /// Adds a book and returns its identifier.
    pub fn add_book(&mut self, draft: BookDraft) -> BookId {
        let book = self.store.add(draft);
        self.status = Some(format!("Added {}", describe(book)));
        book.id()
    }

    /// Replaces the stored book with the same identifier. No-op when the
    /// identifier is unknown.
    pub fn update_book(&mut self, book: Book) -> bool {
        let status = format!("Updated {}", describe(&book));
        if !self.store.update(book) {
            return false;
        }
        self.status = Some(status);
        true
    }

    /// Removes a book. No-op when the identifier is unknown.
    pub fn delete_book(&mut self, id: BookId) -> bool {
        let status = self.store.get(id).map(|book| format!("Deleted {}", describe(book)));
        if !self.store.delete(id) {
            return false;
        }
        self.status = status;
        self.clamp_cursor();
        true
    }

    /// Opens the details overlay for `id`.
    pub fn show_details(&mut self, id: BookId) -> bool {
        let Some(book) = self.store.get(id) else {
            return false;
        };
        tracing::debug!(book_id = %id, "showing details");
        self.selected = Some(book.clone());
        true
    }

    /// Closes the details overlay.
    pub fn dismiss_details(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Dispatches a submitted form: `add` on the add route, `update` of the
    /// routed book on the edit route.
    pub fn submit_form(&mut self, draft: BookDraft) -> bool {
        match self.router.current() {
            Some(Route::AddForm) => {
                self.add_book(draft);
                true
            }
            Some(Route::EditForm(id)) => {
                let Some(revised) = self.store.get(id).map(|book| book.revised(draft)) else {
                    tracing::debug!(book_id = %id, "edited book no longer exists");
                    return false;
                };
                self.update_book(revised)
            }
            Some(Route::List) | None => false,
        }
    }

    /// Moves the grid cursor by `delta` cards, wrapping around the collection.
    /// Used for left/right moves.
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        let len = self.store.len();
        if len == 0 {
            return false;
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let current = isize::try_from(self.cursor).unwrap_or(0);
        let next = usize::try_from((current + delta).rem_euclid(len)).unwrap_or(0);

        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Moves the grid cursor one row up or down, keeping its column.
    ///
    /// Stops at the first and last rows. Moving down into a shorter last row
    /// lands on that row's final card.
    pub fn move_cursor_row(&mut self, down: bool) -> bool {
        let len = self.store.len();
        let columns = self.grid_columns().max(1);
        if len == 0 {
            return false;
        }

        let next = if down {
            let last_row = (len - 1) / columns;
            if self.cursor / columns >= last_row {
                return false;
            }
            (self.cursor + columns).min(len - 1)
        } else {
            if self.cursor < columns {
                return false;
            }
            self.cursor - columns
        };

        self.cursor = next;
        true
    }

    /// Cards per grid row at the last recorded viewport.
    #[must_use]
    pub const fn grid_columns(&self) -> usize {
        layout::grid_columns(self.viewport.1)
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let screen = match self.router.current() {
            Some(Route::List) => ScreenView::List(self.compute_list(rows, cols)),
            Some(Route::AddForm | Route::EditForm(_)) => self
                .form
                .as_ref()
                .map_or(ScreenView::Blank, |form| ScreenView::Form(self.compute_form(form))),
            None => ScreenView::Blank,
        };

        UIViewModel {
            navbar: self.compute_navbar(),
            screen,
            overlay: self.selected.as_ref().map(compute_details),
            footer: FooterInfo {
                keybindings: self.input_context().keybindings().to_string(),
                status: self.status.clone(),
            },
        }
    }

    fn compute_navbar(&self) -> NavBar {
        let route = self.router.current();
        NavBar {
            links: vec![
                NavLink {
                    label: "Book List",
                    shortcut: "Ctrl+l",
                    is_active: route == Some(Route::List),
                },
                NavLink {
                    label: "Add Book",
                    shortcut: "Ctrl+a",
                    is_active: route == Some(Route::AddForm),
                },
            ],
        }
    }

    /// Picks the window of cards to show so that the cursor row stays
    /// roughly centered.
    fn compute_list(&self, rows: usize, cols: usize) -> ListView {
        let books = self.store.books();
        let header = HeaderInfo {
            title: format!(" Books ({}) ", books.len()),
        };
        let columns = layout::grid_columns(cols);

        if books.is_empty() {
            return ListView {
                header,
                cards: vec![],
                columns,
                empty_state: Some(EmptyState {
                    message: "No books yet".to_string(),
                    subtitle: "Press 'a' or Ctrl+a to add one".to_string(),
                }),
            };
        }

        let visible_rows = layout::visible_card_rows(rows);
        let total_rows = (books.len() + columns - 1) / columns;
        let cursor_row = self.cursor / columns;

        let mut first_row = cursor_row.saturating_sub(visible_rows / 2);
        if first_row + visible_rows > total_rows {
            first_row = total_rows.saturating_sub(visible_rows);
        }

        let start = first_row * columns;
        let end = ((first_row + visible_rows) * columns).min(books.len());

        let cards = books[start..end]
            .iter()
            .enumerate()
            .map(|(offset, book)| BookCard {
                title: book.title.clone(),
                author: book.author.clone(),
                poster: book.poster_or_placeholder().to_string(),
                is_selected: start + offset == self.cursor,
            })
            .collect();

        ListView {
            header,
            cards,
            columns,
            empty_state: None,
        }
    }

    fn compute_form(&self, form: &BookForm) -> FormView {
        let title = form
            .editing()
            .map_or_else(|| " Add Book ".to_string(), |id| format!(" Edit Book #{id} "));

        let inputs = FormField::INPUTS
            .iter()
            .map(|&field| InputView {
                placeholder: field.placeholder(),
                value: form.value(field).to_string(),
                is_focused: form.focus() == field,
                multiline: field.is_multiline(),
            })
            .collect();

        FormView {
            header: HeaderInfo { title },
            inputs,
            submit_label: form.submit_label(),
            submit_focused: form.focus() == FormField::Submit,
        }
    }
}

fn compute_details(book: &Book) -> DetailsView {
    DetailsView {
        title: book.title.clone(),
        poster: book.poster_or_placeholder().to_string(),
        isbn: book.isbn.clone(),
        author: book.author.clone(),
        description: book.description.clone(),
    }
}

fn describe(book: &Book) -> String {
    if book.title.is_empty() {
        format!("untitled book #{}", book.id())
    } else {
        format!("\"{}\"", book.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::route::{ADD_PATH, LIST_PATH};

    fn state_with(titles: &[&str]) -> AppState {
        let mut state = AppState::new(Theme::default(), LIST_PATH);
        for title in titles {
            state.add_book(BookDraft::new("", *title, "someone", "", ""));
        }
        state
    }

    fn card_titles(vm: &UIViewModel) -> Vec<String> {
        match &vm.screen {
            ScreenView::List(list) => list.cards.iter().map(|c| c.title.clone()).collect(),
            other => panic!("expected list screen, got {other:?}"),
        }
    }

    #[test]
    fn start_path_mounts_matching_screen() {
        let state = AppState::new(Theme::default(), "/books/add");
        assert_eq!(state.input_context(), InputContext::Form);
        assert_eq!(state.form().map(BookForm::submit_label), Some("Add Book"));

        let blank = AppState::new(Theme::default(), "/elsewhere");
        assert_eq!(blank.input_context(), InputContext::Blank);
        assert!(matches!(blank.compute_viewmodel(24, 80).screen, ScreenView::Blank));
    }

    #[test]
    fn same_route_navigation_keeps_form_values() {
        let mut state = AppState::new(Theme::default(), "/books/add");
        if let Some(form) = state.form_mut() {
            form.insert_char('9');
        }

        assert!(state.navigate("/books/add/"));
        assert_eq!(state.form().map(|f| f.values().isbn.clone()), Some("9".to_string()));

        state.navigate(LIST_PATH);
        state.navigate(ADD_PATH);
        assert_eq!(state.form().map(|f| f.values().isbn.clone()), Some(String::new()));
    }

    #[test]
    fn edit_route_prefills_the_routed_book() {
        let mut state = state_with(&["Dune"]);
        let id = state.books()[0].id();

        state.navigate(&Route::EditForm(id).path());
        let form = state.form().unwrap();
        assert_eq!(form.values().title, "Dune");
        assert_eq!(form.submit_label(), "Update Book");
    }

    #[test]
    fn edit_submission_updates_in_place() {
        let mut state = state_with(&["a", "b", "c"]);
        let id = state.books()[1].id();
        state.navigate(&Route::EditForm(id).path());

        assert!(state.submit_form(BookDraft::new("", "B", "x", "", "")));
        let titles: Vec<&str> = state.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "B", "c"]);
        assert_eq!(state.status(), Some("Updated \"B\""));
    }

    #[test]
    fn edit_of_unknown_book_is_a_no_op() {
        let mut state = state_with(&["a"]);
        state.navigate("/books/edit/999");

        let form = state.form().unwrap();
        assert_eq!(form.values(), &BookDraft::default());
        assert!(!state.submit_form(BookDraft::new("", "ghost", "", "", "")));
        assert_eq!(state.books().len(), 1);
    }

    #[test]
    fn cursor_wraps_and_is_clamped_after_delete() {
        let mut state = state_with(&["a", "b", "c"]);
        assert!(state.move_cursor(-1));
        assert_eq!(state.cursor(), 2);

        let id = state.highlighted_book().unwrap().id();
        assert!(state.delete_book(id));
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.highlighted_book().map(|b| b.title.as_str()), Some("b"));
    }

    #[test]
    fn row_moves_keep_the_column_in_a_ragged_grid() {
        // 100 columns -> 3 cards per row; rows are [0 1 2] [3 4].
        let mut state = state_with(&["a", "b", "c", "d", "e"]);
        state.set_viewport(24, 100);

        assert!(!state.move_cursor_row(false));
        assert_eq!(state.cursor(), 0);

        assert!(state.move_cursor_row(true));
        assert_eq!(state.cursor(), 3);
        assert!(!state.move_cursor_row(true));
        assert_eq!(state.cursor(), 3);

        assert!(state.move_cursor_row(false));
        assert_eq!(state.cursor(), 0);

        state.move_cursor(2);
        assert!(state.move_cursor_row(true));
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn list_window_follows_the_cursor() {
        let titles: Vec<String> = (0..20).map(|i| format!("book {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);

        // 80 columns -> 2 cards per row, 24 rows -> 3 card rows.
        assert_eq!(card_titles(&state.compute_viewmodel(24, 80)).len(), 6);

        state.move_cursor(19);
        let vm = state.compute_viewmodel(24, 80);
        let shown = card_titles(&vm);
        assert_eq!(shown.first().map(String::as_str), Some("book 14"));
        assert_eq!(shown.last().map(String::as_str), Some("book 19"));
    }

    #[test]
    fn cards_substitute_the_placeholder_poster() {
        let mut state = state_with(&[]);
        state.add_book(BookDraft::new("", "With", "", "cover.png", ""));
        state.add_book(BookDraft::new("", "Without", "", "", ""));

        let ScreenView::List(list) = state.compute_viewmodel(24, 80).screen else {
            panic!("expected list screen");
        };
        assert_eq!(list.cards[0].poster, "cover.png");
        assert_eq!(list.cards[1].poster, crate::domain::PLACEHOLDER_POSTER);
    }

    #[test]
    fn active_nav_link_tracks_route() {
        let mut state = state_with(&[]);
        let active = |state: &AppState| -> Vec<bool> {
            state.compute_viewmodel(24, 80).navbar.links.iter().map(|l| l.is_active).collect()
        };

        assert_eq!(active(&state), vec![true, false]);
        state.navigate(ADD_PATH);
        assert_eq!(active(&state), vec![false, true]);
        state.navigate("/nope");
        assert_eq!(active(&state), vec![false, false]);
    }
}
