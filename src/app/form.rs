//! Controlled book form.
//!
//! [`BookForm`] owns the five text values shown by the add/edit screen and the
//! keyboard focus. It never talks to the store: submission just returns the
//! current values as a [`BookDraft`], and the shell decides whether that draft
//! becomes an `add` or an `update`. Field values are kept after submission.

use crate::domain::{Book, BookDraft, BookId};

/// Focusable element of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Isbn,
    Title,
    Author,
    Poster,
    Description,
    /// The submit button.
    Submit,
}

impl FormField {
    /// Text inputs in display order (the submit button is not an input).
    pub const INPUTS: [Self; 5] = [Self::Isbn, Self::Title, Self::Author, Self::Poster, Self::Description];

    const ORDER: [Self; 6] = [
        Self::Isbn,
        Self::Title,
        Self::Author,
        Self::Poster,
        Self::Description,
        Self::Submit,
    ];

    /// Placeholder shown while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Isbn => "ISBN",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Poster => "Poster URL",
            Self::Description => "Description",
            Self::Submit => "",
        }
    }

    /// Whether Enter inserts a newline instead of submitting.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Description)
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// What pressing Enter did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterOutcome {
    /// A newline was inserted into the description.
    Newline,
    /// The form was submitted with these values.
    Submitted(BookDraft),
}

/// Form state for the add and edit screens.
#[derive(Debug, Clone)]
pub struct BookForm {
    values: BookDraft,
    focus: FormField,
    editing: Option<BookId>,
}

impl BookForm {
    /// Creates a form, pre-filled from `initial` when one is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use zbooks::app::BookForm;
    ///
    /// let mut form = BookForm::new(None);
    /// for c in "0441013597".chars() {
    ///     form.insert_char(c);
    /// }
    /// assert_eq!(form.submit().isbn, "0441013597");
    /// assert_eq!(form.submit_label(), "Add Book");
    /// ```
    #[must_use]
    pub fn new(initial: Option<&Book>) -> Self {
        Self {
            values: initial.map(Book::to_draft).unwrap_or_default(),
            focus: FormField::Isbn,
            editing: initial.map(Book::id),
        }
    }

    /// Form mounted by the edit route for `id`. Fields are blank when the
    /// book does not exist, but the form still reports itself as editing.
    #[must_use]
    pub fn for_edit(id: BookId, initial: Option<&Book>) -> Self {
        Self {
            editing: Some(id),
            ..Self::new(initial)
        }
    }

    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    #[must_use]
    pub const fn values(&self) -> &BookDraft {
        &self.values
    }

    /// Identifier of the book the form was pre-filled from.
    #[must_use]
    pub const fn editing(&self) -> Option<BookId> {
        self.editing
    }

    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update Book"
        } else {
            "Add Book"
        }
    }

    /// Current text of an input. The submit button has none.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Isbn => &self.values.isbn,
            FormField::Title => &self.values.title,
            FormField::Author => &self.values.author,
            FormField::Poster => &self.values.poster,
            FormField::Description => &self.values.description,
            FormField::Submit => "",
        }
    }

    fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Isbn => Some(&mut self.values.isbn),
            FormField::Title => Some(&mut self.values.title),
            FormField::Author => Some(&mut self.values.author),
            FormField::Poster => Some(&mut self.values.poster),
            FormField::Description => Some(&mut self.values.description),
            FormField::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Types a character into the focused input. Returns `false` when the
    /// submit button has focus.
    pub fn insert_char(&mut self, c: char) -> bool {
        let Some(value) = self.focused_value_mut() else {
            return false;
        };
        value.push(c);
        true
    }

    /// Deletes the last character of the focused input.
    pub fn backspace(&mut self) -> bool {
        self.focused_value_mut().and_then(String::pop).is_some()
    }

    /// Enter key: newline in the description, submission everywhere else.
    pub fn enter(&mut self) -> EnterOutcome {
        if self.focus.is_multiline() {
            self.values.description.push('\n');
            EnterOutcome::Newline
        } else {
            EnterOutcome::Submitted(self.submit())
        }
    }

    /// Returns the current field values. No validation is applied and the
    /// fields keep their contents.
    #[must_use]
    pub fn submit(&self) -> BookDraft {
        tracing::debug!(editing = ?self.editing, title = %self.values.title, "form submitted");
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CollectionStore;

    fn type_text(form: &mut BookForm, text: &str) {
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn empty_submission_is_valid() {
        let form = BookForm::new(None);
        assert_eq!(form.submit(), BookDraft::new("", "", "", "", ""));
    }

    #[test]
    fn typing_fills_fields_in_tab_order() {
        let mut form = BookForm::new(None);
        for text in ["123", "Dune", "Herbert", "", "Desert planet"] {
            type_text(&mut form, text);
            form.focus_next();
        }

        assert_eq!(form.focus(), FormField::Submit);
        assert_eq!(form.submit(), BookDraft::new("123", "Dune", "Herbert", "", "Desert planet"));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = BookForm::new(None);
        form.focus_previous();
        assert_eq!(form.focus(), FormField::Submit);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Isbn);
    }

    #[test]
    fn submit_button_ignores_typing() {
        let mut form = BookForm::new(None);
        form.focus_previous();
        assert!(!form.insert_char('x'));
        assert!(!form.backspace());
        assert_eq!(form.submit(), BookDraft::default());
    }

    #[test]
    fn enter_adds_newline_only_in_description() {
        let mut form = BookForm::new(None);
        type_text(&mut form, "1");
        assert!(matches!(form.enter(), EnterOutcome::Submitted(d) if d.isbn == "1"));

        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus(), FormField::Description);
        type_text(&mut form, "line one");
        assert_eq!(form.enter(), EnterOutcome::Newline);
        type_text(&mut form, "line two");
        assert_eq!(form.value(FormField::Description), "line one\nline two");
    }

    #[test]
    fn backspace_handles_multibyte_characters() {
        let mut form = BookForm::new(None);
        type_text(&mut form, "Café");
        assert!(form.backspace());
        assert_eq!(form.value(FormField::Isbn), "Caf");
    }

    #[test]
    fn prefilled_form_edits_existing_book() {
        let mut store = CollectionStore::new();
        let book = store.add(BookDraft::new("1", "Dune", "Herbert", "p.jpg", "d")).clone();

        let form = BookForm::new(Some(&book));
        assert_eq!(form.editing(), Some(book.id()));
        assert_eq!(form.submit_label(), "Update Book");
        assert_eq!(form.submit(), book.to_draft());
    }

    #[test]
    fn edit_form_for_missing_book_is_blank() {
        let form = BookForm::for_edit(BookId::new(42), None);
        assert_eq!(form.editing(), Some(BookId::new(42)));
        assert_eq!(form.submit_label(), "Update Book");
        assert_eq!(form.values(), &BookDraft::default());
    }
}
