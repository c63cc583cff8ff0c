//! Single-line text entry reference widget.

use std::cell::RefCell;

use crate::signal::Signal;
use crate::{TextEdit, Widget};

/// A single-line text field.
///
/// Like toolkit line edits, `set_text` updates the content silently; the
/// `editing_finished` signal fires only through
/// [`TextEdit::emit_editing_finished`], which stands in for the user
/// pressing Enter or moving focus away.
#[derive(Debug, Default)]
pub struct LineEdit {
    text: RefCell<String>,
    editing_finished: Signal<()>,
}

impl LineEdit {
    /// Create an empty line edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line edit holding `text`.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn editing_finished(&self) -> &Signal<()> {
        &self.editing_finished
    }
}

impl TextEdit for LineEdit {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        let mut current = self.text.borrow_mut();
        current.clear();
        current.push_str(text);
    }

    fn emit_editing_finished(&self) {
        self.editing_finished.emit(&());
    }
}

impl Widget for LineEdit {
    fn as_text_edit(&self) -> Option<&dyn TextEdit> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn set_text_is_silent() {
        let edit = LineEdit::with_text("1");
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = edit
            .editing_finished()
            .connect(move |()| counter.set(counter.get() + 1));

        edit.set_text("2");
        assert_eq!(edit.text(), "2");
        assert_eq!(hits.get(), 0);

        edit.emit_editing_finished();
        assert_eq!(hits.get(), 1);
    }
}
