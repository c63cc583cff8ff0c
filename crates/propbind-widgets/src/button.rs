//! Check box reference widget.

use std::cell::{Cell, RefCell};

use crate::signal::Signal;
use crate::{Checkable, Widget};

/// A two-state check box.
///
/// `toggled` fires only when the check state actually changes.
#[derive(Debug, Default)]
pub struct CheckBox {
    label: RefCell<String>,
    checked: Cell<bool>,
    toggled: Signal<bool>,
}

impl CheckBox {
    /// Create an unchecked, unlabeled check box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unchecked check box with a caption.
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        let check = Self::new();
        check.label.replace(label.into());
        check
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    /// Emitted with the new state whenever it changes.
    #[must_use]
    pub fn toggled(&self) -> &Signal<bool> {
        &self.toggled
    }
}

impl Checkable for CheckBox {
    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    fn set_checked(&self, checked: bool) {
        if self.checked.replace(checked) != checked {
            self.toggled.emit(&checked);
        }
    }
}

impl Widget for CheckBox {
    fn as_checkable(&self) -> Option<&dyn Checkable> {
        Some(self)
    }
}
