//! Model-backed reference widgets.

use std::cell::Cell;

use crate::model::{ItemRole, ListModel, RowModel};
use crate::variant::Variant;
use crate::{ItemView, Widget};

/// A vertical list of text items backed by a [`ListModel`].
#[derive(Debug, Default)]
pub struct ListWidget {
    model: ListModel,
}

impl ListWidget {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list showing `labels`.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            model: ListModel::from_labels(labels),
        }
    }

    /// Append an item. Returns `false` if the model rejected the row.
    pub fn add_item(&self, label: impl Into<String>) -> bool {
        self.model.push(label)
    }

    /// Number of items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.model.row_count()
    }

    /// Text of the item at `row`.
    #[must_use]
    pub fn item_text(&self, row: usize) -> Option<String> {
        self.model.text(row)
    }

    /// The concrete backing model.
    #[must_use]
    pub fn list_model(&self) -> &ListModel {
        &self.model
    }
}

impl ItemView for ListWidget {
    fn model(&self) -> &dyn RowModel {
        &self.model
    }
}

impl Widget for ListWidget {
    fn as_item_view(&self) -> Option<&dyn ItemView> {
        Some(self)
    }
}

/// A drop-down selector backed by a [`ListModel`].
///
/// The current index is not adjusted when rows are removed; reads of a
/// current index past the end yield `None`.
#[derive(Debug, Default)]
pub struct ComboBox {
    model: ListModel,
    current: Cell<Option<usize>>,
}

impl ComboBox {
    /// Create an empty combo box with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item with optional user data.
    pub fn add_item(&self, label: impl Into<String>, data: Option<Variant>) -> bool {
        let row = self.model.row_count();
        if !self.model.push(label) {
            return false;
        }
        self.model.set_data(self.model.index(row), ItemRole::User, data);
        if self.current.get().is_none() {
            self.current.set(Some(row));
        }
        true
    }

    /// Select `row`; out-of-range rows clear the selection.
    pub fn set_current_index(&self, row: Option<usize>) {
        self.current
            .set(row.filter(|row| *row < self.model.row_count()));
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current.get().filter(|row| *row < self.model.row_count())
    }

    #[must_use]
    pub fn current_text(&self) -> Option<String> {
        self.current_index().and_then(|row| self.model.text(row))
    }

    #[must_use]
    pub fn current_data(&self) -> Option<Variant> {
        self.current_index().and_then(|row| self.model.user_data(row))
    }
}

impl ItemView for ComboBox {
    fn model(&self) -> &dyn RowModel {
        &self.model
    }
}

impl Widget for ComboBox {
    fn as_item_view(&self) -> Option<&dyn ItemView> {
        Some(self)
    }
}
