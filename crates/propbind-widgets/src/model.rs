#![forbid(unsafe_code)]

//! Index-addressed row models.
//!
//! A [`RowModel`] is the backing store behind list-like widgets: a mutable
//! sequence of rows, each with display text ([`ItemRole::Display`]) and an
//! opaque datum ([`ItemRole::User`]). [`ListModel`] is the in-memory
//! implementation used by the reference widgets.
//!
//! # Invariants
//!
//! 1. Valid rows are exactly `0..row_count()`.
//! 2. `index(row)` for `row >= row_count()` is invalid; reads through an
//!    invalid index return `None`, writes return `false`.
//! 3. Structural edits (`insert_row`, `remove_rows`) shift later rows; the
//!    model never reorders rows on its own.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Insert rejected | `row > row_count()`, row limit reached, structure locked | `insert_row` returns `false` |
//! | Remove rejected | range past the end, structure locked | `remove_rows` returns `false` |
//! | Stale index | row removed after `index()` | reads `None`, writes `false` |

use std::cell::{Cell, RefCell};

use crate::variant::Variant;

/// Position of a row inside a [`RowModel`]; possibly invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelIndex(Option<usize>);

impl ModelIndex {
    /// An index that refers to no row.
    pub const INVALID: Self = Self(None);

    /// An index referring to `row`.
    #[must_use]
    pub const fn new(row: usize) -> Self {
        Self(Some(row))
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> Option<usize> {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0.is_some()
    }
}

/// Which facet of a row to read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// The text shown to the user.
    Display,
    /// Application data attached to the row.
    User,
}

/// Mutable, index-addressed store of rows.
///
/// All methods take `&self`: models are shared with the widget that owns
/// them and use interior mutability. Single-thread access only.
pub trait RowModel {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Index for `row`, or [`ModelIndex::INVALID`] when out of range.
    fn index(&self, row: usize) -> ModelIndex;

    /// Read a role of the row at `index`.
    fn data(&self, index: ModelIndex, role: ItemRole) -> Option<Variant>;

    /// Write a role of the row at `index`. Returns `false` if rejected.
    fn set_data(&self, index: ModelIndex, role: ItemRole, value: Option<Variant>) -> bool;

    /// Insert a blank row before `row` (`row == row_count()` appends).
    fn insert_row(&self, row: usize) -> bool;

    /// Remove `count` rows starting at `row`.
    fn remove_rows(&self, row: usize, count: usize) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Item {
    text: String,
    user: Option<Variant>,
}

/// In-memory [`RowModel`].
///
/// Optionally constrained by a row limit and a structure lock, which make
/// inserts or removals fail the way toolkit models do under their own
/// constraints.
#[derive(Debug, Default)]
pub struct ListModel {
    items: RefCell<Vec<Item>>,
    row_limit: Cell<Option<usize>>,
    locked: Cell<bool>,
}

impl ListModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model with one row per label and no user data.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = labels
            .into_iter()
            .map(|label| Item {
                text: label.into(),
                user: None,
            })
            .collect();
        Self {
            items: RefCell::new(items),
            ..Self::default()
        }
    }

    /// Reject inserts that would grow the model past `limit` rows.
    pub fn set_row_limit(&self, limit: Option<usize>) {
        self.row_limit.set(limit);
    }

    /// Reject every insert and removal while locked.
    pub fn set_structure_locked(&self, locked: bool) {
        self.locked.set(locked);
    }

    /// Text of `row`, if it exists.
    #[must_use]
    pub fn text(&self, row: usize) -> Option<String> {
        self.items.borrow().get(row).map(|item| item.text.clone())
    }

    /// User datum of `row`; `None` when the row is missing or has no data.
    #[must_use]
    pub fn user_data(&self, row: usize) -> Option<Variant> {
        self.items.borrow().get(row).and_then(|item| item.user.clone())
    }

    /// Append a row with the given text.
    pub fn push(&self, text: impl Into<String>) -> bool {
        let row = self.row_count();
        if !self.insert_row(row) {
            return false;
        }
        self.items.borrow_mut()[row].text = text.into();
        true
    }

    fn can_grow(&self) -> bool {
        !self.locked.get()
            && self
                .row_limit
                .get()
                .is_none_or(|limit| self.items.borrow().len() < limit)
    }
}

impl RowModel for ListModel {
    fn row_count(&self) -> usize {
        self.items.borrow().len()
    }

    fn index(&self, row: usize) -> ModelIndex {
        if row < self.row_count() {
            ModelIndex::new(row)
        } else {
            ModelIndex::INVALID
        }
    }

    fn data(&self, index: ModelIndex, role: ItemRole) -> Option<Variant> {
        let row = index.row()?;
        let items = self.items.borrow();
        let item = items.get(row)?;
        match role {
            ItemRole::Display => Some(Variant::Text(item.text.clone())),
            ItemRole::User => item.user.clone(),
        }
    }

    fn set_data(&self, index: ModelIndex, role: ItemRole, value: Option<Variant>) -> bool {
        let Some(row) = index.row() else {
            return false;
        };
        let mut items = self.items.borrow_mut();
        let Some(item) = items.get_mut(row) else {
            return false;
        };
        match role {
            ItemRole::Display => {
                item.text = match value {
                    Some(Variant::Text(text)) => text,
                    Some(other) => other.to_string(),
                    None => String::new(),
                };
            }
            ItemRole::User => item.user = value,
        }
        true
    }

    fn insert_row(&self, row: usize) -> bool {
        if row > self.row_count() || !self.can_grow() {
            return false;
        }
        self.items.borrow_mut().insert(row, Item::default());

        #[cfg(feature = "tracing")]
        tracing::trace!(row, "model row inserted");

        true
    }

    fn remove_rows(&self, row: usize, count: usize) -> bool {
        if self.locked.get() {
            return false;
        }
        let mut items = self.items.borrow_mut();
        let Some(end) = row.checked_add(count).filter(|end| *end <= items.len()) else {
            return false;
        };
        items.drain(row..end);

        #[cfg(feature = "tracing")]
        tracing::trace!(row, count, "model rows removed");

        true
    }
}
