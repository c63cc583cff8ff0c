//! Sequence-like views over a widget's row model.
//!
//! [`ListProxy`] presents a [`RowModel`] as two parallel sequences, `labels`
//! (display text) and `data` (opaque user values), and hands out
//! [`RowHandle`]s addressing single rows.
//!
//! # Reconciliation
//!
//! Assigning a sequence through [`ListProxy::set_labels`] or
//! [`ListProxy::set_data`] with `ct` rows present:
//!
//! 1. writes element `i` into row `i`, appending a blank row first when
//!    `i >= ct`;
//! 2. blanks rows `len(values)..ct` (label `""` / data `None`).
//!
//! Rows are never removed by assignment, only by [`ListProxy::pop`], so
//! positions of rows a caller is holding stay put across bulk updates.
//!
//! # Invariants
//!
//! 1. The proxy caches nothing; `len()` always reads the model.
//! 2. After assigning `values`, `len() == max(len_before, values.len())`.
//! 3. Label and data channels are independent: assigning one never alters
//!    the other, except that rows appended for one start blank in both.
//! 4. Proxies and handles borrow the model, so they cannot outlive it.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `IndexError::OutOfRange` | `at(i)` with `i >= len()`; write through a stale handle | no mutation |
//! | `IndexError::RemoveRejected` | `pop(i)` with `i >= len()`, or model refused | no mutation |
//! | `IndexError::InsertRejected` | model refused an append during assignment | rows written so far stay written |

use core::fmt;
use core::iter::FusedIterator;

use propbind_widgets::{ItemRole, RowModel, Variant, Widget};

use crate::codec::Codec;
use crate::error::{Capability, CodecError, IndexError};

// ---------------------------------------------------------------------------
// Row: detached (label, data) pair
// ---------------------------------------------------------------------------

/// An owned copy of one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub label: String,
    pub data: Option<Variant>,
}

impl Row {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Option<Variant>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

impl From<Row> for (String, Option<Variant>) {
    fn from(row: Row) -> Self {
        (row.label, row.data)
    }
}

// ---------------------------------------------------------------------------
// RowHandle: live reference to one row
// ---------------------------------------------------------------------------

/// A live reference to the row at a fixed index.
///
/// Reads go to the model on every call. If the row is removed the handle
/// goes stale: it keeps its index, which may now address a different row
/// or none at all. A handle past the end reads as blank (`""` / `None`)
/// and rejects writes.
#[derive(Clone, Copy)]
pub struct RowHandle<'m> {
    model: &'m dyn RowModel,
    row: usize,
}

impl<'m> RowHandle<'m> {
    fn new(model: &'m dyn RowModel, row: usize) -> Self {
        Self { model, row }
    }

    /// The row index this handle addresses.
    #[must_use]
    pub fn index(&self) -> usize {
        self.row
    }

    /// Display text of the row.
    #[must_use]
    pub fn label(&self) -> String {
        match self.model.data(self.model.index(self.row), ItemRole::Display) {
            Some(Variant::Text(text)) => text,
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// Replace the display text of the row.
    pub fn set_label(&self, label: impl Into<String>) -> Result<(), IndexError> {
        self.write(ItemRole::Display, Some(Variant::Text(label.into())))
    }

    /// User datum of the row; `None` when unset.
    #[must_use]
    pub fn data(&self) -> Option<Variant> {
        self.model.data(self.model.index(self.row), ItemRole::User)
    }

    /// Replace the user datum of the row. Pass `None` to clear it.
    pub fn set_data(&self, data: impl Into<Option<Variant>>) -> Result<(), IndexError> {
        self.write(ItemRole::User, data.into())
    }

    /// Copy the row out of the model.
    #[must_use]
    pub fn detach(&self) -> Row {
        Row {
            label: self.label(),
            data: self.data(),
        }
    }

    /// The row as `(label, data)`.
    #[must_use]
    pub fn into_pair(self) -> (String, Option<Variant>) {
        self.detach().into()
    }

    fn write(&self, role: ItemRole, value: Option<Variant>) -> Result<(), IndexError> {
        let index = self.model.index(self.row);
        if self.model.set_data(index, role, value) {
            Ok(())
        } else {
            Err(IndexError::OutOfRange {
                index: self.row,
                len: self.model.row_count(),
            })
        }
    }
}

impl From<RowHandle<'_>> for (String, Option<Variant>) {
    fn from(handle: RowHandle<'_>) -> Self {
        handle.into_pair()
    }
}

impl fmt::Debug for RowHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowHandle")
            .field("index", &self.row)
            .field("label", &self.label())
            .field("data", &self.data())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ListProxy
// ---------------------------------------------------------------------------

/// Sequence view over a borrowed [`RowModel`].
#[derive(Clone, Copy)]
pub struct ListProxy<'m> {
    model: &'m dyn RowModel,
}

impl<'m> ListProxy<'m> {
    /// Wrap `model`.
    #[must_use]
    pub fn new(model: &'m dyn RowModel) -> Self {
        Self { model }
    }

    /// Current row count of the model.
    #[must_use]
    pub fn len(&self) -> usize {
        self.model.row_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handle for row `index`.
    pub fn at(&self, index: usize) -> Result<RowHandle<'m>, IndexError> {
        let len = self.len();
        if index < len {
            Ok(RowHandle::new(self.model, index))
        } else {
            Err(IndexError::OutOfRange { index, len })
        }
    }

    /// Handle for row `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<RowHandle<'m>> {
        self.at(index).ok()
    }

    /// Iterate handles for the rows present when iteration starts.
    #[must_use]
    pub fn iter(&self) -> Rows<'m> {
        Rows {
            model: self.model,
            next: 0,
            end: self.len(),
        }
    }

    /// Every row's label, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.iter().map(|row| row.label()).collect()
    }

    /// Every row's datum, in order.
    #[must_use]
    pub fn data(&self) -> Vec<Option<Variant>> {
        self.iter().map(|row| row.data()).collect()
    }

    /// Snapshot of every row.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.iter().map(|row| row.detach()).collect()
    }

    /// Assign labels, growing the model as needed and blanking leftovers.
    pub fn set_labels<I, S>(&self, values: I) -> Result<(), IndexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ct = self.len();
        let _span = tracing::debug_span!("list_set_labels", rows = ct).entered();

        let mut assigned = 0;
        for (i, value) in values.into_iter().enumerate() {
            let row = self.row_for_assignment(i, ct)?;
            row.set_label(value)?;
            assigned = i + 1;
        }
        for i in assigned..ct {
            RowHandle::new(self.model, i).set_label(String::new())?;
        }

        log_reconciled("labels", assigned, ct);
        Ok(())
    }

    /// Assign data, growing the model as needed and clearing leftovers.
    pub fn set_data<I, V>(&self, values: I) -> Result<(), IndexError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<Variant>>,
    {
        let ct = self.len();
        let _span = tracing::debug_span!("list_set_data", rows = ct).entered();

        let mut assigned = 0;
        for (i, value) in values.into_iter().enumerate() {
            let row = self.row_for_assignment(i, ct)?;
            row.set_data(value)?;
            assigned = i + 1;
        }
        for i in assigned..ct {
            RowHandle::new(self.model, i).set_data(None)?;
        }

        log_reconciled("data", assigned, ct);
        Ok(())
    }

    /// Append one row.
    pub fn push(
        &self,
        label: impl Into<String>,
        data: impl Into<Option<Variant>>,
    ) -> Result<RowHandle<'m>, IndexError> {
        let row = self.append_blank()?;
        row.set_label(label)?;
        row.set_data(data)?;
        Ok(row)
    }

    /// Remove row `index`, returning its contents.
    ///
    /// Later rows shift down by one, so live handles at or after `index`
    /// now address different rows.
    pub fn pop(&self, index: usize) -> Result<Row, IndexError> {
        let _span = tracing::debug_span!("list_pop", index).entered();

        if index >= self.len() {
            return Err(IndexError::RemoveRejected { index });
        }
        let row = RowHandle::new(self.model, index).detach();
        if !self.model.remove_rows(index, 1) {
            return Err(IndexError::RemoveRejected { index });
        }
        Ok(row)
    }

    fn row_for_assignment(&self, i: usize, ct: usize) -> Result<RowHandle<'m>, IndexError> {
        if i >= ct {
            self.append_blank()
        } else {
            Ok(RowHandle::new(self.model, i))
        }
    }

    fn append_blank(&self) -> Result<RowHandle<'m>, IndexError> {
        let row = self.len();
        if self.model.insert_row(row) {
            Ok(RowHandle::new(self.model, row))
        } else {
            Err(IndexError::InsertRejected { row })
        }
    }
}

fn log_reconciled(channel: &'static str, assigned: usize, before: usize) {
    tracing::debug!(
        channel,
        assigned,
        appended = assigned.saturating_sub(before),
        blanked = before.saturating_sub(assigned),
        "list reconciled"
    );
}

impl fmt::Debug for ListProxy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListProxy")
            .field("rows", &self.rows())
            .finish()
    }
}

impl<'m> IntoIterator for ListProxy<'m> {
    type Item = RowHandle<'m>;
    type IntoIter = Rows<'m>;

    fn into_iter(self) -> Rows<'m> {
        self.iter()
    }
}

impl<'m> IntoIterator for &ListProxy<'m> {
    type Item = RowHandle<'m>;
    type IntoIter = Rows<'m>;

    fn into_iter(self) -> Rows<'m> {
        self.iter()
    }
}

/// Iterator over [`RowHandle`]s, bounded by the length at creation.
#[derive(Clone)]
pub struct Rows<'m> {
    model: &'m dyn RowModel,
    next: usize,
    end: usize,
}

impl<'m> Iterator for Rows<'m> {
    type Item = RowHandle<'m>;

    fn next(&mut self) -> Option<RowHandle<'m>> {
        if self.next >= self.end {
            return None;
        }
        let handle = RowHandle::new(self.model, self.next);
        self.next += 1;
        Some(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}

impl fmt::Debug for Rows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ListItems: read-only codec
// ---------------------------------------------------------------------------

/// Codec exposing an item view's rows as a [`ListProxy`].
///
/// Writing is always rejected: replace contents through the proxy's
/// `set_labels`/`set_data`/`pop` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListItems;

impl Codec for ListItems {
    type Output<'w> = ListProxy<'w>;
    type Input = Vec<Row>;

    fn get<'w>(&self, widget: &'w dyn Widget) -> Result<ListProxy<'w>, CodecError> {
        let view = widget
            .as_item_view()
            .ok_or(CodecError::Missing(Capability::ItemView))?;
        Ok(ListProxy::new(view.model()))
    }

    fn set(&self, _widget: &dyn Widget, _value: Vec<Row>) -> Result<(), CodecError> {
        Err(CodecError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use propbind_widgets::ListModel;

    fn ints(values: &[i64]) -> Vec<Option<Variant>> {
        values.iter().map(|v| Some(Variant::Int(*v))).collect()
    }

    #[test]
    fn empty_model() {
        let model = ListModel::new();
        let proxy = ListProxy::new(&model);
        assert!(proxy.is_empty());
        assert!(proxy.labels().is_empty());
        assert!(proxy.data().is_empty());
        assert_eq!(proxy.iter().count(), 0);
    }

    #[test]
    fn labels_grow_an_empty_model() {
        let model = ListModel::new();
        let proxy = ListProxy::new(&model);
        proxy.set_labels(["a", "b", "c"]).unwrap();
        assert_eq!(proxy.labels(), ["a", "b", "c"]);
        assert_eq!(proxy.data(), [None, None, None]);
    }

    #[test]
    fn data_grows_independently_of_labels() {
        let model = ListModel::new();
        let proxy = ListProxy::new(&model);
        proxy.set_labels(["a", "b", "c"]).unwrap();
        proxy.set_data([1_i64, 2, 3, 4].map(Variant::from)).unwrap();
        assert_eq!(proxy.labels(), ["a", "b", "c", ""]);
        assert_eq!(proxy.data(), ints(&[1, 2, 3, 4]));
    }

    #[test]
    fn shorter_labels_blank_instead_of_removing() {
        let model = ListModel::from_labels(["a", "b", "c"]);
        let proxy = ListProxy::new(&model);
        proxy.set_data([7_i64, 8, 9].map(Variant::from)).unwrap();

        proxy.set_labels(["x"]).unwrap();
        assert_eq!(proxy.len(), 3);
        assert_eq!(proxy.labels(), ["x", "", ""]);
        assert_eq!(proxy.data(), ints(&[7, 8, 9]));
    }

    #[test]
    fn shorter_data_clears_trailing_rows() {
        let model = ListModel::from_labels(["a", "b", "c"]);
        let proxy = ListProxy::new(&model);
        proxy.set_data([1_i64, 2, 3].map(Variant::from)).unwrap();

        proxy.set_data([Variant::from("only")]).unwrap();
        assert_eq!(proxy.data(), [Some(Variant::from("only")), None, None]);
        assert_eq!(proxy.labels(), ["a", "b", "c"]);
    }

    #[test]
    fn empty_assignment_blanks_everything() {
        let model = ListModel::from_labels(["a", "b"]);
        let proxy = ListProxy::new(&model);
        proxy.set_labels(Vec::<String>::new()).unwrap();
        assert_eq!(proxy.labels(), ["", ""]);
    }

    #[test]
    fn at_out_of_range() {
        let model = ListModel::from_labels(["a"]);
        let proxy = ListProxy::new(&model);
        let err = proxy.at(1).err().unwrap();
        assert_eq!(err, IndexError::OutOfRange { index: 1, len: 1 });
        assert_eq!(err.to_string(), "List index out of range");
        assert!(proxy.get(1).is_none());
        assert_eq!(proxy.get(0).map(|row| row.label()).as_deref(), Some("a"));
    }

    #[test]
    fn pop_out_of_range() {
        let model = ListModel::from_labels(["a"]);
        let proxy = ListProxy::new(&model);
        assert_eq!(proxy.pop(1), Err(IndexError::RemoveRejected { index: 1 }));
        assert_eq!(proxy.len(), 1);
    }

    #[test]
    fn pop_shifts_later_rows_down() {
        let model = ListModel::new();
        let proxy = ListProxy::new(&model);
        proxy.set_labels(["a", "b", "c", "d"]).unwrap();
        proxy.set_data([1_i64, 2, 3, 4].map(Variant::from)).unwrap();

        let popped = proxy.pop(1).unwrap();
        assert_eq!(popped, Row::new("b", Some(Variant::Int(2))));
        assert_eq!(proxy.labels(), ["a", "c", "d"]);
        assert_eq!(proxy.data(), ints(&[1, 3, 4]));
    }

    #[test]
    fn pop_rejected_by_model() {
        let model = ListModel::from_labels(["a"]);
        model.set_structure_locked(true);
        let proxy = ListProxy::new(&model);
        let err = proxy.pop(0).err().unwrap();
        assert_eq!(err.to_string(), "cannot remove row from model");
        assert_eq!(proxy.labels(), ["a"]);
    }

    #[test]
    fn rejected_insert_keeps_partial_assignment() {
        let model = ListModel::from_labels(["a"]);
        model.set_row_limit(Some(2));
        let proxy = ListProxy::new(&model);

        let err = proxy.set_labels(["x", "y", "z"]).err().unwrap();
        assert_eq!(err, IndexError::InsertRejected { row: 2 });
        assert_eq!(err.to_string(), "could not add row");
        assert_eq!(proxy.labels(), ["x", "y"]);
    }

    #[test]
    fn handle_mutation_touches_one_row() {
        let model = ListModel::from_labels(["a", "b"]);
        let proxy = ListProxy::new(&model);
        proxy.at(0).unwrap().set_data(Variant::from(100_i64)).unwrap();
        assert_eq!(proxy.data(), [Some(Variant::Int(100)), None]);
        assert_eq!(proxy.labels(), ["a", "b"]);

        proxy.at(1).unwrap().set_label("B").unwrap();
        assert_eq!(proxy.labels(), ["a", "B"]);
    }

    #[test]
    fn handle_converts_to_label_data_pair() {
        let model = ListModel::from_labels(["a"]);
        let proxy = ListProxy::new(&model);
        proxy.set_data([Variant::from(true)]).unwrap();
        let (label, data): (String, Option<Variant>) = proxy.at(0).unwrap().into();
        assert_eq!(label, "a");
        assert_eq!(data, Some(Variant::Bool(true)));
    }

    #[test]
    fn stale_handle_reads_blank_and_rejects_writes() {
        let model = ListModel::from_labels(["a", "b"]);
        let proxy = ListProxy::new(&model);
        let last = proxy.at(1).unwrap();
        proxy.pop(0).unwrap();

        assert_eq!(last.label(), "");
        assert_eq!(last.data(), None);
        assert_eq!(
            last.set_label("z"),
            Err(IndexError::OutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn handles_are_live() {
        let model = ListModel::from_labels(["a"]);
        let proxy = ListProxy::new(&model);
        let first = proxy.at(0).unwrap();
        proxy.set_labels(["changed"]).unwrap();
        assert_eq!(first.label(), "changed");
    }

    #[test]
    fn iteration_is_bounded_by_length_at_start() {
        let model = ListModel::from_labels(["a", "b"]);
        let proxy = ListProxy::new(&model);
        let mut rows = proxy.iter();
        assert_eq!(rows.len(), 2);
        proxy.push("c", None).unwrap();
        let seen: Vec<String> = rows.by_ref().map(|row| row.label()).collect();
        assert_eq!(seen, ["a", "b"]);
        assert!(rows.next().is_none());

        // Restarting picks up the new length.
        assert_eq!(proxy.iter().count(), 3);
        assert_eq!((&proxy).into_iter().count(), 3);
    }

    #[test]
    fn push_appends_row() {
        let model = ListModel::new();
        let proxy = ListProxy::new(&model);
        let row = proxy.push("a", Variant::from(1.5_f64)).unwrap();
        assert_eq!(row.index(), 0);
        assert_eq!(proxy.rows(), [Row::new("a", Some(Variant::Float(1.5)))]);
    }

    #[test]
    fn debug_lists_rows() {
        let model = ListModel::from_labels(["a"]);
        let proxy = ListProxy::new(&model);
        let text = format!("{proxy:?}");
        assert!(text.starts_with("ListProxy"));
        assert!(text.contains("label: \"a\""));
    }

    #[tracing_test::traced_test]
    #[test]
    fn reconciliation_is_logged() {
        let model = ListModel::from_labels(["a", "b", "c"]);
        let proxy = ListProxy::new(&model);
        proxy.set_labels(["x"]).unwrap();
        assert!(logs_contain("list reconciled"));
        assert!(logs_contain("blanked=2"));
    }

    proptest! {
        #[test]
        fn assignment_length_is_max_of_before_and_values(
            initial in proptest::collection::vec("[a-z]{0,3}", 0..8),
            values in proptest::collection::vec("[a-z]{0,3}", 0..8),
        ) {
            let model = ListModel::from_labels(initial.clone());
            let proxy = ListProxy::new(&model);
            proxy.set_labels(values.clone()).unwrap();

            prop_assert_eq!(proxy.len(), initial.len().max(values.len()));
            let labels = proxy.labels();
            prop_assert_eq!(&labels[..values.len()], &values[..]);
            prop_assert!(labels[values.len()..].iter().all(String::is_empty));
        }

        #[test]
        fn data_assignment_never_touches_labels(
            initial in proptest::collection::vec("[a-z]{1,3}", 0..8),
            values in proptest::collection::vec(any::<i64>(), 0..8),
        ) {
            let model = ListModel::from_labels(initial.clone());
            let proxy = ListProxy::new(&model);
            proxy.set_data(values.iter().copied().map(Variant::from)).unwrap();

            let labels = proxy.labels();
            prop_assert_eq!(&labels[..initial.len()], &initial[..]);
            prop_assert!(labels[initial.len()..].iter().all(String::is_empty));
            let data = proxy.data();
            for (i, datum) in data.iter().enumerate() {
                let expected = values.get(i).copied().map(Variant::Int);
                prop_assert_eq!(datum, &expected);
            }
        }

        #[test]
        fn pop_matches_vec_remove(
            labels in proptest::collection::vec("[a-z]{1,3}", 1..8),
            pick in any::<prop::sample::Index>(),
        ) {
            let model = ListModel::from_labels(labels.clone());
            let proxy = ListProxy::new(&model);
            let index = pick.index(labels.len());

            let mut expected = labels.clone();
            let removed = expected.remove(index);
            let popped = proxy.pop(index).unwrap();

            prop_assert_eq!(popped.label, removed);
            prop_assert_eq!(proxy.labels(), expected);
        }
    }
}
