#![forbid(unsafe_code)]

//! Widget capability contracts for propbind.
//!
//! propbind never talks to a GUI toolkit directly. Instead it consumes the
//! small capability traits defined here, which a toolkit adapter (or the
//! in-memory reference widgets in this crate) implements:
//!
//! - [`Checkable`]: boolean check state (check boxes, toggle buttons)
//! - [`TextEdit`]: editable text plus an "editing finished" notification
//! - [`NumericInput`]: a numeric value (sliders, spin boxes)
//! - [`ItemView`]: a widget backed by a [`RowModel`] (lists, combo boxes)
//!
//! A [`Widget`] advertises which of these it supports through its `as_*`
//! accessors.
//!
//! # Threading
//!
//! Widgets follow the GUI convention of single-thread access: all state uses
//! interior mutability (`Cell`/`RefCell`), every method takes `&self`, and
//! the reference widgets are `!Sync`. Access any given widget from one
//! thread only.

pub mod button;
pub mod item_view;
pub mod line_edit;
pub mod model;
pub mod signal;
pub mod spin;
pub mod variant;

pub use button::CheckBox;
pub use item_view::{ComboBox, ListWidget};
pub use line_edit::LineEdit;
pub use model::{ItemRole, ListModel, ModelIndex, RowModel};
pub use signal::{Signal, Subscription};
pub use spin::{Slider, SpinBox};
pub use variant::Variant;

/// A widget holding a boolean check state.
pub trait Checkable {
    /// Whether the widget is currently checked.
    fn is_checked(&self) -> bool;

    /// Set the check state.
    fn set_checked(&self, checked: bool);
}

/// A widget holding editable text.
pub trait TextEdit {
    /// Current text content.
    fn text(&self) -> String;

    /// Replace the text content.
    ///
    /// Programmatic assignment does not emit "editing finished"; callers
    /// that want listeners to react must call
    /// [`emit_editing_finished`](TextEdit::emit_editing_finished).
    fn set_text(&self, text: &str);

    /// Deliver the "editing finished" notification to listeners.
    fn emit_editing_finished(&self);
}

/// A widget holding a numeric value.
pub trait NumericInput {
    /// Current value.
    fn value(&self) -> f64;

    /// Set the value. Widgets may clamp or round to their own range.
    fn set_value(&self, value: f64);
}

/// A widget whose contents live in a [`RowModel`].
pub trait ItemView {
    /// The backing row model, owned by the widget.
    fn model(&self) -> &dyn RowModel;
}

/// A UI control, described by the capabilities it supports.
///
/// Every accessor defaults to `None`; implementors override the ones they
/// provide.
pub trait Widget {
    fn as_checkable(&self) -> Option<&dyn Checkable> {
        None
    }

    fn as_text_edit(&self) -> Option<&dyn TextEdit> {
        None
    }

    fn as_numeric(&self) -> Option<&dyn NumericInput> {
        None
    }

    fn as_item_view(&self) -> Option<&dyn ItemView> {
        None
    }
}
