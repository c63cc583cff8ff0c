//! Value codecs: strategies translating between widget state and values.
//!
//! A [`Codec`] is stateless with respect to the widget: it receives the
//! resolved widget on every call and keeps nothing between calls. The codec
//! is picked when a [`WidgetProperty`](crate::WidgetProperty) is declared,
//! never by inspecting the widget at run time; the widget only has to
//! provide the capability the codec asks for.
//!
//! | Codec | Capability | Value |
//! |-------|------------|-------|
//! | [`Button`] | [`Checkable`] | `bool` |
//! | [`FloatText`] | [`TextEdit`] | `f64` |
//! | [`NumericValue`] | [`NumericInput`] | `f64` |
//! | [`ListItems`](crate::ListItems) | [`ItemView`](propbind_widgets::ItemView) | [`ListProxy`](crate::ListProxy) (read-only) |

use propbind_format::PrettyFormat;
use propbind_widgets::{Checkable, NumericInput, TextEdit, Widget};

use crate::error::{Capability, CodecError};

/// Get/set strategy for one kind of widget state.
pub trait Codec {
    /// What a read produces. May borrow from the widget.
    type Output<'w>;
    /// What a write accepts.
    type Input;

    /// Read the widget's state.
    fn get<'w>(&self, widget: &'w dyn Widget) -> Result<Self::Output<'w>, CodecError>;

    /// Push `value` into the widget.
    fn set(&self, widget: &dyn Widget, value: Self::Input) -> Result<(), CodecError>;
}

fn checkable(widget: &dyn Widget) -> Result<&dyn Checkable, CodecError> {
    widget
        .as_checkable()
        .ok_or(CodecError::Missing(Capability::Checkable))
}

fn text_edit(widget: &dyn Widget) -> Result<&dyn TextEdit, CodecError> {
    widget
        .as_text_edit()
        .ok_or(CodecError::Missing(Capability::TextEdit))
}

fn numeric(widget: &dyn Widget) -> Result<&dyn NumericInput, CodecError> {
    widget
        .as_numeric()
        .ok_or(CodecError::Missing(Capability::Numeric))
}

/// Check state of a button-like widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button;

impl Codec for Button {
    type Output<'w> = bool;
    type Input = bool;

    fn get<'w>(&self, widget: &'w dyn Widget) -> Result<bool, CodecError> {
        Ok(checkable(widget)?.is_checked())
    }

    fn set(&self, widget: &dyn Widget, value: bool) -> Result<(), CodecError> {
        checkable(widget)?.set_checked(value);
        Ok(())
    }
}

/// Floating-point number held as text in a line edit.
///
/// Reads parse the (trimmed) text; text that is not a number reads as
/// `0.0` rather than failing. Writes render the number through
/// [`PrettyFormat`] and then emit "editing finished", since programmatic
/// text changes do not emit it on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatText {
    format: PrettyFormat,
}

impl FloatText {
    /// Codec using [`PrettyFormat::DEFAULT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            format: PrettyFormat::DEFAULT,
        }
    }

    /// Codec rendering writes with `format`.
    #[must_use]
    pub const fn with_format(format: PrettyFormat) -> Self {
        Self { format }
    }

    #[must_use]
    pub const fn format(&self) -> &PrettyFormat {
        &self.format
    }
}

impl Codec for FloatText {
    type Output<'w> = f64;
    type Input = f64;

    fn get<'w>(&self, widget: &'w dyn Widget) -> Result<f64, CodecError> {
        let text = text_edit(widget)?.text();
        Ok(text.trim().parse().unwrap_or(0.0))
    }

    fn set(&self, widget: &dyn Widget, value: f64) -> Result<(), CodecError> {
        let edit = text_edit(widget)?;
        edit.set_text(&self.format.format(value));
        edit.emit_editing_finished();
        Ok(())
    }
}

/// Numeric value of a slider or spin box, passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericValue;

impl Codec for NumericValue {
    type Output<'w> = f64;
    type Input = f64;

    fn get<'w>(&self, widget: &'w dyn Widget) -> Result<f64, CodecError> {
        Ok(numeric(widget)?.value())
    }

    fn set(&self, widget: &dyn Widget, value: f64) -> Result<(), CodecError> {
        numeric(widget)?.set_value(value);
        Ok(())
    }
}
