//! Declarative widget properties.
//!
//! A [`WidgetProperty<C>`] pairs an attribute path with a [`Codec`]. It is
//! declared once per owner type, typically as an associated `const`, and
//! resolved against a concrete owner on every access:
//!
//! ```ignore
//! struct Controller {
//!     log_scale: CheckBox,
//! }
//! attributes!(Controller { log_scale: widget });
//!
//! impl Controller {
//!     const LOG_SCALE: ButtonProperty = WidgetProperty::button("log_scale");
//!
//!     fn log_scale(&self) -> Result<bool, BindError> {
//!         Self::LOG_SCALE.get(self)
//!     }
//! }
//! ```
//!
//! # Invariants
//!
//! 1. A property never caches its widget: every `get`/`set` re-resolves the
//!    path, so swapping or mutating the owner is always observed.
//! 2. The path is non-empty (checked at construction).
//! 3. Resolution failures surface before the codec touches any widget.

use std::borrow::Cow;

use propbind_widgets::Widget;

use crate::attr::{Attributes, resolve};
use crate::codec::{Button, Codec, FloatText, NumericValue};
use crate::error::BindError;
use crate::list::ListItems;

/// Binding between an owner's attribute path and a widget codec.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetProperty<C> {
    path: Cow<'static, str>,
    codec: C,
}

/// Check state of a button.
pub type ButtonProperty = WidgetProperty<Button>;
/// Floating-point number edited as text.
pub type FloatLineProperty = WidgetProperty<FloatText>;
/// Value of a slider or spin box.
pub type NumericProperty = WidgetProperty<NumericValue>;
/// Rows of a list or combo widget, exposed as a [`ListProxy`](crate::ListProxy).
pub type ListProperty = WidgetProperty<ListItems>;

impl<C> WidgetProperty<C> {
    /// Declare a property at `path` (dot-separated for nested owners).
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty. In `const` context this is a compile error.
    #[must_use]
    pub const fn new(path: &'static str, codec: C) -> Self {
        assert!(!path.is_empty(), "widget property path must not be empty");
        Self {
            path: Cow::Borrowed(path),
            codec,
        }
    }

    /// Declare a property with a path built at run time.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    #[must_use]
    pub fn owned(path: impl Into<String>, codec: C) -> Self {
        let path = path.into();
        assert!(!path.is_empty(), "widget property path must not be empty");
        Self {
            path: Cow::Owned(path),
            codec,
        }
    }

    /// The dotted path as declared.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path split into attribute names.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.')
    }

    #[must_use]
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Resolve the bound widget on `instance` without reading it.
    pub fn widget<'a>(&self, instance: &'a dyn Attributes) -> Result<&'a dyn Widget, BindError> {
        resolve(instance, &self.path)
    }
}

impl<C: Codec> WidgetProperty<C> {
    /// Read the bound widget's value.
    pub fn get<'a>(&self, instance: &'a dyn Attributes) -> Result<C::Output<'a>, BindError> {
        let widget = self.widget(instance)?;
        self.codec
            .get(widget)
            .map_err(|err| BindError::from_codec(err, &self.path))
    }

    /// Push `value` into the bound widget.
    pub fn set(&self, instance: &dyn Attributes, value: C::Input) -> Result<(), BindError> {
        let widget = self.widget(instance)?;
        self.codec
            .set(widget, value)
            .map_err(|err| BindError::from_codec(err, &self.path))
    }
}

impl WidgetProperty<Button> {
    /// [`ButtonProperty`] at `path`.
    #[must_use]
    pub const fn button(path: &'static str) -> Self {
        Self::new(path, Button)
    }
}

impl WidgetProperty<FloatText> {
    /// [`FloatLineProperty`] at `path`, formatting with the default format.
    #[must_use]
    pub const fn float_line(path: &'static str) -> Self {
        Self::new(path, FloatText::new())
    }
}

impl WidgetProperty<NumericValue> {
    /// [`NumericProperty`] at `path`.
    #[must_use]
    pub const fn numeric(path: &'static str) -> Self {
        Self::new(path, NumericValue)
    }
}

impl WidgetProperty<ListItems> {
    /// [`ListProperty`] at `path`.
    #[must_use]
    pub const fn list(path: &'static str) -> Self {
        Self::new(path, ListItems)
    }
}
