#![forbid(unsafe_code)]

//! Two-way bindings between owner attributes and widget state.
//!
//! This crate provides:
//! - [`WidgetProperty`]: a declarative binding that resolves a dotted
//!   attribute path on an owner and reads or writes the widget through a
//!   [`Codec`]
//! - [`Button`], [`FloatText`], [`NumericValue`]: scalar codecs
//! - [`ListProxy`] and [`RowHandle`]: sequence views over a widget's row
//!   model, exposed through the read-only [`ListItems`] codec
//! - [`Attributes`] and the [`attributes!`] macro for declaring owners
//!
//! # Architecture
//!
//! Widgets are shared, interior-mutable objects owned by the surrounding UI
//! component (see `propbind-widgets`). Properties hold no widget references;
//! proxies and handles borrow the model for `'m`, so the borrow checker
//! guarantees they never outlive it.
//!
//! # Threading
//!
//! Every operation runs to completion on the calling thread. Widgets are
//! `!Sync`; use a binding only from the thread that owns its widgets.

pub mod attr;
pub mod codec;
pub mod error;
pub mod list;
pub mod property;

pub use attr::{Attributes, Member, resolve};
pub use codec::{Button, Codec, FloatText, NumericValue};
pub use error::{BindError, Capability, CodecError, IndexError};
pub use list::{ListItems, ListProxy, Row, RowHandle, Rows};
pub use property::{
    ButtonProperty, FloatLineProperty, ListProperty, NumericProperty, WidgetProperty,
};
