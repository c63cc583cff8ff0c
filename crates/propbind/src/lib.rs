#![forbid(unsafe_code)]

//! propbind: bind plain controller attributes to live widget state.
//!
//! A controller declares one [`WidgetProperty`](core::WidgetProperty) per
//! widget-backed attribute and reads or writes it as if it were a field:
//!
//! ```
//! use propbind::prelude::*;
//!
//! struct Controller {
//!     log_scale: CheckBox,
//!     items: ListWidget,
//! }
//!
//! propbind::attributes!(Controller { log_scale: widget, items: widget });
//!
//! impl Controller {
//!     const LOG_SCALE: ButtonProperty = WidgetProperty::button("log_scale");
//!     const ITEMS: ListProperty = WidgetProperty::list("items");
//! }
//!
//! let c = Controller { log_scale: CheckBox::new(), items: ListWidget::new() };
//! Controller::LOG_SCALE.set(&c, true).unwrap();
//! assert!(c.log_scale.is_checked());
//!
//! let items = Controller::ITEMS.get(&c).unwrap();
//! items.set_labels(["a", "b"]).unwrap();
//! assert_eq!(c.items.count(), 2);
//! ```

pub use propbind_core as core;
pub use propbind_format as format;
pub use propbind_widgets as widgets;

pub use propbind_core::attributes;

/// Common imports for controllers and toolkit adapters.
pub mod prelude {
    pub use propbind_core::{
        Attributes, BindError, Button, ButtonProperty, Codec, FloatLineProperty, FloatText,
        IndexError, ListItems, ListProperty, ListProxy, Member, NumericProperty, NumericValue,
        Row, RowHandle, WidgetProperty,
    };
    pub use propbind_format::{PrettyFormat, PrettyNumber, pretty_number};
    pub use propbind_widgets::{
        CheckBox, Checkable, ComboBox, ItemRole, ItemView, LineEdit, ListModel, ListWidget,
        ModelIndex, NumericInput, RowModel, Slider, SpinBox, TextEdit, Variant, Widget,
    };
}
