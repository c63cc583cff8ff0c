//! Attribute-path resolution.
//!
//! A binding names its widget by a dotted path relative to an owner, e.g.
//! `"sub_panel.button"`. Owners expose named members through
//! [`Attributes`]; each member is either a nested owner or a widget.
//! [`resolve`] walks the path one segment at a time.
//!
//! # Invariants
//!
//! 1. Every segment but the last must name an owner.
//! 2. The last segment must name a widget.
//! 3. Resolution never panics; any violation is a [`BindError`].

use propbind_widgets::Widget;

use crate::error::BindError;

/// A named member of an [`Attributes`] owner.
#[derive(Clone, Copy)]
pub enum Member<'a> {
    /// A nested owner, traversed by the next path segment.
    Owner(&'a dyn Attributes),
    /// A widget, valid only as the final path segment.
    Widget(&'a dyn Widget),
}

impl std::fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owner(_) => f.write_str("Member::Owner"),
            Self::Widget(_) => f.write_str("Member::Widget"),
        }
    }
}

/// Name-based member lookup for binding owners.
///
/// Implement by hand, or with [`attributes!`](crate::attributes) for plain
/// structs whose fields are widgets or nested owners.
pub trait Attributes {
    /// Look up the member called `name`.
    fn attribute(&self, name: &str) -> Option<Member<'_>>;
}

/// Resolve `path` against `root` to a widget.
pub fn resolve<'a>(root: &'a dyn Attributes, path: &str) -> Result<&'a dyn Widget, BindError> {
    let mut current = Member::Owner(root);
    let mut previous = "";

    for segment in path.split('.') {
        let owner = match current {
            Member::Owner(owner) => owner,
            Member::Widget(_) => {
                return Err(BindError::NotAnOwner {
                    path: path.to_owned(),
                    segment: previous.to_owned(),
                });
            }
        };
        current = owner
            .attribute(segment)
            .ok_or_else(|| BindError::Resolution {
                path: path.to_owned(),
                segment: segment.to_owned(),
            })?;
        previous = segment;
    }

    match current {
        Member::Widget(widget) => {
            tracing::trace!(path, "binding path resolved");
            Ok(widget)
        }
        Member::Owner(_) => Err(BindError::NotAWidget {
            path: path.to_owned(),
        }),
    }
}

/// Implement [`Attributes`] for a struct by listing its members.
///
/// Each entry is `field: widget` or `field: owner`. The attribute name is
/// the field name.
///
/// ```ignore
/// struct Panel {
///     button: CheckBox,
/// }
///
/// struct Window {
///     panel: Panel,
///     gain: LineEdit,
/// }
///
/// attributes!(Panel { button: widget });
/// attributes!(Window { panel: owner, gain: widget });
///
/// // "panel.button" and "gain" now resolve from a `Window`.
/// ```
#[macro_export]
macro_rules! attributes {
    (@member widget, $field:expr) => {
        $crate::Member::Widget($field)
    };
    (@member owner, $field:expr) => {
        $crate::Member::Owner($field)
    };
    ($ty:ty { $($name:ident : $kind:ident),* $(,)? }) => {
        impl $crate::Attributes for $ty {
            fn attribute(&self, name: &str) -> ::core::option::Option<$crate::Member<'_>> {
                match name {
                    $(
                        ::core::stringify!($name) => {
                            ::core::option::Option::Some($crate::attributes!(@member $kind, &self.$name))
                        }
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}
