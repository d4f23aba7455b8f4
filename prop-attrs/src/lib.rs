//! Typed constructors for HTML element attributes.
//!
//! Every function returns a [`Property`] to apply to the element being
//! rendered. Constructors that take a builder from
//! [`htmlprop_builders`] render it first; the fallible ones panic on
//! invalid input and have a `try_` twin.
//!
//! # Module Organization
//!
//! - [`cases`] - closed sets of attribute values (`TypeCase`, `RelCase`, ...)
//! - [`global`] - attributes valid on every element
//! - [`form`] - forms, inputs and meters
//! - [`embed`] - images, image maps, media and frames
//! - [`link`] - hyperlinks, resources and metadata
//! - [`content`] - tables, lists, quotes and disclosure
//!
//! # Example
//!
//! ```
//! use htmlprop_attrs::{cases::TargetCase, href, target};
//! use htmlprop_core::PropertyMap;
//!
//! let mut element = PropertyMap::new();
//! element.extend(&[href("https://example.com"), target(TargetCase::Blank)]);
//! assert_eq!(element.get("target").and_then(|v| v.as_str()), Some("_blank"));
//! ```

use htmlprop_core::Property;

/// Declares plain attribute constructors that forward their argument unchanged.
macro_rules! attributes {
    (
        $(
            $(#[$doc:meta])*
            $fn:ident($arg:ident: $ty:ty) => $name:literal;
        )*
    ) => {
        $(
            $(#[$doc])*
            pub fn $fn($arg: $ty) -> ::htmlprop_core::Property {
                ::htmlprop_core::Property::new($name, $arg)
            }
        )*
    };
}

pub mod cases;
pub mod content;
pub mod embed;
pub mod form;
pub mod global;
pub mod link;

pub use content::*;
pub use embed::*;
pub use form::*;
pub use global::*;
pub use link::*;

/// Join string values with single spaces, as token-list attributes expect.
pub(crate) fn join_tokens<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> String {
    values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a property for an attribute without a typed constructor.
pub fn property(name: impl Into<String>, value: impl Into<htmlprop_core::PropValue>) -> Property {
    Property::new(name.into(), value)
}
