//! Core types shared across the htmlprop crates.
//!
//! This crate defines the boundary to the rendering framework:
//! a [`Property`] is a named [`PropValue`] that gets applied to a
//! [`PropertySink`] (the framework's `set_property` primitive).
//! It also hosts [`BuildError`], the failure type of every attribute
//! template builder.

mod error;
mod property;
mod value;

pub use error::{BuildError, Result};
pub use property::{Property, PropertyMap, PropertySink};
pub use value::PropValue;
