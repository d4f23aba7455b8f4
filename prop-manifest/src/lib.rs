// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `prop.toml` manifests: attribute values and fragments described in TOML.
//!
//! A manifest lists properties to build and, optionally, one HTML fragment
//! to serialize. Every builder-backed property is built while the manifest
//! is validated, so a failure is reported as a [`miette`] diagnostic that
//! points at the offending entry.

mod error;
mod fragment;
mod manifest;
mod property;

pub use error::{Error, Result, SourceContext};
pub use fragment::{ElementSpec, EmptySpec, FragmentSpec, RawSpec};
pub use manifest::{Manifest, PropToml, RenderConfig, parse_manifest};
pub use property::{
    MediaToken, PropertySpec, SizeCondition, SizeEntry, SizeGroup, SrcsetCandidate, ValueSpec,
};
