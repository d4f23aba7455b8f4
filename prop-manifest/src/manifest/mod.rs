//! Manifest types and parsing for prop.toml files.

mod file;
mod parse;
mod validate;

use htmlprop_builders::{Markup, MarkupOptions, VoidMatch};
use htmlprop_core::Property;
pub use file::PropToml;
pub use parse::parse_manifest;
use serde::Deserialize;

use crate::{FragmentSpec, PropertySpec};

/// Root manifest for prop.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Serialization settings for the fragment
    #[serde(default)]
    pub render: RenderConfig,

    /// Attribute values to build, in order
    #[serde(default)]
    pub properties: Vec<PropertySpec>,

    /// Optional fragment to serialize
    pub fragment: Option<FragmentSpec>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub void_match: VoidMatch,
}

impl Manifest {
    pub fn markup_options(&self) -> MarkupOptions {
        MarkupOptions {
            void_match: self.render.void_match,
        }
    }

    /// Build every property entry, in declaration order.
    ///
    /// A manifest returned by [`parse_manifest`] has already been checked,
    /// so this only fails for manifests assembled by hand.
    pub fn lower_properties(&self) -> htmlprop_core::Result<Vec<Property>> {
        self.properties.iter().map(PropertySpec::to_property).collect()
    }

    pub fn fragment_markup(&self) -> Option<Box<dyn Markup>> {
        self.fragment.as_ref().map(FragmentSpec::to_markup)
    }

    /// Serialize the fragment with the configured render options.
    pub fn render_fragment(&self) -> Option<String> {
        let options = self.markup_options();
        self.fragment_markup()
            .map(|markup| markup.to_markup_with(&options))
    }
}
