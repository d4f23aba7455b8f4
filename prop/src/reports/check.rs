//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    /// One entry per `[[properties]]` table, in order.
    pub properties: Vec<PropertyInfo>,
    /// Number of elements in the fragment, if there is one.
    pub fragment_elements: Option<usize>,
    pub void_match: &'static str,
}

#[derive(Debug)]
pub struct PropertyInfo {
    /// Manifest kind, e.g. `rect` or `image-sizes`.
    pub kind: String,
    /// Attribute name the entry builds.
    pub name: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let count = self.properties.len();
        out.section(&format!(
            "{} propert{}",
            count,
            if count == 1 { "y" } else { "ies" }
        ));
        for info in &self.properties {
            out.list_item(&format!("{} ({})", info.name, info.kind));
        }

        if let Some(elements) = self.fragment_elements {
            out.newline();
            out.section("fragment");
            out.key_value("elements", &elements.to_string());
            out.key_value("void match", self.void_match);
        }
    }
}
