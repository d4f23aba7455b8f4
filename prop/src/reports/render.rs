//! Render command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct RenderReport {
    pub config_path: PathBuf,
    /// Serialized fragment, if the manifest has one.
    pub markup: Option<String>,
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.markup {
            Some(markup) => out.preformatted(markup),
            None => out.warning(&format!(
                "no [fragment] table in {}",
                self.config_path.display()
            )),
        }
    }
}
