//! Render operation - fragment serialization.

use std::path::Path;

use htmlprop_manifest::Manifest;

use crate::reports::RenderReport;

/// Execute the render operation with the manifest's `[render]` settings.
pub fn render(manifest: &Manifest, config_path: &Path) -> RenderReport {
    RenderReport {
        config_path: config_path.to_path_buf(),
        markup: manifest.render_fragment(),
    }
}
