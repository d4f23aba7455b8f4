//! Attrs operation - build every property into an ordered attribute map.

use eyre::{Context, Result};
use htmlprop_core::PropertyMap;
use htmlprop_manifest::Manifest;

use crate::reports::AttrsReport;

/// Execute the attrs operation.
///
/// Properties are applied in declaration order, so a later entry with the
/// same name replaces the value of an earlier one.
pub fn attrs(manifest: &Manifest) -> Result<AttrsReport> {
    let properties = manifest
        .lower_properties()
        .wrap_err("Failed to build properties")?;

    let mut attributes = PropertyMap::new();
    attributes.extend(&properties);
    tracing::debug!(
        built = properties.len(),
        distinct = attributes.len(),
        "applied properties"
    );

    Ok(AttrsReport { attributes })
}

#[cfg(test)]
mod tests {
    use htmlprop_core::PropValue;

    use super::*;

    #[test]
    fn test_later_entry_wins() {
        let manifest: Manifest = r#"
            [[properties]]
            kind = "value"
            name = "title"
            value = "first"

            [[properties]]
            kind = "link-sizes"
            pairs = [[16, 16]]

            [[properties]]
            kind = "value"
            name = "title"
            value = "second"
        "#
        .parse()
        .unwrap();

        let report = attrs(&manifest).unwrap();
        let names: Vec<_> = report.attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["title", "sizes"]);
        assert_eq!(
            report.attributes.get("title"),
            Some(&PropValue::from("second"))
        );
    }
}
