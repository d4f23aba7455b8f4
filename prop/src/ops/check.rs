//! Check operation - manifest summary.

use std::path::Path;

use eyre::{Context, Result};
use htmlprop_manifest::{FragmentSpec, Manifest};

use crate::reports::{CheckReport, PropertyInfo};

/// Execute the check operation.
///
/// The manifest has already been validated while loading; this builds every
/// property once more to list what each entry produces.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let built = manifest
        .lower_properties()
        .wrap_err("Failed to build properties")?;

    let properties = manifest
        .properties
        .iter()
        .zip(&built)
        .map(|(spec, prop)| PropertyInfo {
            kind: spec.kind().to_string(),
            name: prop.name().to_string(),
        })
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        properties,
        fragment_elements: manifest.fragment.as_ref().map(count_elements),
        void_match: manifest.render.void_match.as_str(),
    })
}

fn count_elements(fragment: &FragmentSpec) -> usize {
    match fragment {
        FragmentSpec::Raw(_) => 0,
        FragmentSpec::Empty(group) => group
            .empty
            .iter()
            .map(|element| 1 + element.children.iter().map(count_elements).sum::<usize>())
            .sum(),
        FragmentSpec::Element(element) => {
            1 + element.children.iter().map(count_elements).sum::<usize>()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_lists_properties() {
        let manifest: Manifest = r#"
            [[properties]]
            kind = "circle"
            x = 1
            y = 2
            radius = "3"

            [[properties]]
            kind = "value"
            name = "id"
            value = "hero"

            [fragment]
            tag = "div"
            children = [{ raw = "a" }, { empty = [{ tag = "br" }, { tag = "p", children = [{ tag = "b" }] }] }]
        "#
        .parse()
        .unwrap();

        let report = check(&manifest, Path::new("prop.toml")).unwrap();
        assert_eq!(report.properties.len(), 2);
        assert_eq!(report.properties[0].kind, "circle");
        assert_eq!(report.properties[0].name, "coords");
        assert_eq!(report.properties[1].name, "id");
        assert_eq!(report.fragment_elements, Some(4));
        assert_eq!(report.void_match, "exact");
    }

    #[test]
    fn test_check_without_fragment() {
        let manifest = Manifest::default();
        let report = check(&manifest, Path::new("prop.toml")).unwrap();
        assert!(report.properties.is_empty());
        assert_eq!(report.fragment_elements, None);
    }
}
