//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{ElementSpec, Error, PropertySpec, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "prop.toml")
    }
}

impl Manifest {
    /// Parse a prop.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a prop.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;

    tracing::debug!(
        filename,
        properties = manifest.properties.len(),
        fragment = manifest.fragment.is_some(),
        "loaded manifest"
    );
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for (index, spec) in manifest.properties.iter().enumerate() {
        validate_property(&ctx, index, spec)?;
    }

    if let Some(fragment) = &manifest.fragment {
        for element in fragment.elements() {
            validate_element(&ctx, element)?;
        }
    }
    Ok(())
}

fn validate_property(ctx: &ParseContext<'_>, index: usize, spec: &PropertySpec) -> Result<()> {
    let span = ctx.find_entry_span(index);

    match spec {
        PropertySpec::Value { name, .. } if name.is_empty() => {
            return Err(ctx
                .source_context()
                .validation_error("property name cannot be empty", span));
        }
        PropertySpec::Srcset { candidates } => {
            if let Some(candidate) = candidates
                .iter()
                .find(|c| c.width.is_some() && c.density.is_some())
            {
                return Err(ctx.source_context().validation_error(
                    format!(
                        "srcset candidate '{}' sets both width and density",
                        candidate.url
                    ),
                    ctx.find_quoted_span(&candidate.url).or(span),
                ));
            }
        }
        _ => {}
    }

    spec.to_property()
        .map(|_| ())
        .map_err(|e| ctx.source_context().build_error(index, spec.kind(), e, span))
}

fn validate_element<'a>(ctx: &ParseContext<'a>, element: &'a ElementSpec) -> Result<()> {
    ctx.validate_tag(&element.tag)?;

    let element_ctx = ctx.push(&element.tag);
    for (key, _) in &element.attrs {
        element_ctx.validate_attr(key)?;
    }
    for child in &element.children {
        for nested in child.elements() {
            validate_element(&element_ctx, nested)?;
        }
    }
    Ok(())
}
