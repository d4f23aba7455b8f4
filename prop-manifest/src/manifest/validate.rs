//! Validation context and utilities for manifest parsing.

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information and the
/// current path through the fragment tree.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: SourceContext,
    /// Tags of the enclosing elements (e.g., ["div", "figure"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push an element tag and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source.clone(),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Span of the `index`-th `[[properties]]` header.
    pub fn find_entry_span(&self, index: usize) -> Option<SourceSpan> {
        find_entry_span(self.source.src(), index)
    }

    pub fn find_quoted_span(&self, text: &str) -> Option<SourceSpan> {
        find_quoted_span(self.source.src(), text)
    }

    pub fn validate_tag(&self, tag: &str) -> Result<()> {
        match validate_tag_name(tag) {
            Some(reason) => Err(self.source.invalid_tag_error(
                tag,
                reason,
                find_tag_span(self.source.src(), tag),
            )),
            None => Ok(()),
        }
    }

    pub fn validate_attr(&self, key: &str) -> Result<()> {
        match validate_attr_name(key) {
            Some(reason) => {
                let message = if self.path.is_empty() {
                    format!("invalid attribute name '{}': {}", key, reason)
                } else {
                    format!(
                        "invalid attribute name '{}' in '{}': {}",
                        key,
                        self.path_string(),
                        reason
                    )
                };
                Err(self
                    .source
                    .validation_error(message, self.find_quoted_span(key)))
            }
            None => Ok(()),
        }
    }
}

const ENTRY_HEADER: &str = "[[properties]]";

/// Span of the `index`-th `[[properties]]` header. Only lines that start
/// with the header count, so mentions in comments or strings are skipped.
pub(crate) fn find_entry_span(src: &str, index: usize) -> Option<SourceSpan> {
    let mut offset = 0;
    src.split_inclusive('\n')
        .filter_map(|line| {
            let start = offset;
            offset += line.len();
            let trimmed = line.trim_start();
            trimmed
                .starts_with(ENTRY_HEADER)
                .then(|| start + line.len() - trimmed.len())
        })
        .nth(index)
        .map(|pos| SourceSpan::from((pos, ENTRY_HEADER.len())))
}

/// Find the span of `tag = "name"` (or single-quoted) in the TOML source,
/// covering only the name.
pub(crate) fn find_tag_span(src: &str, tag: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("tag = \"{}\"", tag),
        format!("tag=\"{}\"", tag),
        format!("tag = '{}'", tag),
        format!("tag='{}'", tag),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // name sits right before the closing quote
            let start = pos + pattern.len() - tag.len() - 1;
            return Some(SourceSpan::from((start, tag.len())));
        }
    }
    None
}

/// Find the first double-quoted occurrence of `text`, covering only the text.
pub(crate) fn find_quoted_span(src: &str, text: &str) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", text);
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + 1, text.len())))
}

/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_tag_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("tag name must start with a letter"),
        None => return Some("tag name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '-')) {
        return Some("tag name must contain only letters, digits, and dashes");
    }
    None
}

/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_attr_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("attribute name cannot be empty");
    }

    let forbidden = |c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '>' | '/' | '=');
    if name.chars().any(forbidden) {
        return Some("attribute name cannot contain whitespace, quotes, '>', '/' or '='");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tag_names() {
        assert!(validate_tag_name("div").is_none());
        assert!(validate_tag_name("h1").is_none());
        assert!(validate_tag_name("my-widget").is_none());
        assert!(validate_tag_name("IMG").is_none());
    }

    #[test]
    fn test_invalid_tag_names() {
        assert_eq!(validate_tag_name(""), Some("tag name cannot be empty"));
        assert_eq!(
            validate_tag_name("1div"),
            Some("tag name must start with a letter")
        );
        assert!(validate_tag_name("my tag").is_some());
        assert!(validate_tag_name("a>b").is_some());
        assert!(validate_tag_name("x_y").is_some());
    }

    #[test]
    fn test_attr_names() {
        assert!(validate_attr_name("class").is_none());
        assert!(validate_attr_name("data-id").is_none());
        assert!(validate_attr_name("aria-label").is_none());
        assert!(validate_attr_name("").is_some());
        assert!(validate_attr_name("on load").is_some());
        assert!(validate_attr_name("a=b").is_some());
        assert!(validate_attr_name("x\"").is_some());
    }

    #[test]
    fn test_find_entry_span() {
        let src = "[[properties]]\nkind = \"rect\"\n\n[[properties]]\nkind = \"poly\"";
        let first = find_entry_span(src, 0).unwrap();
        assert_eq!(first.offset(), 0);
        assert_eq!(first.len(), 14);

        let second = find_entry_span(src, 1).unwrap();
        assert_eq!(second.offset(), 30);
        assert!(find_entry_span(src, 2).is_none());
    }

    #[test]
    fn test_find_entry_span_skips_comments_and_strings() {
        let src = "# each [[properties]] table is one attribute\n[[properties]]\nkind = \"value\"\nname = \"title\"\nvalue = \"see [[properties]]\"\n  [[properties]]\nkind = \"rect\"";
        let first = find_entry_span(src, 0).unwrap();
        assert_eq!(first.offset(), 45);
        assert_eq!(&src[first.offset()..first.offset() + first.len()], "[[properties]]");

        let second = find_entry_span(src, 1).unwrap();
        assert_eq!(&src[second.offset()..second.offset() + second.len()], "[[properties]]");
        assert!(src[..second.offset()].ends_with("\n  "));
        assert!(find_entry_span(src, 2).is_none());
    }

    #[test]
    fn test_find_tag_span() {
        let src = "[fragment]\ntag = \"ul\"\nchildren = [{ tag = \"li\" }]";
        let span = find_tag_span(src, "li").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "li");
        assert_eq!(span.offset(), 43);

        let span = find_tag_span(src, "ul").unwrap();
        assert_eq!(span.offset(), 18);
    }

    #[test]
    fn test_find_tag_span_not_in_other_strings() {
        let src = "[fragment]\ntag = \"div\"\nattrs = [[\"class\", \"li\"]]";
        assert!(find_tag_span(src, "li").is_none());
    }

    #[test]
    fn test_parse_context_path() {
        let ctx = ParseContext::new("", "prop.toml");
        assert_eq!(ctx.path_string(), "");
        let nested = ctx.push("figure").push("img");
        assert_eq!(nested.path_string(), "figure.img");
    }

    #[test]
    fn test_validate_attr_reports_path() {
        let ctx = ParseContext::new("attrs = [[\"bad key\", \"x\"]]", "prop.toml");
        let err = ctx.push("div").validate_attr("bad key").unwrap_err();
        assert!(err.to_string().starts_with("invalid attribute name 'bad key' in 'div'"));
    }
}
