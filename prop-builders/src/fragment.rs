//! Minimal HTML fragments for inline markup attributes such as `srcdoc`.
//!
//! Attribute values and raw markup are written verbatim; nothing is escaped.

use std::fmt;

use serde::Deserialize;

/// Elements that never get a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// [`VOID_ELEMENTS`] as a single space-separated list, for [`VoidMatch::Substring`].
const VOID_ELEMENT_LIST: &str =
    "area base br col command embed hr img input keygen link meta param source track wbr";

/// How an element name is tested against the void element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoidMatch {
    /// The name must equal one of [`VOID_ELEMENTS`].
    #[default]
    Exact,
    /// The name may appear anywhere inside the space-separated list, so
    /// `co` or `put` count as void. Kept for output compatibility with
    /// fragments produced by older releases.
    Substring,
}

impl VoidMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Substring => "substring",
        }
    }

    pub fn is_void(&self, name: &str) -> bool {
        match self {
            Self::Exact => VOID_ELEMENTS.contains(&name),
            Self::Substring => VOID_ELEMENT_LIST.contains(name),
        }
    }
}

/// Options applied while serializing a fragment tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupOptions {
    pub void_match: VoidMatch,
}

/// Something that serializes to HTML markup.
pub trait Markup: fmt::Debug {
    /// Append this node's markup to `out`.
    fn write_markup(&self, out: &mut String, options: &MarkupOptions);

    /// Serialize with default options.
    fn to_markup(&self) -> String {
        self.to_markup_with(&MarkupOptions::default())
    }

    fn to_markup_with(&self, options: &MarkupOptions) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, options);
        out
    }
}

/// A `key="value"` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    key: String,
    value: String,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn build(&self) -> String {
        format!(r#"{}="{}""#, self.key, self.value)
    }
}

/// Pre-formatted markup, optionally followed by more nodes.
///
/// Also serves as a container with no tag of its own: [`RawNode::empty`]
/// just concatenates its children.
#[derive(Debug, Default)]
pub struct RawNode {
    html: String,
    nodes: Vec<Box<dyn Markup>>,
}

impl RawNode {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            nodes: Vec::new(),
        }
    }

    /// A tagless container of element nodes.
    pub fn empty(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut raw = Self::default();
        for node in nodes {
            raw.include(node);
        }
        raw
    }

    /// Append a node after the current content.
    pub fn include(&mut self, node: impl Markup + 'static) -> &mut Self {
        self.nodes.push(Box::new(node));
        self
    }
}

impl Markup for RawNode {
    fn write_markup(&self, out: &mut String, options: &MarkupOptions) {
        out.push_str(&self.html);
        for node in &self.nodes {
            node.write_markup(out, options);
        }
    }
}

/// An element with ordered attributes and children.
///
/// # Example
///
/// ```
/// use htmlprop_builders::fragment::{Attr, Markup, Node, RawNode};
///
/// let mut figure = Node::new("figure", []);
/// figure
///     .include(Node::new("img", [Attr::new("src", "x.png")]))
///     .include({
///         let mut caption = Node::new("figcaption", []);
///         caption.include(RawNode::new("A cat"));
///         caption
///     });
/// assert_eq!(
///     figure.to_markup(),
///     r#"<figure><img src="x.png"><figcaption>A cat</figcaption></figure>"#
/// );
/// ```
#[derive(Debug)]
pub struct Node {
    name: String,
    attrs: Vec<Attr>,
    nodes: Vec<Box<dyn Markup>>,
}

impl Node {
    pub fn new(name: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self {
            name: name.into(),
            attrs: attrs.into_iter().collect(),
            nodes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn push_attr(&mut self, attr: Attr) -> &mut Self {
        self.attrs.push(attr);
        self
    }

    /// Append a child node.
    pub fn include(&mut self, node: impl Markup + 'static) -> &mut Self {
        self.nodes.push(Box::new(node));
        self
    }

    /// Append an already boxed child node.
    pub fn include_boxed(&mut self, node: Box<dyn Markup>) -> &mut Self {
        self.nodes.push(node);
        self
    }
}

impl Markup for Node {
    fn write_markup(&self, out: &mut String, options: &MarkupOptions) {
        out.push('<');
        out.push_str(&self.name);
        for attr in &self.attrs {
            out.push(' ');
            out.push_str(&attr.build());
        }
        out.push('>');

        for node in &self.nodes {
            node.write_markup(out, options);
        }

        if !options.void_match.is_void(&self.name) {
            out.push_str("</");
            out.push_str(&self.name);
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_element_has_no_close_tag() {
        let img = Node::new("img", [Attr::new("src", "x.png")]);
        assert_eq!(img.to_markup(), r#"<img src="x.png">"#);
    }

    #[test]
    fn test_text_child() {
        let mut div = Node::new("div", []);
        div.include(RawNode::new("text"));
        assert_eq!(div.to_markup(), "<div>text</div>");
    }

    #[test]
    fn test_attrs_in_order() {
        let mut a = Node::new("a", [Attr::new("href", "/x"), Attr::new("target", "_blank")]);
        a.push_attr(Attr::new("rel", "noopener"));
        assert_eq!(
            a.to_markup(),
            r#"<a href="/x" target="_blank" rel="noopener"></a>"#
        );
    }

    #[test]
    fn test_values_are_verbatim() {
        let p = Node::new("p", [Attr::new("title", "a<b & \"c")]);
        assert_eq!(p.to_markup(), r#"<p title="a<b & "c"></p>"#);
    }

    #[test]
    fn test_void_element_ignores_children() {
        let mut br = Node::new("br", []);
        br.include(RawNode::new("x"));
        assert_eq!(br.to_markup(), "<br>x");
    }

    #[test]
    fn test_nested_depth_first() {
        let mut li1 = Node::new("li", []);
        li1.include(RawNode::new("one"));
        let mut li2 = Node::new("li", []);
        li2.include(RawNode::new("<b>two</b>"));

        let mut ul = Node::new("ul", [Attr::new("class", "list")]);
        ul.include(li1).include(li2);

        assert_eq!(
            ul.to_markup(),
            r#"<ul class="list"><li>one</li><li><b>two</b></li></ul>"#
        );
    }

    #[test]
    fn test_raw_node_include() {
        let mut raw = RawNode::new("<!-- head -->");
        raw.include(Node::new("hr", [])).include(RawNode::new("tail"));
        assert_eq!(raw.to_markup(), "<!-- head --><hr>tail");
    }

    #[test]
    fn test_empty_container() {
        let raw = RawNode::empty([Node::new("p", []), Node::new("wbr", [])]);
        assert_eq!(raw.to_markup(), "<p></p><wbr>");
        assert_eq!(RawNode::empty([]).to_markup(), "");
    }

    #[test]
    fn test_exact_match_does_not_treat_prefixes_as_void() {
        assert!(!VoidMatch::Exact.is_void("co"));
        assert!(!VoidMatch::Exact.is_void("image"));
        assert!(VoidMatch::Exact.is_void("col"));
        assert_eq!(Node::new("co", []).to_markup(), "<co></co>");
    }

    #[test]
    fn test_substring_match() {
        let options = MarkupOptions {
            void_match: VoidMatch::Substring,
        };
        assert!(VoidMatch::Substring.is_void("co"));
        assert!(VoidMatch::Substring.is_void("br col"));
        assert!(!VoidMatch::Substring.is_void("div"));
        assert_eq!(Node::new("co", []).to_markup_with(&options), "<co>");
        assert_eq!(Node::new("div", []).to_markup_with(&options), "<div></div>");
    }

    #[test]
    fn test_options_reach_nested_nodes() {
        let mut outer = Node::new("span", []);
        outer.include(RawNode::empty([Node::new("put", [])]));

        assert_eq!(outer.to_markup(), "<span><put></put></span>");
        assert_eq!(
            outer.to_markup_with(&MarkupOptions {
                void_match: VoidMatch::Substring
            }),
            "<span><put></span>"
        );
    }

    #[test]
    fn test_markup_is_idempotent() {
        let mut div = Node::new("div", []);
        div.include(RawNode::new("x"));
        assert_eq!(div.to_markup(), div.to_markup());
    }
}
