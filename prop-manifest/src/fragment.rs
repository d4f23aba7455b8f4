//! The `[fragment]` table: one HTML fragment described as nested tables.

use htmlprop_builders::{Attr, Markup, Node, RawNode};
use serde::Deserialize;

/// A fragment node. Raw text is `{ raw = "..." }`, a tagless group is
/// `{ empty = [...] }`, anything else is an element table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FragmentSpec {
    Raw(RawSpec),
    Empty(EmptySpec),
    Element(ElementSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSpec {
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmptySpec {
    pub empty: Vec<ElementSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    pub tag: String,
    /// `[key, value]` pairs, kept in declaration order.
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
    #[serde(default)]
    pub children: Vec<FragmentSpec>,
}

impl FragmentSpec {
    pub fn to_markup(&self) -> Box<dyn Markup> {
        match self {
            Self::Raw(raw) => Box::new(RawNode::new(raw.raw.clone())),
            Self::Empty(group) => Box::new(RawNode::empty(group.empty.iter().map(ElementSpec::to_node))),
            Self::Element(element) => Box::new(element.to_node()),
        }
    }

    /// Elements directly under this node, for validation.
    pub(crate) fn elements(&self) -> Vec<&ElementSpec> {
        match self {
            Self::Raw(_) => Vec::new(),
            Self::Empty(group) => group.empty.iter().collect(),
            Self::Element(element) => vec![element],
        }
    }
}

impl ElementSpec {
    pub fn to_node(&self) -> Node {
        let mut node = Node::new(
            self.tag.clone(),
            self.attrs
                .iter()
                .map(|(key, value)| Attr::new(key.clone(), value.clone())),
        );
        for child in &self.children {
            node.include_boxed(child.to_markup());
        }
        node
    }
}
