//! Structured output nodes produced by rules.
//!
//! Rules never render HTML themselves; they describe what to render. The
//! renderer turns a [`Node`] into a markup fragment, escaping text per HTML
//! rules and assembling attributes in the order they were set.

#[cfg(feature = "serde")]
use serde::Serialize;

/// The text carried by a node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Payload {
    /// Literal text: escaped by the renderer, never re-scanned.
    Literal(String),
    /// Text that is re-scanned for further inline rules before rendering.
    Inline(String),
}

/// A structured output unit: a tag name, a text payload, and an ordered set
/// of unique attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Node {
    pub tag: &'static str,
    pub payload: Payload,
    attributes: Vec<(String, String)>,
}

impl Node {
    /// A node whose payload is rendered as literal (escaped) text.
    pub fn literal(tag: &'static str, text: impl Into<String>) -> Self {
        Node {
            tag,
            payload: Payload::Literal(text.into()),
            attributes: Vec::new(),
        }
    }

    /// A node whose payload is re-scanned for inline rules at render time.
    pub fn inline(tag: &'static str, text: impl Into<String>) -> Self {
        Node {
            tag,
            payload: Payload::Inline(text.into()),
            attributes: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing value for the same key.
    /// Keys are unique; first-set order is preserved for rendering.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    /// Builder-style variant of [`Node::set_attr`].
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The outcome of a successful inline rule attempt: how many bytes of input
/// the match consumed (delimiters included) and the node it produced.
///
/// A rule that does not match returns `None` instead and must not have
/// consumed input or mutated any state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MatchResult {
    pub extent: usize,
    pub node: Node,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut node = Node::literal("pre", "x");
        node.set_attr("class", "language-rust");
        node.set_attr("data-enlighter-language", "rust");
        let keys: Vec<&str> = node.attributes().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["class", "data-enlighter-language"]);
    }

    #[test]
    fn test_set_attr_replaces_existing_key() {
        let mut node = Node::literal("span", "x");
        node.set_attr("class", "a");
        node.set_attr("class", "b");
        assert_eq!(node.attributes().len(), 1);
        assert_eq!(node.attr("class"), Some("b"));
    }
}
