//! The inline scanning loop.
//!
//! Walks a block's text once, left to right. Each time the scanner reaches a
//! registered trigger character it asks the dispatch table for that trigger's
//! rules and tries them in registration order. The first match contributes
//! its node and the scan skips the match's extent; no match means the trigger
//! character is ordinary text and the scan advances by one character.
//!
//! Rules operate only within one pass over already block-segmented text, so
//! no rule can match across a block boundary.

pub(crate) mod matcher;
pub mod keyboard;
pub mod spoiler;
pub mod subscript;
pub mod superscript;

use crate::node::Node;
use crate::registry::RuleRegistry;

/// One run of inline output: a plain text span or a rule-produced node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Node(Node),
}

/// Scan `text` for inline rule matches against `registry`.
pub fn scan(registry: &RuleRegistry, text: &str) -> Vec<Inline> {
    log::trace!("Inline scan over {} bytes", text.len());

    let bytes = text.as_bytes();
    let mut items = Vec::new();
    let mut pos = 0;
    let mut plain_start = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];

        // Triggers are ASCII, so a non-ASCII byte can never start a rule and
        // the scan may advance bytewise without splitting a character.
        if byte.is_ascii() && registry.is_marker(byte as char) {
            let remaining = &text[pos..];
            let hit = registry
                .inline_rules_for(byte as char)
                .iter()
                .find_map(|rule| {
                    let result = rule.try_match(remaining);
                    if result.is_some() {
                        log::debug!("Inline rule {:?} matched at byte {}", rule.name, pos);
                    }
                    result
                });

            if let Some(m) = hit {
                debug_assert!(m.extent > 0, "a match must consume its delimiters");
                if plain_start < pos {
                    items.push(Inline::Text(text[plain_start..pos].to_string()));
                }
                items.push(Inline::Node(m.node));
                pos += m.extent;
                plain_start = pos;
                continue;
            }
        }

        pos += 1;
    }

    if plain_start < text.len() {
        items.push(Inline::Text(text[plain_start..].to_string()));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Payload;

    fn scan_default(text: &str) -> Vec<Inline> {
        scan(&RuleRegistry::with_default_rules(), text)
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(
            scan_default("no markup here"),
            vec![Inline::Text("no markup here".into())]
        );
    }

    #[test]
    fn test_match_splits_surrounding_text() {
        let items = scan_default("H~2~O");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Inline::Text("H".into()));
        match &items[1] {
            Inline::Node(node) => {
                assert_eq!(node.tag, "sub");
                assert_eq!(node.payload, Payload::Inline("2".into()));
            }
            other => panic!("expected a sub node, got {:?}", other),
        }
        assert_eq!(items[2], Inline::Text("O".into()));
    }

    #[test]
    fn test_unmatched_trigger_is_literal() {
        assert_eq!(
            scan_default("2^10 and a~b"),
            vec![Inline::Text("2^10 and a~b".into())]
        );
    }

    #[test]
    fn test_doubled_opener_reenters_at_second_delimiter() {
        // the first tilde rejects (empty payload); the scan advances one
        // character and the second tilde opens, capturing through the
        // rejected close at the doubled tail
        let items = scan_default("~~strikethrough~~");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Inline::Text("~".into()));
        match &items[1] {
            Inline::Node(node) => {
                assert_eq!(node.tag, "sub");
                assert_eq!(node.payload, Payload::Inline("strikethrough~".into()));
            }
            other => panic!("expected a sub node, got {:?}", other),
        }

        let items = scan_default("^^a^");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Inline::Text("^".into()));
        match &items[1] {
            Inline::Node(node) => {
                assert_eq!(node.tag, "sup");
                assert_eq!(node.payload, Payload::Inline("a".into()));
            }
            other => panic!("expected a sup node, got {:?}", other),
        }
    }

    #[test]
    fn test_adjacent_matches() {
        let items = scan_default("[[A]][[B]]");
        assert_eq!(items.len(), 2);
        assert!(matches!(&items[0], Inline::Node(n) if n.tag == "kbd"));
        assert!(matches!(&items[1], Inline::Node(n) if n.tag == "kbd"));
    }

    #[test]
    fn test_multibyte_text_between_matches() {
        let items = scan_default("凶手是{{沢木 公平}}");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Inline::Text("凶手是".into()));
        assert!(matches!(&items[1], Inline::Node(n) if n.tag == "span"));
    }

    #[test]
    fn test_empty_registry_never_matches() {
        let registry = RuleRegistry::new();
        assert_eq!(
            scan(&registry, "^sup^ [[kbd]]"),
            vec![Inline::Text("^sup^ [[kbd]]".into())]
        );
    }
}
