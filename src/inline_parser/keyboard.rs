//! Keyboard-key spans ([[Enter]]).
//!
//! Doubled delimiters on both sides, non-greedy capture ending at the first
//! unescaped `]]`. The payload is literal text; escaped single brackets
//! (`\[`, `\]`) render as the bracket itself and an empty payload is valid.

use super::matcher::{find_unescaped, unescape};
use crate::node::{MatchResult, Node};

/// Try to parse a keyboard span at the start of `text`.
pub fn try_parse(text: &str) -> Option<MatchResult> {
    if !text.starts_with("[[") {
        return None;
    }

    let close = find_unescaped(text, 2, "]]", false)?;
    let payload = unescape(&text[2..close], &['[', ']']);
    Some(MatchResult {
        extent: close + 2,
        node: Node::literal("kbd", payload),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Payload;

    fn payload(text: &str) -> Option<(usize, String)> {
        try_parse(text).map(|m| match m.node.payload {
            Payload::Literal(p) => (m.extent, p),
            Payload::Inline(p) => panic!("keyboard payload is literal, got {:?}", p),
        })
    }

    #[test]
    fn test_simple_key() {
        assert_eq!(payload("[[Enter]]"), Some((9, "Enter".into())));
        assert_eq!(payload("[[Ctrl]] + C"), Some((8, "Ctrl".into())));
    }

    #[test]
    fn test_node_shape() {
        let m = try_parse("[[Esc]]").unwrap();
        assert_eq!(m.node.tag, "kbd");
        assert!(m.node.attributes().is_empty());
    }

    #[test]
    fn test_escaped_brackets() {
        assert_eq!(payload(r"[[\[]]"), Some((6, "[".into())));
        assert_eq!(payload(r"[[\]]]"), Some((6, "]".into())));
    }

    #[test]
    fn test_empty_payload_allowed() {
        assert_eq!(payload("[[]]"), Some((4, "".into())));
    }

    #[test]
    fn test_non_greedy() {
        assert_eq!(payload("[[a]] b]]"), Some((5, "a".into())));
    }

    #[test]
    fn test_single_bracket_is_no_match() {
        assert_eq!(try_parse("[Enter]"), None);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(try_parse("[[Enter]"), None);
        assert_eq!(try_parse(r"[[a\]]"), None);
    }
}
