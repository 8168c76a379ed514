//! Subscript spans (~text~).
//!
//! Same shape as superscript with a tilde delimiter: a non-greedy capture of
//! any character except an unescaped, non-doubled `~`. An empty payload is no
//! match, so at a doubled opener like `~~strikethrough~~` the first tilde
//! stays literal and the scan re-enters at the second.

use super::matcher::{find_unescaped, unescape};
use crate::node::{MatchResult, Node};

/// Try to parse a subscript span at the start of `text`.
pub fn try_parse(text: &str) -> Option<MatchResult> {
    if !text.starts_with('~') {
        return None;
    }

    let close = find_unescaped(text, 1, "~", true)?;
    if close == 1 {
        return None;
    }

    let payload = unescape(&text[1..close], &['~']);
    Some(MatchResult {
        extent: close + 1,
        node: Node::inline("sub", payload),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Payload;

    fn payload(text: &str) -> Option<(usize, String)> {
        try_parse(text).map(|m| match m.node.payload {
            Payload::Inline(p) => (m.extent, p),
            Payload::Literal(p) => panic!("subscript payload should re-scan, got {:?}", p),
        })
    }

    #[test]
    fn test_simple_subscript() {
        assert_eq!(payload("~2~O"), Some((3, "2".into())));
    }

    #[test]
    fn test_node_shape() {
        let m = try_parse("~2~").unwrap();
        assert_eq!(m.node.tag, "sub");
        assert!(m.node.attributes().is_empty());
    }

    #[test]
    fn test_escaped_tilde_in_payload() {
        assert_eq!(payload(r"~0\~5~"), Some((6, "0~5".into())));
    }

    #[test]
    fn test_doubled_close_stays_in_payload() {
        assert_eq!(payload("~a~~b~"), Some((4, "a~".into())));
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(try_parse("~~"), None);
        assert_eq!(try_parse("~~strike~~"), None);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(try_parse("~text"), None);
    }
}
