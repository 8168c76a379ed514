//! Spoiler spans ({{hidden}}).
//!
//! Doubled braces, non-greedy capture ending at the first unescaped `}}`.
//! The payload is literal text with `\{`/`\}` resolved; the produced span
//! carries a fixed `class="spoiler"` attribute.

use super::matcher::{find_unescaped, unescape};
use crate::node::{MatchResult, Node};

/// Try to parse a spoiler span at the start of `text`.
pub fn try_parse(text: &str) -> Option<MatchResult> {
    if !text.starts_with("{{") {
        return None;
    }

    let close = find_unescaped(text, 2, "}}", false)?;
    let payload = unescape(&text[2..close], &['{', '}']);
    Some(MatchResult {
        extent: close + 2,
        node: Node::literal("span", payload).with_attr("class", "spoiler"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Payload;

    fn payload(text: &str) -> Option<(usize, String)> {
        try_parse(text).map(|m| match m.node.payload {
            Payload::Literal(p) => (m.extent, p),
            Payload::Inline(p) => panic!("spoiler payload is literal, got {:?}", p),
        })
    }

    #[test]
    fn test_simple_spoiler() {
        assert_eq!(payload("{{fox}}"), Some((7, "fox".into())));
    }

    #[test]
    fn test_node_shape() {
        let m = try_parse("{{x}}").unwrap();
        assert_eq!(m.node.tag, "span");
        assert_eq!(m.node.attr("class"), Some("spoiler"));
    }

    #[test]
    fn test_multibyte_payload() {
        let (extent, p) = payload("{{沢木 公平}}").unwrap();
        assert_eq!(p, "沢木 公平");
        assert_eq!(extent, "{{沢木 公平}}".len());
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(
            payload(r"{{Spoiler with \{\{bracket\}\}!}}"),
            Some((33, "Spoiler with {{bracket}}!".into()))
        );
    }

    #[test]
    fn test_empty_payload_allowed() {
        assert_eq!(payload("{{}}"), Some((4, "".into())));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(try_parse("{{secret"), None);
        assert_eq!(try_parse(r"{{a\}}"), None);
    }
}
