//! Superscript spans (^text^).
//!
//! Rules:
//! - Single caret on each side; the closing caret must not be followed by
//!   another caret (so `^a^^b^` is not split at the doubled pair).
//! - An escaped caret (`\^`) inside the payload never closes the span and is
//!   unescaped before the payload is re-scanned for inline rules.
//! - Payload cannot be empty.

use super::matcher::{find_unescaped, unescape};
use crate::node::{MatchResult, Node};

/// Try to parse a superscript span at the start of `text`.
pub fn try_parse(text: &str) -> Option<MatchResult> {
    if !text.starts_with('^') {
        return None;
    }

    let close = find_unescaped(text, 1, "^", true)?;
    if close == 1 {
        return None;
    }

    let payload = unescape(&text[1..close], &['^']);
    Some(MatchResult {
        extent: close + 1,
        node: Node::inline("sup", payload),
    })
}
