//! Escape-aware closing-delimiter search shared by the inline rules.
//!
//! A delimiter is escaped when an odd run of backslashes immediately precedes
//! it; such a delimiter has no closing power but stays in the captured span.
//! The backslash is removed later, at node-construction time, by the rule
//! that knows which characters it treats as delimiters.

/// Find the smallest byte offset `end >= from` where `close` occurs such that
/// the occurrence is not escaped and, when `reject_repeat` is set, is not
/// immediately followed by another occurrence of the closing delimiter's
/// first byte. Returns `None` when no such occurrence exists before input end.
pub(crate) fn find_unescaped(
    text: &str,
    from: usize,
    close: &str,
    reject_repeat: bool,
) -> Option<usize> {
    let bytes = text.as_bytes();
    let close_bytes = close.as_bytes();
    let mut pos = from;

    while pos + close_bytes.len() <= bytes.len() {
        if &bytes[pos..pos + close_bytes.len()] != close_bytes {
            pos += 1;
            continue;
        }

        let mut backslashes = 0;
        while backslashes < pos && bytes[pos - backslashes - 1] == b'\\' {
            backslashes += 1;
        }
        if backslashes % 2 == 1 {
            pos += 1;
            continue;
        }

        if reject_repeat && bytes.get(pos + close_bytes.len()) == Some(&close_bytes[0]) {
            pos += 1;
            continue;
        }

        return Some(pos);
    }

    None
}

/// Remove the backslash from `\d` for each delimiter `d` in `delimiters`,
/// leaving every other escape sequence untouched.
pub(crate) fn unescape(text: &str, delimiters: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(&next) = chars.peek()
            && delimiters.contains(&next)
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(ch);
    }

    out
}
