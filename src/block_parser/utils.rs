//! Shared utilities for block scanning.

use std::borrow::Cow;

/// Expand tabs at 4-column stops. Column counting is per character, which is
/// what the host engines this layer targets do for indentation.
pub(crate) fn expand_tabs(line: &str) -> Cow<'_, str> {
    if !line.contains('\t') {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + 4);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = 4 - column % 4;
            for _ in 0..pad {
                out.push(' ');
            }
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    Cow::Owned(out)
}

/// Count leading space columns (tabs must already be expanded).
pub(crate) fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}
