//! Indented code lines.
//!
//! A line indented 4+ columns opens a bare `pre` block (no nested `code`
//! wrapper) holding the text after the first 4 columns, verbatim. The rule
//! never fires while an uninterrupted paragraph is open: such a line is a
//! lazy paragraph continuation. Each qualifying line triggers independently;
//! merging consecutive lines is the surrounding engine's business.

use super::{BlockContext, BlockStart, Line};
use crate::node::Node;

/// Try to open an indented code block from a block-opening candidate line.
pub fn try_open(line: &Line, ctx: &BlockContext) -> Option<BlockStart> {
    if ctx.paragraph_open {
        return None;
    }
    if line.indent < 4 {
        return None;
    }

    log::debug!("Indented code line, {} columns", line.indent);
    Some(BlockStart::Leaf(Node::literal("pre", &line.body[4..])))
}
