//! Line-oriented block scanning.
//!
//! The driver walks physical lines once. A blank line interrupts whatever is
//! open (an open fence records the interruption, an open paragraph ends);
//! otherwise, if a fence is open the line is fed to it, and if not the
//! registered block rules are tried in order. Lines no block rule claims
//! accumulate into paragraphs. At end of input an unterminated fence is
//! finalized with whatever it captured.

pub mod fenced_code;
pub mod indented_code;
mod utils;

use crate::node::Node;
use crate::registry::RuleRegistry;
use fenced_code::{Continuation, FencedBlockState};
use utils::{expand_tabs, leading_spaces};

/// One physical line, tabs already expanded: the full line, its indentation
/// column count, and the text after the indentation.
#[derive(Debug)]
pub struct Line<'a> {
    pub body: &'a str,
    pub indent: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(body: &'a str) -> Self {
        let indent = leading_spaces(body);
        Line {
            body,
            indent,
            text: &body[indent..],
        }
    }
}

/// What the block scan currently holds, as seen by a block rule.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext {
    /// An open paragraph is not interruptible by the indented-code rule.
    pub paragraph_open: bool,
}

/// A successful block rule match: either a complete single-line block or a
/// newly opened fence that will absorb the following lines.
#[derive(Debug)]
pub enum BlockStart {
    Leaf(Node),
    Fenced(FencedBlockState),
}

/// Scan a whole document into block nodes. Line endings are normalized to LF
/// before scanning.
pub fn parse(registry: &RuleRegistry, input: &str) -> Vec<Node> {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    log::debug!("Block scan over {} bytes", normalized.len());

    let mut blocks: Vec<Node> = Vec::new();
    let mut fence: Option<FencedBlockState> = None;
    let mut paragraph: Vec<String> = Vec::new();

    for raw_line in normalized.split('\n') {
        let expanded = expand_tabs(raw_line);
        let blank = expanded.trim().is_empty();

        if let Some(mut open) = fence.take() {
            if blank {
                open.interrupt();
                fence = Some(open);
                continue;
            }
            let line = Line::new(&expanded);
            if open.feed(&line) == Continuation::Closed {
                blocks.push(open.into_node());
            } else {
                fence = Some(open);
            }
            continue;
        }

        if blank {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        let line = Line::new(&expanded);
        let ctx = BlockContext {
            paragraph_open: !paragraph.is_empty(),
        };

        let start = registry.block_rules().iter().find_map(|rule| {
            let result = rule.try_match(&line, &ctx);
            if result.is_some() {
                log::debug!("Block rule {:?} matched", rule.name);
            }
            result
        });

        match start {
            Some(BlockStart::Leaf(node)) => {
                flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(node);
            }
            Some(BlockStart::Fenced(state)) => {
                flush_paragraph(&mut paragraph, &mut blocks);
                fence = Some(state);
            }
            None => paragraph.push(line.text.to_string()),
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    if let Some(open) = fence {
        blocks.push(open.into_node());
    }

    blocks
}

fn flush_paragraph(paragraph: &mut Vec<String>, blocks: &mut Vec<Node>) {
    if paragraph.is_empty() {
        return;
    }
    let text = paragraph.join("\n");
    paragraph.clear();
    blocks.push(Node::inline("p", text));
}
