//! Fenced code blocks with an optional language tag.
//!
//! The produced element is a bare `pre` container (no nested `code` wrapper).
//! When the opening fence carries an info string, its first whitespace-
//! delimited token becomes the language tag and the element carries
//! `class="language-<tag>"` and `data-enlighter-language="<tag>"`, in that
//! order. The tag value is passed through verbatim; escaping is the
//! renderer's job.

use super::{BlockContext, BlockStart, Line};
use crate::node::Node;

/// Characters that may open a fence.
const FENCE_CHARS: [char; 2] = ['`', '~'];

/// Whitespace set used to cut the language tag out of the info string.
const TAG_SEPARATORS: [char; 5] = [' ', '\t', '\n', '\x0C', '\r'];

/// Outcome of feeding one physical line to an open fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The line was absorbed into the block's text buffer.
    Consumed,
    /// The line was a closing fence; the block is complete.
    Closed,
}

/// An in-progress fenced code block.
///
/// Created on recognizing an opening fence line, mutated once per subsequent
/// physical line until complete, and turned into its final node when the
/// block-level scan moves past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlockState {
    fence_char: char,
    language: Option<String>,
    text: String,
    has_body: bool,
    interrupted: bool,
    complete: bool,
}

/// Try to open a fence from a block-opening candidate line: at most 3 columns
/// of indentation, then 3+ repetitions of one fence character, then an
/// optional info string (which must not contain a backtick).
pub fn try_open(line: &Line, _ctx: &BlockContext) -> Option<BlockStart> {
    if line.indent >= 4 {
        return None;
    }

    let fence_char = line.text.chars().next().filter(|c| FENCE_CHARS.contains(c))?;
    let count = line.text.chars().take_while(|&c| c == fence_char).count();
    if count < 3 {
        return None;
    }

    let info = line.text[count..].trim_matches(' ');
    if info.contains('`') {
        return None;
    }

    let language = info
        .split(TAG_SEPARATORS)
        .next()
        .filter(|tag| !tag.is_empty())
        .map(str::to_string);

    log::debug!(
        "Opening {} fence, language tag {:?}",
        fence_char,
        language.as_deref()
    );

    Some(BlockStart::Fenced(FencedBlockState {
        fence_char,
        language,
        text: String::new(),
        has_body: false,
        interrupted: false,
        complete: false,
    }))
}

impl FencedBlockState {
    /// Feed one physical line to the open block. A pending interruption
    /// inserts its line break before anything else, including before the
    /// closing-fence check.
    pub fn feed(&mut self, line: &Line) -> Continuation {
        debug_assert!(!self.complete, "a complete block accepts no more lines");

        if self.interrupted {
            self.text.push('\n');
            self.interrupted = false;
        }

        if self.is_closing_fence(line.text) {
            log::debug!("Closing {} fence after {} bytes", self.fence_char, self.text.len());
            self.complete = true;
            return Continuation::Closed;
        }

        if self.has_body {
            self.text.push('\n');
        }
        self.text.push_str(line.body);
        self.has_body = true;
        Continuation::Consumed
    }

    /// Record a transient break (a blank line) that does not close the block.
    /// The break surfaces as one line-break separator on resumption.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// A closing fence is 3+ repetitions of the opening fence character with
    /// only trailing whitespace. Any length >= 3 closes, regardless of the
    /// opening run's length; a different fence character never closes.
    fn is_closing_fence(&self, text: &str) -> bool {
        let count = text.chars().take_while(|&c| c == self.fence_char).count();
        count >= 3 && text[count..].trim().is_empty()
    }

    /// Finalize the block into its output node, keeping the accumulated text
    /// exactly as captured. Also used at end of input for unterminated
    /// fences, which degrade to "open to end of document".
    pub fn into_node(self) -> Node {
        let mut node = Node::literal("pre", self.text);
        if let Some(tag) = self.language {
            node.set_attr("class", format!("language-{}", tag));
            node.set_attr("data-enlighter-language", tag);
        }
        node
    }
}
