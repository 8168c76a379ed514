//! The marker dispatch table.
//!
//! Inline rules are keyed by the single trigger character that makes the
//! inline scanner consult the table at all; block rules are a flat ordered
//! list tried once per physical line. In both cases registration order is
//! the only tie-break: the first rule that reports a match wins and later
//! candidates are not tried.
//!
//! A registry is mutated only while it is being built. Afterwards it is
//! read-only, so one registry can be shared across parser instances and
//! threads (rules are `Send + Sync`).

use std::collections::HashMap;
use std::fmt;

use crate::block_parser::{BlockContext, BlockStart, Line};
use crate::block_parser::{fenced_code, indented_code};
use crate::inline_parser::{keyboard, spoiler, subscript, superscript};
use crate::node::MatchResult;

/// An inline rule body: the remaining text starting at the trigger character
/// in, a match (or nothing) out.
pub type InlineMatcher = Box<dyn Fn(&str) -> Option<MatchResult> + Send + Sync>;

/// A block rule body, tried once per physical line when no block is open.
pub type BlockMatcher = Box<dyn Fn(&Line, &BlockContext) -> Option<BlockStart> + Send + Sync>;

/// One registered inline recognizer.
pub struct MarkerRule {
    pub name: &'static str,
    matcher: InlineMatcher,
}

impl MarkerRule {
    pub fn try_match(&self, text: &str) -> Option<MatchResult> {
        (self.matcher)(text)
    }
}

impl fmt::Debug for MarkerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerRule").field("name", &self.name).finish()
    }
}

/// One registered block recognizer.
pub struct BlockRule {
    pub name: &'static str,
    matcher: BlockMatcher,
}

impl BlockRule {
    pub fn try_match(&self, line: &Line, ctx: &BlockContext) -> Option<BlockStart> {
        (self.matcher)(line, ctx)
    }
}

impl fmt::Debug for BlockRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRule").field("name", &self.name).finish()
    }
}

/// Registration-order mapping from trigger character to candidate rules,
/// plus the ordered block rule list.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    inline_rules: HashMap<char, Vec<MarkerRule>>,
    markers: Vec<char>,
    block_rules: Vec<BlockRule>,
}

impl RuleRegistry {
    /// An empty registry. Rules must be registered before parsing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the full default rule set: superscript, subscript,
    /// keyboard and spoiler inline rules, and the fenced and indented code
    /// block rules (fenced first).
    pub fn with_default_rules() -> Self {
        let mut registry = Self::new();
        registry.register_inline_rule('^', "superscript", Box::new(superscript::try_parse));
        registry.register_inline_rule('~', "subscript", Box::new(subscript::try_parse));
        registry.register_inline_rule('[', "keyboard", Box::new(keyboard::try_parse));
        registry.register_inline_rule('{', "spoiler", Box::new(spoiler::try_parse));
        registry.register_block_rule("fenced-code", Box::new(fenced_code::try_open));
        registry.register_block_rule("indented-code", Box::new(indented_code::try_open));
        registry
    }

    /// Register an inline rule for a trigger character. Rules sharing a
    /// trigger are tried in registration order.
    pub fn register_inline_rule(
        &mut self,
        trigger: char,
        name: &'static str,
        matcher: InlineMatcher,
    ) {
        log::debug!("Registering inline rule {:?} at trigger {:?}", name, trigger);
        if !self.markers.contains(&trigger) {
            self.markers.push(trigger);
        }
        self.inline_rules
            .entry(trigger)
            .or_default()
            .push(MarkerRule { name, matcher });
    }

    /// Register a block rule. Block rules are tried in registration order
    /// once per block-opening candidate line.
    pub fn register_block_rule(&mut self, name: &'static str, matcher: BlockMatcher) {
        log::debug!("Registering block rule {:?}", name);
        self.block_rules.push(BlockRule { name, matcher });
    }

    /// Whether a character is a registered trigger.
    pub fn is_marker(&self, c: char) -> bool {
        self.markers.contains(&c)
    }

    /// The ordered rule list for a trigger character.
    pub fn inline_rules_for(&self, trigger: char) -> &[MarkerRule] {
        self.inline_rules
            .get(&trigger)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn block_rules(&self) -> &[BlockRule] {
        &self.block_rules
    }
}
