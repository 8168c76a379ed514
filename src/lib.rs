//! An extensible inline/block rule layer for Markdown.
//!
//! The crate recognizes additional lexical constructs inside text a Markdown
//! engine has already segmented into blocks and inline spans: superscript
//! (`^x^`), subscript (`~x~`), keyboard keys (`[[Enter]]`), spoiler spans
//! (`{{hidden}}`), and indented/fenced code blocks that render as a bare
//! `<pre>` with optional `language-*` attributes.
//!
//! The core is the rule dispatch mechanism in [`registry`]: trigger
//! characters route the inline scan to ordered rule lists, each rule reports
//! how much input it consumed and the structured [`Node`] it produced, and
//! first-registered match wins. A minimal reference host (block driver,
//! inline scanner, HTML renderer) exercises the rules end to end:
//!
//! ```no_run
//! use extramark::Parser;
//!
//! let parser = Parser::new();
//! assert_eq!(parser.line("H~2~O"), "H<sub>2</sub>O");
//! ```

pub mod block_parser;
pub mod inline_parser;
pub mod node;
pub mod registry;
pub mod renderer;

pub use node::{MatchResult, Node, Payload};
pub use registry::RuleRegistry;

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A parser instance: a rule registry plus the reference host around it.
///
/// The registry is read-only after construction, so a `Parser` may be shared
/// across threads and each parse call is independent.
pub struct Parser {
    registry: RuleRegistry,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// A parser with the default rule set.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_default_rules(),
        }
    }

    /// A parser over a custom registry, for callers that register their own
    /// rules (or a subset of the defaults).
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Parse a whole document: block scan, then an inline pass per paragraph,
    /// rendered as HTML fragments joined with newlines.
    pub fn text(&self, input: &str) -> String {
        #[cfg(debug_assertions)]
        init_logger();

        let blocks = block_parser::parse(&self.registry, input);
        renderer::render_document(&self.registry, &blocks)
    }

    /// Run a single inline pass over one line, without block segmentation or
    /// a paragraph wrapper.
    pub fn line(&self, input: &str) -> String {
        #[cfg(debug_assertions)]
        init_logger();

        let items = inline_parser::scan(&self.registry, input);
        renderer::render_inlines(&self.registry, &items)
    }
}
