//! Line Scanner
//!
//! Single-pass, line-granular scan state for a stylesheet: cumulative brace
//! counters, the inside-rule flag, and the current selector. The model is
//! depth-by-count, not a stack: the inside flag drops only when the close
//! count catches up to the open count, and mismatch detection compares
//! totals.

pub mod line;

pub use line::{brace_counts, classify, split_declaration, Declaration, LineKind};

/// Brace-nesting state carried across one validation pass. Never shared
/// between passes.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    open_braces: usize,
    close_braces: usize,
    inside_rule: bool,
    current_selector: String,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the scanner is currently inside a rule block.
    pub fn inside_rule(&self) -> bool {
        self.inside_rule
    }

    /// Selector text captured when the current block was entered.
    pub fn current_selector(&self) -> &str {
        &self.current_selector
    }

    pub fn open_braces(&self) -> usize {
        self.open_braces
    }

    pub fn close_braces(&self) -> usize {
        self.close_braces
    }

    /// Feed one trimmed line's braces into the state.
    ///
    /// Entering a block (first `{` while outside) captures everything before
    /// the brace as the current selector. The block ends when cumulative
    /// open and close counts are equal.
    pub fn observe_braces(&mut self, trimmed: &str) {
        let (opens, closes) = line::brace_counts(trimmed);

        if opens > 0 {
            self.open_braces += opens;
            if !self.inside_rule {
                self.current_selector = trimmed
                    .split('{')
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_string();
                self.inside_rule = true;
            }
        }

        if closes > 0 {
            self.close_braces += closes;
            if self.open_braces == self.close_braces {
                self.inside_rule = false;
            }
        }
    }

    /// True when every opened brace has been closed.
    pub fn is_balanced(&self) -> bool {
        self.open_braces == self.close_braces
    }
}
