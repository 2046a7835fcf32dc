//! Delimiter configuration for the passthrough extension.
//!
//! A passthrough span is bounded by an (open, close) string pair. Pairs are
//! partitioned into inline pairs (`$...$`, `\(...\)`) and block pairs
//! (`$$...$$`, `\[...\]`). Block pairs are also scanned inline, taking
//! precedence over inline pairs that share a prefix, and are promoted to
//! standalone blocks after parsing.

use markdown_it::parser::extset::MarkdownItExt;
use serde::{Deserialize, Serialize};

/// An opening/closing delimiter pair. Open and close may differ in length
/// and content, so asymmetric fences like `\(`/`\)` are supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Delimiter configuration consumed at plugin registration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassthroughConfig {
    /// Pairs recognized inside running text, rendered inline.
    pub inline_delimiters: Vec<Delimiters>,
    /// Pairs that open a fenced block, or cause an inline match to be
    /// promoted to a standalone block.
    pub block_delimiters: Vec<Delimiters>,
}

impl Default for PassthroughConfig {
    fn default() -> Self {
        Self {
            inline_delimiters: vec![Delimiters::new("$", "$"), Delimiters::new("\\(", "\\)")],
            block_delimiters: vec![Delimiters::new("$$", "$$"), Delimiters::new("\\[", "\\]")],
        }
    }
}

/// First characters of opening delimiters the inline scanner can trigger
/// on. The backslash is registered unconditionally so escaped openers are
/// seen before the host's own escape handling.
pub const TRIGGER_CHARS: &[char] = &['$', '\\', '(', '[', '{', '<', '%', '@'];

/// Rejected delimiter configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelimiterConfigError {
    #[error("passthrough delimiter open/close strings must be non-empty")]
    EmptyDelimiter,
    #[error("opening delimiter {0:?} does not start with a supported trigger character")]
    UnsupportedTrigger(String),
}

impl PassthroughConfig {
    /// Validate eagerly so a bad delimiter table fails at registration
    /// instead of silently never matching.
    pub fn validate(&self) -> Result<(), DelimiterConfigError> {
        for pair in self.inline_delimiters.iter().chain(&self.block_delimiters) {
            if pair.open.is_empty() || pair.close.is_empty() {
                return Err(DelimiterConfigError::EmptyDelimiter);
            }
            let first = pair.open.chars().next().unwrap_or_default();
            if !TRIGGER_CHARS.contains(&first) {
                return Err(DelimiterConfigError::UnsupportedTrigger(pair.open.clone()));
            }
        }
        Ok(())
    }
}

/// Resolved scan set stored in the parser's extension storage. The inline
/// scan list is block pairs followed by inline pairs, so `$$` wins over
/// `$` and every block pair is guaranteed to be scanned inline.
#[derive(Debug, Clone)]
pub(crate) struct PassthroughSet {
    pub scan: Vec<Delimiters>,
    pub block: Vec<Delimiters>,
}

impl MarkdownItExt for PassthroughSet {}

impl From<PassthroughConfig> for PassthroughSet {
    fn from(config: PassthroughConfig) -> Self {
        let mut scan = config.block_delimiters.clone();
        scan.extend(config.inline_delimiters);
        Self {
            scan,
            block: config.block_delimiters,
        }
    }
}

impl PassthroughSet {
    /// First configured pair whose complete opening delimiter starts the
    /// input, in scan order.
    pub fn matching_opener(&self, input: &str) -> Option<&Delimiters> {
        self.scan.iter().find(|d| input.starts_with(&d.open))
    }

    /// First block pair whose complete opening delimiter starts the line.
    pub fn matching_block_opener(&self, line: &str) -> Option<&Delimiters> {
        self.block.iter().find(|d| line.starts_with(&d.open))
    }

    pub fn is_block_pair(&self, pair: &Delimiters) -> bool {
        self.block.contains(pair)
    }
}
