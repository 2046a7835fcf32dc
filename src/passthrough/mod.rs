//! Raw passthrough extension (`$...$`, `$$...$$`, `\(...\)`, `\[...\]`).
//!
//! Captures delimiter-bounded spans and emits their bytes verbatim, with no
//! HTML escaping and no Markdown interpretation of the interior. Typical use
//! is embedding math notation for a client-side renderer.
//!
//! Parsing runs in two phases:
//!
//! 1. All configured pairs are scanned inline, block pairs first, so a pair
//!    found mid-line is captured whole before emphasis or other inline rules
//!    can touch its interior. Fences that open a fresh block are handled by
//!    a block rule directly.
//! 2. A post-parse transform splits any paragraph that directly contains an
//!    inline span with block delimiters, promoting the span to a standalone
//!    raw block between the paragraph halves.

mod block;
mod config;
mod inline;
mod transform;

pub use block::PassthroughBlock;
pub use config::{Delimiters, DelimiterConfigError, PassthroughConfig, TRIGGER_CHARS};
pub use inline::PassthroughInline;

use markdown_it::MarkdownIt;

use config::PassthroughSet;

/// Add the passthrough plugin with the default delimiter set: inline
/// `$...$` and `\(...\)`, block `$$...$$` and `\[...\]`.
pub fn add_passthrough_plugin(md: &mut MarkdownIt) {
    add_passthrough_plugin_with(md, PassthroughConfig::default())
        .expect("default passthrough delimiters are valid");
}

/// Add the passthrough plugin with a custom delimiter table. The
/// configuration is validated eagerly; a rejected table leaves the parser
/// untouched.
pub fn add_passthrough_plugin_with(
    md: &mut MarkdownIt,
    config: PassthroughConfig,
) -> Result<(), DelimiterConfigError> {
    config.validate()?;
    md.ext.insert(PassthroughSet::from(config));

    inline::register_scanners(md);
    md.block
        .add_rule::<block::PassthroughFenceScanner>()
        .before_all();
    md.add_rule::<transform::PassthroughSplitRule>();
    Ok(())
}
