//! Extra syntax extensions for markdown-it
//!
//! This crate provides a family of inline/block extensions that plug into
//! the `markdown-it` pipeline:
//! - Superscript `x^2^` and subscript `H~2~O`
//! - Inserted `++text++`, highlighted `==text==`, deleted `~~text~~`
//! - Raw passthrough spans and blocks for math notation (`$...$`,
//!   `$$...$$`, `\(...\)`, `\[...\]`) with configurable delimiters
//!
//! Passthrough content is emitted byte-for-byte with no HTML escaping, so
//! a client-side renderer such as KaTeX can pick it up unchanged.
//!
//! ```
//! let mut md = markdown_it::MarkdownIt::new();
//! markdown_it::plugins::cmark::add(&mut md);
//! markdown_it_extras::add_default_plugins(&mut md);
//!
//! let html = md.parse("An equation: $a^*=x-b^*$").render();
//! assert!(html.contains("$a^*=x-b^*$"));
//! ```

pub mod delete;
pub mod insert;
pub mod mark;
pub mod passthrough;
pub mod subscript;
pub mod superscript;

mod tagged;

// Re-export main types for convenience
pub use delete::{add_delete_plugin, Delete};
pub use insert::{add_insert_plugin, Insert};
pub use mark::{add_mark_plugin, Mark};
pub use passthrough::{
    add_passthrough_plugin, add_passthrough_plugin_with, DelimiterConfigError, Delimiters,
    PassthroughBlock, PassthroughConfig, PassthroughInline,
};
pub use subscript::{add_subscript_plugin, Subscript};
pub use superscript::{add_superscript_plugin, Superscript};

use markdown_it::MarkdownIt;

/// Add every extension in this crate with its default configuration.
///
/// Subscript is registered before delete so a doubled `~~` is claimed by
/// delete and a single `~` by subscript.
pub fn add_default_plugins(md: &mut MarkdownIt) {
    add_superscript_plugin(md);
    add_subscript_plugin(md);
    add_insert_plugin(md);
    add_mark_plugin(md);
    add_delete_plugin(md);
    add_passthrough_plugin(md);
}
