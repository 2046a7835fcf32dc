//! Inline passthrough scanner.
//!
//! Matches delimiter-bounded raw spans (`$a^*=b$`, `\(x\)`, ...) in a single
//! pass and captures the whole span, delimiters included, so no other inline
//! rule ever sees the interior. The closer search runs over the full
//! remaining inline content, so spans may cross soft line breaks.

use markdown_it::parser::inline::{InlineRule, InlineState, Text};
use markdown_it::{MarkdownIt, Node, NodeValue, Renderer};

use super::config::{Delimiters, PassthroughSet};

/// Inline raw span. Content covers both delimiters and is emitted verbatim,
/// with no HTML escaping and no further inline parsing.
#[derive(Debug, Clone)]
pub struct PassthroughInline {
    pub content: String,
    pub delimiters: Delimiters,
}

impl NodeValue for PassthroughInline {
    fn render(&self, _node: &Node, fmt: &mut dyn Renderer) {
        fmt.text_raw(&self.content);
    }
}

/// One scanner instantiation per supported trigger character. The trigger
/// is necessarily coarser than the real match, so `run` re-checks the
/// complete opening delimiter against the configured scan set.
pub(crate) struct PassthroughScanner<const MARKER: char>;

impl<const MARKER: char> InlineRule for PassthroughScanner<MARKER> {
    const MARKER: char = MARKER;

    fn run(state: &mut InlineState) -> Option<(Node, usize)> {
        let set = state.md.ext.get::<PassthroughSet>()?;
        let input = &state.src[state.pos..state.pos_max];

        let Some(pair) = set.matching_opener(input) else {
            return scan_escaped_opener(set, input);
        };

        let interior = &input[pair.open.len()..];
        let Some(close_at) = interior.find(&pair.close) else {
            // Unclosed span: emit the opener alone as literal text so the
            // remaining inline rules still process the interior.
            let opener = Node::new(Text {
                content: pair.open.clone(),
            });
            return Some((opener, pair.open.len()));
        };

        let stop = pair.open.len() + close_at + pair.close.len();
        if stop == pair.open.len() + pair.close.len() {
            // Empty interior, e.g. `$$` under a `$`/`$` pair.
            return None;
        }

        let node = Node::new(PassthroughInline {
            content: input[..stop].to_string(),
            delimiters: pair.clone(),
        });
        Some((node, stop))
    }
}

/// A double backslash in front of an opening delimiter escapes it. The
/// escape and the opener are consumed together as literal text so the
/// delimiter renders once and is never reinterpreted as a fence.
fn scan_escaped_opener(set: &PassthroughSet, input: &str) -> Option<(Node, usize)> {
    let rest = input.strip_prefix("\\\\")?;
    let pair = set.matching_opener(rest)?;
    let literal = Node::new(Text {
        content: format!("\\{}", pair.open),
    });
    Some((literal, 2 + pair.open.len()))
}

/// Register one scanner per supported trigger character. Scanners run
/// ahead of the host rules so `\(` openers win over backslash escapes.
pub(crate) fn register_scanners(md: &mut MarkdownIt) {
    md.inline.add_rule::<PassthroughScanner<'$'>>().before_all();
    md.inline.add_rule::<PassthroughScanner<'\\'>>().before_all();
    md.inline.add_rule::<PassthroughScanner<'('>>().before_all();
    md.inline.add_rule::<PassthroughScanner<'['>>().before_all();
    md.inline.add_rule::<PassthroughScanner<'{'>>().before_all();
    md.inline.add_rule::<PassthroughScanner<'<'>>().before_all();
    md.inline.add_rule::<PassthroughScanner<'%'>>().before_all();
    md.inline.add_rule::<PassthroughScanner<'@'>>().before_all();
}
