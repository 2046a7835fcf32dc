//! Subscript plugin for markdown-it (`H~2~O`)
//!
//! Same tight-span rules as superscript. A doubled `~~` is left alone so
//! the delete plugin can claim it.

use markdown_it::parser::inline::{InlineRule, InlineState};
use markdown_it::{MarkdownIt, Node, NodeValue, Renderer};

use crate::tagged::scan_marker_span;

/// Inline `<sub>` node.
#[derive(Debug, Clone)]
pub struct Subscript {
    pub content: String,
}

impl NodeValue for Subscript {
    fn render(&self, node: &Node, fmt: &mut dyn Renderer) {
        fmt.open("sub", &node.attrs);
        fmt.text(&self.content);
        fmt.close("sub");
    }
}

pub struct SubscriptScanner;

impl InlineRule for SubscriptScanner {
    const MARKER: char = '~';

    fn run(state: &mut InlineState) -> Option<(Node, usize)> {
        // Never open right after another `~`: that position is the tail of
        // a double-marker run the text rule already walked past.
        if state.src[..state.pos].ends_with('~') {
            return None;
        }
        let input = &state.src[state.pos..state.pos_max];
        let (content, length) = scan_marker_span(input, '~')?;
        Some((Node::new(Subscript { content }), length))
    }
}

/// Add subscript plugin to markdown-it parser
pub fn add_subscript_plugin(md: &mut MarkdownIt) {
    md.inline.add_rule::<SubscriptScanner>();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        let mut md = MarkdownIt::new();
        markdown_it::plugins::cmark::add(&mut md);
        add_subscript_plugin(&mut md);
        md.parse(input).render().trim().to_string()
    }

    #[test]
    fn renders_sub_tag() {
        assert_eq!(render("H~2~O"), "<p>H<sub>2</sub>O</p>");
    }

    #[test]
    fn whitespace_inside_stays_text() {
        assert_eq!(render("a ~b c~"), "<p>a ~b c~</p>");
    }

    #[test]
    fn doubled_marker_is_not_subscript() {
        assert_eq!(render("~~struck~~"), "<p>~~struck~~</p>");
    }

    #[test]
    fn double_run_closer_is_not_subscript() {
        assert_eq!(render("x~a~~b~"), "<p>x~a~~b~</p>");
    }
}
