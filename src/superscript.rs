//! Superscript plugin for markdown-it (`x^2^`)
//!
//! A tight single-marker span: the closing `^` must appear before any
//! ordinary whitespace, so `a ^ b ^ c` produces no superscript.

use markdown_it::parser::inline::{InlineRule, InlineState};
use markdown_it::{MarkdownIt, Node, NodeValue, Renderer};

use crate::tagged::scan_marker_span;

/// Inline `<sup>` node.
#[derive(Debug, Clone)]
pub struct Superscript {
    pub content: String,
}

impl NodeValue for Superscript {
    fn render(&self, node: &Node, fmt: &mut dyn Renderer) {
        fmt.open("sup", &node.attrs);
        fmt.text(&self.content);
        fmt.close("sup");
    }
}

pub struct SuperscriptScanner;

impl InlineRule for SuperscriptScanner {
    const MARKER: char = '^';

    fn run(state: &mut InlineState) -> Option<(Node, usize)> {
        if state.src[..state.pos].ends_with('^') {
            return None;
        }
        let input = &state.src[state.pos..state.pos_max];
        let (content, length) = scan_marker_span(input, '^')?;
        Some((Node::new(Superscript { content }), length))
    }
}

/// Add superscript plugin to markdown-it parser
pub fn add_superscript_plugin(md: &mut MarkdownIt) {
    md.inline.add_rule::<SuperscriptScanner>();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        let mut md = MarkdownIt::new();
        markdown_it::plugins::cmark::add(&mut md);
        add_superscript_plugin(&mut md);
        md.parse(input).render().trim().to_string()
    }

    #[test]
    fn renders_sup_tag() {
        assert_eq!(render("x^2^"), "<p>x<sup>2</sup></p>");
    }

    #[test]
    fn whitespace_inside_stays_text() {
        assert_eq!(render("a ^ b ^ c"), "<p>a ^ b ^ c</p>");
        assert_eq!(render("a ^b c^"), "<p>a ^b c^</p>");
    }

    #[test]
    fn unclosed_marker_stays_text() {
        assert_eq!(render("x^2"), "<p>x^2</p>");
    }

    #[test]
    fn content_is_escaped_not_parsed() {
        assert_eq!(render("x^*2*^"), "<p>x<sup>*2*</sup></p>");
    }

    #[test]
    fn doubled_marker_is_not_superscript() {
        assert_eq!(render("^^loud^^"), "<p>^^loud^^</p>");
    }
}
