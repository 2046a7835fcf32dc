//! Insert plugin for markdown-it (`++inserted++`)
//!
//! Built on the host's emphasis-pair generic, so the interior is parsed as
//! ordinary inline content and flanking rules apply.

use markdown_it::generics::inline::emph_pair;
use markdown_it::{MarkdownIt, Node, NodeValue, Renderer};

/// Inline `<ins>` node.
#[derive(Debug)]
pub struct Insert;

impl NodeValue for Insert {
    fn render(&self, node: &Node, fmt: &mut dyn Renderer) {
        fmt.open("ins", &node.attrs);
        fmt.contents(&node.children);
        fmt.close("ins");
    }
}

/// Add insert plugin to markdown-it parser
pub fn add_insert_plugin(md: &mut MarkdownIt) {
    emph_pair::add_with::<'+', 2, true>(md, || Node::new(Insert));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        let mut md = MarkdownIt::new();
        markdown_it::plugins::cmark::add(&mut md);
        add_insert_plugin(&mut md);
        md.parse(input).render().trim().to_string()
    }

    #[test]
    fn renders_ins_tag() {
        assert_eq!(render("++new text++"), "<p><ins>new text</ins></p>");
    }

    #[test]
    fn interior_is_inline_parsed() {
        assert_eq!(render("++a *b*++"), "<p><ins>a <em>b</em></ins></p>");
    }

    #[test]
    fn single_plus_stays_text() {
        assert_eq!(render("a + b + c"), "<p>a + b + c</p>");
    }
}
