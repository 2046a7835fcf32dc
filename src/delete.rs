//! Delete plugin for markdown-it (`~~removed~~`)
//!
//! Renders `<del>` rather than the `<s>` of the stock strikethrough
//! plugin; use one or the other, not both.

use markdown_it::generics::inline::emph_pair;
use markdown_it::{MarkdownIt, Node, NodeValue, Renderer};

/// Inline `<del>` node.
#[derive(Debug)]
pub struct Delete;

impl NodeValue for Delete {
    fn render(&self, node: &Node, fmt: &mut dyn Renderer) {
        fmt.open("del", &node.attrs);
        fmt.contents(&node.children);
        fmt.close("del");
    }
}

/// Add delete plugin to markdown-it parser
pub fn add_delete_plugin(md: &mut MarkdownIt) {
    emph_pair::add_with::<'~', 2, true>(md, || Node::new(Delete));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        let mut md = MarkdownIt::new();
        markdown_it::plugins::cmark::add(&mut md);
        add_delete_plugin(&mut md);
        md.parse(input).render().trim().to_string()
    }

    #[test]
    fn renders_del_tag() {
        assert_eq!(render("~~gone~~"), "<p><del>gone</del></p>");
    }

    #[test]
    fn single_tilde_stays_text() {
        assert_eq!(render("a ~ b"), "<p>a ~ b</p>");
    }
}
