//! Mark plugin for markdown-it (`==highlighted==`)

use markdown_it::generics::inline::emph_pair;
use markdown_it::{MarkdownIt, Node, NodeValue, Renderer};

/// Inline `<mark>` node.
#[derive(Debug)]
pub struct Mark;

impl NodeValue for Mark {
    fn render(&self, node: &Node, fmt: &mut dyn Renderer) {
        fmt.open("mark", &node.attrs);
        fmt.contents(&node.children);
        fmt.close("mark");
    }
}

/// Add mark plugin to markdown-it parser
pub fn add_mark_plugin(md: &mut MarkdownIt) {
    emph_pair::add_with::<'=', 2, true>(md, || Node::new(Mark));
}
