//! Paragraph splitting for block-delimited inline spans.
//!
//! The inline scanner cannot know that a matched pair is configured as a
//! block pair, so `text $$x$$ text` is first captured as an ordinary inline
//! span inside a paragraph. This post-parse pass lifts every such span out
//! of its paragraph, splitting the paragraph into sibling blocks:
//! preceding paragraph (if non-empty), raw block, succeeding paragraph (if
//! non-empty), repeated for each block-delimited span.
//!
//! Tight list items (and other containers) hold inline content with no
//! paragraph wrapper. A block-delimited span found directly under such a
//! container is promoted in place, with its inline siblings left as they
//! are.

use markdown_it::parser::core::CoreRule;
use markdown_it::plugins::cmark::block::paragraph::Paragraph;
use markdown_it::{MarkdownIt, Node};
use tracing::debug;

use super::block::PassthroughBlock;
use super::config::PassthroughSet;
use super::inline::PassthroughInline;

pub(crate) struct PassthroughSplitRule;

impl CoreRule for PassthroughSplitRule {
    fn run(root: &mut Node, md: &MarkdownIt) {
        let Some(set) = md.ext.get::<PassthroughSet>() else {
            return;
        };
        split_in_children(root, set);
    }
}

fn is_block_span(node: &Node, set: &PassthroughSet) -> bool {
    node.cast::<PassthroughInline>()
        .is_some_and(|span| set.is_block_pair(&span.delimiters))
}

fn needs_split(node: &Node, set: &PassthroughSet) -> bool {
    node.cast::<Paragraph>().is_some() && node.children.iter().any(|c| is_block_span(c, set))
}

/// Depth-first rebuild. Children vectors are only reassembled for parents
/// that actually contain a paragraph to split or a span to promote, and
/// each node is processed exactly once, so the pass is linear in node
/// count.
fn split_in_children(node: &mut Node, set: &PassthroughSet) {
    for child in node.children.iter_mut() {
        split_in_children(child, set);
    }

    // Inside a paragraph the promotion is the parent's job; elsewhere a
    // block span sitting directly among a container's inline children is
    // promoted in place.
    let in_paragraph = node.cast::<Paragraph>().is_some();
    let touched = node
        .children
        .iter()
        .any(|c| needs_split(c, set) || (!in_paragraph && is_block_span(c, set)));
    if !touched {
        return;
    }

    let old = std::mem::take(&mut node.children);
    let mut rebuilt = Vec::with_capacity(old.len() + 2);
    for child in old {
        if needs_split(&child, set) {
            split_paragraph(child, set, &mut rebuilt);
        } else if !in_paragraph && is_block_span(&child, set) {
            promote(child, &mut rebuilt);
        } else {
            rebuilt.push(child);
        }
    }
    node.children = rebuilt;
}

/// Replace one paragraph with the split sequence, in source order, with no
/// content loss or duplication.
fn split_paragraph(mut paragraph: Node, set: &PassthroughSet, out: &mut Vec<Node>) {
    debug!("promoting block-delimited inline passthrough to block");
    let mut run: Vec<Node> = Vec::new();
    for child in std::mem::take(&mut paragraph.children) {
        if !is_block_span(&child, set) {
            run.push(child);
            continue;
        }

        flush_run(&mut run, out);
        promote(child, out);
    }
    flush_run(&mut run, out);
}

/// Turn one block-delimited inline span into the equivalent raw block,
/// keeping its source position.
fn promote(child: Node, out: &mut Vec<Node>) {
    if let Some(span) = child.cast::<PassthroughInline>() {
        let mut block = Node::new(PassthroughBlock {
            content: span.content.clone(),
            delimiters: span.delimiters.clone(),
        });
        block.srcmap = child.srcmap;
        out.push(block);
    }
}

fn flush_run(run: &mut Vec<Node>, out: &mut Vec<Node>) {
    if run.is_empty() {
        return;
    }
    let mut paragraph = Node::new(Paragraph);
    paragraph.children = std::mem::take(run);
    out.push(paragraph);
}
