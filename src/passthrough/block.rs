//! Block-level passthrough fence.
//!
//! A line opening with a block delimiter starts a raw fence; whole lines are
//! consumed verbatim until a line containing the closer. The closer may sit
//! on the opening line. Text after the closer gives up the fence entirely:
//! the inline scanner captures the span and the transform re-promotes it,
//! so nothing is lost. A fence that never closes absorbs the rest of the
//! document as raw content.

use markdown_it::parser::block::{BlockRule, BlockState};
use markdown_it::{Node, NodeValue, Renderer};
use tracing::trace;

use super::config::{Delimiters, PassthroughSet};

/// Raw block of lines, delimiters included. Also produced by the
/// paragraph-splitting transform when an inline span matched a block pair.
#[derive(Debug, Clone)]
pub struct PassthroughBlock {
    pub content: String,
    pub delimiters: Delimiters,
}

impl NodeValue for PassthroughBlock {
    fn render(&self, _node: &Node, fmt: &mut dyn Renderer) {
        fmt.cr();
        fmt.text_raw(&self.content);
        fmt.cr();
    }
}

pub(crate) struct PassthroughFenceScanner;

impl BlockRule for PassthroughFenceScanner {
    // A fence never interrupts a paragraph. A block opener inside running
    // text is captured by the inline scanner instead and promoted to a
    // block by the post-parse transform.
    fn check(_: &mut BlockState) -> Option<()> {
        None
    }

    fn run(state: &mut BlockState) -> Option<(Node, usize)> {
        let set = state.md.ext.get::<PassthroughSet>()?;
        let first = state.get_line(state.line);
        let pair = set.matching_block_opener(first)?.clone();

        let mut lines: Vec<String> = Vec::new();
        let mut end_line = state.line;

        if let Some(at) = first[pair.open.len()..].find(&pair.close) {
            let stop = pair.open.len() + at + pair.close.len();
            if stop == pair.open.len() + pair.close.len() {
                return None; // empty fence, e.g. `$$$$`
            }
            if !first[stop..].trim().is_empty() {
                return None; // text after the closer, leave it inline
            }
            lines.push(first[..stop].to_string());
        } else {
            lines.push(first.to_string());
            let mut line_no = state.line + 1;
            while line_no < state.line_max {
                let line = state.get_line(line_no);
                if let Some(at) = line.find(&pair.close) {
                    let stop = at + pair.close.len();
                    if !line[stop..].trim().is_empty() {
                        return None; // closing line carries text, leave it inline
                    }
                    end_line = line_no;
                    lines.push(line[..stop].to_string());
                    break;
                }
                end_line = line_no;
                lines.push(line.to_string());
                line_no += 1;
            }
        }

        trace!(open = %pair.open, lines = lines.len(), "passthrough fence");
        let node = Node::new(PassthroughBlock {
            content: lines.join("\n"),
            delimiters: pair,
        });
        Some((node, end_line - state.line + 1))
    }
}
