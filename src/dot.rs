//! Graphviz export.
//!
//! Renders a trie as a DOT `digraph`. Nodes are keyed by their [`NodeId`] and
//! labelled with their character; nodes where a word ends are dashed. Edge
//! colors tell the axes apart:
//!
//! | axis   | color   |
//! |--------|---------|
//! | left   | `green` |
//! | middle | `red`   |
//! | right  | `blue`  |
//!
//! ```sh
//! dot -Tsvg trie.dot -o trie.svg
//! ```
//!
//! [`NodeId`]: crate::NodeId

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{HybridTrie, Node};

pub const LEFT_COLOR: &str = "green";
pub const MIDDLE_COLOR: &str = "red";
pub const RIGHT_COLOR: &str = "blue";
pub const TERMINAL_STYLE: &str = "dashed";

/// Write `trie` as DOT to `out`.
pub fn write_dot<W: Write>(trie: &HybridTrie, mut out: W) -> io::Result<()> {
    writeln!(out, "digraph G {{")?;

    let mut stack: Vec<&Node> = trie.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        write_node(&mut out, node)?;
        for (child, color) in [
            (node.left(), LEFT_COLOR),
            (node.middle(), MIDDLE_COLOR),
            (node.right(), RIGHT_COLOR),
        ] {
            if let Some(child) = child {
                writeln!(
                    out,
                    "\t\"{}\" -> \"{}\" [color={}];",
                    node.id(),
                    child.id(),
                    color
                )?;
            }
        }
        stack.extend([node.right(), node.middle(), node.left()].into_iter().flatten());
    }

    writeln!(out, "}}")?;
    out.flush()
}

/// Write `trie` as DOT to a file at `path`, replacing it if present.
pub fn write_dot_file(trie: &HybridTrie, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_dot(trie, BufWriter::new(file))?;
    log::info!("wrote graph to {}", path.display());
    Ok(())
}

fn write_node<W: Write>(out: &mut W, node: &Node) -> io::Result<()> {
    let label = escape(node.character());
    if node.is_terminal() {
        writeln!(
            out,
            "\t\"{}\" [label=\"{}\", style={}];",
            node.id(),
            label,
            TERMINAL_STYLE
        )
    } else {
        writeln!(out, "\t\"{}\" [label=\"{}\"];", node.id(), label)
    }
}

fn escape(c: char) -> String {
    match c {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        c => c.to_string(),
    }
}
