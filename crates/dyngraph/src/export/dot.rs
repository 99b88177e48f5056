//! DOT format export for Graphviz visualization.
//!
//! Generates an undirected Graphviz `graph` for rendering with `dot`, `neato`
//! or `sfdp`. Each edge is written once; isolated vertices are listed so they
//! still show up in the image.

use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, Vertex};
use std::path::Path;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph identifier written after the `graph` keyword
    pub name: String,
    /// Node shape (circle, box, ellipse, etc.)
    pub node_shape: String,
    /// Node fill color (name or hex code)
    pub node_color: String,
    /// Edge color (name or hex code)
    pub edge_color: String,
    /// Graphviz layout engine hint (neato, fdp, sfdp, ...)
    pub layout: Option<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            name: "dyngraph".to_string(),
            node_shape: "circle".to_string(),
            node_color: "lightblue".to_string(),
            edge_color: "gray".to_string(),
            layout: None,
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot<V: Vertex>(store: &GraphStore<V>) -> String {
    export_dot_styled(store, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled<V: Vertex>(store: &GraphStore<V>, options: &DotOptions) -> String {
    super::warn_if_large(store.vertex_count());
    let mut output = String::new();

    // Header
    output.push_str(&format!("graph {} {{\n", escape_dot_id(&options.name)));
    if let Some(layout) = &options.layout {
        output.push_str(&format!("    layout={};\n", escape_dot_id(layout)));
    }
    output.push_str(&format!(
        "    node [shape={}, style=filled, fillcolor=\"{}\"];\n",
        options.node_shape,
        escape_dot_label(&options.node_color)
    ));
    output.push_str(&format!(
        "    edge [color=\"{}\"];\n\n",
        escape_dot_label(&options.edge_color)
    ));

    for vertex in store.vertices() {
        output.push_str(&format!("    {};\n", quote(vertex)));
    }

    if store.edge_count() > 0 {
        output.push('\n');
    }

    for (u, v) in store.edges() {
        output.push_str(&format!("    {} -- {};\n", quote(u), quote(v)));
    }

    output.push_str("}\n");
    output
}

/// Write the DOT export of `store` to `path`.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn write_dot<V: Vertex>(store: &GraphStore<V>, path: &Path) -> Result<()> {
    let dot = export_dot(store);
    std::fs::write(path, dot).map_err(|e| GraphError::io(path, e))?;
    log::info!("Graph written to {}", path.display());
    Ok(())
}

/// Vertex identifier as a quoted DOT ID
fn quote<V: Vertex>(vertex: &V) -> String {
    format!("\"{}\"", escape_dot_label(&vertex.to_string()))
}

/// Graph names and attribute values are emitted bare when they are plain
/// identifiers, quoted otherwise
fn escape_dot_id(s: &str) -> String {
    let plain = !s.is_empty()
        && !s.starts_with(|c: char| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        s.to_string()
    } else {
        format!("\"{}\"", escape_dot_label(s))
    }
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
