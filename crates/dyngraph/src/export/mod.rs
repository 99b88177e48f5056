//! Export module for handing the committed graph to external renderers.
//!
//! Supports two formats:
//! - **DOT**: Graphviz rendering to images
//! - **JSON**: D3.js and web-based tools
//!
//! Exports only read the committed [`GraphStore`](crate::GraphStore); staged
//! changes never show up in them.

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, write_dot, DotOptions};
pub use json::export_json;

/// Vertex count above which exports log a warning.
pub const LARGE_EXPORT_THRESHOLD: usize = 10_000;

fn warn_if_large(vertex_count: usize) {
    if vertex_count > LARGE_EXPORT_THRESHOLD {
        log::warn!(
            "Exporting large graph ({vertex_count} vertices). Rendering may be slow."
        );
    }
}
