//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts. Each undirected edge appears once in "links".

use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, Vertex};
use serde::Serialize;

#[derive(Serialize)]
struct JsonGraph<'a, V> {
    nodes: Vec<JsonNode<'a, V>>,
    links: Vec<JsonLink<'a, V>>,
}

#[derive(Serialize)]
struct JsonNode<'a, V> {
    id: &'a V,
    degree: usize,
}

#[derive(Serialize)]
struct JsonLink<'a, V> {
    source: &'a V,
    target: &'a V,
}

/// Export graph to D3.js-compatible JSON format
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if a vertex fails to serialize.
pub fn export_json<V: Vertex + Serialize>(store: &GraphStore<V>) -> Result<String> {
    super::warn_if_large(store.vertex_count());

    let graph = JsonGraph {
        nodes: store
            .vertices()
            .map(|id| JsonNode {
                id,
                degree: store.degree(id),
            })
            .collect(),
        links: store
            .edges()
            .map(|(source, target)| JsonLink { source, target })
            .collect(),
    };

    serde_json::to_string_pretty(&graph)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}
