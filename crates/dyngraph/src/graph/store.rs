//! Committed adjacency structure.

use super::types::Vertex;
use crate::error::{GraphError, Result};
use indexmap::{IndexMap, IndexSet};
use log::trace;

/// The committed, undirected topology.
///
/// `GraphStore` knows nothing about staging: every call mutates or reads the
/// committed state directly. Neighbor sets keep insertion order and give O(1)
/// membership tests, so traversals over the same store always visit vertices
/// in the same order.
///
/// Invariant: `v ∈ neighbors(u) ⇔ u ∈ neighbors(v)`.
#[derive(Debug, Clone)]
pub struct GraphStore<V: Vertex> {
    // Vertex -> neighbors, both in first-appearance order
    adjacency: IndexMap<V, IndexSet<V>>,
    edge_count: usize,
}

impl<V: Vertex> Default for GraphStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> GraphStore<V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// Insert the undirected edge `(u, v)`, creating either vertex if absent.
    ///
    /// Re-adding an existing edge leaves the store untouched.
    ///
    /// # Returns
    ///
    /// `true` if a new edge was created.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] if `u == v`.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool> {
        if u == v {
            return Err(GraphError::invalid_edge(&u));
        }
        if self.has_edge(&u, &v) {
            trace!("Edge ({u}, {v}) already present");
            return Ok(false);
        }

        self.adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone());
        trace!("Edge ({u}, {v}) inserted");
        self.adjacency.entry(v).or_default().insert(u);
        self.edge_count += 1;

        Ok(true)
    }

    /// Remove the undirected edge `(u, v)` where present.
    ///
    /// Removing an absent edge is a no-op. Vertices are never deleted, so an
    /// endpoint may be left isolated. Remaining neighbors keep their order.
    ///
    /// # Returns
    ///
    /// `true` if an edge was removed.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(u)
            .is_some_and(|neighbors| neighbors.shift_remove(v));

        if removed {
            if let Some(neighbors) = self.adjacency.get_mut(v) {
                neighbors.shift_remove(u);
            }
            self.edge_count -= 1;
            trace!("Edge ({u}, {v}) removed");
        } else {
            trace!("Edge ({u}, {v}) absent, nothing to remove");
        }

        removed
    }

    /// Neighbors of `v` in insertion order; empty if `v` is unknown.
    pub fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.adjacency.get(v).into_iter().flatten()
    }

    /// The `index`-th neighbor of `v`, if any.
    pub(crate) fn neighbor_at(&self, v: &V, index: usize) -> Option<&V> {
        self.adjacency
            .get(v)
            .and_then(|neighbors| neighbors.get_index(index))
    }

    /// Number of neighbors of `v` (0 for an unknown vertex).
    pub fn degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, IndexSet::len)
    }

    /// Whether `v` has ever appeared in a committed edge.
    pub fn has_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Whether the undirected edge `(u, v)` exists.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Get the total number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if no vertex has been created yet.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in first-appearance order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Every undirected edge exactly once.
    ///
    /// Edges are yielded from the endpoint that appeared first.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(position, (u, neighbors))| {
                neighbors
                    .iter()
                    .filter(move |v| {
                        self.adjacency
                            .get_index_of(*v)
                            .is_some_and(|other| other > position)
                    })
                    .map(move |v| (u, v))
            })
    }

    /// Owned copy of the adjacency, for consumers such as renderers.
    pub fn to_adjacency(&self) -> IndexMap<V, Vec<V>> {
        self.adjacency
            .iter()
            .map(|(v, neighbors)| (v.clone(), neighbors.iter().cloned().collect()))
            .collect()
    }
}
