//! Per-vertex reachability snapshots.

use super::types::Vertex;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashSet;

/// Result of the last traversal rooted at a vertex.
///
/// The root is always part of its own snapshot. Entries are kept in
/// discovery order, which depends on the traversal strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReachabilitySnapshot<V: Vertex> {
    /// Reachable vertices only (path tracking disabled)
    Visited(IndexSet<V>),
    /// Reachable vertex -> path from the root, root first and target last
    Paths(IndexMap<V, Vec<V>>),
}

impl<V: Vertex> ReachabilitySnapshot<V> {
    /// Snapshot for a vertex the graph does not know.
    pub fn empty(track_paths: bool) -> Self {
        if track_paths {
            Self::Paths(IndexMap::new())
        } else {
            Self::Visited(IndexSet::new())
        }
    }

    /// Snapshot containing only `root`.
    pub(crate) fn rooted(root: V, track_paths: bool) -> Self {
        if track_paths {
            let path = vec![root.clone()];
            Self::Paths(IndexMap::from([(root, path)]))
        } else {
            Self::Visited(IndexSet::from([root]))
        }
    }

    /// Record `vertex` as discovered through `parent`.
    ///
    /// `parent` must already be part of the snapshot.
    pub(crate) fn discover(&mut self, vertex: V, parent: &V) {
        match self {
            Self::Visited(set) => {
                set.insert(vertex);
            }
            Self::Paths(paths) => {
                let mut path = paths.get(parent).cloned().unwrap_or_default();
                path.push(vertex.clone());
                paths.insert(vertex, path);
            }
        }
    }

    /// Whether `vertex` is reachable from the root.
    pub fn contains(&self, vertex: &V) -> bool {
        match self {
            Self::Visited(set) => set.contains(vertex),
            Self::Paths(paths) => paths.contains_key(vertex),
        }
    }

    /// Number of reachable vertices, root included.
    pub fn len(&self) -> usize {
        match self {
            Self::Visited(set) => set.len(),
            Self::Paths(paths) => paths.len(),
        }
    }

    /// True for the snapshot of an unknown vertex.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this snapshot records paths.
    pub fn has_paths(&self) -> bool {
        matches!(self, Self::Paths(_))
    }

    /// Reachable vertices in discovery order.
    pub fn reachable(&self) -> Reachable<'_, V> {
        match self {
            Self::Visited(set) => Reachable::Visited(set.iter()),
            Self::Paths(paths) => Reachable::Paths(paths.keys()),
        }
    }

    /// Recorded path from the root to `target`.
    ///
    /// Always `None` when path tracking is disabled.
    pub fn path_to(&self, target: &V) -> Option<&[V]> {
        match self {
            Self::Visited(_) => None,
            Self::Paths(paths) => paths.get(target).map(Vec::as_slice),
        }
    }

    /// Owned, unordered copy of the reachable set.
    pub fn to_set(&self) -> HashSet<V> {
        self.reachable().cloned().collect()
    }
}

/// Iterator over the vertices of a [`ReachabilitySnapshot`].
#[derive(Debug, Clone)]
pub enum Reachable<'a, V> {
    /// Iterating a visited set
    Visited(indexmap::set::Iter<'a, V>),
    /// Iterating the keys of a path table
    Paths(indexmap::map::Keys<'a, V, Vec<V>>),
}

impl<'a, V> Iterator for Reachable<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Reachable::Visited(iter) => iter.next(),
            Reachable::Paths(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Reachable::Visited(iter) => iter.size_hint(),
            Reachable::Paths(iter) => iter.size_hint(),
        }
    }
}
