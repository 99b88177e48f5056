//! Graph traversal algorithms.
//!
//! Provides BFS and DFS rooted at a single vertex. Both share one shape: mark
//! the root, then repeatedly discover unvisited neighbors in insertion order.
//! They agree on the reachable set and differ in the recorded paths.

use super::snapshot::ReachabilitySnapshot;
use super::store::GraphStore;
use super::types::Vertex;
use crate::config::Traversal;
use std::collections::{HashSet, VecDeque};

/// Breadth-First Search from `root`.
///
/// Visits vertices in level order. With `track_paths`, each discovered vertex
/// records its parent's path plus itself, which yields shortest paths by hop
/// count.
///
/// # Returns
/// Snapshot including the root; empty if `root` is unknown.
pub fn bfs<V: Vertex>(
    store: &GraphStore<V>,
    root: &V,
    track_paths: bool,
) -> ReachabilitySnapshot<V> {
    if !store.has_vertex(root) {
        return ReachabilitySnapshot::empty(track_paths);
    }

    let mut snapshot = ReachabilitySnapshot::rooted(root.clone(), track_paths);
    let mut queue = VecDeque::from([root.clone()]);

    while let Some(current) = queue.pop_front() {
        for neighbor in store.neighbors(&current) {
            if !snapshot.contains(neighbor) {
                snapshot.discover(neighbor.clone(), &current);
                queue.push_back(neighbor.clone());
            }
        }
    }

    snapshot
}

/// Depth-First Search from `root` (iterative implementation).
///
/// Descends into the first unvisited neighbor before backtracking, the same
/// visiting order as the recursive formulation, but keeps an explicit stack of
/// `(vertex, next neighbor index)` frames so deep graphs cannot overflow the
/// call stack. Recorded paths follow discovery order and are not necessarily
/// the shortest.
///
/// # Returns
/// Snapshot including the root; empty if `root` is unknown.
pub fn dfs<V: Vertex>(
    store: &GraphStore<V>,
    root: &V,
    track_paths: bool,
) -> ReachabilitySnapshot<V> {
    if !store.has_vertex(root) {
        return ReachabilitySnapshot::empty(track_paths);
    }

    let mut snapshot = ReachabilitySnapshot::rooted(root.clone(), track_paths);
    let mut stack = vec![(root.clone(), 0usize)];

    while let Some((current, cursor)) = stack.last_mut() {
        let Some(neighbor) = store.neighbor_at(current, *cursor) else {
            stack.pop();
            continue;
        };
        *cursor += 1;

        if !snapshot.contains(neighbor) {
            let parent = current.clone();
            snapshot.discover(neighbor.clone(), &parent);
            stack.push((neighbor.clone(), 0));
        }
    }

    snapshot
}

/// Run the traversal selected by `strategy`.
pub fn traverse<V: Vertex>(
    store: &GraphStore<V>,
    root: &V,
    strategy: Traversal,
    track_paths: bool,
) -> ReachabilitySnapshot<V> {
    match strategy {
        Traversal::BreadthFirst => bfs(store, root, track_paths),
        Traversal::DepthFirst => dfs(store, root, track_paths),
    }
}

/// Connected component of `root`, computed from scratch.
///
/// Independent of the snapshot machinery; used to cross-check cached
/// snapshots. Empty if `root` is unknown.
pub fn connected_component<V: Vertex>(store: &GraphStore<V>, root: &V) -> HashSet<V> {
    let mut component = HashSet::new();
    if !store.has_vertex(root) {
        return component;
    }

    let mut frontier = vec![root.clone()];
    component.insert(root.clone());
    while let Some(current) = frontier.pop() {
        for neighbor in store.neighbors(&current) {
            if component.insert(neighbor.clone()) {
                frontier.push(neighbor.clone());
            }
        }
    }

    component
}
