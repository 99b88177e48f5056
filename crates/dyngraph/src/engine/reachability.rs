//! The reachability engine.

use super::change::{EngineState, PendingChange};
use super::report::{AppliedChange, CommitError, CommitReport, RejectReason, RejectedChange};
use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::graph::algorithms;
use crate::graph::{GraphStore, ReachabilitySnapshot, Vertex};
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, trace};
use std::path::Path;

/// Undirected graph with a staging queue and cached reachability.
///
/// Edge changes are staged with [`stage_add`](Self::stage_add) and
/// [`stage_remove`](Self::stage_remove) and reach the committed graph only on
/// [`commit`](Self::commit). After every commit, each committed vertex has a
/// snapshot consistent with the committed graph.
///
/// The engine is single-writer: mutations take `&mut self` and run to
/// completion. Hosts sharing one engine across threads must serialize access.
#[derive(Debug, Clone)]
pub struct ReachabilityEngine<V: Vertex> {
    config: EngineConfig,
    store: GraphStore<V>,
    pending: Vec<PendingChange<V>>,
    // Vertex -> snapshot, in the order vertices first got one
    snapshots: IndexMap<V, ReachabilitySnapshot<V>>,
}

impl<V: Vertex> Default for ReachabilityEngine<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> ReachabilityEngine<V> {
    /// Create an engine with the default configuration (BFS, paths tracked).
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        debug!(
            "Creating engine: traversal={}, track_paths={}",
            config.traversal, config.track_paths
        );
        Self {
            config,
            store: GraphStore::new(),
            pending: Vec::new(),
            snapshots: IndexMap::new(),
        }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ===== Staging =====

    /// Stage the addition of edge `(u, v)`.
    ///
    /// Nothing changes in the committed graph until [`commit`](Self::commit).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] if `u == v`; the queue is left
    /// unchanged.
    pub fn stage_add(&mut self, u: V, v: V) -> Result<()> {
        if u == v {
            debug!("Rejecting staged self-loop on {u}");
            return Err(GraphError::invalid_edge(&u));
        }
        debug!("Staging add ({u}, {v})");
        self.pending.push(PendingChange::Add(u, v));
        Ok(())
    }

    /// Stage the removal of edge `(u, v)`.
    ///
    /// Always accepted; removing an edge that does not exist at commit time is
    /// a no-op.
    pub fn stage_remove(&mut self, u: V, v: V) {
        debug!("Staging remove ({u}, {v})");
        self.pending.push(PendingChange::Remove(u, v));
    }

    /// Drop every staged change. The committed graph and snapshots are
    /// untouched.
    pub fn discard(&mut self) {
        debug!("Discarding {} staged changes", self.pending.len());
        self.pending.clear();
    }

    /// Staged changes in the order they will be applied.
    pub fn pending(&self) -> &[PendingChange<V>] {
        &self.pending
    }

    /// [`EngineState::Staged`] while changes are queued.
    pub fn state(&self) -> EngineState {
        if self.pending.is_empty() {
            EngineState::Idle
        } else {
            EngineState::Staged
        }
    }

    // ===== Commit =====

    /// Apply every staged change in FIFO order and refresh affected snapshots.
    ///
    /// Each change is validated and applied on its own. Snapshots are rebuilt
    /// for the endpoints of every applied change and for every vertex sharing a
    /// connected component with those endpoints once the batch is done.
    /// Components the batch never touched keep their snapshots. The queue is
    /// always drained.
    ///
    /// # Errors
    ///
    /// If a change fails validation the rest of the batch is aborted and a
    /// [`CommitError`] is returned. Changes applied before it stay committed
    /// and their snapshots are refreshed; `CommitError::report` lists the
    /// applied, rejected and aborted changes.
    pub fn commit(&mut self) -> std::result::Result<CommitReport<V>, CommitError<V>> {
        let batch = std::mem::take(&mut self.pending);
        debug!("Committing {} staged changes", batch.len());

        let mut report = CommitReport::default();
        let mut touched = IndexSet::new();
        let mut changes = batch.into_iter().enumerate();

        while let Some((index, change)) = changes.next() {
            match self.apply(&change) {
                Ok(changed_topology) => {
                    let (u, v) = change.endpoints();
                    for endpoint in [u, v] {
                        if self.store.has_vertex(endpoint) {
                            touched.insert(endpoint.clone());
                        }
                    }
                    report.applied.push(AppliedChange {
                        index,
                        change,
                        changed_topology,
                    });
                }
                Err(reason) => {
                    debug!("Change #{index} {change} rejected: {reason}");
                    report.rejected = Some(RejectedChange {
                        index,
                        change,
                        reason,
                    });
                    report.aborted = changes.by_ref().map(|(_, change)| change).collect();
                    break;
                }
            }
        }

        report.refreshed = self.refresh_components(&touched);
        info!(
            "Commit finished: {} applied, {} rejected, {} snapshots refreshed",
            report.applied_count(),
            report.rejected_count(),
            report.refreshed.len()
        );

        if let Some((index, reason)) = report.rejected.as_ref().map(|r| (r.index, r.reason)) {
            return Err(CommitError {
                index,
                reason,
                report,
            });
        }
        Ok(report)
    }

    /// Validate and apply one change to the store.
    ///
    /// Returns whether the topology changed. A rejected change leaves the
    /// store untouched.
    fn apply(&mut self, change: &PendingChange<V>) -> std::result::Result<bool, RejectReason> {
        match change {
            PendingChange::Add(u, v) => {
                if u == v {
                    return Err(RejectReason::SelfLoop);
                }
                if let Some(limit) = self.config.max_vertices {
                    let created = [u, v]
                        .into_iter()
                        .filter(|endpoint| !self.store.has_vertex(endpoint))
                        .count();
                    if self.store.vertex_count() + created > limit {
                        return Err(RejectReason::VertexLimit { limit });
                    }
                }
                self.store
                    .add_edge(u.clone(), v.clone())
                    .map_err(|_| RejectReason::SelfLoop)
            }
            PendingChange::Remove(u, v) => Ok(self.store.remove_edge(u, v)),
        }
    }

    /// Rebuild the snapshot of every vertex in the component of each root.
    ///
    /// An edge change can only alter snapshots inside the final component of
    /// one of its endpoints, so this covers every stale snapshot without
    /// visiting untouched components.
    fn refresh_components(&mut self, roots: &IndexSet<V>) -> Vec<V> {
        let mut refreshed = IndexSet::new();

        for root in roots {
            if refreshed.contains(root) {
                continue;
            }
            let root_snapshot = self.traverse(root);
            let members: Vec<V> = root_snapshot
                .reachable()
                .filter(|member| *member != root)
                .cloned()
                .collect();

            trace!("Refreshing component of {root} ({} vertices)", members.len() + 1);
            self.snapshots.insert(root.clone(), root_snapshot);
            refreshed.insert(root.clone());

            for member in members {
                let snapshot = self.traverse(&member);
                self.snapshots.insert(member.clone(), snapshot);
                refreshed.insert(member);
            }
        }

        refreshed.into_iter().collect()
    }

    fn traverse(&self, root: &V) -> ReachabilitySnapshot<V> {
        algorithms::traverse(
            &self.store,
            root,
            self.config.traversal,
            self.config.track_paths,
        )
    }

    // ===== Queries =====

    /// Every cached snapshot, keyed by root vertex.
    ///
    /// Empty until the first commit that creates a vertex.
    pub fn get_paths(&self) -> &IndexMap<V, ReachabilitySnapshot<V>> {
        &self.snapshots
    }

    /// Snapshot rooted at `v`, if `v` is committed.
    pub fn snapshot(&self, v: &V) -> Option<&ReachabilitySnapshot<V>> {
        self.snapshots.get(v)
    }

    /// Vertices reachable from `v` (including `v`); empty for an unknown vertex.
    pub fn reachable_from(&self, v: &V) -> Vec<&V> {
        self.snapshots
            .get(v)
            .map(|snapshot| snapshot.reachable().collect())
            .unwrap_or_default()
    }

    /// Cached path from `from` to `to`.
    ///
    /// `None` if either vertex is unknown, `to` is unreachable, or paths are
    /// not tracked.
    pub fn path(&self, from: &V, to: &V) -> Option<&[V]> {
        self.snapshots.get(from)?.path_to(to)
    }

    /// Committed neighbors of `v` in insertion order.
    pub fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.store.neighbors(v)
    }

    /// Whether `v` is part of the committed graph.
    pub fn has_vertex(&self, v: &V) -> bool {
        self.store.has_vertex(v)
    }

    /// Whether the committed graph has the edge `(u, v)`.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.store.has_edge(u, v)
    }

    /// Read-only view of the committed graph.
    pub fn store(&self) -> &GraphStore<V> {
        &self.store
    }

    /// Owned copy of the committed adjacency for external renderers.
    pub fn export_adjacency(&self) -> IndexMap<V, Vec<V>> {
        self.store.to_adjacency()
    }

    /// Check every snapshot against a from-scratch traversal.
    ///
    /// True when each committed vertex has a snapshot whose reachable set is
    /// exactly its connected component.
    pub fn is_consistent(&self) -> bool {
        self.snapshots.len() == self.store.vertex_count()
            && self.store.vertices().all(|v| {
                self.snapshots.get(v).is_some_and(|snapshot| {
                    snapshot.to_set() == algorithms::connected_component(&self.store, v)
                })
            })
    }

    // ===== Export Methods =====

    /// Export the committed graph to Graphviz DOT format.
    pub fn export_dot(&self) -> String {
        crate::export::export_dot(&self.store)
    }

    /// Export the committed graph to DOT with custom styling options.
    pub fn export_dot_styled(&self, options: &crate::export::DotOptions) -> String {
        crate::export::export_dot_styled(&self.store, options)
    }

    /// Write the committed graph to a DOT file.
    pub fn write_dot(&self, path: &Path) -> Result<()> {
        crate::export::write_dot(&self.store, path)
    }

    /// Export the committed graph to D3.js-compatible JSON.
    pub fn export_json(&self) -> Result<String>
    where
        V: serde::Serialize,
    {
        crate::export::export_json(&self.store)
    }
}
