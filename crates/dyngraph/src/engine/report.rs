//! Commit outcomes.

use super::change::PendingChange;
use crate::error::GraphError;
use crate::graph::Vertex;
use serde::Serialize;
use std::fmt;

/// Why a queued change could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Both endpoints are the same vertex
    SelfLoop,
    /// Applying the change would exceed `EngineConfig::max_vertices`
    VertexLimit {
        /// Configured vertex limit
        limit: usize,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::SelfLoop => write!(f, "self-loop"),
            RejectReason::VertexLimit { limit } => write!(f, "vertex limit of {limit} exceeded"),
        }
    }
}

/// A change that reached the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedChange<V> {
    /// Position in the committed batch
    pub index: usize,
    /// The change itself
    pub change: PendingChange<V>,
    /// False when the change was a no-op (re-add, absent removal)
    pub changed_topology: bool,
}

/// The change that stopped a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedChange<V> {
    /// Position in the committed batch
    pub index: usize,
    /// The change itself
    pub change: PendingChange<V>,
    /// Why it was rejected
    pub reason: RejectReason,
}

/// Outcome of [`ReachabilityEngine::commit`](crate::ReachabilityEngine::commit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitReport<V> {
    /// Changes applied to the store, in batch order
    pub applied: Vec<AppliedChange<V>>,
    /// The change that failed validation, if any
    pub rejected: Option<RejectedChange<V>>,
    /// Changes queued after the rejected one and never attempted
    pub aborted: Vec<PendingChange<V>>,
    /// Vertices whose snapshot was rebuilt, in rebuild order
    pub refreshed: Vec<V>,
}

impl<V> Default for CommitReport<V> {
    fn default() -> Self {
        Self {
            applied: Vec::new(),
            rejected: None,
            aborted: Vec::new(),
            refreshed: Vec::new(),
        }
    }
}

impl<V> CommitReport<V> {
    /// Number of changes that reached the store.
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    /// Number of changes that did not reach the store (rejected plus aborted).
    pub fn rejected_count(&self) -> usize {
        usize::from(self.rejected.is_some()) + self.aborted.len()
    }

    /// True if every queued change was applied.
    pub fn is_success(&self) -> bool {
        self.rejected.is_none()
    }

    /// Changes a caller may want to stage again: the rejected one followed by
    /// the aborted remainder.
    pub fn unapplied(&self) -> impl Iterator<Item = &PendingChange<V>> + '_ {
        self.rejected
            .iter()
            .map(|rejected| &rejected.change)
            .chain(self.aborted.iter())
    }
}

/// A commit that stopped at a rejected change.
///
/// Changes before `index` stay committed and their snapshots are fresh; the
/// full picture is in `report`.
#[derive(Debug, Clone)]
pub struct CommitError<V> {
    /// Position of the rejected change in the batch
    pub index: usize,
    /// Why it was rejected
    pub reason: RejectReason,
    /// Report covering the applied, rejected and aborted changes
    pub report: CommitReport<V>,
}

impl<V> fmt::Display for CommitError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commit rejected change #{} ({}), {} applied, {} aborted",
            self.index,
            self.reason,
            self.report.applied.len(),
            self.report.aborted.len()
        )
    }
}

impl<V: fmt::Debug> std::error::Error for CommitError<V> {}

impl<V: Vertex> From<CommitError<V>> for GraphError {
    fn from(err: CommitError<V>) -> Self {
        GraphError::CommitRejected {
            index: err.index,
            reason: err.reason.to_string(),
        }
    }
}
