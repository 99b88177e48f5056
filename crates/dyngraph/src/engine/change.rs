//! Staged edge changes.

use crate::graph::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A queued, not-yet-applied edge change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingChange<V> {
    /// Insert the undirected edge `(u, v)`
    Add(V, V),
    /// Remove the undirected edge `(u, v)`
    Remove(V, V),
}

impl<V> PendingChange<V> {
    /// Both endpoints, in the order they were staged.
    pub fn endpoints(&self) -> (&V, &V) {
        match self {
            PendingChange::Add(u, v) | PendingChange::Remove(u, v) => (u, v),
        }
    }

    /// True for [`PendingChange::Add`].
    pub fn is_add(&self) -> bool {
        matches!(self, PendingChange::Add(..))
    }
}

impl<V: Vertex> fmt::Display for PendingChange<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingChange::Add(u, v) => write!(f, "add ({u}, {v})"),
            PendingChange::Remove(u, v) => write!(f, "remove ({u}, {v})"),
        }
    }
}

/// Staging state of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// Queue empty
    Idle,
    /// Queue non-empty, store unchanged since the last commit
    Staged,
}
