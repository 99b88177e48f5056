//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Traversal strategy used to rebuild snapshots.
///
/// Both strategies produce the same reachable sets. Only breadth-first
/// guarantees shortest paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Level order; paths are shortest by hop count
    #[default]
    BreadthFirst,
    /// Discovery order; paths follow the descent, not minimal length
    DepthFirst,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::BreadthFirst => write!(f, "bfs"),
            Traversal::DepthFirst => write!(f, "dfs"),
        }
    }
}

/// Error returned when parsing an unknown traversal name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown traversal '{0}' (expected 'bfs' or 'dfs')")]
pub struct ParseTraversalError(String);

impl FromStr for Traversal {
    type Err = ParseTraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Ok(Traversal::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" => Ok(Traversal::DepthFirst),
            _ => Err(ParseTraversalError(s.to_string())),
        }
    }
}

/// Configuration for a [`ReachabilityEngine`](crate::ReachabilityEngine).
///
/// The strategy is fixed for the lifetime of an engine so every snapshot it
/// holds has the same path semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Strategy used to rebuild snapshots
    pub traversal: Traversal,

    /// Record a path per reachable vertex instead of a bare visited set
    pub track_paths: bool,

    /// Upper bound on committed vertices (None = unlimited)
    /// Adds that would exceed it are rejected at commit time
    pub max_vertices: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            traversal: Traversal::BreadthFirst,
            track_paths: true,
            max_vertices: None,
        }
    }
}

impl EngineConfig {
    /// Create config for shortest-path snapshots (BFS with paths)
    pub fn shortest_paths() -> Self {
        Self::default()
    }

    /// Create config that keeps only reachable sets (cheapest snapshots)
    pub fn reachability_only() -> Self {
        Self {
            track_paths: false,
            ..Default::default()
        }
    }

    /// Create config for depth-first discovery paths
    pub fn discovery_order() -> Self {
        Self {
            traversal: Traversal::DepthFirst,
            ..Default::default()
        }
    }

    /// Builder: set the traversal strategy
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Builder: enable or disable path tracking
    pub fn with_track_paths(mut self, track_paths: bool) -> Self {
        self.track_paths = track_paths;
        self
    }

    /// Builder: cap the number of committed vertices
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = Some(max_vertices);
        self
    }
}
