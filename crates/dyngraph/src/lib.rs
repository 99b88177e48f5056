//! # dyngraph
//!
//! An undirected graph whose edges change through a staged change log, with a
//! cached reachability snapshot per vertex that is refreshed on every commit.
//!
//! ## Core Principles
//!
//! - **Staged Writes**: Edge changes are queued and only touch the graph on commit
//! - **No Staleness**: After a commit every snapshot matches the committed graph
//! - **Bounded Refresh**: Only components touched by a commit are recomputed
//! - **Deterministic**: Neighbor order is insertion order, so traversals repeat exactly
//! - **Zero Magic**: The engine is a plain value owned by the caller
//!
//! ## Architecture
//!
//! ```text
//! Front ends (interactive shell, renderers)
//!     ↓
//! ReachabilityEngine (staging queue, snapshot cache)
//!     ↓
//! Traversal (BFS / DFS)
//!     ↓
//! GraphStore (committed adjacency)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dyngraph::ReachabilityEngine;
//!
//! let mut engine = ReachabilityEngine::new();
//! engine.stage_add(1, 2).unwrap();
//! engine.stage_add(2, 3).unwrap();
//! engine.commit().unwrap();
//!
//! assert_eq!(engine.reachable_from(&1).len(), 3);
//! assert_eq!(engine.path(&1, &3), Some(&[1, 2, 3][..]));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use config::{EngineConfig, Traversal};
pub use engine::{
    AppliedChange, CommitError, CommitReport, EngineState, PendingChange, ReachabilityEngine,
    RejectReason, RejectedChange,
};
pub use error::{GraphError, Result};
pub use graph::{GraphStore, ReachabilitySnapshot, Vertex};
