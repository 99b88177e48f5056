//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Vertex`]: Marker trait for vertex identifiers
//! - [`GraphStore`]: The committed, undirected adjacency structure
//! - [`ReachabilitySnapshot`]: Cached traversal result rooted at one vertex
//! - [`algorithms`]: BFS and DFS over a [`GraphStore`]

mod snapshot;
mod store;
mod types;
pub mod algorithms;

pub use snapshot::{ReachabilitySnapshot, Reachable};
pub use store::GraphStore;
pub use types::Vertex;
