//! Staged edge mutation and incremental reachability.
//!
//! - [`PendingChange`]: A queued edge change
//! - [`ReachabilityEngine`]: Staging queue plus per-vertex snapshot cache
//! - [`CommitReport`] / [`CommitError`]: What a commit did

mod change;
mod reachability;
mod report;

pub use change::{EngineState, PendingChange};
pub use reachability::ReachabilityEngine;
pub use report::{AppliedChange, CommitError, CommitReport, RejectReason, RejectedChange};
