//! Unit tests for staging, commit and snapshot maintenance.

use dyngraph::{
    EngineConfig, EngineState, GraphError, PendingChange, ReachabilityEngine, RejectReason,
    Traversal,
};
use std::collections::HashSet;

fn set(items: &[u32]) -> HashSet<u32> {
    items.iter().copied().collect()
}

fn reach(engine: &ReachabilityEngine<u32>, v: u32) -> HashSet<u32> {
    engine.reachable_from(&v).into_iter().copied().collect()
}

fn chain_engine(config: EngineConfig) -> ReachabilityEngine<u32> {
    let mut engine = ReachabilityEngine::with_config(config);
    engine.stage_add(1, 2).unwrap();
    engine.stage_add(2, 3).unwrap();
    engine.stage_add(3, 4).unwrap();
    engine.commit().unwrap();
    engine
}

#[test]
fn test_chain_then_split() {
    let mut engine = chain_engine(EngineConfig::default());
    assert_eq!(reach(&engine, 1), set(&[1, 2, 3, 4]));

    engine.stage_remove(2, 3);
    engine.commit().unwrap();

    assert_eq!(reach(&engine, 1), set(&[1, 2]));
    assert_eq!(reach(&engine, 2), set(&[1, 2]));
    assert_eq!(reach(&engine, 3), set(&[3, 4]));
    assert_eq!(reach(&engine, 4), set(&[3, 4]));
    assert!(engine.is_consistent());
}

#[test]
fn test_chain_then_split_depth_first() {
    let mut engine = chain_engine(EngineConfig::discovery_order());
    assert_eq!(reach(&engine, 4), set(&[1, 2, 3, 4]));

    engine.stage_remove(3, 2);
    engine.commit().unwrap();
    assert_eq!(reach(&engine, 1), set(&[1, 2]));
    assert_eq!(reach(&engine, 3), set(&[3, 4]));
}

#[test]
fn test_add_then_remove_in_one_batch() {
    let mut engine = ReachabilityEngine::new();
    engine.stage_add(5, 6).unwrap();
    engine.stage_remove(5, 6);
    let report = engine.commit().unwrap();

    assert_eq!(report.applied_count(), 2);
    assert!(!engine.has_edge(&5, &6));
    assert!(engine.has_vertex(&5));
    assert!(engine.has_vertex(&6));
    assert_eq!(engine.neighbors(&5).count(), 0);
    assert_eq!(reach(&engine, 5), set(&[5]));
    assert_eq!(reach(&engine, 6), set(&[6]));
}

#[test]
fn test_staging_isolation_and_discard() {
    let mut engine = chain_engine(EngineConfig::default());
    let adjacency_before = engine.export_adjacency();
    let paths_before = engine.get_paths().clone();

    engine.stage_add(4, 5).unwrap();
    engine.stage_remove(1, 2);
    assert_eq!(engine.export_adjacency(), adjacency_before);
    assert_eq!(engine.state(), EngineState::Staged);

    engine.discard();
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(engine.pending().is_empty());
    assert_eq!(engine.export_adjacency(), adjacency_before);
    assert_eq!(engine.get_paths(), &paths_before);
}

#[test]
fn test_idempotent_readd() {
    let mut engine = chain_engine(EngineConfig::default());
    let adjacency_before = engine.export_adjacency();
    let paths_before = engine.get_paths().clone();

    engine.stage_add(2, 3).unwrap();
    engine.stage_add(3, 2).unwrap();
    let report = engine.commit().unwrap();

    assert!(report.applied.iter().all(|applied| !applied.changed_topology));
    assert_eq!(engine.export_adjacency(), adjacency_before);
    assert_eq!(engine.get_paths(), &paths_before);
    assert_eq!(engine.store().degree(&2), 2);
}

#[test]
fn test_remove_absent_edge_succeeds() {
    let mut engine = chain_engine(EngineConfig::default());
    let adjacency_before = engine.export_adjacency();

    engine.stage_remove(1, 4);
    engine.stage_remove(1, 1);
    let report = engine.commit().unwrap();

    assert!(report.is_success());
    assert_eq!(engine.export_adjacency(), adjacency_before);
}

#[test]
fn test_self_loop_rejected() {
    let mut engine: ReachabilityEngine<u32> = ReachabilityEngine::new();
    let err = engine.stage_add(4, 4).unwrap_err();

    assert!(matches!(err, GraphError::InvalidEdge { ref vertex } if vertex == "4"));
    assert!(engine.pending().is_empty());
}

#[test]
fn test_get_paths_empty_before_commit() {
    let mut engine = ReachabilityEngine::new();
    engine.stage_add(1, 2).unwrap();
    assert!(engine.get_paths().is_empty());
    assert!(engine.reachable_from(&1).is_empty());
    assert_eq!(engine.path(&1, &2), None);
}

#[test]
fn test_bfs_engine_records_shortest_paths() {
    let mut engine = ReachabilityEngine::new();
    for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 5), (1, 5)] {
        engine.stage_add(u, v).unwrap();
    }
    engine.commit().unwrap();

    assert_eq!(engine.path(&1, &4), Some(&[1, 5, 4][..]));
    assert_eq!(engine.path(&3, &1), Some(&[3, 2, 1][..]));
    assert_eq!(engine.path(&2, &2), Some(&[2][..]));
}

#[test]
fn test_dfs_engine_records_discovery_paths() {
    let config = EngineConfig::default().with_traversal(Traversal::DepthFirst);
    let mut engine = ReachabilityEngine::with_config(config);
    for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 5), (1, 5)] {
        engine.stage_add(u, v).unwrap();
    }
    engine.commit().unwrap();

    assert_eq!(engine.path(&1, &5), Some(&[1, 2, 3, 4, 5][..]));
}

#[test]
fn test_reachability_only_has_no_paths() {
    let engine = chain_engine(EngineConfig::reachability_only());
    assert_eq!(reach(&engine, 1), set(&[1, 2, 3, 4]));
    assert_eq!(engine.path(&1, &4), None);
    assert!(!engine.snapshot(&1).unwrap().has_paths());
}

#[test]
fn test_isolated_vertex_keeps_singleton_snapshot() {
    let mut engine = ReachabilityEngine::new();
    engine.stage_add(1, 2).unwrap();
    engine.commit().unwrap();

    engine.stage_remove(1, 2);
    engine.commit().unwrap();

    let snapshot = engine.snapshot(&1).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.path_to(&1), Some(&[1][..]));
    assert_eq!(engine.get_paths().len(), 2);
}

#[test]
fn test_cycle_edge_removal_refreshes_paths() {
    let mut engine = ReachabilityEngine::new();
    for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
        engine.stage_add(u, v).unwrap();
    }
    engine.commit().unwrap();
    assert_eq!(engine.path(&1, &4), Some(&[1, 4][..]));

    engine.stage_remove(4, 1);
    engine.commit().unwrap();

    // Still one component, but the short way round is gone
    assert_eq!(reach(&engine, 1), set(&[1, 2, 3, 4]));
    assert_eq!(engine.path(&1, &4), Some(&[1, 2, 3, 4][..]));
    assert_eq!(engine.path(&2, &4), Some(&[2, 3, 4][..]));
    assert!(engine.is_consistent());
}

#[test]
fn test_rejected_change_reports_and_keeps_prefix() {
    let config = EngineConfig::default().with_max_vertices(3);
    let mut engine = ReachabilityEngine::with_config(config);
    engine.stage_add(1, 2).unwrap();
    engine.stage_add(2, 3).unwrap();
    engine.stage_add(3, 4).unwrap();
    engine.stage_remove(1, 2);

    let err = engine.commit().unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.reason, RejectReason::VertexLimit { limit: 3 });
    assert_eq!(err.report.applied_count(), 2);
    assert_eq!(err.report.rejected_count(), 2);
    assert_eq!(
        err.report.unapplied().cloned().collect::<Vec<_>>(),
        vec![PendingChange::Add(3, 4), PendingChange::Remove(1, 2)]
    );

    assert!(engine.has_edge(&1, &2));
    assert!(engine.has_edge(&2, &3));
    assert!(!engine.has_vertex(&4));
    assert_eq!(reach(&engine, 1), set(&[1, 2, 3]));
    assert_eq!(engine.state(), EngineState::Idle);

    let graph_err: GraphError = err.into();
    assert!(matches!(graph_err, GraphError::CommitRejected { index: 2, .. }));
}

#[test]
fn test_string_vertices() {
    let mut engine: ReachabilityEngine<String> = ReachabilityEngine::new();
    engine.stage_add("alpha".into(), "beta".into()).unwrap();
    engine.stage_add("beta".into(), "gamma".into()).unwrap();
    engine.commit().unwrap();

    let path = engine.path(&"alpha".to_string(), &"gamma".to_string()).unwrap();
    assert_eq!(path, ["alpha", "beta", "gamma"]);
}

#[test]
fn test_reports_refreshed_vertices() {
    let mut engine = ReachabilityEngine::new();
    engine.stage_add(1, 2).unwrap();
    engine.stage_add(3, 4).unwrap();
    let report = engine.commit().unwrap();

    assert_eq!(report.refreshed, vec![1, 2, 3, 4]);
}
