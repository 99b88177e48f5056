//! Property-based tests for the reachability engine.
//!
//! Random batches of staged adds and removes over a small vertex range, so
//! components merge and split often.

use dyngraph::graph::algorithms::connected_component;
use dyngraph::{EngineConfig, PendingChange, ReachabilityEngine, Traversal};
use proptest::prelude::*;

fn change() -> impl Strategy<Value = PendingChange<u8>> {
    (any::<bool>(), 0u8..12, 0u8..12)
        .prop_filter("no self-loops", |(_, u, v)| u != v)
        .prop_map(|(add, u, v)| {
            if add {
                PendingChange::Add(u, v)
            } else {
                PendingChange::Remove(u, v)
            }
        })
}

fn batches() -> impl Strategy<Value = Vec<Vec<PendingChange<u8>>>> {
    prop::collection::vec(prop::collection::vec(change(), 0..12), 1..6)
}

fn config() -> impl Strategy<Value = EngineConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(dfs, track_paths)| {
        let traversal = if dfs {
            Traversal::DepthFirst
        } else {
            Traversal::BreadthFirst
        };
        EngineConfig::default()
            .with_traversal(traversal)
            .with_track_paths(track_paths)
    })
}

fn stage(engine: &mut ReachabilityEngine<u8>, batch: &[PendingChange<u8>]) {
    for change in batch {
        match change.clone() {
            PendingChange::Add(u, v) => engine.stage_add(u, v).unwrap(),
            PendingChange::Remove(u, v) => engine.stage_remove(u, v),
        }
    }
}

proptest! {
    #[test]
    fn snapshots_match_components_after_every_commit(config in config(), batches in batches()) {
        let mut engine = ReachabilityEngine::with_config(config);
        for batch in &batches {
            stage(&mut engine, batch);
            engine.commit().unwrap();

            for v in engine.store().vertices() {
                let cached = engine.snapshot(v).unwrap().to_set();
                prop_assert_eq!(cached, connected_component(engine.store(), v));
            }
            prop_assert!(engine.is_consistent());
        }
    }

    #[test]
    fn adjacency_stays_symmetric(batches in batches()) {
        let mut engine = ReachabilityEngine::new();
        for batch in &batches {
            stage(&mut engine, batch);
            engine.commit().unwrap();
        }

        let store = engine.store();
        for u in store.vertices() {
            for v in store.neighbors(u) {
                prop_assert!(store.has_edge(v, u));
            }
        }
    }

    #[test]
    fn discard_leaves_state_untouched(committed in batches(), staged in prop::collection::vec(change(), 1..12)) {
        let mut engine = ReachabilityEngine::new();
        for batch in &committed {
            stage(&mut engine, batch);
            engine.commit().unwrap();
        }
        let adjacency = engine.export_adjacency();
        let paths = engine.get_paths().clone();

        stage(&mut engine, &staged);
        prop_assert_eq!(engine.export_adjacency(), adjacency.clone());

        engine.discard();
        prop_assert_eq!(engine.export_adjacency(), adjacency);
        prop_assert_eq!(engine.get_paths(), &paths);
    }

    #[test]
    fn bfs_paths_are_valid_walks(batches in batches()) {
        let mut engine = ReachabilityEngine::new();
        for batch in &batches {
            stage(&mut engine, batch);
            engine.commit().unwrap();
        }

        for (root, snapshot) in engine.get_paths() {
            for target in snapshot.reachable() {
                let path = snapshot.path_to(target).unwrap();
                prop_assert_eq!(path.first(), Some(root));
                prop_assert_eq!(path.last(), Some(target));
                for step in path.windows(2) {
                    prop_assert!(engine.has_edge(&step[0], &step[1]));
                }
            }
        }
    }
}
