//! Basic usage example for dyngraph
//!
//! This example demonstrates:
//! - Staging and committing edge changes
//! - Reading reachability snapshots
//! - Splitting a component by removing an edge
//! - Handing the graph to a renderer as DOT

use dyngraph::{EngineConfig, ReachabilityEngine};

fn main() -> dyngraph::Result<()> {
    let mut engine = ReachabilityEngine::with_config(EngineConfig::shortest_paths());

    println!("Staging a chain 1 - 2 - 3 - 4...\n");
    engine.stage_add(1, 2)?;
    engine.stage_add(2, 3)?;
    engine.stage_add(3, 4)?;
    println!("Pending: {} changes", engine.pending().len());

    let report = engine.commit()?;
    println!(
        "✓ Committed {} changes, refreshed {} snapshots",
        report.applied_count(),
        report.refreshed.len()
    );
    print_paths(&engine);

    println!("\nRemoving edge (2, 3)...\n");
    engine.stage_remove(2, 3);
    engine.commit()?;
    print_paths(&engine);

    println!("\n--- DOT (pipe into `dot -Tpng`) ---\n");
    print!("{}", engine.export_dot());

    Ok(())
}

fn print_paths(engine: &ReachabilityEngine<u32>) {
    for (root, snapshot) in engine.get_paths() {
        let reachable: Vec<String> = snapshot.reachable().map(|v| v.to_string()).collect();
        println!("  {root}: {{{}}}", reachable.join(", "));
    }
}
