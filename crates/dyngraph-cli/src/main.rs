//! dyngraph CLI: interactive shell for staged graph edits.
//!
//! Usage:
//!   dyngraph [--traversal bfs|dfs] [--no-paths] [--max-vertices N] [--script FILE] [-v...]

mod shell;

use clap::Parser;
use dyngraph::{EngineConfig, Traversal};
use shell::Shell;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dyngraph",
    version,
    about = "Stage edge changes on an undirected graph and inspect reachability"
)]
struct Cli {
    /// Traversal used to rebuild snapshots (bfs gives shortest paths)
    #[arg(long, default_value_t = Traversal::BreadthFirst)]
    traversal: Traversal,

    /// Keep only reachable sets, not paths
    #[arg(long)]
    no_paths: bool,

    /// Reject additions that would grow the graph beyond N vertices
    #[arg(long, value_name = "N")]
    max_vertices: Option<usize>,

    /// Read commands from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::default()
            .with_traversal(self.traversal)
            .with_track_paths(!self.no_paths);
        match self.max_vertices {
            Some(limit) => config.with_max_vertices(limit),
            None => config,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.engine_config();
    tracing::debug!(?config, "starting shell");
    let mut shell = Shell::new(config);
    let mut stdout = io::stdout().lock();

    let result = match &cli.script {
        Some(path) => match File::open(path) {
            Ok(file) => shell.run(BufReader::new(file), &mut stdout, false),
            Err(e) => {
                eprintln!("Error: cannot open script {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell.run(stdin.lock(), &mut stdout, interactive)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
