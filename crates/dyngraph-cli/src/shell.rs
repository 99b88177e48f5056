//! Text command shell over a [`ReachabilityEngine`].
//!
//! Each input line is one command. The shell only translates text into
//! engine calls and engine results back into text.

use dyngraph::{EngineConfig, ReachabilityEngine, ReachabilitySnapshot};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const MENU: &str = "\
Commands:
  add U V      stage edge (U, V) for addition
  remove U V   stage edge (U, V) for removal
  commit       apply pending changes (alias: apply)
  discard      drop pending changes
  pending      list pending changes
  paths        show reachability from every vertex
  save FILE    write the committed graph as Graphviz DOT
  help         show this menu
  exit         leave the shell (alias: quit)";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String, String),
    Remove(String, String),
    Commit,
    Discard,
    Pending,
    Paths,
    Save(PathBuf),
    Help,
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err("empty command".to_string());
        };
        let args: Vec<&str> = words.collect();

        let command = match (keyword.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("add" | "a", [u, v]) => Command::Add(u.to_string(), v.to_string()),
            ("remove" | "r", [u, v]) => Command::Remove(u.to_string(), v.to_string()),
            ("add" | "a" | "remove" | "r", _) => {
                return Err(format!("'{keyword}' takes exactly two vertices"));
            }
            ("commit" | "apply" | "p", []) => Command::Commit,
            ("discard" | "d", []) => Command::Discard,
            ("pending", []) => Command::Pending,
            ("paths" | "v", []) => Command::Paths,
            ("save" | "s", [file]) => Command::Save(PathBuf::from(file)),
            ("save" | "s", _) => return Err("'save' takes exactly one file name".to_string()),
            ("help" | "?", []) => Command::Help,
            ("exit" | "quit" | "e", []) => Command::Exit,
            _ => return Err(format!("invalid option '{}'", line.trim())),
        };
        Ok(command)
    }
}

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive shell state: one engine with string vertices.
pub struct Shell {
    engine: ReachabilityEngine<String>,
}

impl Shell {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: ReachabilityEngine::with_config(config),
        }
    }

    pub fn engine(&self) -> &ReachabilityEngine<String> {
        &self.engine
    }

    /// Read commands from `input` until it ends or `exit` is given.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: bool,
    ) -> io::Result<()> {
        if prompt {
            writeln!(out, "{MENU}")?;
        }
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, out)? == Flow::Exit {
                        break;
                    }
                }
                Err(message) => writeln!(out, "Error: {message}. Type 'help' for commands.")?,
            }
        }
        Ok(())
    }

    /// Execute one command, writing its outcome to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Add(u, v) => match self.engine.stage_add(u.clone(), v.clone()) {
                Ok(()) => writeln!(out, "Edge ({u}, {v}) added to pending changes.")?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            Command::Remove(u, v) => {
                self.engine.stage_remove(u.clone(), v.clone());
                writeln!(out, "Edge ({u}, {v}) added to pending removal.")?;
            }
            Command::Commit => match self.engine.commit() {
                Ok(report) => writeln!(
                    out,
                    "Pending changes applied ({} changes, {} snapshots refreshed).",
                    report.applied_count(),
                    report.refreshed.len()
                )?,
                Err(e) => {
                    writeln!(out, "Error: {e}")?;
                    for change in e.report.unapplied() {
                        writeln!(out, "  not applied: {change}")?;
                    }
                }
            },
            Command::Discard => {
                self.engine.discard();
                writeln!(out, "Pending changes discarded.")?;
            }
            Command::Pending => {
                if self.engine.pending().is_empty() {
                    writeln!(out, "No pending changes.")?;
                }
                for (index, change) in self.engine.pending().iter().enumerate() {
                    writeln!(out, "  #{index} {change}")?;
                }
            }
            Command::Paths => self.write_paths(out)?,
            Command::Save(path) => match self.engine.write_dot(&path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "graph saved");
                    writeln!(out, "Graph saved as {}.", path.display())?;
                }
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            Command::Help => writeln!(out, "{MENU}")?,
            Command::Exit => {
                writeln!(out, "Exiting.")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn write_paths<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let paths = self.engine.get_paths();
        if paths.is_empty() {
            return writeln!(out, "No paths to display.");
        }

        let mut any_path = false;
        for (node, snapshot) in paths {
            if snapshot.len() <= 1 {
                writeln!(out, "No path found from node {node}.")?;
                continue;
            }
            any_path = true;
            let reachable: Vec<&str> = snapshot.reachable().map(String::as_str).collect();
            writeln!(out, "Paths from node {node}: {{{}}}", reachable.join(", "))?;
            if let ReachabilitySnapshot::Paths(table) = snapshot {
                for (target, path) in table.iter().filter(|(target, _)| *target != node) {
                    writeln!(out, "    {target}: {}", path.join(" -> "))?;
                }
            }
        }

        if !any_path {
            writeln!(out, "No valid paths found in the graph.")?;
        }
        Ok(())
    }
}
