//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use rapport_core::bail_usage;
use rapport_core::config::{self, EngineConfig};
use rapport_core::error::Result;
use rapport_core::SocialGraph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Path of the configuration file in effect
    pub fn config_path(&self) -> Result<PathBuf> {
        config::resolve_path(self.cli.config.as_deref())
    }

    pub fn load_config(&self) -> Result<EngineConfig> {
        let path = self.config_path()?;
        let config = EngineConfig::load_or_default(&path)?;
        tracing::debug!(
            path = %path.display(),
            default_limit = config.search.default_limit,
            elapsed = ?self.start.elapsed(),
            "load_config"
        );
        Ok(config)
    }

    /// Build the engine from configuration and the edge list
    pub fn open_graph(&self) -> Result<SocialGraph<String>> {
        let Some(edges) = &self.cli.edges else {
            bail_usage!("no edge list given; pass --edges <FILE> or set RAPPORT_EDGES");
        };
        let config = self.load_config()?;
        let mut graph = SocialGraph::from_config(&config.search);
        commands::load::load_into(&mut graph, edges)?;
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            elapsed = ?self.start.elapsed(),
            "open_graph"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("rapport {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Connectivity and weighted shortest paths over social graphs.");
        println!();
        println!("Run `rapport --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Connected { a, b } => {
                let mut graph = ctx.open_graph()?;
                commands::connected::execute(ctx.cli, &mut graph, a, b)
            }
            Commands::Path {
                from,
                to,
                limit,
                no_verify,
            } => {
                let mut graph = ctx.open_graph()?;
                if *no_verify {
                    graph.set_verification(false);
                }
                commands::path::execute(ctx.cli, &mut graph, from, to, *limit)
            }
            Commands::Find {
                start,
                pattern,
                limit,
            } => {
                let graph = ctx.open_graph()?;
                commands::find::execute(ctx.cli, &graph, start, pattern, *limit)
            }
            Commands::Components => {
                let mut graph = ctx.open_graph()?;
                commands::components::execute(ctx.cli, &mut graph)
            }
            Commands::Stats => {
                let mut graph = ctx.open_graph()?;
                commands::stats::execute(ctx.cli, &mut graph)
            }
            Commands::Limit { value } => {
                let path = ctx.config_path()?;
                commands::limit::execute(ctx.cli, &path, *value)
            }
        }
    }
}
