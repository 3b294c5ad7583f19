//! Command dispatch logic for skylane

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::demo;
use skylane_core::error::Result;
use skylane_core::network::Network;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Build the process-lifetime network the command runs against
    pub fn build_network(&self) -> Result<Network> {
        if self.cli.empty {
            return Ok(Network::new());
        }
        demo::demo_network()
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
        println!("skylane {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A route network CLI for scripts and agents.");
        println!();
        println!("Run `skylane --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let network = ctx.build_network()?;
        debug!(elapsed = ?ctx.start.elapsed(), locations = network.len(), "build_network");

        match self {
            Commands::Locations => super::locations::execute(ctx.cli, &network),
            Commands::Routes => super::routes::execute(ctx.cli, &network),
            Commands::Reach { from, to } => super::reach::execute(ctx.cli, &network, *from, *to),
            Commands::Shortest { from, to } => {
                super::shortest::execute(ctx.cli, &network, *from, *to)
            }
            Commands::Alternate { from, to } => {
                super::alternate::execute(ctx.cli, &network, *from, *to)
            }
            Commands::Console => super::console::execute(ctx.cli, network),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
