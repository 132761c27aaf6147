use clap::CommandFactory;
use crate::commands;

/// Materialize GraphQL input literals against a schema.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-input", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    /// Log at DEBUG level regardless of `LOG_LEVEL`.
    #[arg(long, short='v')]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand there is nothing to run, so describe the CLI.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
