mod coerce;

use crate::Cli;
use crate::CommandResult;
use coerce::CoerceCmd;

/// A subcommand that consumes its parsed args and produces output plus an
/// exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-input")]
pub(crate) enum CommandEnum {
    /// Convert a GraphQL input literal into a value of the given type and
    /// print it as JSON.
    Coerce(Box<CoerceCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Coerce(cmd) => cmd.run(cli).await
        }
    }
}
