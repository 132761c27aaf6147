mod cli;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use commands::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(&cli);

    match cli.cmd.take() {
        Some(command) => command.run(cli).await.emit(),
        None => match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => CommandResult::failure(format_args!("{err:#}")).emit(),
        },
    }
}

/// Map a `LOG_LEVEL` value onto a tracing level. Unset means the default.
fn log_level_from_env(env_val: Option<&str>) -> Result<tracing::Level, String> {
    let Some(env_val) = env_val.map(str::trim) else {
        return Ok(DEFAULT_LOG_LEVEL);
    };

    match env_val.to_ascii_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" | "verbose" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        _ => Err(format!(
            "Invalid `LOG_LEVEL` environment variable value: `{env_val}`"
        )),
    }
}

fn init_logging(cli: &Cli) {
    let (log_level, env_warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match log_level_from_env(std::env::var("LOG_LEVEL").ok().as_deref()) {
                Ok(level) => (level, None),
                Err(warning) => (DEFAULT_LOG_LEVEL, Some(warning)),
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(warning) = env_warning {
        log::warn!("{warning}");
    }
}
