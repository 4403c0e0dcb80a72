mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

// Files are read and rewritten one at a time.
#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(cli.verbose, env_val.as_deref());

    // Diagnostics go to stderr; stdout carries the GraphQL output.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Picks the log level from `--verbose` and the `LOG_LEVEL` environment
/// variable. An unrecognized `LOG_LEVEL` falls back to the default level and
/// yields a warning to report once logging is up.
fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.map(str::trim) {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(val) => match val.to_ascii_lowercase().as_str() {
            "trace" => (tracing::Level::TRACE, None),
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "info" => (tracing::Level::INFO, None),
            "warn" => (tracing::Level::WARN, None),
            "error" => (tracing::Level::ERROR, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{val}`")),
            ),
        },
    }
}
