use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use cmdrun_process::{CommandString, Invoker};

/// Launch a command line as a new OS process
///
/// The command is the second positional value; the first and any trailing
/// values are accepted and ignored. The process is started and left running.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Leading positional value (ignored)
    #[arg(value_name = "IGNORED", allow_hyphen_values = true)]
    _leading: String,

    /// Command line to execute, passed to the OS unmodified
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    command: String,

    /// Remaining values (ignored)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging()?;

    let command = CommandString::from(args.command);
    info!("Executing command: {}", command);

    // A spawn failure is reported, not propagated: the program still exits normally.
    match Invoker::default().execute(command) {
        Ok(handle) => {
            info!("Started process {}", handle.id());
        }
        Err(e) => {
            error!("Failed to start process: {}", e);
            e.report();
        }
    }

    Ok(())
}

fn initialize_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(true)
        .init();

    Ok(())
}
