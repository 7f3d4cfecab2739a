mod cli;
mod compose;
mod error;
mod release;
mod utils;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::ReleaseError;

fn main() {
    // Initialize logging
    if let Err(err) = utils::logger::init() {
        eprintln!("Failed to initialize logging: {}", err);
    }

    // Wrong argument count must exit with status 1, not clap's default 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => {
            // --help or --version
            let _ = err.print();
            return;
        }
    };

    if let Err(err) = cli.execute() {
        eprintln!("{} {:#}", "✗".red().bold(), err);
        std::process::exit(exit_status(&err));
    }
}

/// Exit status for a failed run: a failed build or push propagates the
/// child's exit code, everything else exits with 1.
fn exit_status(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ReleaseError>())
        .map(ReleaseError::exit_status)
        .unwrap_or(1)
}
