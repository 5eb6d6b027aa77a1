use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::command::Command;

mod command;
mod evaluate;

#[derive(Parser)]
#[command(name = "logacc", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[command(flatten)]
    evaluate: evaluate::EvaluateArgs,
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Every message, errors included, goes to stdout.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            tracing::debug!(%error, "rejected command line");
            println!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    match evaluate::EvaluateCommand::execute(&cli.evaluate) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("{}", error);
            ExitCode::FAILURE
        }
    }
}
