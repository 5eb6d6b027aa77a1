use std::{ffi::OsString, path::Path};

use anyhow::Result;
use clap::{Args, ValueHint};

use crate::command::Command;

#[derive(Args)]
pub(crate) struct EvaluateArgs {
    /// Prediction log to evaluate
    // OsString so an empty value still reaches the file-access step.
    #[arg(
        value_hint = ValueHint::FilePath,
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true
    )]
    log_file: OsString,
}

pub(crate) struct EvaluateCommand;

impl Command for EvaluateCommand {
    type Args = EvaluateArgs;
    fn execute(args: &EvaluateArgs) -> Result<()> {
        let path = Path::new(&args.log_file);
        tracing::debug!(path = %path.display(), "evaluating prediction log");
        let report = logacc_core::evaluate_log_file(path)?;
        println!("{}", report);
        Ok(())
    }
}
