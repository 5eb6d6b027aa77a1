use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: File '{}' not found.", .0.display())]
    NotFound(PathBuf),
    #[error("Error while reading the file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Warning: No predictions found in the log file.")]
    NoPredictions,
}

pub type Result<T> = std::result::Result<T, Error>;
