use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{Error, Result},
    types::{Extraction, Record, Value},
};

// The "." after the prediction digits is literal and must stay that way,
// otherwise a different set of lines would match.
static PREDICTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Prediction=([0-9]+)\.\s+Label=([0-9]+)").unwrap());

/// Pulls [`Record`]s out of free-form log lines such as
/// ` - image 17: Prediction=7. Label=7`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PredictionLogParser;

impl PredictionLogParser {
    pub fn new() -> PredictionLogParser {
        PredictionLogParser
    }

    /// Only the first match in the line is used.
    pub fn parse_line(&self, line: &str) -> Option<Record> {
        let captures = PREDICTION_PATTERN.captures(line)?;
        let prediction = Value::from_digits(&captures[1])?;
        let label = Value::from_digits(&captures[2])?;
        Some(Record::from_values(prediction, label))
    }

    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn extract_from_reader<R: BufRead>(&self, mut input: R) -> Result<Extraction> {
        let mut extraction = Extraction::new();
        let mut buffer = Vec::new();
        let mut scanned = 0;

        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let chunk = std::str::from_utf8(&buffer)
                .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

            for line in split_lines(chunk) {
                scanned += 1;
                match self.parse_line(line) {
                    Some(record) => extraction.push(record),
                    None => tracing::trace!(line = scanned, "no prediction on line"),
                }
            }
        }

        tracing::debug!(
            scanned,
            matched = extraction.len(),
            "finished scanning prediction log"
        );
        Ok(extraction)
    }

    /// Reads the whole file and fails if it does not contain a single record.
    pub fn extract_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(error),
        })?;

        let extraction = self.extract_from_reader(BufReader::new(file))?;
        if extraction.is_empty() {
            return Err(Error::NoPredictions);
        }
        Ok(extraction)
    }
}

// `chunk` holds at most one `\n`, at its end, so a `\r\n` pair is never split
// across chunks.
fn split_lines(chunk: &str) -> impl Iterator<Item = &str> {
    let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
    let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
    chunk.split('\r')
}

pub fn extract_from_file<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    PredictionLogParser::new().extract_from_file(path)
}
