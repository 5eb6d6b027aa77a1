use std::{fmt, path::Path};

use crate::{
    error::Result,
    extract,
    metrics::{AccuracyMetric, CorrectCountMetric, ExampleCountMetric, Metric, MetricValue},
    types::Extraction,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub total: MetricValue,
    pub correct: MetricValue,
    /// Percentage in `[0.0, 100.0]`.
    pub accuracy: MetricValue,
}

impl Report {
    pub fn from_extraction(extraction: &Extraction) -> Report {
        let mut total = ExampleCountMetric::new();
        let mut correct = CorrectCountMetric::new();
        let mut accuracy = AccuracyMetric::new();
        for record in extraction.records() {
            total.add_point(&record);
            correct.add_point(&record);
            accuracy.add_point(&record);
        }

        Report {
            total: total.get_value(),
            correct: correct.get_value(),
            accuracy: accuracy.get_value(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Predictions: {}", self.total)?;
        writeln!(f, "Correct Predictions: {}", self.correct)?;
        write!(f, "Accuracy: {}%", self.accuracy)
    }
}

pub fn evaluate_log_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    let extraction = extract::extract_from_file(path)?;
    Ok(Report::from_extraction(&extraction))
}
