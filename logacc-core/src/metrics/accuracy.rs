use crate::{metrics::Metric, types::Record};

use super::MetricValue;

/// Number of positions where the prediction equals the label. Pairs past the
/// end of the shorter slice are ignored.
pub fn count_correct<T: PartialEq>(predictions: &[T], labels: &[T]) -> usize {
    predictions
        .iter()
        .zip(labels.iter())
        .filter(|(prediction, label)| prediction == label)
        .count()
}

/// Percentage of exact matches in `[0.0, 100.0]`. Both slices are expected to
/// be the same length; an empty input yields `0.0`.
pub fn calculate_accuracy<T: PartialEq>(predictions: &[T], labels: &[T]) -> f64 {
    let total = predictions.len();
    percentage(count_correct(predictions, labels) as u64, total as u64)
}

fn percentage(correct: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (correct as f64 / total as f64) * 100.0
}

pub struct AccuracyMetric {
    pub correct: u64,
    pub count: u64,
}

impl AccuracyMetric {
    pub fn new() -> AccuracyMetric {
        AccuracyMetric {
            correct: 0,
            count: 0,
        }
    }
}

impl Default for AccuracyMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for AccuracyMetric {
    fn add_point(&mut self, record: &Record) {
        if record.is_correct() {
            self.correct += 1;
        }
        self.count += 1;
    }

    fn get_value(&self) -> MetricValue {
        MetricValue::Float(percentage(self.correct, self.count))
    }

    fn get_name(&self) -> String {
        "Accuracy".to_owned()
    }
}
