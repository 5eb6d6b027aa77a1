use crate::{metrics::Metric, types::Record};

use super::MetricValue;

pub struct ExampleCountMetric {
    pub count: u64,
}

impl ExampleCountMetric {
    pub fn new() -> ExampleCountMetric {
        ExampleCountMetric { count: 0 }
    }
}

impl Default for ExampleCountMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for ExampleCountMetric {
    fn add_point(&mut self, _record: &Record) {
        self.count += 1;
    }

    fn get_value(&self) -> MetricValue {
        MetricValue::Int(self.count)
    }

    fn get_name(&self) -> String {
        "Total Predictions".to_owned()
    }
}

pub struct CorrectCountMetric {
    pub correct: u64,
}

impl CorrectCountMetric {
    pub fn new() -> CorrectCountMetric {
        CorrectCountMetric { correct: 0 }
    }
}

impl Default for CorrectCountMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for CorrectCountMetric {
    fn add_point(&mut self, record: &Record) {
        if record.is_correct() {
            self.correct += 1;
        }
    }

    fn get_value(&self) -> MetricValue {
        MetricValue::Int(self.correct)
    }

    fn get_name(&self) -> String {
        "Correct Predictions".to_owned()
    }
}
