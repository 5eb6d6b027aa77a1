use std::fmt;

use crate::types::Record;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricValue {
    Int(u64),
    Float(f64),
}

// Floats are reported with two decimals.
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(value) => write!(f, "{}", value),
            MetricValue::Float(value) => write!(f, "{:.2}", value),
        }
    }
}

pub trait Metric {
    fn add_point(&mut self, record: &Record);
    fn get_value(&self) -> MetricValue;
    fn get_name(&self) -> String;
}
