use std::fmt;

/// A non-negative integer read from the log, of any length. Held as its
/// decimal digits with leading zeros removed, so equal integers compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Value(String);

impl Value {
    /// `None` unless `digits` is a non-empty run of ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Value> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Value(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One aligned prediction/label pair taken from a single log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub prediction: Value,
    pub label: Value,
}

impl Record {
    pub fn new(prediction: u64, label: u64) -> Record {
        Record {
            prediction: prediction.into(),
            label: label.into(),
        }
    }

    pub fn from_values(prediction: Value, label: Value) -> Record {
        Record { prediction, label }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.prediction == self.label
    }
}

// Same shape the extractor matches, so a formatted record round trips.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prediction={}. Label={}", self.prediction, self.label)
    }
}

/// Predictions and labels in file order. Index `i` of one belongs to index
/// `i` of the other; both only grow through [`Extraction::push`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    predictions: Vec<Value>,
    labels: Vec<Value>,
}

impl Extraction {
    pub fn new() -> Extraction {
        Extraction::default()
    }

    pub fn push(&mut self, record: Record) {
        self.predictions.push(record.prediction);
        self.labels.push(record.label);
    }

    pub fn predictions(&self) -> &[Value] {
        &self.predictions
    }

    pub fn labels(&self) -> &[Value] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.predictions
            .iter()
            .zip(self.labels.iter())
            .map(|(prediction, label)| Record::from_values(prediction.clone(), label.clone()))
    }
}

impl FromIterator<Record> for Extraction {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut extraction = Extraction::new();
        for record in iter {
            extraction.push(record);
        }
        extraction
    }
}
