use serde::{Deserialize, Serialize};

// =========================================================
// Shared chart series types
// =========================================================

/// Chart-ready series: parallel labels and values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl LabeledSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for LabeledSeries {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let mut series = LabeledSeries::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}
