use serde::{Deserialize, Serialize};

/// Dataset for the token distribution donut chart.
///
/// The core builds it; a `ChartRenderer` draws it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub title: String,
    pub slices: Vec<ChartSlice>,
}

impl ChartDataset {
    /// Sum of all slice values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One slice of the distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// Asset symbol shown in the legend/tooltip
    pub name: String,

    /// Full-precision fiat value that sizes the slice
    pub value: f64,

    /// Value shown in the label (the native slice is rounded to cents)
    pub label_value: f64,

    /// Share of the chart total, in percent
    pub share_pct: f64,
}
