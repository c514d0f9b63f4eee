use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

/// The chart kinds the series builder can assemble data for.
///
/// The kind decides which axes are collected: histograms take x only, box
/// plots take y only, scatter plots take both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatter,
    Box,
    Histogram,
    Trend,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Scatter => "scatter",
            ChartKind::Box => "box",
            ChartKind::Histogram => "histogram",
            ChartKind::Trend => "trend",
        }
    }

    pub(crate) fn collects_x(&self) -> bool {
        matches!(self, ChartKind::Scatter | ChartKind::Histogram)
    }

    pub(crate) fn collects_y(&self) -> bool {
        matches!(self, ChartKind::Scatter | ChartKind::Box)
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// One named chart series: the values of all wells that share a group label.
///
/// Produced fresh per request, never persisted. Point order within a series
/// follows the well iteration order of the plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Plotly-style trace mode, set for scatter series ("markers").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub x_values: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub y_values: Vec<String>,
}

impl Series {
    pub fn new(name: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            name: name.into(),
            kind,
            mode: match kind {
                ChartKind::Scatter => Some("markers".to_string()),
                _ => None,
            },
            x_values: Vec::new(),
            y_values: Vec::new(),
        }
    }

    /// Number of points in this series.
    pub fn len(&self) -> usize {
        self.x_values.len().max(self.y_values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// ChartTuple — per-well name/value pair for the tuple export
// ---------------------------------------------------------------------------

/// One named value of a single well (a well property or a feature value),
/// used by the flat per-well export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTuple {
    pub name: String,
    pub value: String,
}

impl ChartTuple {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// All tuples of one well, keyed by the well id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellChartData {
    pub well_id: i64,
    pub values: Vec<ChartTuple>,
}
