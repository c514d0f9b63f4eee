use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TrendChartData — per-plate feature statistics for trend rendering
// ---------------------------------------------------------------------------

/// One plate's contribution to an experiment trend chart. Built transiently
/// per request; `feature_stats` is empty when the stats of this plate could
/// not be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChartData {
    pub plate_id: i64,
    pub barcode: String,
    pub feature_stats: Vec<FeatureStatData>,
}

/// One statistic of one feature on one plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStatData {
    pub feature_id: i64,
    pub feature_name: String,
    pub stat_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat_value: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub well_type: Option<String>,
}
