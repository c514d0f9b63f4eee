use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Feature — a named measured/computed quantity of a protocol
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: i64,
    pub name: String,
    pub protocol_id: i64,
}

// ---------------------------------------------------------------------------
// ResultSet / ResultVector
// ---------------------------------------------------------------------------

/// The latest calculation run for a plate/measurement pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub id: i64,
    pub plate_id: i64,
    pub measurement_id: i64,
    pub protocol_id: i64,
}

/// Per-feature numeric output of a result set, one value per well.
///
/// Invariant: `values.len()` equals the well count of the plate the result
/// set was calculated for. The series builder checks this before joining.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultVector {
    pub feature_id: i64,
    pub values: Vec<f32>,
}

// ---------------------------------------------------------------------------
// FeatureStat
// ---------------------------------------------------------------------------

/// One per-plate feature statistic (e.g. a z-prime or mean) as reported by
/// the result provider. `well_type` is set for per-welltype statistics and
/// absent for plate-wide ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStat {
    pub feature_id: i64,
    pub feature_name: String,
    pub stat_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub well_type: Option<String>,
}
