use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Well — one physical sample position on a plate
// ---------------------------------------------------------------------------

/// Immutable well snapshot as returned by the well data provider.
///
/// Wells for one plate are index-aligned with the result vectors of that
/// plate's result set: value `i` of a vector belongs to well `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Well {
    pub id: i64,
    pub plate_id: i64,
    pub row: i32,
    pub column: i32,
    pub well_type: String,
    pub status: WellStatus,
    pub substance: Option<WellSubstance>,
}

impl Well {
    /// Substance name, or an empty string when the well carries none.
    pub fn substance_name(&self) -> &str {
        self.substance.as_ref().map(|s| s.name.as_str()).unwrap_or("")
    }
}

/// Acceptance status of a well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WellStatus {
    Accepted,
    AcceptedDefault,
    Rejected,
}

impl WellStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WellStatus::Accepted => "ACCEPTED",
            WellStatus::AcceptedDefault => "ACCEPTED_DEFAULT",
            WellStatus::Rejected => "REJECTED",
        }
    }
}

/// Substance dosed into a well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellSubstance {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concentration: Option<f64>,
}

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

/// One measurement run linked to a plate. Exactly one measurement is expected
/// to be active per plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub id: i64,
    pub plate_id: i64,
    pub measurement_id: i64,
    pub active: bool,
}

// ---------------------------------------------------------------------------
// Plate
// ---------------------------------------------------------------------------

/// Plate summary used by the trend assembly: only plates whose calculation
/// succeeded contribute statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub id: i64,
    pub barcode: String,
    pub calculation_status: CalculationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationStatus {
    CalculationOk,
    CalculationNeeded,
    CalculationInProgress,
    CalculationError,
}
