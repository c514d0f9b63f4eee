//! External collaborator contracts.
//!
//! The SDK never talks to a database or remote service itself; it consumes
//! these traits and leaves transport, authentication and retries to the
//! implementations. All calls are synchronous request/response and should
//! respect whatever deadline the host imposes, failing with a resolution
//! error rather than hanging.

use crate::error::Result;
use crate::models::{Feature, FeatureStat, Measurement, Plate, ResultSet, ResultVector, Well};

// ---------------------------------------------------------------------------
// WellDataProvider
// ---------------------------------------------------------------------------

/// Source of plate, well and measurement metadata.
pub trait WellDataProvider: Send + Sync {
    /// All wells of a plate, in the provider's canonical well order. Result
    /// vectors for the same plate are index-aligned with this order.
    ///
    /// Fails with [`ChartError::WellsUnresolvable`](crate::ChartError::WellsUnresolvable)
    /// if the plate is unknown.
    fn get_wells(&self, plate_id: i64) -> Result<Vec<Well>>;

    /// All measurements linked to a plate. Exactly one is expected active.
    fn get_plate_measurements(&self, plate_id: i64) -> Result<Vec<Measurement>>;

    /// All plates of an experiment. An unknown experiment yields an empty
    /// list, not an error.
    fn get_plates(&self, experiment_id: i64) -> Result<Vec<Plate>>;
}

// ---------------------------------------------------------------------------
// FeatureResultProvider
// ---------------------------------------------------------------------------

/// Source of calculated result sets, result vectors and feature statistics.
pub trait FeatureResultProvider: Send + Sync {
    /// The latest result set for a plate/measurement pair.
    fn get_latest_result_set(&self, plate_id: i64, measurement_id: i64) -> Result<ResultSet>;

    /// Result vectors of a result set. With `feature_id` set, only that
    /// feature's vector is returned.
    fn get_result_data(
        &self,
        result_set_id: i64,
        feature_id: Option<i64>,
    ) -> Result<Vec<ResultVector>>;

    /// The latest per-feature statistics for a plate.
    fn get_latest_feature_stats(&self, plate_id: i64) -> Result<Vec<FeatureStat>>;
}

// ---------------------------------------------------------------------------
// FeatureCatalog
// ---------------------------------------------------------------------------

/// Resolves feature identifiers to display names for a protocol.
pub trait FeatureCatalog: Send + Sync {
    fn get_features_of_protocol(&self, protocol_id: i64) -> Result<Vec<Feature>>;
}
