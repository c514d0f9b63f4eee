//! Trend assembly: per-plate feature statistics across an experiment.
//!
//! Each plate is fetched independently so one plate's transient failure does
//! not blank the trend chart for the whole experiment. This is the only place
//! in the SDK where an upstream error is swallowed instead of propagated.

use crate::error::Result;
use crate::models::{CalculationStatus, FeatureStatData, TrendChartData};
use crate::PlateChartSdk;

// ---------------------------------------------------------------------------
// TrendQuery
// ---------------------------------------------------------------------------

/// Query interface for plate-to-plate trend data.
pub struct TrendQuery<'a> {
    sdk: &'a PlateChartSdk,
}

impl<'a> TrendQuery<'a> {
    pub(crate) fn new(sdk: &'a PlateChartSdk) -> Self {
        Self { sdk }
    }

    /// One [`TrendChartData`] per successfully calculated plate of the
    /// experiment, in the provider's plate order.
    ///
    /// An experiment without plates yields an empty list. Plates whose
    /// statistics cannot be resolved are kept with an empty stats list; the
    /// failure is logged, not propagated.
    pub fn trend_chart_data(&self, experiment_id: i64) -> Result<Vec<TrendChartData>> {
        let plates = self.sdk.wells.get_plates(experiment_id)?;

        let mut trend = Vec::new();
        for plate in plates
            .iter()
            .filter(|p| p.calculation_status == CalculationStatus::CalculationOk)
        {
            let feature_stats = match self.sdk.results.get_latest_feature_stats(plate.id) {
                Ok(stats) => stats
                    .into_iter()
                    .map(|s| FeatureStatData {
                        feature_id: s.feature_id,
                        feature_name: s.feature_name,
                        stat_name: s.stat_name,
                        stat_value: s.value,
                        well_type: s.well_type,
                    })
                    .collect(),
                Err(e) => {
                    tracing::warn!(
                        plate_id = plate.id,
                        error = %e,
                        "feature stats unresolvable, continuing with empty stats"
                    );
                    Vec::new()
                }
            };
            trend.push(TrendChartData {
                plate_id: plate.id,
                barcode: plate.barcode.clone(),
                feature_stats,
            });
        }

        Ok(trend)
    }
}
