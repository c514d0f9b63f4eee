//! Grouped series assembly.
//!
//! Joins well metadata with per-feature result vectors by index alignment,
//! classifies each well into a group label and folds the values into one
//! series per label. Grouping is a single linear pass over the joined data;
//! chart consumers treat the series collection as unordered, so the output
//! map only has to be deterministic, not creation-ordered.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{ChartError, Result};
use crate::fields::{FieldType, GroupBy, WellProperty};
use crate::models::{ChartKind, ChartTuple, ResultSet, ResultVector, Series, Well, WellChartData};
use crate::PlateChartSdk;

// ---------------------------------------------------------------------------
// ChartDataQuery
// ---------------------------------------------------------------------------

/// Query interface for scatter/box/histogram chart data and the flat per-well
/// tuple export.
pub struct ChartDataQuery<'a> {
    sdk: &'a PlateChartSdk,
}

impl<'a> ChartDataQuery<'a> {
    pub(crate) fn new(sdk: &'a PlateChartSdk) -> Self {
        Self { sdk }
    }

    // -- Chart kinds --------------------------------------------------------

    /// Grouped scatter data: x and y values per series.
    #[allow(clippy::too_many_arguments)]
    pub fn scatter_plot_data(
        &self,
        plate_id: i64,
        protocol_id: Option<i64>,
        x_field_name: &str,
        x_field_type: &str,
        y_field_name: &str,
        y_field_type: &str,
        group_by: &str,
    ) -> Result<BTreeMap<String, Series>> {
        self.grouped_series(
            plate_id,
            protocol_id,
            Some((x_field_name, x_field_type)),
            Some((y_field_name, y_field_type)),
            group_by,
            ChartKind::Scatter,
        )
    }

    /// Grouped box plot data: y values per series.
    pub fn box_plot_data(
        &self,
        plate_id: i64,
        protocol_id: Option<i64>,
        y_field_name: &str,
        y_field_type: &str,
        group_by: &str,
    ) -> Result<BTreeMap<String, Series>> {
        self.grouped_series(
            plate_id,
            protocol_id,
            None,
            Some((y_field_name, y_field_type)),
            group_by,
            ChartKind::Box,
        )
    }

    /// Grouped histogram data: x values per series.
    pub fn histogram_data(
        &self,
        plate_id: i64,
        protocol_id: Option<i64>,
        x_field_name: &str,
        x_field_type: &str,
        group_by: &str,
    ) -> Result<BTreeMap<String, Series>> {
        self.grouped_series(
            plate_id,
            protocol_id,
            Some((x_field_name, x_field_type)),
            None,
            group_by,
            ChartKind::Histogram,
        )
    }

    // -- Field resolution ---------------------------------------------------

    /// Resolve an axis field to one string value per well, in well order.
    ///
    /// `field_type` is `"FEATURE"` (field name is a feature id, values come
    /// from the plate's latest result set) or `"WELL_PROPERTY"` (field name
    /// is looked up in the fixed accessor table). Feature values are
    /// formatted with their shortest round-trip decimal representation.
    pub fn resolve_field_values(
        &self,
        plate_id: i64,
        protocol_id: Option<i64>,
        field_name: &str,
        field_type: &str,
    ) -> Result<Vec<String>> {
        let wells = self.sdk.wells.get_wells(plate_id)?;
        self.resolve_values(&wells, plate_id, protocol_id, field_name, field_type)
    }

    fn resolve_values(
        &self,
        wells: &[Well],
        plate_id: i64,
        protocol_id: Option<i64>,
        field_name: &str,
        field_type: &str,
    ) -> Result<Vec<String>> {
        match FieldType::from_str(field_type)? {
            FieldType::Feature => {
                let feature_id: i64 = field_name
                    .parse()
                    .map_err(|_| ChartError::UnknownField(field_name.to_string()))?;
                let result_set = self.latest_result_set(plate_id)?;
                self.check_feature_known(feature_id, protocol_id.unwrap_or(result_set.protocol_id))?;
                let vector = self.feature_vector(result_set.id, feature_id)?;
                if vector.values.len() != wells.len() {
                    return Err(ChartError::LengthMismatch {
                        feature_id,
                        expected: wells.len(),
                        actual: vector.values.len(),
                    });
                }
                Ok(vector.values.iter().map(|v| v.to_string()).collect())
            }
            FieldType::WellProperty => {
                let property = WellProperty::from_str(field_name)?;
                Ok(property.extract(wells))
            }
        }
    }

    // -- Tuple export -------------------------------------------------------

    /// Flat per-well export: one record per well carrying its properties and
    /// one tuple per feature with the well's value. Wells are returned in
    /// ascending well id order.
    pub fn chart_tuples(&self, plate_id: i64) -> Result<Vec<WellChartData>> {
        // Vectors are index-aligned with the provider's well order, so the
        // join happens in that order; records are sorted by id afterwards.
        let wells = self.sdk.wells.get_wells(plate_id)?;

        let result_set = self.latest_result_set(plate_id)?;
        let vectors = self.sdk.results.get_result_data(result_set.id, None)?;
        let features = self
            .sdk
            .features
            .get_features_of_protocol(result_set.protocol_id)?;

        let mut records: Vec<WellChartData> = wells
            .iter()
            .map(|well| WellChartData {
                well_id: well.id,
                values: vec![
                    ChartTuple::new("WellId", well.id.to_string()),
                    ChartTuple::new("PlateId", well.plate_id.to_string()),
                    ChartTuple::new("Row", well.row.to_string()),
                    ChartTuple::new("Column", well.column.to_string()),
                    ChartTuple::new("WellType", well.well_type.clone()),
                    ChartTuple::new("WellStatus", well.status.as_str()),
                    ChartTuple::new("WellSubstance", well.substance_name()),
                ],
            })
            .collect();

        for vector in &vectors {
            // Vectors of features not present in the protocol are skipped.
            let Some(feature) = features.iter().find(|f| f.id == vector.feature_id) else {
                continue;
            };
            if vector.values.len() != wells.len() {
                return Err(ChartError::LengthMismatch {
                    feature_id: vector.feature_id,
                    expected: wells.len(),
                    actual: vector.values.len(),
                });
            }
            for (record, value) in records.iter_mut().zip(&vector.values) {
                record
                    .values
                    .push(ChartTuple::new(feature.name.clone(), value.to_string()));
            }
        }

        records.sort_by_key(|r| r.well_id);
        Ok(records)
    }

    /// Tuple export for several plates, concatenated in plate id order of the
    /// input.
    pub fn chart_tuples_for_plates(&self, plate_ids: &[i64]) -> Result<Vec<WellChartData>> {
        let mut all = Vec::new();
        for &plate_id in plate_ids {
            all.extend(self.chart_tuples(plate_id)?);
        }
        Ok(all)
    }

    // -- Assembly -----------------------------------------------------------

    /// Fetch wells once, resolve the axis value sequences once, then fold
    /// every well's values into the series of its group label. Wells with a
    /// blank label are excluded from all series. Series are created lazily on
    /// first use, so one label maps to exactly one series per request.
    fn grouped_series(
        &self,
        plate_id: i64,
        protocol_id: Option<i64>,
        x_field: Option<(&str, &str)>,
        y_field: Option<(&str, &str)>,
        group_by: &str,
        kind: ChartKind,
    ) -> Result<BTreeMap<String, Series>> {
        let group_by = GroupBy::parse(group_by)?;
        let wells = self.sdk.wells.get_wells(plate_id)?;

        let x_values = match (kind.collects_x(), x_field) {
            (true, Some((name, ty))) => {
                Some(self.resolve_values(&wells, plate_id, protocol_id, name, ty)?)
            }
            _ => None,
        };
        let y_values = match (kind.collects_y(), y_field) {
            (true, Some((name, ty))) => {
                Some(self.resolve_values(&wells, plate_id, protocol_id, name, ty)?)
            }
            _ => None,
        };

        let mut series: BTreeMap<String, Series> = BTreeMap::new();
        for (i, well) in wells.iter().enumerate() {
            let label = group_by.classify(well);
            if label.is_empty() {
                continue;
            }
            let entry = series
                .entry(label.clone())
                .or_insert_with(|| Series::new(label, kind));
            if let Some(xs) = &x_values {
                entry.x_values.push(xs[i].clone());
            }
            if let Some(ys) = &y_values {
                entry.y_values.push(ys[i].clone());
            }
        }

        Ok(series)
    }

    // -- Provider helpers ---------------------------------------------------

    /// The latest result set of a plate, reached through its single active
    /// measurement.
    fn latest_result_set(&self, plate_id: i64) -> Result<ResultSet> {
        let measurements = self.sdk.wells.get_plate_measurements(plate_id)?;
        let active = measurements
            .iter()
            .find(|m| m.active)
            .ok_or(ChartError::NoActiveMeasurement(plate_id))?;
        self.sdk
            .results
            .get_latest_result_set(plate_id, active.measurement_id)
    }

    fn check_feature_known(&self, feature_id: i64, protocol_id: i64) -> Result<()> {
        let features = self.sdk.features.get_features_of_protocol(protocol_id)?;
        if features.iter().any(|f| f.id == feature_id) {
            Ok(())
        } else {
            Err(ChartError::UnknownField(feature_id.to_string()))
        }
    }

    fn feature_vector(&self, result_set_id: i64, feature_id: i64) -> Result<ResultVector> {
        let vectors = self.sdk.results.get_result_data(result_set_id, Some(feature_id))?;
        vectors
            .into_iter()
            .find(|v| v.feature_id == feature_id)
            .ok_or_else(|| {
                ChartError::ResultDataUnresolvable(format!(
                    "no result data for feature {} in result set {}",
                    feature_id, result_set_id
                ))
            })
    }
}
