//! Shared test fixtures for the plate charting SDK integration tests.
//!
//! Provides hand-rolled in-memory mock providers plus `sample_sdk()`, which
//! wires up one plate of three wells with two calculated features.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use platechart_sdk::error::{ChartError, Result};
use platechart_sdk::models::{
    ChartTemplate, Feature, FeatureStat, Measurement, Plate, ResultSet, ResultVector, Setting,
    SettingKind, Well, WellStatus, WellSubstance,
};
use platechart_sdk::providers::{FeatureCatalog, FeatureResultProvider, WellDataProvider};
use platechart_sdk::{PlateChartSdk, TemplateStore};

// ---------------------------------------------------------------------------
// Mock providers
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockWellDataProvider {
    pub wells: HashMap<i64, Vec<Well>>,
    pub measurements: HashMap<i64, Vec<Measurement>>,
    pub plates_by_experiment: HashMap<i64, Vec<Plate>>,
}

impl WellDataProvider for MockWellDataProvider {
    fn get_wells(&self, plate_id: i64) -> Result<Vec<Well>> {
        self.wells
            .get(&plate_id)
            .cloned()
            .ok_or_else(|| ChartError::WellsUnresolvable(format!("plate {plate_id} unknown")))
    }

    fn get_plate_measurements(&self, plate_id: i64) -> Result<Vec<Measurement>> {
        self.measurements
            .get(&plate_id)
            .cloned()
            .ok_or_else(|| ChartError::WellsUnresolvable(format!("plate {plate_id} unknown")))
    }

    fn get_plates(&self, experiment_id: i64) -> Result<Vec<Plate>> {
        Ok(self
            .plates_by_experiment
            .get(&experiment_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MockFeatureResultProvider {
    /// Keyed by (plate id, measurement id).
    pub result_sets: HashMap<(i64, i64), ResultSet>,
    /// Keyed by result set id.
    pub vectors: HashMap<i64, Vec<ResultVector>>,
    /// Keyed by plate id.
    pub stats: HashMap<i64, Vec<FeatureStat>>,
    /// Plates whose stats lookup should fail.
    pub failing_stats: HashSet<i64>,
}

impl FeatureResultProvider for MockFeatureResultProvider {
    fn get_latest_result_set(&self, plate_id: i64, measurement_id: i64) -> Result<ResultSet> {
        self.result_sets
            .get(&(plate_id, measurement_id))
            .cloned()
            .ok_or_else(|| {
                ChartError::ResultSetUnresolvable(format!(
                    "no result set for plate {plate_id} measurement {measurement_id}"
                ))
            })
    }

    fn get_result_data(
        &self,
        result_set_id: i64,
        feature_id: Option<i64>,
    ) -> Result<Vec<ResultVector>> {
        let vectors = self.vectors.get(&result_set_id).ok_or_else(|| {
            ChartError::ResultDataUnresolvable(format!("result set {result_set_id} unknown"))
        })?;
        Ok(match feature_id {
            Some(id) => vectors.iter().filter(|v| v.feature_id == id).cloned().collect(),
            None => vectors.clone(),
        })
    }

    fn get_latest_feature_stats(&self, plate_id: i64) -> Result<Vec<FeatureStat>> {
        if self.failing_stats.contains(&plate_id) {
            return Err(ChartError::FeatureStatUnresolvable(format!(
                "stats for plate {plate_id} unavailable"
            )));
        }
        Ok(self.stats.get(&plate_id).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MockFeatureCatalog {
    pub features: HashMap<i64, Vec<Feature>>,
}

impl FeatureCatalog for MockFeatureCatalog {
    fn get_features_of_protocol(&self, protocol_id: i64) -> Result<Vec<Feature>> {
        self.features
            .get(&protocol_id)
            .cloned()
            .ok_or_else(|| ChartError::ProtocolUnresolvable(format!("protocol {protocol_id} unknown")))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn well(
    id: i64,
    row: i32,
    column: i32,
    well_type: &str,
    substance: Option<(&str, f64)>,
) -> Well {
    Well {
        id,
        plate_id: 1,
        row,
        column,
        well_type: well_type.to_string(),
        status: WellStatus::Accepted,
        substance: substance.map(|(name, concentration)| WellSubstance {
            name: name.to_string(),
            concentration: Some(concentration),
        }),
    }
}

pub fn feature_stat(feature_id: i64, name: &str, stat: &str, value: f32) -> FeatureStat {
    FeatureStat {
        feature_id,
        feature_name: name.to_string(),
        stat_name: stat.to_string(),
        value: Some(value),
        well_type: None,
    }
}

/// One plate (id 1) with three wells and two features:
///
/// - wells: 1 (r1c1, Sample), 2 (r1c2, Sample), 3 (r2c1, Control, no substance)
/// - active measurement 100, result set 500, protocol 1
/// - feature 10 "Feature 1" -> [1.1, 2.2, 3.3]
/// - feature 20 "Feature 2" -> [5.5, 6.6, 7.7]
pub fn sample_sdk() -> PlateChartSdk {
    let mut wells = MockWellDataProvider::default();
    wells.wells.insert(
        1,
        vec![
            well(1, 1, 1, "Sample", Some(("Filler", 0.01))),
            well(2, 1, 2, "Sample", Some(("Filler", 0.02))),
            well(3, 2, 1, "Control", None),
        ],
    );
    wells.measurements.insert(
        1,
        vec![
            Measurement {
                id: 1,
                plate_id: 1,
                measurement_id: 100,
                active: true,
            },
            Measurement {
                id: 2,
                plate_id: 1,
                measurement_id: 101,
                active: false,
            },
        ],
    );

    let mut results = MockFeatureResultProvider::default();
    results.result_sets.insert(
        (1, 100),
        ResultSet {
            id: 500,
            plate_id: 1,
            measurement_id: 100,
            protocol_id: 1,
        },
    );
    results.vectors.insert(
        500,
        vec![
            ResultVector {
                feature_id: 10,
                values: vec![1.1, 2.2, 3.3],
            },
            ResultVector {
                feature_id: 20,
                values: vec![5.5, 6.6, 7.7],
            },
        ],
    );

    let mut catalog = MockFeatureCatalog::default();
    catalog.features.insert(
        1,
        vec![
            Feature {
                id: 10,
                name: "Feature 1".to_string(),
                protocol_id: 1,
            },
            Feature {
                id: 20,
                name: "Feature 2".to_string(),
                protocol_id: 1,
            },
        ],
    );

    sdk_with(wells, results, catalog)
}

pub fn sdk_with(
    wells: MockWellDataProvider,
    results: MockFeatureResultProvider,
    catalog: MockFeatureCatalog,
) -> PlateChartSdk {
    PlateChartSdk::builder()
        .well_data_provider(Arc::new(wells))
        .feature_result_provider(Arc::new(results))
        .feature_catalog(Arc::new(catalog))
        .build()
        .unwrap()
}

/// SDK whose template store is seeded through the store interface, the way a
/// database fixture would be:
///
/// - template 1: "scatter", two axis settings ("size" = "10", "color" = "20")
///   and two chart settings ("title", "legend")
/// - template 2: "box", no settings
pub fn seeded_template_sdk() -> PlateChartSdk {
    let sdk = sdk_with(
        MockWellDataProvider::default(),
        MockFeatureResultProvider::default(),
        MockFeatureCatalog::default(),
    );
    let store = sdk.template_store();

    let bare = |chart_type: &str| ChartTemplate {
        id: None,
        chart_type: chart_type.to_string(),
        axis_x: "row".to_string(),
        axis_y: "column".to_string(),
        group_by: Some("wellType".to_string()),
        filter: None,
        axis_settings: None,
        chart_settings: None,
    };

    let first = store.create_template(bare("scatter")).unwrap();
    let template_id = first.id.unwrap();
    for (kind, name, value) in [
        (SettingKind::Axis, "size", "10"),
        (SettingKind::Axis, "color", "20"),
        (SettingKind::Chart, "title", "Dose response"),
        (SettingKind::Chart, "legend", "true"),
    ] {
        let mut setting = Setting::new(name, value);
        setting.chart_template_id = Some(template_id);
        setting.kind = Some(kind);
        store.create_setting(setting).unwrap();
    }
    store.create_template(bare("box")).unwrap();

    sdk
}
