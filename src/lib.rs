//! Plate charting SDK.
//!
//! Assembles chart-ready datasets for a plate-based laboratory data viewer:
//! well metadata, feature result vectors and per-plate statistics are fetched
//! from pluggable providers, joined by well/feature identity and reshaped
//! into named, grouped series for scatter/box/histogram/trend rendering.
//! Persisted chart templates with their axis/chart settings are managed
//! through a keyed template store.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use platechart_sdk::PlateChartSdk;
//! # use platechart_sdk::providers::{WellDataProvider, FeatureResultProvider, FeatureCatalog};
//! # fn providers() -> (Arc<dyn WellDataProvider>, Arc<dyn FeatureResultProvider>, Arc<dyn FeatureCatalog>) { unimplemented!() }
//!
//! let (wells, results, features) = providers();
//! let sdk = PlateChartSdk::builder()
//!     .well_data_provider(wells)
//!     .feature_result_provider(results)
//!     .feature_catalog(features)
//!     .build()
//!     .unwrap();
//!
//! // Grouped scatter data: feature 12 vs feature 7, one series per well type
//! let series = sdk.charts().scatter_plot_data(
//!     1, None, "12", "FEATURE", "7", "FEATURE", "welltype",
//! ).unwrap();
//! ```

pub mod charts;
pub mod error;
pub mod fields;
pub mod models;
pub mod providers;
pub mod store;
pub mod templates;

pub use error::{ChartError, Result};
pub use store::{InMemoryTemplateStore, TemplateStore};

use std::fmt;
use std::sync::Arc;

use providers::{FeatureCatalog, FeatureResultProvider, WellDataProvider};

// ---------------------------------------------------------------------------
// PlateChartSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PlateChartSdk`] instance.
///
/// The three provider implementations are mandatory; the template store
/// defaults to the bundled [`InMemoryTemplateStore`].
#[derive(Default)]
pub struct PlateChartSdkBuilder {
    wells: Option<Arc<dyn WellDataProvider>>,
    results: Option<Arc<dyn FeatureResultProvider>>,
    features: Option<Arc<dyn FeatureCatalog>>,
    store: Option<Arc<dyn TemplateStore>>,
}

impl PlateChartSdkBuilder {
    /// Set the well/plate metadata provider.
    pub fn well_data_provider(mut self, provider: Arc<dyn WellDataProvider>) -> Self {
        self.wells = Some(provider);
        self
    }

    /// Set the feature result provider.
    pub fn feature_result_provider(mut self, provider: Arc<dyn FeatureResultProvider>) -> Self {
        self.results = Some(provider);
        self
    }

    /// Set the feature catalog.
    pub fn feature_catalog(mut self, catalog: Arc<dyn FeatureCatalog>) -> Self {
        self.features = Some(catalog);
        self
    }

    /// Use a custom template store instead of the in-memory default.
    pub fn template_store(mut self, store: Arc<dyn TemplateStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the SDK. Fails when a mandatory provider is missing.
    pub fn build(self) -> Result<PlateChartSdk> {
        let missing = |what: &str| ChartError::InvalidArgument(format!("missing provider: {what}"));
        Ok(PlateChartSdk {
            wells: self.wells.ok_or_else(|| missing("well data provider"))?,
            results: self
                .results
                .ok_or_else(|| missing("feature result provider"))?,
            features: self.features.ok_or_else(|| missing("feature catalog"))?,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(InMemoryTemplateStore::new())),
        })
    }
}

// ---------------------------------------------------------------------------
// PlateChartSdk
// ---------------------------------------------------------------------------

/// The main entry point of the SDK.
///
/// Owns the provider handles and the template store, and exposes the
/// domain-specific query interfaces as lightweight borrowing wrappers.
/// Created via [`PlateChartSdk::builder()`].
pub struct PlateChartSdk {
    pub(crate) wells: Arc<dyn WellDataProvider>,
    pub(crate) results: Arc<dyn FeatureResultProvider>,
    pub(crate) features: Arc<dyn FeatureCatalog>,
    pub(crate) store: Arc<dyn TemplateStore>,
}

impl PlateChartSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PlateChartSdkBuilder {
        PlateChartSdkBuilder::default()
    }

    /// Access the chart data query interface (scatter/box/histogram series
    /// and the per-well tuple export).
    pub fn charts(&self) -> charts::ChartDataQuery<'_> {
        charts::ChartDataQuery::new(self)
    }

    /// Access the trend query interface.
    pub fn trends(&self) -> charts::TrendQuery<'_> {
        charts::TrendQuery::new(self)
    }

    /// Access the chart template CRUD interface.
    pub fn templates(&self) -> templates::TemplateQuery<'_> {
        templates::TemplateQuery::new(self)
    }

    /// Return a handle to the underlying template store for advanced usage.
    pub fn template_store(&self) -> Arc<dyn TemplateStore> {
        Arc::clone(&self.store)
    }
}

impl fmt::Display for PlateChartSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlateChartSdk(providers=[wells, results, features], store=template)")
    }
}
