pub mod series_builder;
pub mod trend;

pub use series_builder::ChartDataQuery;
pub use trend::TrendQuery;
