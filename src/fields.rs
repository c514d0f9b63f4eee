//! Field and grouping dispatch.
//!
//! Request parameters arrive as strings; they are parsed once at the boundary
//! into closed enums so the dispatch below is exhaustively checked instead of
//! going through a runtime string-keyed function table.

use std::str::FromStr;

use crate::error::{ChartError, Result};
use crate::models::Well;

// ---------------------------------------------------------------------------
// FieldType
// ---------------------------------------------------------------------------

/// Whether an axis field names a calculated feature or a well property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Feature,
    WellProperty,
}

impl FromStr for FieldType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FEATURE" => Ok(FieldType::Feature),
            "WELL_PROPERTY" => Ok(FieldType::WellProperty),
            other => Err(ChartError::UnknownFieldType(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// WellProperty
// ---------------------------------------------------------------------------

/// The fixed table of well property accessors usable as axis fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellProperty {
    WellId,
    Row,
    Column,
    WellNr,
    WellType,
    WellSubstance,
    WellConcentration,
}

impl FromStr for WellProperty {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wellId" => Ok(WellProperty::WellId),
            "row" => Ok(WellProperty::Row),
            "column" => Ok(WellProperty::Column),
            "wellNr" => Ok(WellProperty::WellNr),
            "wellType" => Ok(WellProperty::WellType),
            "wellSubstance" => Ok(WellProperty::WellSubstance),
            "wellConcentration" => Ok(WellProperty::WellConcentration),
            other => Err(ChartError::UnknownField(other.to_string())),
        }
    }
}

impl WellProperty {
    /// Extract this property from every well, in well order.
    ///
    /// `wellNr` is the sequential position on the plate grid,
    /// `(row - 1) * columns + column`, with the column count taken from the
    /// widest well of the plate.
    pub fn extract(&self, wells: &[Well]) -> Vec<String> {
        let max_column = wells.iter().map(|w| w.column).max().unwrap_or(0);
        wells
            .iter()
            .map(|well| match self {
                WellProperty::WellId => well.id.to_string(),
                WellProperty::Row => well.row.to_string(),
                WellProperty::Column => well.column.to_string(),
                WellProperty::WellNr => {
                    ((well.row - 1) * max_column + well.column).to_string()
                }
                WellProperty::WellType => well.well_type.clone(),
                WellProperty::WellSubstance => well.substance_name().to_string(),
                WellProperty::WellConcentration => well
                    .substance
                    .as_ref()
                    .and_then(|s| s.concentration)
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// GroupBy
// ---------------------------------------------------------------------------

/// Classification rule mapping a well to the label of the series it joins.
///
/// `None` carries the literal request token so all ungrouped wells share one
/// series named after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupBy {
    WellType,
    Substance,
    Row,
    Column,
    Status,
    None(String),
}

impl GroupBy {
    /// Case-insensitive parse of the request token. Unrecognized tokens are a
    /// configuration error, fatal for the request.
    pub fn parse(token: &str) -> Result<Self> {
        match token.to_ascii_lowercase().as_str() {
            "welltype" => Ok(GroupBy::WellType),
            "substance" => Ok(GroupBy::Substance),
            "row" => Ok(GroupBy::Row),
            "column" => Ok(GroupBy::Column),
            "status" => Ok(GroupBy::Status),
            "none" => Ok(GroupBy::None(token.to_string())),
            _ => Err(ChartError::UnsupportedGroupBy(token.to_string())),
        }
    }

    /// The group label of a well under this rule. A blank label means the
    /// well is excluded from all series (e.g. no substance under substance
    /// grouping).
    pub fn classify(&self, well: &Well) -> String {
        match self {
            GroupBy::WellType => well.well_type.clone(),
            GroupBy::Substance => well.substance_name().to_string(),
            GroupBy::Row => well.row.to_string(),
            GroupBy::Column => well.column.to_string(),
            GroupBy::Status => well.status.as_str().to_string(),
            GroupBy::None(token) => token.clone(),
        }
    }
}
