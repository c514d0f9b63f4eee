use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ChartTemplate
// ---------------------------------------------------------------------------

/// A persisted, reusable chart configuration plus its named settings.
///
/// `id` is `None` until the template is persisted. Settings only ever exist
/// for a persisted template; the store assigns the owning template id before
/// creating them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub chart_type: String,
    pub axis_x: String,
    pub axis_y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// `None` means "no change requested" on update, not "delete all".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_settings: Option<Vec<Setting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_settings: Option<Vec<Setting>>,
}

// ---------------------------------------------------------------------------
// Setting
// ---------------------------------------------------------------------------

/// Scope of a setting within its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingKind {
    Axis,
    Chart,
}

/// A single named configuration value owned by a chart template.
///
/// `id` is `None` for items not yet persisted. On update, an item that keeps
/// its id keeps its identity even when name or value change; an item whose id
/// is absent from the desired collection is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_template_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<SettingKind>,
    pub name: String,
    pub value: String,
}

impl Setting {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: None,
            chart_template_id: None,
            kind: None,
            name: name.into(),
            value: value.into(),
        }
    }
}
