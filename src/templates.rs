//! Chart template lifecycle and settings reconciliation.
//!
//! A template owns two collections of settings scoped by [`SettingKind`]. On
//! update, each submitted collection is reconciled against the persisted one:
//! items that keep their id are updated in place, items without an id are
//! inserted, persisted items whose id is no longer submitted are deleted. A
//! collection that is not submitted at all is left untouched.

use std::collections::{HashMap, HashSet};

use crate::error::{ChartError, Result};
use crate::models::{ChartTemplate, Setting, SettingKind};
use crate::PlateChartSdk;

// ---------------------------------------------------------------------------
// SettingsDiff / reconcile
// ---------------------------------------------------------------------------

/// The insert/update/delete sets computed by [`reconcile`]. Applied in the
/// order deletes, updates, inserts so a freed id can never collide with a
/// surviving row and updates never race new siblings.
#[derive(Debug, Clone, Default)]
pub struct SettingsDiff {
    pub to_delete: Vec<i64>,
    pub to_update: Vec<Setting>,
    pub to_insert: Vec<Setting>,
}

impl SettingsDiff {
    pub fn is_noop(&self) -> bool {
        self.to_delete.is_empty() && self.to_update.is_empty() && self.to_insert.is_empty()
    }
}

/// Compute the minimal change set turning `persisted` into `desired` while
/// preserving the identity of every kept setting.
///
/// Both collections are scoped to one (template, kind) pair. Membership is
/// decided by id-set difference; desired items carrying an id are update
/// candidates applied unconditionally, not diffed field by field.
pub fn reconcile(desired: &[Setting], persisted: &[Setting]) -> SettingsDiff {
    let desired_ids: HashSet<i64> = desired.iter().filter_map(|s| s.id).collect();
    let persisted_by_id: HashMap<i64, &Setting> =
        persisted.iter().filter_map(|s| s.id.map(|id| (id, s))).collect();

    let to_delete = persisted
        .iter()
        .filter_map(|s| s.id)
        .filter(|id| !desired_ids.contains(id))
        .collect();

    let mut to_update = Vec::new();
    let mut to_insert = Vec::new();
    for setting in desired {
        match setting.id {
            Some(id) if persisted_by_id.contains_key(&id) => to_update.push(setting.clone()),
            // An id unknown to the persisted collection is treated as a new
            // item; the store assigns a fresh id on insert.
            _ => to_insert.push(setting.clone()),
        }
    }

    SettingsDiff {
        to_delete,
        to_update,
        to_insert,
    }
}

// ---------------------------------------------------------------------------
// TemplateQuery
// ---------------------------------------------------------------------------

/// CRUD surface for chart templates with nested settings.
pub struct TemplateQuery<'a> {
    sdk: &'a PlateChartSdk,
}

impl<'a> TemplateQuery<'a> {
    pub(crate) fn new(sdk: &'a PlateChartSdk) -> Self {
        Self { sdk }
    }

    /// Persist a new template and its settings. The template row is created
    /// first so every setting is born with an owning template id.
    pub fn create(&self, template: ChartTemplate) -> Result<ChartTemplate> {
        let axis = template.axis_settings.clone().unwrap_or_default();
        let chart = template.chart_settings.clone().unwrap_or_default();

        let created = self.sdk.store.create_template(template)?;
        let id = created.id.expect("store assigns template id on create");

        for (kind, settings) in [(SettingKind::Axis, axis), (SettingKind::Chart, chart)] {
            for mut setting in settings {
                setting.id = None;
                setting.chart_template_id = Some(id);
                setting.kind = Some(kind);
                self.sdk.store.create_setting(setting)?;
            }
        }

        self.get(id)
    }

    /// Update a template row and reconcile its submitted settings, both
    /// kinds symmetrically. Fails with `TemplateNotFound` before touching
    /// anything when `id` is unknown.
    pub fn update(&self, id: i64, mut template: ChartTemplate) -> Result<ChartTemplate> {
        if !self.sdk.store.template_exists(id)? {
            return Err(ChartError::TemplateNotFound(id));
        }

        let axis = template.axis_settings.take();
        let chart = template.chart_settings.take();
        template.id = Some(id);
        self.sdk.store.save_template(template)?;

        for (kind, desired) in [(SettingKind::Axis, axis), (SettingKind::Chart, chart)] {
            // A missing collection means "no change requested" for that kind.
            let Some(desired) = desired else { continue };
            let persisted = self.sdk.store.find_settings(id, kind)?;
            let diff = reconcile(&desired, &persisted);
            if !diff.is_noop() {
                self.sdk.store.apply_diff(id, kind, diff)?;
            }
        }

        self.get(id)
    }

    /// Delete a template and everything it owns. Settings go first so the
    /// template row is never orphan-referenced.
    pub fn delete(&self, id: i64) -> Result<()> {
        if !self.sdk.store.template_exists(id)? {
            return Err(ChartError::TemplateNotFound(id));
        }
        self.sdk.store.delete_settings_by_template(id)?;
        self.sdk.store.delete_template(id)
    }

    /// A template with both nested settings collections attached.
    pub fn get(&self, id: i64) -> Result<ChartTemplate> {
        let mut template = self
            .sdk
            .store
            .find_template(id)?
            .ok_or(ChartError::TemplateNotFound(id))?;
        template.axis_settings = Some(self.sdk.store.find_settings(id, SettingKind::Axis)?);
        template.chart_settings = Some(self.sdk.store.find_settings(id, SettingKind::Chart)?);
        Ok(template)
    }

    /// All templates with nested settings, in store order.
    pub fn list(&self) -> Result<Vec<ChartTemplate>> {
        let templates = self.sdk.store.find_all_templates()?;
        templates
            .into_iter()
            .map(|t| self.get(t.id.expect("stored templates have ids")))
            .collect()
    }
}
