//! Template persistence.
//!
//! [`TemplateStore`] is a generic keyed CRUD contract for chart templates and
//! their settings. [`InMemoryTemplateStore`] is the bundled implementation; a
//! host wanting durable storage supplies its own.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::error::{ChartError, Result};
use crate::models::{ChartTemplate, Setting, SettingKind};
use crate::templates::SettingsDiff;

// ---------------------------------------------------------------------------
// TemplateStore
// ---------------------------------------------------------------------------

/// Keyed CRUD persistence for chart templates and settings.
///
/// Stored template rows never carry nested settings; the template service
/// attaches those. `apply_diff` is the reconciler's transactional boundary:
/// either the whole diff is applied or nothing is.
pub trait TemplateStore: Send + Sync {
    /// Persist a new template, assigning its id.
    fn create_template(&self, template: ChartTemplate) -> Result<ChartTemplate>;

    fn find_template(&self, id: i64) -> Result<Option<ChartTemplate>>;

    fn find_all_templates(&self) -> Result<Vec<ChartTemplate>>;

    /// Upsert a template row by its id.
    fn save_template(&self, template: ChartTemplate) -> Result<ChartTemplate>;

    /// Delete a template row. Owned settings are deleted separately, first.
    fn delete_template(&self, id: i64) -> Result<()>;

    fn template_exists(&self, id: i64) -> Result<bool>;

    /// Persist a new setting, assigning its id. The owning template id and
    /// kind must already be set.
    fn create_setting(&self, setting: Setting) -> Result<Setting>;

    /// Settings of one (template, kind) pair, in store-defined order.
    fn find_settings(&self, template_id: i64, kind: SettingKind) -> Result<Vec<Setting>>;

    fn delete_settings_by_template(&self, template_id: i64) -> Result<()>;

    /// Apply a reconciliation diff for one (template, kind) pair atomically,
    /// deletes first, then updates, then inserts. Returns the refreshed
    /// persisted collection.
    fn apply_diff(
        &self,
        template_id: i64,
        kind: SettingKind,
        diff: SettingsDiff,
    ) -> Result<Vec<Setting>>;
}

// ---------------------------------------------------------------------------
// InMemoryTemplateStore
// ---------------------------------------------------------------------------

#[derive(Default)]
struct StoreInner {
    templates: BTreeMap<i64, ChartTemplate>,
    settings: BTreeMap<i64, Setting>,
    next_template_id: i64,
    next_setting_id: i64,
}

/// Mutex-guarded in-memory store. One lock acquisition per operation makes
/// `apply_diff` atomic without a separate transaction concept.
pub struct InMemoryTemplateStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                next_template_id: 1,
                next_setting_id: 1,
                ..StoreInner::default()
            }),
        }
    }
}

impl Default for InMemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    fn settings_of(&self, template_id: i64, kind: SettingKind) -> Vec<Setting> {
        self.settings
            .values()
            .filter(|s| s.chart_template_id == Some(template_id) && s.kind == Some(kind))
            .cloned()
            .collect()
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn create_template(&self, mut template: ChartTemplate) -> Result<ChartTemplate> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_template_id;
        inner.next_template_id += 1;
        template.id = Some(id);
        template.axis_settings = None;
        template.chart_settings = None;
        inner.templates.insert(id, template.clone());
        tracing::debug!(template_id = id, "chart template created");
        Ok(template)
    }

    fn find_template(&self, id: i64) -> Result<Option<ChartTemplate>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.templates.get(&id).cloned())
    }

    fn find_all_templates(&self) -> Result<Vec<ChartTemplate>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.templates.values().cloned().collect())
    }

    fn save_template(&self, mut template: ChartTemplate) -> Result<ChartTemplate> {
        let mut inner = self.inner.lock().unwrap();
        let id = template
            .id
            .ok_or_else(|| ChartError::InvalidArgument("template id required for save".into()))?;
        if !inner.templates.contains_key(&id) {
            return Err(ChartError::TemplateNotFound(id));
        }
        template.axis_settings = None;
        template.chart_settings = None;
        inner.templates.insert(id, template.clone());
        Ok(template)
    }

    fn delete_template(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.templates.remove(&id).is_none() {
            return Err(ChartError::TemplateNotFound(id));
        }
        tracing::debug!(template_id = id, "chart template deleted");
        Ok(())
    }

    fn template_exists(&self, id: i64) -> Result<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.templates.contains_key(&id))
    }

    fn create_setting(&self, mut setting: Setting) -> Result<Setting> {
        let mut inner = self.inner.lock().unwrap();
        let template_id = setting.chart_template_id.ok_or_else(|| {
            ChartError::InvalidArgument("settings require an owning template id".into())
        })?;
        if !inner.templates.contains_key(&template_id) {
            return Err(ChartError::TemplateNotFound(template_id));
        }
        let id = inner.next_setting_id;
        inner.next_setting_id += 1;
        setting.id = Some(id);
        inner.settings.insert(id, setting.clone());
        Ok(setting)
    }

    fn find_settings(&self, template_id: i64, kind: SettingKind) -> Result<Vec<Setting>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.settings_of(template_id, kind))
    }

    fn delete_settings_by_template(&self, template_id: i64) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .settings
            .retain(|_, s| s.chart_template_id != Some(template_id));
        Ok(())
    }

    fn apply_diff(
        &self,
        template_id: i64,
        kind: SettingKind,
        diff: SettingsDiff,
    ) -> Result<Vec<Setting>> {
        let mut inner = self.inner.lock().unwrap();

        // Validate before mutating so a failing diff leaves the store intact.
        if !inner.templates.contains_key(&template_id) {
            return Err(ChartError::TemplateNotFound(template_id));
        }
        for setting in &diff.to_update {
            let id = setting.id.ok_or_else(|| {
                ChartError::InvalidArgument("update candidates must carry an id".into())
            })?;
            if !inner.settings.contains_key(&id) {
                return Err(ChartError::SettingNotFound(id));
            }
        }

        for id in &diff.to_delete {
            inner.settings.remove(id);
        }
        for mut setting in diff.to_update {
            setting.chart_template_id = Some(template_id);
            setting.kind = Some(kind);
            let id = setting.id.expect("validated above");
            inner.settings.insert(id, setting);
        }
        for mut setting in diff.to_insert {
            let id = inner.next_setting_id;
            inner.next_setting_id += 1;
            setting.id = Some(id);
            setting.chart_template_id = Some(template_id);
            setting.kind = Some(kind);
            inner.settings.insert(id, setting);
        }

        Ok(inner.settings_of(template_id, kind))
    }
}
