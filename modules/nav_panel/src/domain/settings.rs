//! Settings aggregation
//!
//! Reads decode each slice independently and attach the live search engine
//! list. Updates replace whole slices; there is no merge inside a slice.

use super::codec::{self, ConfigSlice};
use super::defaults;
use super::repository::{SearchEngineRepository, SettingsRecordPatch, SettingsRepository};
use super::validation;
use crate::contract::{
    AppSettings, AppSettingsView, NavPanelError, SearchEngine, SearchSettings, SettingsPatch,
};
use std::sync::Arc;

/// Fixed key of the singleton settings row
pub const SETTINGS_ROW_ID: i32 = 1;

/// Merges the stored settings slices with the search engine store
pub struct SettingsService {
    settings_repo: Arc<dyn SettingsRepository>,
    engine_repo: Arc<dyn SearchEngineRepository>,
}

impl SettingsService {
    pub fn new(
        settings_repo: Arc<dyn SettingsRepository>,
        engine_repo: Arc<dyn SearchEngineRepository>,
    ) -> Self {
        Self {
            settings_repo,
            engine_repo,
        }
    }

    /// Current settings with every slice decoded
    pub async fn get(&self) -> Result<AppSettingsView, NavPanelError> {
        let record = self
            .settings_repo
            .get()
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("settings", SETTINGS_ROW_ID.to_string()))?;

        let engines = self
            .engine_repo
            .list_all()
            .await
            .map_err(NavPanelError::store)?;

        Ok(assemble(record, engines))
    }

    /// Replace the slices present in `patch` and return the new state
    pub async fn update(&self, patch: SettingsPatch) -> Result<AppSettingsView, NavPanelError> {
        validation::validate_settings_patch(&patch)?;

        let staged = stage(&patch)?;
        if staged.is_empty() {
            tracing::debug!("settings update without slices; returning current state");
            return self.get().await;
        }

        self.write(&staged).await?;
        tracing::debug!(
            theme = staged.theme.is_some(),
            layout = staged.layout_config.is_some(),
            background = staged.background_config.is_some(),
            card_style = staged.card_style_config.is_some(),
            search = staged.search_config.is_some(),
            "settings updated"
        );

        self.get().await
    }

    /// Restore the theme and every slice to the built-in defaults
    pub async fn reset(&self) -> Result<(), NavPanelError> {
        let staged = defaults::settings_patch()?;
        self.write(&staged).await?;
        tracing::info!("settings reset to defaults");
        Ok(())
    }

    async fn write(&self, staged: &SettingsRecordPatch) -> Result<(), NavPanelError> {
        let found = self
            .settings_repo
            .update(staged)
            .await
            .map_err(NavPanelError::store)?;

        if !found {
            return Err(NavPanelError::not_found(
                "settings",
                SETTINGS_ROW_ID.to_string(),
            ));
        }
        Ok(())
    }
}

fn stage_slice<T: ConfigSlice>(slice: Option<&T>) -> Result<Option<String>, NavPanelError> {
    slice.map(codec::encode).transpose()
}

/// Encode the present slices into column updates
fn stage(patch: &SettingsPatch) -> Result<SettingsRecordPatch, NavPanelError> {
    Ok(SettingsRecordPatch {
        theme: patch.theme,
        layout_config: stage_slice(patch.layout.as_ref())?,
        background_config: stage_slice(patch.background.as_ref())?,
        card_style_config: stage_slice(patch.card_style.as_ref())?,
        search_config: stage_slice(patch.search.as_ref())?,
    })
}

fn assemble(record: AppSettings, engines: Vec<SearchEngine>) -> AppSettingsView {
    AppSettingsView {
        theme: record.theme,
        layout: codec::decode(record.layout_config.as_deref()),
        background: codec::decode(record.background_config.as_deref()),
        card_style: codec::decode(record.card_style_config.as_deref()),
        search: SearchSettings {
            config: codec::decode(record.search_config.as_deref()),
            engines,
        },
        updated_at: record.updated_at,
    }
}
