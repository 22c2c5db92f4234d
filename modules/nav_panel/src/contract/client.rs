//! Native client trait for in-process callers
//!
//! Covers the settings aggregation and import/export surface. NO HTTP -
//! direct function calls.

use super::{
    error::NavPanelError,
    model::{AppSettingsView, ImportDocument, ImportSummary, SettingsPatch, Snapshot},
};
use async_trait::async_trait;

#[async_trait]
pub trait NavPanelApi: Send + Sync {
    // ===== Settings =====

    /// Current settings with the live engine list attached
    async fn get_settings(&self) -> Result<AppSettingsView, NavPanelError>;

    /// Replace the slices present in `patch`
    async fn update_settings(&self, patch: SettingsPatch)
        -> Result<AppSettingsView, NavPanelError>;

    /// Restore every slice and the theme to the built-in defaults
    async fn reset_settings(&self) -> Result<(), NavPanelError>;

    // ===== Export / import =====

    async fn export(&self) -> Result<Snapshot, NavPanelError>;

    async fn import(&self, document: ImportDocument) -> Result<ImportSummary, NavPanelError>;
}
