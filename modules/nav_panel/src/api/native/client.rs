//! Native client implementation - wraps the domain services for in-process calls

use crate::contract::{
    AppSettingsView, ImportDocument, ImportSummary, NavPanelApi, NavPanelError, SettingsPatch,
    Snapshot,
};
use crate::domain::Services;
use async_trait::async_trait;
use std::sync::Arc;

/// In-process client calling the domain services directly, without HTTP
#[derive(Clone)]
pub struct NativeClient {
    services: Arc<Services>,
}

impl NativeClient {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl NavPanelApi for NativeClient {
    async fn get_settings(&self) -> Result<AppSettingsView, NavPanelError> {
        self.services.settings.get().await
    }

    async fn update_settings(
        &self,
        patch: SettingsPatch,
    ) -> Result<AppSettingsView, NavPanelError> {
        self.services.settings.update(patch).await
    }

    async fn reset_settings(&self) -> Result<(), NavPanelError> {
        self.services.settings.reset().await
    }

    async fn export(&self) -> Result<Snapshot, NavPanelError> {
        self.services.transfer.export().await
    }

    async fn import(&self, document: ImportDocument) -> Result<ImportSummary, NavPanelError> {
        self.services.transfer.import(document).await
    }
}
