//! Full-snapshot export and import
//!
//! Import replaces each collection present in the document inside its own
//! transaction, in the order websites, search engines, settings. A failing
//! collection is rolled back and stops the import; collections replaced
//! before it stay committed.

use super::repository::{
    ReplaceFailure, SearchEngineRepository, SettingsRepository, WebsiteRepository,
};
use super::settings::SETTINGS_ROW_ID;
use crate::contract::{
    ImportCollection, ImportDocument, ImportSummary, NavPanelError, ReplaceStage, Snapshot,
};
use std::sync::Arc;

pub struct TransferService {
    website_repo: Arc<dyn WebsiteRepository>,
    engine_repo: Arc<dyn SearchEngineRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
}

impl TransferService {
    pub fn new(
        website_repo: Arc<dyn WebsiteRepository>,
        engine_repo: Arc<dyn SearchEngineRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            website_repo,
            engine_repo,
            settings_repo,
        }
    }

    /// Read every collection and the settings row, one after another
    pub async fn export(&self) -> Result<Snapshot, NavPanelError> {
        let websites = self
            .website_repo
            .list_all()
            .await
            .map_err(NavPanelError::store)?;

        let search_engines = self
            .engine_repo
            .list_all()
            .await
            .map_err(NavPanelError::store)?;

        let settings = self
            .settings_repo
            .get()
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("settings", SETTINGS_ROW_ID.to_string()))?;

        tracing::info!(
            websites = websites.len(),
            search_engines = search_engines.len(),
            "export snapshot taken"
        );

        Ok(Snapshot {
            websites,
            search_engines,
            settings,
        })
    }

    /// Replace the collections present in `document`
    ///
    /// Settings blobs are written as given, without decoding them first.
    pub async fn import(&self, document: ImportDocument) -> Result<ImportSummary, NavPanelError> {
        let mut summary = ImportSummary::default();

        if let Some(websites) = &document.websites {
            self.website_repo
                .replace_all(websites)
                .await
                .map_err(|failure| partial_failure(ImportCollection::Websites, failure))?;
            tracing::info!(count = websites.len(), "websites replaced from import");
            summary.websites = Some(websites.len());
        }

        if let Some(engines) = &document.search_engines {
            self.engine_repo
                .replace_all(engines)
                .await
                .map_err(|failure| partial_failure(ImportCollection::SearchEngines, failure))?;
            tracing::info!(count = engines.len(), "search engines replaced from import");
            summary.search_engines = Some(engines.len());
        }

        if let Some(settings) = &document.settings {
            self.settings_repo
                .replace(settings)
                .await
                .map_err(|error| {
                    partial_failure(
                        ImportCollection::Settings,
                        ReplaceFailure::new(ReplaceStage::Overwrite, 0, error),
                    )
                })?;
            tracing::info!("settings overwritten from import");
            summary.settings = true;
        }

        Ok(summary)
    }
}

fn partial_failure(collection: ImportCollection, failure: ReplaceFailure) -> NavPanelError {
    tracing::error!(
        %collection,
        stage = %failure.stage,
        index = failure.index,
        error = %format!("{:#}", failure.error),
        "import aborted"
    );
    NavPanelError::ImportPartialFailure {
        collection,
        stage: failure.stage,
        index: failure.index,
        message: format!("{:#}", failure.error),
    }
}
