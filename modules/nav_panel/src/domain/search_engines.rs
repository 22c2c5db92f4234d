//! Search engine CRUD
//!
//! The single-default rule is enforced by the repository: every write that
//! sets the flag clears it elsewhere in the same transaction.

use super::icon;
use super::repository::SearchEngineRepository;
use super::validation;
use crate::contract::{NavPanelError, NewSearchEngine, SearchEngine, SearchEnginePatch};
use std::sync::Arc;

pub struct SearchEngineService {
    repo: Arc<dyn SearchEngineRepository>,
    max_icon_bytes: usize,
}

impl SearchEngineService {
    pub fn new(repo: Arc<dyn SearchEngineRepository>, max_icon_bytes: usize) -> Self {
        Self {
            repo,
            max_icon_bytes,
        }
    }

    /// Default engine first, then by name
    pub async fn list(&self) -> Result<Vec<SearchEngine>, NavPanelError> {
        self.repo.list_all().await.map_err(NavPanelError::store)
    }

    pub async fn get(&self, id: &str) -> Result<SearchEngine, NavPanelError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("search engine", id))
    }

    pub async fn create(&self, new: NewSearchEngine) -> Result<SearchEngine, NavPanelError> {
        validation::validate_new_search_engine(&new)?;
        let icon = self.parse_icon(new.icon.as_deref())?;

        let existing = self
            .repo
            .find_by_id(&new.id)
            .await
            .map_err(NavPanelError::store)?;
        if existing.is_some() {
            return Err(NavPanelError::conflict(format!(
                "search engine '{}' already exists",
                new.id
            )));
        }

        let engine = SearchEngine {
            id: new.id,
            name: new.name,
            url: new.url,
            icon,
            placeholder: new.placeholder,
            is_default: new.is_default,
        };

        let created = self
            .repo
            .create(&engine)
            .await
            .map_err(NavPanelError::store)?;
        tracing::debug!(id = %created.id, is_default = created.is_default, "search engine created");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: &str,
        mut patch: SearchEnginePatch,
    ) -> Result<SearchEngine, NavPanelError> {
        validation::validate_search_engine_patch(&patch)?;

        // An empty icon clears it; anything else is parsed
        if let Some(input) = patch.icon.take() {
            patch.icon = Some(self.parse_icon(Some(input.as_str()))?.unwrap_or_default());
        }

        self.repo
            .update(id, &patch)
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("search engine", id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), NavPanelError> {
        let deleted = self.repo.delete(id).await.map_err(NavPanelError::store)?;
        if !deleted {
            return Err(NavPanelError::not_found("search engine", id));
        }
        tracing::debug!(id, "search engine deleted");
        Ok(())
    }

    fn parse_icon(&self, input: Option<&str>) -> Result<Option<String>, NavPanelError> {
        match input.map(str::trim) {
            None | Some("") => Ok(None),
            Some(input) => icon::normalize_icon(input, self.max_icon_bytes).map(Some),
        }
    }
}
