//! Website CRUD and ordering

use super::repository::{GroupRepository, WebsiteRepository};
use super::validation;
use crate::contract::{NavPanelError, NewWebsite, Website, WebsitePatch};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct WebsiteService {
    repo: Arc<dyn WebsiteRepository>,
    group_repo: Arc<dyn GroupRepository>,
}

impl WebsiteService {
    pub fn new(repo: Arc<dyn WebsiteRepository>, group_repo: Arc<dyn GroupRepository>) -> Self {
        Self { repo, group_repo }
    }

    pub async fn list(&self) -> Result<Vec<Website>, NavPanelError> {
        self.repo.list_all().await.map_err(NavPanelError::store)
    }

    pub async fn get(&self, id: &str) -> Result<Website, NavPanelError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("website", id))
    }

    /// Create a website at the end of its group
    pub async fn create(&self, new: NewWebsite) -> Result<Website, NavPanelError> {
        validation::validate_new_website(&new)?;

        if let Some(group_id) = &new.group_id {
            self.group_repo
                .find_by_id(group_id)
                .await
                .map_err(NavPanelError::store)?
                .ok_or_else(|| NavPanelError::not_found("group", group_id.as_str()))?;
        }

        let sort_order = self
            .repo
            .next_sort_order(new.group_id.as_deref())
            .await
            .map_err(NavPanelError::store)?;

        let now = Utc::now();
        let website = Website {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            url: new.url,
            icon: new.icon.filter(|icon| !icon.is_empty()),
            description: new.description,
            category: new.category,
            sort_order,
            group_id: new.group_id,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .repo
            .create(&website)
            .await
            .map_err(NavPanelError::store)?;
        tracing::debug!(id = %created.id, "website created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, patch: WebsitePatch) -> Result<Website, NavPanelError> {
        validation::validate_website_patch(&patch)?;

        self.repo
            .update(id, &patch)
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("website", id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), NavPanelError> {
        let deleted = self.repo.delete(id).await.map_err(NavPanelError::store)?;
        if !deleted {
            return Err(NavPanelError::not_found("website", id));
        }
        tracing::debug!(id, "website deleted");
        Ok(())
    }

    /// Assign sort orders following `ids` and return the re-ordered list
    pub async fn reorder(&self, ids: &[String]) -> Result<Vec<Website>, NavPanelError> {
        validation::validate_reorder(ids)?;

        for id in ids {
            self.get(id).await?;
        }

        self.repo.reorder(ids).await.map_err(NavPanelError::store)?;
        self.list().await
    }
}
