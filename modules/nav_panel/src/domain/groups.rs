//! Website groups

use super::repository::{GroupRepository, WebsiteRepository};
use super::validation;
use crate::contract::{
    Group, GroupPatch, GroupWithWebsites, NavPanelError, NewGroup, WebsitePlacement,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct GroupService {
    repo: Arc<dyn GroupRepository>,
    website_repo: Arc<dyn WebsiteRepository>,
}

impl GroupService {
    pub fn new(repo: Arc<dyn GroupRepository>, website_repo: Arc<dyn WebsiteRepository>) -> Self {
        Self { repo, website_repo }
    }

    pub async fn list(&self) -> Result<Vec<Group>, NavPanelError> {
        self.repo.list_all().await.map_err(NavPanelError::store)
    }

    /// Every group with its websites in display order
    pub async fn list_with_websites(&self) -> Result<Vec<GroupWithWebsites>, NavPanelError> {
        let groups = self.list().await?;
        let mut result = Vec::with_capacity(groups.len());

        for group in groups {
            let websites = self
                .website_repo
                .list_by_group(&group.id)
                .await
                .map_err(NavPanelError::store)?;
            result.push(GroupWithWebsites { group, websites });
        }

        Ok(result)
    }

    pub async fn get(&self, id: &str) -> Result<Group, NavPanelError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("group", id))
    }

    pub async fn create(&self, new: NewGroup) -> Result<Group, NavPanelError> {
        validation::validate_new_group(&new)?;

        let sort_order = self
            .repo
            .next_sort_order()
            .await
            .map_err(NavPanelError::store)?;

        let now = Utc::now();
        let group = Group {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            color: new.color,
            icon: new.icon,
            sort_order,
            is_collapsed: false,
            created_at: now,
            updated_at: now,
        };

        self.repo.create(&group).await.map_err(NavPanelError::store)
    }

    pub async fn update(&self, id: &str, patch: GroupPatch) -> Result<Group, NavPanelError> {
        validation::validate_group_patch(&patch)?;

        self.repo
            .update(id, &patch)
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("group", id))
    }

    /// Remove a group; its websites become ungrouped
    pub async fn delete(&self, id: &str) -> Result<(), NavPanelError> {
        let deleted = self.repo.delete(id).await.map_err(NavPanelError::store)?;
        if !deleted {
            return Err(NavPanelError::not_found("group", id));
        }
        tracing::debug!(id, "group deleted");
        Ok(())
    }

    pub async fn reorder(&self, ids: &[String]) -> Result<(), NavPanelError> {
        validation::validate_reorder(ids)?;

        for id in ids {
            self.get(id).await?;
        }

        self.repo.reorder(ids).await.map_err(NavPanelError::store)
    }

    pub async fn move_website(&self, placement: WebsitePlacement) -> Result<(), NavPanelError> {
        if placement.website_id.trim().is_empty() {
            return Err(NavPanelError::validation("websiteId cannot be empty"));
        }
        if matches!(placement.position, Some(position) if position < 0) {
            return Err(NavPanelError::validation("position cannot be negative"));
        }

        self.website_repo
            .find_by_id(&placement.website_id)
            .await
            .map_err(NavPanelError::store)?
            .ok_or_else(|| NavPanelError::not_found("website", placement.website_id.as_str()))?;

        if let Some(group_id) = &placement.group_id {
            self.get(group_id).await?;
        }

        self.repo
            .move_website(&placement)
            .await
            .map_err(NavPanelError::store)
    }
}
