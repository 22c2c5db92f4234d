//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    AppSettings, Group, GroupPatch, ReplaceStage, SearchEngine, SearchEnginePatch, Theme,
    Website, WebsitePatch, WebsitePlacement,
};
use anyhow::Result;
use async_trait::async_trait;

/// Failure of a bulk replace, with the step and position that failed
///
/// Implementations run the whole replace of one collection in a single
/// transaction, so a failure leaves the collection as it was before the call.
#[derive(Debug, thiserror::Error)]
#[error("{stage} failed at index {index}: {error:#}")]
pub struct ReplaceFailure {
    pub stage: ReplaceStage,
    pub index: usize,
    pub error: anyhow::Error,
}

impl ReplaceFailure {
    pub fn new(stage: ReplaceStage, index: usize, error: impl Into<anyhow::Error>) -> Self {
        Self {
            stage,
            index,
            error: error.into(),
        }
    }
}

/// Repository for bookmarked websites
#[async_trait]
pub trait WebsiteRepository: Send + Sync {
    /// All websites ordered by sort order, then creation time
    async fn list_all(&self) -> Result<Vec<Website>>;

    /// Websites of one group ordered by sort order
    async fn list_by_group(&self, group_id: &str) -> Result<Vec<Website>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Website>>;

    /// Sort order that appends after the last website of a group.
    /// `None` addresses the ungrouped websites.
    async fn next_sort_order(&self, group_id: Option<&str>) -> Result<i32>;

    async fn create(&self, website: &Website) -> Result<Website>;

    /// Apply a patch and bump `updated_at`; `None` if the id is unknown
    async fn update(&self, id: &str, patch: &WebsitePatch) -> Result<Option<Website>>;

    /// `false` if the id is unknown
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Assign `sort_order = index` to each id, atomically
    async fn reorder(&self, ids: &[String]) -> Result<()>;

    /// Delete every stored website, then insert `websites` in order
    async fn replace_all(&self, websites: &[Website]) -> Result<(), ReplaceFailure>;
}

/// Repository for search engines
///
/// Every write that sets `is_default` clears the flag on all other engines
/// inside the same transaction.
#[async_trait]
pub trait SearchEngineRepository: Send + Sync {
    /// All engines, default first, then by name
    async fn list_all(&self) -> Result<Vec<SearchEngine>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<SearchEngine>>;

    async fn create(&self, engine: &SearchEngine) -> Result<SearchEngine>;

    async fn update(&self, id: &str, patch: &SearchEnginePatch) -> Result<Option<SearchEngine>>;

    /// Remove an engine. When it held the default flag and engines remain,
    /// the first remaining engine by name becomes the default.
    /// `false` if the id is unknown.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Delete every stored engine, then insert `engines` in order
    async fn replace_all(&self, engines: &[SearchEngine]) -> Result<(), ReplaceFailure>;
}

/// Repository for website groups
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Group>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Group>>;

    async fn next_sort_order(&self) -> Result<i32>;

    async fn create(&self, group: &Group) -> Result<Group>;

    async fn update(&self, id: &str, patch: &GroupPatch) -> Result<Option<Group>>;

    /// Detach the group's websites and remove it, atomically
    async fn delete(&self, id: &str) -> Result<bool>;

    async fn reorder(&self, ids: &[String]) -> Result<()>;

    /// Move a website into a group (or out of any group)
    async fn move_website(&self, placement: &WebsitePlacement) -> Result<()>;
}

/// Column-level update of the settings row
///
/// Slices are already serialized. Applied as one write together with a fresh
/// `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsRecordPatch {
    pub theme: Option<Theme>,
    pub layout_config: Option<String>,
    pub background_config: Option<String>,
    pub card_style_config: Option<String>,
    pub search_config: Option<String>,
}

impl SettingsRecordPatch {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.layout_config.is_none()
            && self.background_config.is_none()
            && self.card_style_config.is_none()
            && self.search_config.is_none()
    }
}

/// Repository for the singleton settings row
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<AppSettings>>;

    /// `false` if the row does not exist
    async fn update(&self, patch: &SettingsRecordPatch) -> Result<bool>;

    /// Overwrite the whole row, creating it if needed
    async fn replace(&self, settings: &AppSettings) -> Result<()>;

    /// First-run provisioning; `true` if the row was created
    async fn insert_if_absent(&self, settings: &AppSettings) -> Result<bool>;
}
