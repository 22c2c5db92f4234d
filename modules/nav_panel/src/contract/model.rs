//! Contract models for the nav panel
//!
//! These models are transport-agnostic and used for in-process communication.
//! NO serde derives - wire formats live in `api::rest::dto`.

use super::slices::{
    BackgroundConfig, CardStyleConfig, LayoutConfig, SearchConfig, Theme,
};
use chrono::{DateTime, Utc};

// ===== Websites =====

/// Bookmarked website shown as a card on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Website {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Zero-based display position
    pub sort_order: i32,
    /// Owning group; cleared when the group is deleted
    pub group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a website
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewWebsite {
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub group_id: Option<String>,
}

/// Partial website update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsitePatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

// ===== Search engines =====

/// Search engine offered by the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    /// Stable, caller-assigned identifier
    pub id: String,
    pub name: String,
    /// URL template; `{}` is replaced by the query
    pub url: String,
    /// Icon as a `data:` URL
    pub icon: Option<String>,
    pub placeholder: Option<String>,
    /// At most one engine carries the flag
    pub is_default: bool,
}

/// Fields accepted when creating a search engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSearchEngine {
    pub id: String,
    pub name: String,
    pub url: String,
    /// Data-URL or bare base64 image
    pub icon: Option<String>,
    pub placeholder: Option<String>,
    pub is_default: bool,
}

/// Partial search engine update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEnginePatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub placeholder: Option<String>,
    pub is_default: Option<bool>,
}

// ===== Groups =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_collapsed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupWithWebsites {
    pub group: Group,
    pub websites: Vec<Website>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub is_collapsed: Option<bool>,
}

/// Target of a website move between groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsitePlacement {
    pub website_id: String,
    /// `None` moves the website out of any group
    pub group_id: Option<String>,
    /// Position inside the target group; appended when absent
    pub position: Option<i32>,
}

// ===== Settings =====

/// Persisted settings row with the slices in serialized form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub theme: Theme,
    pub layout_config: Option<String>,
    pub background_config: Option<String>,
    pub card_style_config: Option<String>,
    pub search_config: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Search slice merged with the current engine list
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub config: SearchConfig,
    pub engines: Vec<SearchEngine>,
}

/// Decoded settings as served to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettingsView {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub background: BackgroundConfig,
    pub card_style: CardStyleConfig,
    pub search: SearchSettings,
    pub updated_at: DateTime<Utc>,
}

/// Settings update; each present slice replaces the stored one wholesale
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub layout: Option<LayoutConfig>,
    pub background: Option<BackgroundConfig>,
    pub card_style: Option<CardStyleConfig>,
    pub search: Option<SearchConfig>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.layout.is_none()
            && self.background.is_none()
            && self.card_style.is_none()
            && self.search.is_none()
    }
}

// ===== Export / import =====

/// Full snapshot produced by export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub websites: Vec<Website>,
    pub search_engines: Vec<SearchEngine>,
    pub settings: AppSettings,
}

/// Import document; absent collections leave the store untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportDocument {
    pub websites: Option<Vec<Website>>,
    pub search_engines: Option<Vec<SearchEngine>>,
    pub settings: Option<AppSettings>,
}

/// What an import actually replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub websites: Option<usize>,
    pub search_engines: Option<usize>,
    pub settings: bool,
}

impl From<Snapshot> for ImportDocument {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            websites: Some(snapshot.websites),
            search_engines: Some(snapshot.search_engines),
            settings: Some(snapshot.settings),
        }
    }
}
