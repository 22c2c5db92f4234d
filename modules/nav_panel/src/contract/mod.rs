//! Contract layer - public API for in-process callers
//!
//! Entity models are transport-agnostic and carry no serde derives. The
//! configuration slices are the exception: their JSON form is what gets
//! persisted on the settings row.

pub mod client;
pub mod error;
pub mod model;
pub mod slices;

pub use client::NavPanelApi;
pub use error::{ImportCollection, NavPanelError, ReplaceStage};
pub use model::{
    AppSettings, AppSettingsView, Group, GroupPatch, GroupWithWebsites, ImportDocument,
    ImportSummary, NewGroup, NewSearchEngine, NewWebsite, SearchEngine, SearchEnginePatch,
    SearchSettings, SettingsPatch, Snapshot, Website, WebsitePatch, WebsitePlacement,
};
pub use slices::{
    BackgroundConfig, BackgroundKind, CardSize, CardStyleConfig, LayoutConfig, SearchConfig,
    Theme,
};
