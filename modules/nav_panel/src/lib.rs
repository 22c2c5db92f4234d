//! Nav Panel Module
//!
//! Backend of a personal dashboard: bookmarked websites (optionally grouped),
//! configurable search engines and display preferences, plus full-snapshot
//! export/import of all of it.
//!
//! Display preferences are stored as four independently serialized slices
//! (layout, background, card style, search) on a single settings row and are
//! merged with the live search-engine list on every read.

// Public exports
pub mod contract;
pub use contract::{
    client::NavPanelApi, error::NavPanelError, AppSettings, AppSettingsView, BackgroundConfig,
    BackgroundKind, CardSize, CardStyleConfig, ImportDocument, LayoutConfig, SearchConfig,
    SearchEngine, SettingsPatch, Snapshot, Theme, Website,
};

pub mod module;
pub use module::NavPanelModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
