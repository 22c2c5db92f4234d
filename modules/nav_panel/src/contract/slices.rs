//! Configuration slices of the settings row
//!
//! Each slice is persisted as its own JSON document. Field names are camelCase
//! to stay compatible with documents written by earlier releases.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Website card size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Small,
    Medium,
    Large,
}

/// Grid layout of the website cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Number of grid columns, at least 1
    pub columns: u32,
    pub card_size: CardSize,
    pub show_labels: bool,
    /// Gap between cards in pixels
    pub gap: u32,
}

/// How `BackgroundConfig::value` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Gradient,
    Color,
    Image,
}

/// Page background
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BackgroundConfig {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    /// CSS value: a gradient, a colour or an image URL depending on `kind`
    pub value: String,
}

/// Website card appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardStyleConfig {
    pub border_radius: u32,
    /// Card opacity in `[0, 1]`
    pub opacity: f64,
    pub shadow: bool,
}

/// Search box behaviour
///
/// The engine list is not part of this slice: it is read from the search
/// engine store and attached at read time (see `SearchSettings`). Unknown
/// keys, including a stray `engines` array, are ignored on decode and can
/// never be written back because the type has nowhere to keep them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub enabled: bool,
    pub default_engine_id: String,
    pub open_in_new_tab: bool,
}
