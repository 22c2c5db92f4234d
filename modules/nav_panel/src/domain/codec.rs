//! Encoding and decoding of the settings slices
//!
//! Decoding never fails: a missing or malformed blob resolves to the slice's
//! built-in default. Malformed blobs are reported as a `warn` event with the
//! slice kind so that store corruption stays visible to operators.

use super::defaults;
use crate::contract::{
    BackgroundConfig, CardStyleConfig, LayoutConfig, NavPanelError, SearchConfig,
};
use serde::{de::DeserializeOwned, Serialize};

/// Identifies a settings slice in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Layout,
    Background,
    CardStyle,
    Search,
}

impl std::fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConfigKind::Layout => "layout",
            ConfigKind::Background => "background",
            ConfigKind::CardStyle => "cardStyle",
            ConfigKind::Search => "search",
        })
    }
}

/// A settings slice persisted as its own JSON document
pub trait ConfigSlice: Serialize + DeserializeOwned {
    const KIND: ConfigKind;

    /// Value used when the stored document is absent or unreadable
    fn fallback() -> Self;
}

impl ConfigSlice for LayoutConfig {
    const KIND: ConfigKind = ConfigKind::Layout;

    fn fallback() -> Self {
        defaults::layout()
    }
}

impl ConfigSlice for BackgroundConfig {
    const KIND: ConfigKind = ConfigKind::Background;

    fn fallback() -> Self {
        defaults::background()
    }
}

impl ConfigSlice for CardStyleConfig {
    const KIND: ConfigKind = ConfigKind::CardStyle;

    fn fallback() -> Self {
        defaults::card_style()
    }
}

impl ConfigSlice for SearchConfig {
    const KIND: ConfigKind = ConfigKind::Search;

    fn fallback() -> Self {
        defaults::search()
    }
}

/// Decode a stored slice, falling back to its default
///
/// A blob missing any field of the slice counts as malformed. The whole
/// default is returned; fields are never filled in one by one.
pub fn decode<T: ConfigSlice>(blob: Option<&str>) -> T {
    let Some(raw) = blob else {
        tracing::debug!(kind = %T::KIND, "config slice not set; using default");
        return T::fallback();
    };

    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                kind = %T::KIND,
                %error,
                "stored config slice is malformed; using default"
            );
            T::fallback()
        }
    }
}

/// Serialize a slice for storage
pub fn encode<T: ConfigSlice>(value: &T) -> Result<String, NavPanelError> {
    serde_json::to_string(value).map_err(|error| {
        tracing::error!(kind = %T::KIND, %error, "failed to encode config slice");
        NavPanelError::Internal
    })
}
