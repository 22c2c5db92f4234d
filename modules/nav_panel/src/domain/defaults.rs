//! Built-in defaults for the settings slices and the bootstrap search engines
//!
//! Used at first-run provisioning, by settings reset, and whenever a stored
//! slice cannot be decoded.

use super::codec;
use super::repository::SettingsRecordPatch;
use crate::contract::{
    AppSettings, BackgroundConfig, BackgroundKind, CardSize, CardStyleConfig, LayoutConfig,
    NavPanelError, SearchConfig, SearchEngine, Theme,
};
use chrono::{DateTime, Utc};

pub const DEFAULT_BACKGROUND: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

pub const DEFAULT_ENGINE_ID: &str = "google";

pub fn theme() -> Theme {
    Theme::Light
}

pub fn layout() -> LayoutConfig {
    LayoutConfig {
        columns: 6,
        card_size: CardSize::Medium,
        show_labels: true,
        gap: 20,
    }
}

pub fn background() -> BackgroundConfig {
    BackgroundConfig {
        kind: BackgroundKind::Gradient,
        value: DEFAULT_BACKGROUND.to_string(),
    }
}

pub fn card_style() -> CardStyleConfig {
    CardStyleConfig {
        border_radius: 12,
        opacity: 0.9,
        shadow: true,
    }
}

pub fn search() -> SearchConfig {
    SearchConfig {
        enabled: true,
        default_engine_id: DEFAULT_ENGINE_ID.to_string(),
        open_in_new_tab: true,
    }
}

/// Starter search engines, `google` marked default
pub fn bootstrap_search_engines() -> Vec<SearchEngine> {
    [
        ("google", "Google", "https://www.google.com/search?q={}", "Search with Google...", true),
        ("baidu", "Baidu", "https://www.baidu.com/s?wd={}", "Search with Baidu...", false),
        ("bing", "Bing", "https://www.bing.com/search?q={}", "Search with Bing...", false),
        ("github", "GitHub", "https://github.com/search?q={}", "Search GitHub...", false),
    ]
    .into_iter()
    .map(|(id, name, url, placeholder, is_default)| SearchEngine {
        id: id.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        icon: None,
        placeholder: Some(placeholder.to_string()),
        is_default,
    })
    .collect()
}

/// Every column of the settings row set to its default
pub fn settings_patch() -> Result<SettingsRecordPatch, NavPanelError> {
    Ok(SettingsRecordPatch {
        theme: Some(theme()),
        layout_config: Some(codec::encode(&layout())?),
        background_config: Some(codec::encode(&background())?),
        card_style_config: Some(codec::encode(&card_style())?),
        search_config: Some(codec::encode(&search())?),
    })
}

/// Settings row written at first run
pub fn settings_record(now: DateTime<Utc>) -> Result<AppSettings, NavPanelError> {
    let patch = settings_patch()?;
    Ok(AppSettings {
        theme: theme(),
        layout_config: patch.layout_config,
        background_config: patch.background_config,
        card_style_config: patch.card_style_config,
        search_config: patch.search_config,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_blobs_match_legacy_rows() {
        // Rows provisioned by earlier releases must decode to the same values
        let patch = settings_patch().unwrap();
        assert_eq!(
            patch.layout_config.as_deref(),
            Some(r#"{"columns":6,"cardSize":"medium","showLabels":true,"gap":20}"#)
        );
        assert_eq!(
            patch.background_config.as_deref(),
            Some(r#"{"type":"gradient","value":"linear-gradient(135deg, #667eea 0%, #764ba2 100%)"}"#)
        );
        assert_eq!(
            patch.card_style_config.as_deref(),
            Some(r#"{"borderRadius":12,"opacity":0.9,"shadow":true}"#)
        );
        assert_eq!(
            patch.search_config.as_deref(),
            Some(r#"{"enabled":true,"defaultEngineId":"google","openInNewTab":true}"#)
        );
        assert_eq!(patch.theme, Some(Theme::Light));
    }

    #[test]
    fn bootstrap_engines_have_a_single_default() {
        let engines = bootstrap_search_engines();
        let ids: Vec<_> = engines.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["google", "baidu", "bing", "github"]);

        let defaults: Vec<_> = engines.iter().filter(|e| e.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, DEFAULT_ENGINE_ID);
        assert!(engines.iter().all(|e| e.url.contains("{}")));
    }
}
