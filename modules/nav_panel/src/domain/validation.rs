//! Presence and shape checks applied before anything reaches storage

use crate::contract::{
    GroupPatch, NavPanelError, NewGroup, NewSearchEngine, NewWebsite, SearchEnginePatch,
    SettingsPatch, WebsitePatch,
};

/// Placeholder substituted with the query in a search URL template
pub const QUERY_PLACEHOLDER: &str = "{}";

fn require(field: &str, value: &str) -> Result<(), NavPanelError> {
    if value.trim().is_empty() {
        return Err(NavPanelError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_if_present(field: &str, value: Option<&String>) -> Result<(), NavPanelError> {
    match value {
        Some(value) => require(field, value),
        None => Ok(()),
    }
}

fn require_query_placeholder(url: &str) -> Result<(), NavPanelError> {
    if !url.contains(QUERY_PLACEHOLDER) {
        return Err(NavPanelError::validation(format!(
            "url must contain the query placeholder '{QUERY_PLACEHOLDER}'"
        )));
    }
    Ok(())
}

/// Validate the slices of a settings update
pub fn validate_settings_patch(patch: &SettingsPatch) -> Result<(), NavPanelError> {
    if let Some(layout) = &patch.layout {
        if layout.columns == 0 {
            return Err(NavPanelError::validation("layout.columns must be at least 1"));
        }
    }

    if let Some(card_style) = &patch.card_style {
        let opacity = card_style.opacity;
        if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
            return Err(NavPanelError::validation(format!(
                "cardStyle.opacity must be between 0 and 1, got {opacity}"
            )));
        }
    }

    Ok(())
}

pub fn validate_new_website(website: &NewWebsite) -> Result<(), NavPanelError> {
    require("name", &website.name)?;
    require("url", &website.url)
}

pub fn validate_website_patch(patch: &WebsitePatch) -> Result<(), NavPanelError> {
    require_if_present("name", patch.name.as_ref())?;
    require_if_present("url", patch.url.as_ref())
}

pub fn validate_new_search_engine(engine: &NewSearchEngine) -> Result<(), NavPanelError> {
    require("id", &engine.id)?;
    require("name", &engine.name)?;
    require("url", &engine.url)?;
    require_query_placeholder(&engine.url)
}

pub fn validate_search_engine_patch(patch: &SearchEnginePatch) -> Result<(), NavPanelError> {
    require_if_present("name", patch.name.as_ref())?;
    if let Some(url) = &patch.url {
        require("url", url)?;
        require_query_placeholder(url)?;
    }
    Ok(())
}

pub fn validate_new_group(group: &NewGroup) -> Result<(), NavPanelError> {
    require("name", &group.name)
}

pub fn validate_group_patch(patch: &GroupPatch) -> Result<(), NavPanelError> {
    require_if_present("name", patch.name.as_ref())
}

/// Reorder requests must name at least one entity, each once
pub fn validate_reorder(ids: &[String]) -> Result<(), NavPanelError> {
    if ids.is_empty() {
        return Err(NavPanelError::validation("id list cannot be empty"));
    }
    for (index, id) in ids.iter().enumerate() {
        require("id", id)?;
        if ids[..index].contains(id) {
            return Err(NavPanelError::validation(format!("duplicate id in list: {id}")));
        }
    }
    Ok(())
}
