//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{app_settings, group, search_engine, website};
use crate::contract::{AppSettings, Group, SearchEngine, Theme, Website};
use crate::domain::icon;
use crate::domain::settings::SETTINGS_ROW_ID;
use sea_orm::ActiveValue::Set;

/// MIME type assumed for legacy icon bytes stored without one
const LEGACY_ICON_TYPE: &str = "image/png";

// ===== Website Conversions =====

impl From<website::Model> for Website {
    fn from(entity: website::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            url: entity.url,
            icon: entity.icon.filter(|icon| !icon.is_empty()),
            description: entity.description,
            category: entity.category,
            sort_order: entity.sort_order,
            group_id: entity.group_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&Website> for website::ActiveModel {
    fn from(model: &Website) -> Self {
        Self {
            id: Set(model.id.clone()),
            name: Set(model.name.clone()),
            url: Set(model.url.clone()),
            icon: Set(model.icon.clone()),
            description: Set(model.description.clone()),
            category: Set(model.category.clone()),
            sort_order: Set(model.sort_order),
            group_id: Set(model.group_id.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Search Engine Conversions =====

impl From<search_engine::Model> for SearchEngine {
    fn from(entity: search_engine::Model) -> Self {
        let icon = entity
            .icon
            .filter(|icon| !icon.is_empty())
            .or_else(|| legacy_icon(entity.icon_data.as_deref(), entity.icon_type.as_deref()));

        Self {
            id: entity.id,
            name: entity.name,
            url: entity.url,
            icon,
            placeholder: entity.placeholder,
            is_default: entity.is_default,
        }
    }
}

/// Rows written before icons became data-URLs keep raw bytes plus a MIME type
fn legacy_icon(data: Option<&[u8]>, mime: Option<&str>) -> Option<String> {
    let data = data.filter(|data| !data.is_empty())?;
    let mime = mime
        .map(str::trim)
        .filter(|mime| !mime.is_empty())
        .unwrap_or(LEGACY_ICON_TYPE);
    Some(icon::data_url(mime, data))
}

impl From<&SearchEngine> for search_engine::ActiveModel {
    fn from(model: &SearchEngine) -> Self {
        Self {
            id: Set(model.id.clone()),
            name: Set(model.name.clone()),
            url: Set(model.url.clone()),
            icon: Set(model.icon.clone()),
            icon_data: Set(None),
            icon_type: Set(None),
            placeholder: Set(model.placeholder.clone()),
            is_default: Set(model.is_default),
        }
    }
}

// ===== Group Conversions =====

impl From<group::Model> for Group {
    fn from(entity: group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
            icon: entity.icon,
            sort_order: entity.sort_order,
            is_collapsed: entity.is_collapsed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&Group> for group::ActiveModel {
    fn from(model: &Group) -> Self {
        Self {
            id: Set(model.id.clone()),
            name: Set(model.name.clone()),
            color: Set(model.color.clone()),
            icon: Set(model.icon.clone()),
            sort_order: Set(model.sort_order),
            is_collapsed: Set(model.is_collapsed),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Settings Conversions =====

impl From<app_settings::Model> for AppSettings {
    fn from(entity: app_settings::Model) -> Self {
        let theme = Theme::parse(&entity.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %entity.theme, "stored theme is unknown; using default");
            Theme::default()
        });

        Self {
            theme,
            layout_config: entity.layout_config,
            background_config: entity.background_config,
            card_style_config: entity.card_style_config,
            search_config: entity.search_config,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&AppSettings> for app_settings::ActiveModel {
    fn from(model: &AppSettings) -> Self {
        Self {
            id: Set(SETTINGS_ROW_ID),
            theme: Set(model.theme.as_str().to_string()),
            layout_config: Set(model.layout_config.clone()),
            background_config: Set(model.background_config.clone()),
            card_style_config: Set(model.card_style_config.clone()),
            search_config: Set(model.search_config.clone()),
            updated_at: Set(model.updated_at),
        }
    }
}
