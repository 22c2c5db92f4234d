//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Website conversions =====

impl From<contract::Website> for WebsiteDto {
    fn from(website: contract::Website) -> Self {
        Self {
            id: website.id,
            name: website.name,
            url: website.url,
            icon: website.icon,
            description: website.description,
            category: website.category,
            sort_order: website.sort_order,
            group_id: website.group_id,
            created_at: website.created_at,
            updated_at: website.updated_at,
        }
    }
}

impl From<WebsiteDto> for contract::Website {
    fn from(dto: WebsiteDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            url: dto.url,
            icon: dto.icon,
            description: dto.description,
            category: dto.category,
            sort_order: dto.sort_order,
            group_id: dto.group_id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl From<CreateWebsiteRequest> for contract::NewWebsite {
    fn from(req: CreateWebsiteRequest) -> Self {
        Self {
            name: req.name,
            url: req.url,
            icon: req.icon,
            description: req.description,
            category: req.category,
            group_id: req.group_id,
        }
    }
}

impl From<UpdateWebsiteRequest> for contract::WebsitePatch {
    fn from(req: UpdateWebsiteRequest) -> Self {
        Self {
            name: req.name,
            url: req.url,
            icon: req.icon,
            description: req.description,
            category: req.category,
        }
    }
}

// ===== Search engine conversions =====

/// Combine bare base64 with an explicit MIME type into a data-URL
fn icon_input(icon: Option<String>, icon_type: Option<String>) -> Option<String> {
    let icon = icon?;
    match icon_type.filter(|mime| !mime.trim().is_empty()) {
        Some(mime) if !icon.is_empty() && !icon.starts_with("data:") => {
            Some(format!("data:{};base64,{icon}", mime.trim()))
        }
        _ => Some(icon),
    }
}

impl From<contract::SearchEngine> for SearchEngineDto {
    fn from(engine: contract::SearchEngine) -> Self {
        Self {
            id: engine.id,
            name: engine.name,
            url: engine.url,
            icon: engine.icon,
            icon_data: None,
            icon_type: None,
            placeholder: engine.placeholder,
            is_default: engine.is_default,
        }
    }
}

impl From<SearchEngineDto> for contract::SearchEngine {
    fn from(dto: SearchEngineDto) -> Self {
        let icon = dto
            .icon
            .filter(|icon| !icon.is_empty())
            .or_else(|| icon_input(dto.icon_data.filter(|data| !data.is_empty()), dto.icon_type))
            .map(|icon| {
                if icon.starts_with("data:") {
                    icon
                } else {
                    format!("data:image/png;base64,{icon}")
                }
            });

        Self {
            id: dto.id,
            name: dto.name,
            url: dto.url,
            icon,
            placeholder: dto.placeholder,
            is_default: dto.is_default,
        }
    }
}

impl From<CreateSearchEngineRequest> for contract::NewSearchEngine {
    fn from(req: CreateSearchEngineRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            url: req.url,
            icon: icon_input(req.icon, req.icon_type),
            placeholder: req.placeholder,
            is_default: req.is_default.unwrap_or(false),
        }
    }
}

impl From<UpdateSearchEngineRequest> for contract::SearchEnginePatch {
    fn from(req: UpdateSearchEngineRequest) -> Self {
        Self {
            name: req.name,
            url: req.url,
            icon: icon_input(req.icon, req.icon_type),
            placeholder: req.placeholder,
            is_default: req.is_default,
        }
    }
}

// ===== Group conversions =====

impl From<contract::Group> for GroupDto {
    fn from(group: contract::Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            color: group.color,
            icon: group.icon,
            sort_order: group.sort_order,
            is_collapsed: group.is_collapsed,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

impl From<contract::GroupWithWebsites> for GroupWithWebsitesDto {
    fn from(entry: contract::GroupWithWebsites) -> Self {
        Self {
            group: entry.group.into(),
            websites: entry.websites.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateGroupRequest> for contract::NewGroup {
    fn from(req: CreateGroupRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            icon: req.icon,
        }
    }
}

impl From<UpdateGroupRequest> for contract::GroupPatch {
    fn from(req: UpdateGroupRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            icon: req.icon,
            is_collapsed: req.is_collapsed,
        }
    }
}

impl From<MoveWebsiteRequest> for contract::WebsitePlacement {
    fn from(req: MoveWebsiteRequest) -> Self {
        Self {
            website_id: req.website_id,
            group_id: req.group_id,
            position: req.position,
        }
    }
}

// ===== Settings conversions =====

impl From<contract::AppSettingsView> for SettingsDto {
    fn from(view: contract::AppSettingsView) -> Self {
        Self {
            theme: view.theme,
            layout: view.layout,
            background: view.background,
            card_style: view.card_style,
            search: SearchSettingsDto {
                config: view.search.config,
                engines: view.search.engines.into_iter().map(Into::into).collect(),
            },
            updated_at: view.updated_at,
        }
    }
}

impl From<UpdateSettingsRequest> for contract::SettingsPatch {
    fn from(req: UpdateSettingsRequest) -> Self {
        Self {
            theme: req.theme,
            layout: req.layout,
            background: req.background,
            card_style: req.card_style,
            search: req.search,
        }
    }
}

impl From<contract::AppSettings> for SettingsRecordDto {
    fn from(settings: contract::AppSettings) -> Self {
        Self {
            id: crate::domain::settings::SETTINGS_ROW_ID,
            theme: settings.theme,
            layout: settings.layout_config,
            background: settings.background_config,
            card_style: settings.card_style_config,
            search: settings.search_config,
            updated_at: settings.updated_at,
        }
    }
}

impl From<SettingsRecordDto> for contract::AppSettings {
    fn from(dto: SettingsRecordDto) -> Self {
        Self {
            theme: dto.theme,
            layout_config: dto.layout,
            background_config: dto.background,
            card_style_config: dto.card_style,
            search_config: dto.search,
            updated_at: dto.updated_at,
        }
    }
}

// ===== Export / import conversions =====

impl From<contract::Snapshot> for ExportDataDto {
    fn from(snapshot: contract::Snapshot) -> Self {
        Self {
            websites: snapshot.websites.into_iter().map(Into::into).collect(),
            search_engines: snapshot.search_engines.into_iter().map(Into::into).collect(),
            settings: snapshot.settings.into(),
        }
    }
}

impl From<ImportDataDto> for contract::ImportDocument {
    fn from(dto: ImportDataDto) -> Self {
        Self {
            websites: dto
                .websites
                .map(|websites| websites.into_iter().map(Into::into).collect()),
            search_engines: dto
                .search_engines
                .map(|engines| engines.into_iter().map(Into::into).collect()),
            settings: dto.settings.map(Into::into),
        }
    }
}

impl From<contract::ImportSummary> for ImportSummaryDto {
    fn from(summary: contract::ImportSummary) -> Self {
        Self {
            websites: summary.websites,
            search_engines: summary.search_engines,
            settings: summary.settings,
        }
    }
}
