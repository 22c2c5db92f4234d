//! OpenAPI document for the REST DTOs

use super::{dto::*, error::Problem};
use crate::contract::{
    BackgroundConfig, BackgroundKind, CardSize, CardStyleConfig, LayoutConfig, SearchConfig,
    Theme,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Nav Panel API", description = "Websites, search engines, settings and backups"),
    components(schemas(
        Problem,
        MessageResponse,
        PingResponse,
        WebsiteDto,
        CreateWebsiteRequest,
        UpdateWebsiteRequest,
        ReorderWebsitesRequest,
        SearchEngineDto,
        CreateSearchEngineRequest,
        UpdateSearchEngineRequest,
        GroupDto,
        GroupWithWebsitesDto,
        CreateGroupRequest,
        UpdateGroupRequest,
        ReorderGroupsRequest,
        MoveWebsiteRequest,
        Theme,
        CardSize,
        LayoutConfig,
        BackgroundKind,
        BackgroundConfig,
        CardStyleConfig,
        SearchConfig,
        SearchSettingsDto,
        SettingsDto,
        UpdateSettingsRequest,
        SettingsRecordDto,
        ExportDataDto,
        ImportDataDto,
        ImportSummaryDto,
    ))
)]
pub struct ApiDoc;
