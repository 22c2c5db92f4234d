//! HTTP request handlers - thin layer that delegates to domain services

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Services;
use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

type ApiResult<T> = Result<Json<DataResponse<T>>, Problem>;

fn data<T>(value: T) -> Json<DataResponse<T>> {
    Json(DataResponse::new(value))
}

fn message(text: impl Into<String>) -> Json<MessageResponse> {
    Json(MessageResponse::new(text))
}

// ===== Health =====

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok".to_string(),
        message: "service is healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

// ===== Website Handlers =====

/// List websites in display order
pub async fn list_websites(services: Arc<Services>) -> ApiResult<Vec<WebsiteDto>> {
    let websites = services.websites.list().await.map_err(map_domain_error)?;
    Ok(data(websites.into_iter().map(Into::into).collect()))
}

pub async fn get_website(
    services: Arc<Services>,
    Path(id): Path<String>,
) -> ApiResult<WebsiteDto> {
    let website = services.websites.get(&id).await.map_err(map_domain_error)?;
    Ok(data(website.into()))
}

pub async fn create_website(
    services: Arc<Services>,
    req: CreateWebsiteRequest,
) -> Result<(StatusCode, Json<DataResponse<WebsiteDto>>), Problem> {
    let website = services
        .websites
        .create(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, data(website.into())))
}

pub async fn update_website(
    services: Arc<Services>,
    Path(id): Path<String>,
    req: UpdateWebsiteRequest,
) -> ApiResult<WebsiteDto> {
    let website = services
        .websites
        .update(&id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(data(website.into()))
}

pub async fn delete_website(
    services: Arc<Services>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    services
        .websites
        .delete(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(message("website deleted"))
}

pub async fn reorder_websites(
    services: Arc<Services>,
    req: ReorderWebsitesRequest,
) -> ApiResult<Vec<WebsiteDto>> {
    let websites = services
        .websites
        .reorder(&req.website_ids)
        .await
        .map_err(map_domain_error)?;

    Ok(data(websites.into_iter().map(Into::into).collect()))
}

// ===== Search Engine Handlers =====

/// List search engines, default first
pub async fn list_search_engines(services: Arc<Services>) -> ApiResult<Vec<SearchEngineDto>> {
    let engines = services
        .search_engines
        .list()
        .await
        .map_err(map_domain_error)?;

    Ok(data(engines.into_iter().map(Into::into).collect()))
}

pub async fn get_search_engine(
    services: Arc<Services>,
    Path(id): Path<String>,
) -> ApiResult<SearchEngineDto> {
    let engine = services
        .search_engines
        .get(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(data(engine.into()))
}

pub async fn create_search_engine(
    services: Arc<Services>,
    req: CreateSearchEngineRequest,
) -> Result<(StatusCode, Json<DataResponse<SearchEngineDto>>), Problem> {
    let engine = services
        .search_engines
        .create(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, data(engine.into())))
}

pub async fn update_search_engine(
    services: Arc<Services>,
    Path(id): Path<String>,
    req: UpdateSearchEngineRequest,
) -> ApiResult<SearchEngineDto> {
    let engine = services
        .search_engines
        .update(&id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(data(engine.into()))
}

pub async fn delete_search_engine(
    services: Arc<Services>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    services
        .search_engines
        .delete(&id)
        .await
        .map_err(map_domain_error)?;

    Ok(message("search engine deleted"))
}

// ===== Group Handlers =====

pub async fn list_groups(services: Arc<Services>, query: GroupListQuery) -> ApiResult<GroupListDto> {
    let groups = if query.with_websites {
        let groups = services
            .groups
            .list_with_websites()
            .await
            .map_err(map_domain_error)?;
        GroupListDto::WithWebsites(groups.into_iter().map(Into::into).collect())
    } else {
        let groups = services.groups.list().await.map_err(map_domain_error)?;
        GroupListDto::Plain(groups.into_iter().map(Into::into).collect())
    };

    Ok(data(groups))
}

pub async fn create_group(
    services: Arc<Services>,
    req: CreateGroupRequest,
) -> Result<(StatusCode, Json<DataResponse<GroupDto>>), Problem> {
    let group = services
        .groups
        .create(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, data(group.into())))
}

pub async fn update_group(
    services: Arc<Services>,
    Path(id): Path<String>,
    req: UpdateGroupRequest,
) -> ApiResult<GroupDto> {
    let group = services
        .groups
        .update(&id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(data(group.into()))
}

pub async fn delete_group(
    services: Arc<Services>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    services.groups.delete(&id).await.map_err(map_domain_error)?;
    Ok(message("group deleted"))
}

pub async fn reorder_groups(
    services: Arc<Services>,
    req: ReorderGroupsRequest,
) -> Result<Json<MessageResponse>, Problem> {
    services
        .groups
        .reorder(&req.group_ids)
        .await
        .map_err(map_domain_error)?;

    Ok(message("groups reordered"))
}

pub async fn move_website(
    services: Arc<Services>,
    req: MoveWebsiteRequest,
) -> Result<Json<MessageResponse>, Problem> {
    services
        .groups
        .move_website(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(message("website moved"))
}

// ===== Settings Handlers =====

pub async fn get_settings(services: Arc<Services>) -> ApiResult<SettingsDto> {
    let settings = services.settings.get().await.map_err(map_domain_error)?;
    Ok(data(settings.into()))
}

pub async fn update_settings(
    services: Arc<Services>,
    req: UpdateSettingsRequest,
) -> ApiResult<SettingsDto> {
    let settings = services
        .settings
        .update(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(data(settings.into()))
}

pub async fn reset_settings(services: Arc<Services>) -> Result<Json<MessageResponse>, Problem> {
    services.settings.reset().await.map_err(map_domain_error)?;
    Ok(message("settings reset to defaults"))
}

// ===== Export / Import Handlers =====

/// Full snapshot offered as a file download
pub async fn export_data(services: Arc<Services>, file_name: &str) -> Result<Response, Problem> {
    let snapshot = services.transfer.export().await.map_err(map_domain_error)?;
    let disposition = format!("attachment; filename={file_name}");

    Ok((
        [(header::CONTENT_DISPOSITION, disposition)],
        Json(ExportDataDto::from(snapshot)),
    )
        .into_response())
}

pub async fn import_data(
    services: Arc<Services>,
    req: ImportDataDto,
) -> ApiResult<ImportSummaryDto> {
    let summary = services
        .transfer
        .import(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(data(summary.into()))
}
