//! Route registration
//!
//! Handler wrappers pull the services from `Extension` and turn extractor
//! rejections into Problem Details before delegating to `handlers`.

use super::{
    dto::*,
    error::{map_json_rejection, map_query_rejection, Problem},
    handlers,
    openapi::ApiDoc,
    upload::{map_multipart_rejection, SearchEngineForm},
};
use crate::config::Config;
use crate::domain::Services;
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::{JsonRejection, QueryRejection},
        DefaultBodyLimit, Path, Query,
    },
    http::StatusCode,
    response::Response,
    routing::{get, post, put},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Build the `/api` router
///
/// Routes without an explicit body limit keep axum's 2MB default. Search
/// engine writes are sized for base64 icons and `/import` for a full export.
pub fn register_routes(
    router: Router,
    services: Arc<Services>,
    config: Arc<Config>,
) -> anyhow::Result<Router> {
    let icon_json_limit = DefaultBodyLimit::max(config.icon_json_body_bytes());
    let upload_limit = DefaultBodyLimit::max(config.max_upload_bytes);
    let import_limit = DefaultBodyLimit::max(config.max_request_bytes);

    let api = Router::new()
        .route("/ping", get(handlers::ping))
        .route("/openapi.json", get(openapi_handler))
        // Websites
        .route("/websites", get(list_websites_handler).post(create_website_handler))
        .route("/websites/reorder", put(reorder_websites_handler))
        .route(
            "/websites/{id}",
            get(get_website_handler)
                .put(update_website_handler)
                .delete(delete_website_handler),
        )
        // Search engines
        .route(
            "/search-engines",
            get(list_search_engines_handler)
                .post(create_search_engine_handler)
                .layer(icon_json_limit),
        )
        .route(
            "/search-engines/with-icon",
            post(create_search_engine_with_icon_handler).layer(upload_limit),
        )
        .route(
            "/search-engines/{id}",
            get(get_search_engine_handler)
                .put(update_search_engine_handler)
                .delete(delete_search_engine_handler)
                .layer(icon_json_limit),
        )
        .route(
            "/search-engines/{id}/with-icon",
            put(update_search_engine_with_icon_handler).layer(upload_limit),
        )
        // Groups
        .route("/groups", get(list_groups_handler).post(create_group_handler))
        .route("/groups/reorder", put(reorder_groups_handler))
        .route("/groups/move-website", put(move_website_handler))
        .route(
            "/groups/{id}",
            put(update_group_handler).delete(delete_group_handler),
        )
        // Settings and backups
        .route("/settings", get(get_settings_handler).put(update_settings_handler))
        .route("/settings/reset", post(reset_settings_handler))
        .route("/export", get(export_handler))
        .route("/import", post(import_handler).layer(import_limit))
        .layer(Extension(services))
        .layer(Extension(config));

    Ok(router.nest("/api", api))
}

type Body<T> = Result<Json<T>, JsonRejection>;

fn body<T>(json: Body<T>) -> Result<T, Problem> {
    json.map(|Json(value)| value).map_err(map_json_rejection)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ===== Websites =====

async fn list_websites_handler(
    Extension(services): Extension<Arc<Services>>,
) -> Result<Json<DataResponse<Vec<WebsiteDto>>>, Problem> {
    handlers::list_websites(services).await
}

async fn get_website_handler(
    Extension(services): Extension<Arc<Services>>,
    path: Path<String>,
) -> Result<Json<DataResponse<WebsiteDto>>, Problem> {
    handlers::get_website(services, path).await
}

async fn create_website_handler(
    Extension(services): Extension<Arc<Services>>,
    json: Body<CreateWebsiteRequest>,
) -> Result<(StatusCode, Json<DataResponse<WebsiteDto>>), Problem> {
    handlers::create_website(services, body(json)?).await
}

async fn update_website_handler(
    Extension(services): Extension<Arc<Services>>,
    path: Path<String>,
    json: Body<UpdateWebsiteRequest>,
) -> Result<Json<DataResponse<WebsiteDto>>, Problem> {
    handlers::update_website(services, path, body(json)?).await
}

async fn delete_website_handler(
    Extension(services): Extension<Arc<Services>>,
    path: Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::delete_website(services, path).await
}

async fn reorder_websites_handler(
    Extension(services): Extension<Arc<Services>>,
    json: Body<ReorderWebsitesRequest>,
) -> Result<Json<DataResponse<Vec<WebsiteDto>>>, Problem> {
    handlers::reorder_websites(services, body(json)?).await
}

// ===== Search engines =====

async fn list_search_engines_handler(
    Extension(services): Extension<Arc<Services>>,
) -> Result<Json<DataResponse<Vec<SearchEngineDto>>>, Problem> {
    handlers::list_search_engines(services).await
}

async fn get_search_engine_handler(
    Extension(services): Extension<Arc<Services>>,
    path: Path<String>,
) -> Result<Json<DataResponse<SearchEngineDto>>, Problem> {
    handlers::get_search_engine(services, path).await
}

async fn create_search_engine_handler(
    Extension(services): Extension<Arc<Services>>,
    json: Body<CreateSearchEngineRequest>,
) -> Result<(StatusCode, Json<DataResponse<SearchEngineDto>>), Problem> {
    handlers::create_search_engine(services, body(json)?).await
}

async fn update_search_engine_handler(
    Extension(services): Extension<Arc<Services>>,
    path: Path<String>,
    json: Body<UpdateSearchEngineRequest>,
) -> Result<Json<DataResponse<SearchEngineDto>>, Problem> {
    handlers::update_search_engine(services, path, body(json)?).await
}

async fn create_search_engine_with_icon_handler(
    Extension(services): Extension<Arc<Services>>,
    Extension(config): Extension<Arc<Config>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<DataResponse<SearchEngineDto>>), Problem> {
    let multipart = multipart.map_err(map_multipart_rejection)?;
    let form = SearchEngineForm::read(multipart, config.max_icon_bytes).await?;
    handlers::create_search_engine(services, form.into_create_request()).await
}

async fn update_search_engine_with_icon_handler(
    Extension(services): Extension<Arc<Services>>,
    Extension(config): Extension<Arc<Config>>,
    path: Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DataResponse<SearchEngineDto>>, Problem> {
    let multipart = multipart.map_err(map_multipart_rejection)?;
    let form = SearchEngineForm::read(multipart, config.max_icon_bytes).await?;
    handlers::update_search_engine(services, path, form.into_update_request()).await
}

async fn delete_search_engine_handler(
    Extension(services): Extension<Arc<Services>>,
    path: Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::delete_search_engine(services, path).await
}

// ===== Groups =====

async fn list_groups_handler(
    Extension(services): Extension<Arc<Services>>,
    query: Result<Query<GroupListQuery>, QueryRejection>,
) -> Result<Json<DataResponse<GroupListDto>>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    handlers::list_groups(services, query).await
}

async fn create_group_handler(
    Extension(services): Extension<Arc<Services>>,
    json: Body<CreateGroupRequest>,
) -> Result<(StatusCode, Json<DataResponse<GroupDto>>), Problem> {
    handlers::create_group(services, body(json)?).await
}

async fn update_group_handler(
    Extension(services): Extension<Arc<Services>>,
    path: Path<String>,
    json: Body<UpdateGroupRequest>,
) -> Result<Json<DataResponse<GroupDto>>, Problem> {
    handlers::update_group(services, path, body(json)?).await
}

async fn delete_group_handler(
    Extension(services): Extension<Arc<Services>>,
    path: Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::delete_group(services, path).await
}

async fn reorder_groups_handler(
    Extension(services): Extension<Arc<Services>>,
    json: Body<ReorderGroupsRequest>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::reorder_groups(services, body(json)?).await
}

async fn move_website_handler(
    Extension(services): Extension<Arc<Services>>,
    json: Body<MoveWebsiteRequest>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::move_website(services, body(json)?).await
}

// ===== Settings =====

async fn get_settings_handler(
    Extension(services): Extension<Arc<Services>>,
) -> Result<Json<DataResponse<SettingsDto>>, Problem> {
    handlers::get_settings(services).await
}

async fn update_settings_handler(
    Extension(services): Extension<Arc<Services>>,
    json: Body<UpdateSettingsRequest>,
) -> Result<Json<DataResponse<SettingsDto>>, Problem> {
    handlers::update_settings(services, body(json)?).await
}

async fn reset_settings_handler(
    Extension(services): Extension<Arc<Services>>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::reset_settings(services).await
}

// ===== Export / import =====

async fn export_handler(
    Extension(services): Extension<Arc<Services>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Response, Problem> {
    handlers::export_data(services, &config.export_file_name).await
}

async fn import_handler(
    Extension(services): Extension<Arc<Services>>,
    json: Body<ImportDataDto>,
) -> Result<Json<DataResponse<ImportSummaryDto>>, Problem> {
    handlers::import_data(services, body(json)?).await
}
