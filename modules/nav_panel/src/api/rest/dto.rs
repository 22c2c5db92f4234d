//! REST DTOs with serde derives for HTTP API
//!
//! Field names are camelCase. The export document and the import document
//! share one shape so an export can be imported unchanged.

use crate::contract::{BackgroundConfig, CardStyleConfig, LayoutConfig, SearchConfig, Theme};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// ===== Envelopes =====

/// Successful response carrying a payload
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Successful response without a payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

// ===== Website DTOs =====

/// Website as returned by the API and stored in export documents
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteDto {
    pub id: String,
    pub name: String,
    #[schema(example = "https://github.com")]
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Website creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsiteRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub group_id: Option<String>,
}

/// Website update request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsiteRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderWebsitesRequest {
    #[serde(default)]
    pub website_ids: Vec<String>,
}

// ===== Search Engine DTOs =====

/// Search engine as returned by the API and stored in export documents
///
/// Documents from older releases carry the icon as `iconData` (base64) plus
/// `iconType`; both are accepted on input and never written.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchEngineDto {
    #[schema(example = "google")]
    pub id: String,
    pub name: String,
    #[schema(example = "https://www.google.com/search?q={}")]
    pub url: String,
    /// Icon as a data-URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing)]
    pub icon_data: Option<String>,
    #[serde(default, skip_serializing)]
    pub icon_type: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Search engine creation request
///
/// `icon` accepts a data-URL or bare base64; `iconType` names the MIME type
/// of bare base64 input.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSearchEngineRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(alias = "iconData")]
    pub icon: Option<String>,
    pub icon_type: Option<String>,
    pub placeholder: Option<String>,
    pub is_default: Option<bool>,
}

/// Search engine update request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSearchEngineRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(alias = "iconData")]
    pub icon: Option<String>,
    pub icon_type: Option<String>,
    pub placeholder: Option<String>,
    pub is_default: Option<bool>,
}

// ===== Group DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_collapsed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupWithWebsitesDto {
    #[serde(flatten)]
    pub group: GroupDto,
    pub websites: Vec<WebsiteDto>,
}

/// `GET /groups` answers with or without websites depending on the query
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GroupListDto {
    Plain(Vec<GroupDto>),
    WithWebsites(Vec<GroupWithWebsitesDto>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListQuery {
    #[serde(default)]
    pub with_websites: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[serde(default)]
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub is_collapsed: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderGroupsRequest {
    #[serde(default)]
    pub group_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveWebsiteRequest {
    #[serde(default)]
    pub website_id: String,
    /// `null` moves the website out of any group
    pub group_id: Option<String>,
    pub position: Option<i32>,
}

// ===== Settings DTOs =====

/// Search slice with the live engine list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchSettingsDto {
    #[serde(flatten)]
    pub config: SearchConfig,
    pub engines: Vec<SearchEngineDto>,
}

/// Decoded settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub background: BackgroundConfig,
    pub card_style: CardStyleConfig,
    pub search: SearchSettingsDto,
    pub updated_at: DateTime<Utc>,
}

/// Settings update; each present slice replaces the stored one
///
/// An `engines` array inside `search` is ignored: engines are managed through
/// the search engine endpoints only.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub theme: Option<Theme>,
    pub layout: Option<LayoutConfig>,
    pub background: Option<BackgroundConfig>,
    pub card_style: Option<CardStyleConfig>,
    pub search: Option<SearchConfig>,
}

/// Settings row as stored, slices in serialized form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecordDto {
    #[serde(default = "default_settings_id")]
    pub id: i32,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default, deserialize_with = "deserialize_blob")]
    pub layout: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blob")]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blob")]
    pub card_style: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blob")]
    pub search: Option<String>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_settings_id() -> i32 {
    crate::domain::settings::SETTINGS_ROW_ID
}

/// Slices are normally strings; a JSON object is accepted and kept as its text
fn deserialize_blob<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(blob)) => Some(blob),
        Some(other) => Some(other.to_string()),
    })
}

// ===== Export / import DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportDataDto {
    pub websites: Vec<WebsiteDto>,
    pub search_engines: Vec<SearchEngineDto>,
    pub settings: SettingsRecordDto,
}

/// Import document; absent or `null` collections are left untouched
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportDataDto {
    #[serde(default)]
    pub websites: Option<Vec<WebsiteDto>>,
    #[serde(default)]
    pub search_engines: Option<Vec<SearchEngineDto>>,
    #[serde(default)]
    pub settings: Option<SettingsRecordDto>,
}

/// Collections replaced by an import
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummaryDto {
    /// Websites inserted, absent when the collection was not imported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub websites: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_engines: Option<usize>,
    pub settings: bool,
}
