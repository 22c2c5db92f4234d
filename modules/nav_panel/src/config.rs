//! Configuration for the nav panel module

use serde::{Deserialize, Serialize};

/// Nav panel module configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File name offered by `GET /export`
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Insert the bootstrap search engines (if absent) on startup
    #[serde(default = "default_true")]
    pub seed_search_engines: bool,

    /// Maximum decoded icon size in bytes
    #[serde(default = "default_max_icon_bytes")]
    pub max_icon_bytes: usize,

    /// Body limit for `POST /import`; must fit a full export
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,

    /// Body limit for multipart icon uploads
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_file_name: default_export_file_name(),
            seed_search_engines: true,
            max_icon_bytes: default_max_icon_bytes(),
            max_request_bytes: default_max_request_bytes(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_export_file_name() -> String {
    "nav-panel-backup.json".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_icon_bytes() -> usize {
    2 * 1024 * 1024 // 2MB
}

fn default_max_request_bytes() -> usize {
    32 * 1024 * 1024 // 32MB
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10MB
}

impl Config {
    /// Body limit for JSON search engine writes, which carry icons as base64
    pub fn icon_json_body_bytes(&self) -> usize {
        self.max_icon_bytes.div_ceil(3) * 4 + 64 * 1024
    }
}
