//! `multipart/form-data` search engine forms
//!
//! Text parts carry the engine fields and an optional `icon` file part
//! carries the image. The file becomes a data-URL before the request
//! reaches the JSON handlers.

use super::{
    dto::{CreateSearchEngineRequest, UpdateSearchEngineRequest},
    error::{map_domain_error, Problem},
};
use crate::domain::icon;
use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use std::collections::HashMap;

const ICON_FIELD: &str = "icon";

/// Fields read from a search engine form
#[derive(Debug, Default)]
pub struct SearchEngineForm {
    fields: HashMap<String, String>,
    icon: Option<String>,
}

impl SearchEngineForm {
    /// Drain a multipart body, turning the `icon` file into a data-URL
    pub async fn read(mut multipart: Multipart, max_icon_bytes: usize) -> Result<Self, Problem> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == ICON_FIELD {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(map_multipart_error)?;
                // Browsers send an empty part when no file was picked
                if bytes.is_empty() {
                    continue;
                }
                let data_url = icon::upload_data_url(&content_type, &bytes, max_icon_bytes)
                    .map_err(map_domain_error)?;
                form.icon = Some(data_url);
            } else {
                let value = field.text().await.map_err(map_multipart_error)?;
                form.fields.insert(name, value);
            }
        }

        tracing::debug!(
            fields = form.fields.len(),
            has_icon = form.icon.is_some(),
            "read search engine form"
        );
        Ok(form)
    }

    fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Creation form: `isDefault` counts only when it is `true`
    pub fn into_create_request(self) -> CreateSearchEngineRequest {
        CreateSearchEngineRequest {
            id: self.text("id").unwrap_or_default(),
            name: self.text("name").unwrap_or_default(),
            url: self.text("url").unwrap_or_default(),
            placeholder: self.text("placeholder"),
            is_default: self.text("isDefault").filter(|v| v == "true").map(|_| true),
            icon_type: None,
            icon: self.icon,
        }
    }

    /// Update form: blank fields leave the stored value untouched
    pub fn into_update_request(self) -> UpdateSearchEngineRequest {
        UpdateSearchEngineRequest {
            name: self.text("name"),
            url: self.text("url"),
            placeholder: self.text("placeholder"),
            is_default: self.text("isDefault").map(|v| v == "true"),
            icon_type: None,
            icon: self.icon,
        }
    }
}

pub fn map_multipart_rejection(rejection: MultipartRejection) -> Problem {
    Problem::new(rejection.status(), "Invalid Form").with_detail(rejection.body_text())
}

fn map_multipart_error(error: MultipartError) -> Problem {
    let status = error.status();
    tracing::debug!(error = %error.body_text(), %status, "rejected form part");
    let title = if status == StatusCode::PAYLOAD_TOO_LARGE {
        "Form Too Large"
    } else {
        "Invalid Form"
    };
    Problem::new(status, title).with_detail(error.body_text())
}
