//! Search engine icon parsing
//!
//! Icons are stored as `data:<mime>;base64,<payload>` strings. Input may be a
//! data-URL or bare base64, which is taken to be PNG.

use crate::contract::NavPanelError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

const DEFAULT_MIME: &str = "image/png";

const IMAGE_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Canonical image type for a `Content-Type` value, parameters ignored
pub fn image_type(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split_once(';')
        .map_or(content_type, |(essence, _)| essence)
        .trim()
        .to_ascii_lowercase();
    IMAGE_TYPES.iter().copied().find(|mime| *mime == essence)
}

/// Data-URL for an uploaded icon file
pub fn upload_data_url(
    content_type: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<String, NavPanelError> {
    let mime = image_type(content_type).ok_or_else(|| {
        NavPanelError::validation(
            "invalid image type, only PNG, JPG, GIF, WebP and SVG are allowed",
        )
    })?;

    if bytes.is_empty() {
        return Err(NavPanelError::validation("icon is empty"));
    }
    if bytes.len() > max_bytes {
        return Err(NavPanelError::validation(format!(
            "icon is {} bytes, limit is {max_bytes}",
            bytes.len()
        )));
    }

    Ok(data_url(mime, bytes))
}

/// Build a data-URL from raw bytes
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Parse an icon upload and return its canonical data-URL
pub fn normalize_icon(input: &str, max_bytes: usize) -> Result<String, NavPanelError> {
    let input = input.trim();

    let (mime, payload) = match input.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| NavPanelError::validation("icon data-URL has no payload"))?;
            let mime = header
                .strip_suffix(";base64")
                .ok_or_else(|| NavPanelError::validation("icon data-URL must be base64 encoded"))?;
            (mime.to_ascii_lowercase(), payload)
        }
        None => (DEFAULT_MIME.to_string(), input),
    };

    if !IMAGE_TYPES.contains(&mime.as_str()) {
        return Err(NavPanelError::validation(format!(
            "unsupported icon type: {mime}"
        )));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| NavPanelError::validation(format!("icon is not valid base64: {e}")))?;

    if bytes.is_empty() {
        return Err(NavPanelError::validation("icon is empty"));
    }
    if bytes.len() > max_bytes {
        return Err(NavPanelError::validation(format!(
            "icon is {} bytes, limit is {max_bytes}",
            bytes.len()
        )));
    }

    Ok(data_url(&mime, &bytes))
}
