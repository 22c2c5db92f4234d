//! REST API tests driving the router in-process

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::{print_test_header, sqlite_db};
use nav_panel::{Config, NavPanelModule};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let db = sqlite_db().await;
    let module = NavPanelModule::new(Config::default());
    module.init(db).await.expect("Failed to init module");
    module
        .register_rest(Router::new())
        .expect("Failed to register routes")
}

struct TestResponse {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    body: Value,
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    match body {
        Some(text) => {
            send_bytes(app, method, uri, "application/json", text.as_bytes().to_vec()).await
        }
        None => {
            let request = Request::builder().method(method).uri(uri);
            send_request(app, request, Body::empty()).await
        }
    }
}

async fn send_bytes(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type);
    send_request(app, request, Body::from(bytes)).await
}

async fn send_request(
    app: &Router,
    request: axum::http::request::Builder,
    body: Body,
) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request.body(body).expect("Failed to build request"))
        .await
        .expect("Request failed");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response is not JSON")
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> TestResponse {
    send(app, method, uri, Some(&body.to_string())).await
}

#[tokio::test]
async fn test_ping() {
    print_test_header("test_ping", &["Health probe answers with status ok"]);

    let app = app().await;
    let response = send(&app, Method::GET, "/api/ping", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_settings_layout_update_round_trip() {
    print_test_header(
        "test_settings_layout_update_round_trip",
        &[
            "PUT /api/settings with a layout slice is visible on the next GET,",
            "other slices keep their values",
        ],
    );

    let app = app().await;
    let before = send(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(before.status, StatusCode::OK);

    println!("\n📝 Stage 1: Replace the layout slice");
    let layout = json!({"columns": 3, "cardSize": "large", "showLabels": false, "gap": 12});
    let updated = send_json(
        &app,
        Method::PUT,
        "/api/settings",
        json!({ "layout": layout }),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["layout"], layout);

    println!("\n📝 Stage 2: Read back");
    let after = send(&app, Method::GET, "/api/settings", None).await;
    let data = &after.body["data"];
    assert_eq!(data["layout"], layout);
    assert_eq!(data["background"], before.body["data"]["background"]);
    assert_eq!(data["cardStyle"], before.body["data"]["cardStyle"]);
    assert_eq!(data["theme"], "light");
    assert_eq!(data["search"]["defaultEngineId"], "google");
    assert_eq!(data["search"]["engines"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_settings_rejects_bad_input() {
    print_test_header(
        "test_settings_rejects_bad_input",
        &["Malformed JSON, unknown enum values and zero columns are 400s"],
    );

    let app = app().await;

    let response = send(&app, Method::PUT, "/api/settings", Some("{not json")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers[header::CONTENT_TYPE],
        "application/problem+json"
    );

    let response = send_json(&app, Method::PUT, "/api/settings", json!({"theme": "neon"})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send_json(
        &app,
        Method::PUT,
        "/api/settings",
        json!({"layout": {"columns": 0, "cardSize": "small", "showLabels": true, "gap": 0}}),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["title"], "Validation Error");
}

#[tokio::test]
async fn test_settings_reset() {
    print_test_header("test_settings_reset", &["Reset restores the default theme"]);

    let app = app().await;
    send_json(&app, Method::PUT, "/api/settings", json!({"theme": "dark"})).await;

    let response = send(&app, Method::POST, "/api/settings/reset", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["message"].is_string());

    let after = send(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(after.body["data"]["theme"], "light");
}

#[tokio::test]
async fn test_website_crud() {
    print_test_header(
        "test_website_crud",
        &["Create answers 201, unknown ids answer 404 with a problem body"],
    );

    let app = app().await;

    let created = send_json(
        &app,
        Method::POST,
        "/api/websites",
        json!({"name": "Rust", "url": "https://www.rust-lang.org"}),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["data"]["id"]
        .as_str()
        .expect("id missing")
        .to_string();
    assert_eq!(created.body["data"]["sortOrder"], 0);

    let updated = send_json(
        &app,
        Method::PUT,
        &format!("/api/websites/{id}"),
        json!({"description": "The language"}),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["description"], "The language");
    assert_eq!(updated.body["data"]["name"], "Rust");

    let listed = send(&app, Method::GET, "/api/websites", None).await;
    assert_eq!(listed.body["data"].as_array().map(Vec::len), Some(1));

    let deleted = send(&app, Method::DELETE, &format!("/api/websites/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = send(&app, Method::GET, &format!("/api/websites/{id}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["status"], 404);

    let invalid = send_json(&app, Method::POST, "/api/websites", json!({"name": "No url"})).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_engine_endpoints() {
    print_test_header(
        "test_search_engine_endpoints",
        &["Duplicate ids conflict; legacy iconData/iconType uploads become data URLs"],
    );

    let app = app().await;

    let duplicate = send_json(
        &app,
        Method::POST,
        "/api/search-engines",
        json!({"id": "google", "name": "Google", "url": "https://google.com/?q={}"}),
    )
    .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let created = send_json(
        &app,
        Method::POST,
        "/api/search-engines",
        json!({
            "id": "ddg",
            "name": "DuckDuckGo",
            "url": "https://duckduckgo.com/?q={}",
            "iconData": "R0lGODlh",
            "iconType": "image/gif",
            "isDefault": true
        }),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        created.body["data"]["icon"],
        "data:image/gif;base64,R0lGODlh"
    );

    let listed = send(&app, Method::GET, "/api/search-engines", None).await;
    let engines = listed.body["data"].as_array().expect("list missing");
    assert_eq!(engines[0]["id"], "ddg");
    assert_eq!(
        engines.iter().filter(|e| e["isDefault"] == true).count(),
        1
    );
}

#[tokio::test]
async fn test_groups_with_websites() {
    print_test_header(
        "test_groups_with_websites",
        &["Websites moved into a group are listed under it"],
    );

    let app = app().await;

    let group = send_json(&app, Method::POST, "/api/groups", json!({"name": "Dev"})).await;
    assert_eq!(group.status, StatusCode::CREATED);
    let group_id = group.body["data"]["id"].as_str().expect("id missing").to_string();

    let site = send_json(
        &app,
        Method::POST,
        "/api/websites",
        json!({"name": "Docs", "url": "https://docs.rs"}),
    )
    .await;
    let site_id = site.body["data"]["id"].as_str().expect("id missing").to_string();

    let moved = send_json(
        &app,
        Method::PUT,
        "/api/groups/move-website",
        json!({"websiteId": site_id, "groupId": group_id}),
    )
    .await;
    assert_eq!(moved.status, StatusCode::OK);

    let listed = send(&app, Method::GET, "/api/groups?withWebsites=true", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let groups = listed.body["data"].as_array().expect("list missing");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["name"], "Dev");
    assert_eq!(groups[0]["websites"][0]["id"], site_id.as_str());

    let plain = send(&app, Method::GET, "/api/groups", None).await;
    assert!(plain.body["data"][0].get("websites").is_none());
}

#[tokio::test]
async fn test_export_then_import() {
    print_test_header(
        "test_export_then_import",
        &[
            "Export is a file download; importing it after a wipe restores",
            "the same data",
        ],
    );

    let app = app().await;
    send_json(
        &app,
        Method::POST,
        "/api/websites",
        json!({"name": "Rust", "url": "https://www.rust-lang.org"}),
    )
    .await;

    println!("\n📝 Stage 1: Export");
    let export = send(&app, Method::GET, "/api/export", None).await;
    assert_eq!(export.status, StatusCode::OK);
    let disposition = export.headers[header::CONTENT_DISPOSITION]
        .to_str()
        .expect("header is not ASCII");
    assert_eq!(disposition, "attachment; filename=nav-panel-backup.json");
    assert_eq!(export.body["websites"].as_array().map(Vec::len), Some(1));
    assert_eq!(export.body["searchEngines"].as_array().map(Vec::len), Some(4));
    assert!(export.body["settings"]["layout"].is_string());

    println!("\n📝 Stage 2: Wipe websites only");
    let wiped = send_json(
        &app,
        Method::POST,
        "/api/import",
        json!({"websites": [], "searchEngines": null, "settings": null}),
    )
    .await;
    assert_eq!(wiped.status, StatusCode::OK);
    assert_eq!(wiped.body["data"]["websites"], 0);
    assert_eq!(wiped.body["data"]["settings"], false);
    let engines = send(&app, Method::GET, "/api/search-engines", None).await;
    assert_eq!(engines.body["data"].as_array().map(Vec::len), Some(4));

    println!("\n📝 Stage 3: Import the export");
    let imported = send_json(&app, Method::POST, "/api/import", export.body.clone()).await;
    assert_eq!(imported.status, StatusCode::OK);
    assert_eq!(imported.body["data"]["websites"], 1);
    assert_eq!(imported.body["data"]["searchEngines"], 4);

    let again = send(&app, Method::GET, "/api/export", None).await;
    assert_eq!(again.body["websites"], export.body["websites"]);
    assert_eq!(again.body["searchEngines"], export.body["searchEngines"]);
}

#[tokio::test]
async fn test_import_failure_is_problem() {
    print_test_header(
        "test_import_failure_is_problem",
        &["A failing collection yields a problem naming collection and index"],
    );

    let app = app().await;
    let engine = json!({"id": "dup", "name": "Dup", "url": "https://dup.example.com/?q={}"});
    let response = send_json(
        &app,
        Method::POST,
        "/api/import",
        json!({"searchEngines": [engine.clone(), engine]}),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["title"], "Import Partially Applied");
    assert_eq!(response.body["instance"], "#/searchEngines/1");
}

#[tokio::test]
async fn test_openapi_document_served() {
    print_test_header(
        "test_openapi_document_served",
        &["OpenAPI JSON carries the settings and backup schemas"],
    );

    let app = app().await;
    let response = send(&app, Method::GET, "/api/openapi.json", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let schemas = &response.body["components"]["schemas"];
    assert!(schemas.get("SettingsDto").is_some());
    assert!(schemas.get("ExportDataDto").is_some());
}

const BOUNDARY: &str = "nav-panel-form-boundary";
const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x01];

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn form_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
            Part::File(name, content_type, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"upload\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn send_form(app: &Router, method: Method, uri: &str, parts: &[Part<'_>]) -> TestResponse {
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    send_bytes(app, method, uri, &content_type, form_body(parts)).await
}

fn icon_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[tokio::test]
async fn test_search_engine_icon_upload_forms() {
    print_test_header(
        "test_search_engine_icon_upload_forms",
        &[
            "Multipart create and update turn the icon file into a data URL,",
            "blank update fields keep stored values, bad files are rejected",
        ],
    );

    let app = app().await;

    println!("\n📝 Stage 1: Create with an icon file");
    let created = send_form(
        &app,
        Method::POST,
        "/api/search-engines/with-icon",
        &[
            Part::Text("id", "ddg"),
            Part::Text("name", "DuckDuckGo"),
            Part::Text("url", "https://duckduckgo.com/?q={}"),
            Part::Text("placeholder", ""),
            Part::Text("isDefault", "true"),
            Part::File("icon", "image/png", PNG),
        ],
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["icon"], icon_data_url("image/png", PNG));
    assert_eq!(created.body["data"]["isDefault"], true);

    println!("\n📝 Stage 2: Update name and icon only");
    let updated = send_form(
        &app,
        Method::PUT,
        "/api/search-engines/ddg/with-icon",
        &[
            Part::Text("name", "Duck"),
            Part::Text("url", ""),
            Part::File("icon", "image/gif; charset=binary", b"GIF89a"),
        ],
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["name"], "Duck");
    assert_eq!(updated.body["data"]["url"], "https://duckduckgo.com/?q={}");
    assert_eq!(updated.body["data"]["icon"], icon_data_url("image/gif", b"GIF89a"));
    assert_eq!(updated.body["data"]["isDefault"], true);

    println!("\n📝 Stage 3: Rejections");
    let not_image = send_form(
        &app,
        Method::PUT,
        "/api/search-engines/ddg/with-icon",
        &[Part::File("icon", "text/plain", b"hello")],
    )
    .await;
    assert_eq!(not_image.status, StatusCode::BAD_REQUEST);

    let missing_url = send_form(
        &app,
        Method::POST,
        "/api/search-engines/with-icon",
        &[Part::Text("id", "x"), Part::Text("name", "X")],
    )
    .await;
    assert_eq!(missing_url.status, StatusCode::BAD_REQUEST);

    let unknown = send_form(
        &app,
        Method::PUT,
        "/api/search-engines/nope/with-icon",
        &[Part::Text("name", "Nope")],
    )
    .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let too_big = vec![0u8; Config::default().max_icon_bytes + 1];
    let oversized = send_form(
        &app,
        Method::PUT,
        "/api/search-engines/ddg/with-icon",
        &[Part::File("icon", "image/png", &too_big)],
    )
    .await;
    assert_eq!(oversized.status, StatusCode::BAD_REQUEST);

    let not_a_form = send_json(
        &app,
        Method::POST,
        "/api/search-engines/with-icon",
        json!({"id": "json", "name": "Json", "url": "https://json.test/?q={}"}),
    )
    .await;
    assert_eq!(not_a_form.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        not_a_form.headers[header::CONTENT_TYPE],
        "application/problem+json"
    );

    let stored = send(&app, Method::GET, "/api/search-engines/ddg", None).await;
    assert_eq!(stored.body["data"]["icon"], icon_data_url("image/gif", b"GIF89a"));
}

#[tokio::test]
async fn test_large_icons_survive_export_and_import() {
    print_test_header(
        "test_large_icons_survive_export_and_import",
        &[
            "Icons close to the size limit are accepted as JSON, and an export",
            "holding them imports back unchanged",
        ],
    );

    let app = app().await;
    let limit = Config::default().max_icon_bytes;

    println!("\n📝 Stage 1: Create engines with large base64 icons");
    for (id, size) in [("big", limit - 1024), ("bigger", 1_400_000)] {
        let icon = icon_data_url("image/png", &vec![7u8; size]);
        let created = send_json(
            &app,
            Method::POST,
            "/api/search-engines",
            json!({"id": id, "name": id, "url": format!("https://{id}.test/?q={{}}"), "icon": icon}),
        )
        .await;
        assert_eq!(created.status, StatusCode::CREATED, "creating {id}");
    }

    let over_limit = send_json(
        &app,
        Method::POST,
        "/api/search-engines",
        json!({
            "id": "huge",
            "name": "huge",
            "url": "https://huge.test/?q={}",
            "icon": icon_data_url("image/png", &vec![7u8; limit + 1]),
        }),
    )
    .await;
    assert_eq!(over_limit.status, StatusCode::BAD_REQUEST);

    println!("\n📝 Stage 2: Export and import back");
    let export = send(&app, Method::GET, "/api/export", None).await;
    assert_eq!(export.status, StatusCode::OK);
    assert!(export.body.to_string().len() > 2 * 1024 * 1024);

    let imported = send_json(&app, Method::POST, "/api/import", export.body.clone()).await;
    assert_eq!(imported.status, StatusCode::OK);
    assert_eq!(imported.body["data"]["searchEngines"], 6);

    let again = send(&app, Method::GET, "/api/export", None).await;
    assert_eq!(again.body["searchEngines"], export.body["searchEngines"]);
}
