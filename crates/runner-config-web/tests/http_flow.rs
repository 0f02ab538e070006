//! End-to-end tests for the HTTP workflow.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! socket is bound.  Saves go through the real [`FsConfigWriter`] pointed at a
//! temporary directory.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use runner_config_core::{build_widgets, Document, FormValues, NEW_FILE_NAME_KEY};
use runner_config_web::domain::DEFAULT_MAX_UPLOAD_BYTES;
use runner_config_web::infrastructure::create_router;
use runner_config_web::infrastructure::handlers::AppState;
use runner_config_web::infrastructure::writer::FsConfigWriter;

const BOUNDARY: &str = "runner-config-test-boundary";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn app_with_limit(dir: &Path, limit: usize) -> Router {
    let writer = Arc::new(FsConfigWriter::new(Some(dir.to_path_buf())));
    create_router(AppState::new(writer), limit)
}

fn app(dir: &Path) -> Router {
    app_with_limit(dir, DEFAULT_MAX_UPLOAD_BYTES)
}

/// Encodes `(name, file name, value)` parts as a multipart/form-data body.
fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
    let mut body = String::new();
    for (name, file_name, value) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match file_name {
            Some(file_name) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: application/json\r\n\r\n"
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
            )),
        }
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn multipart_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn upload_request(file_name: &str, contents: &str) -> Request<Body> {
    multipart_request(
        "/open/",
        multipart_body(&[("user_file", Some(file_name), contents)]),
    )
}

fn edit_request(values: &FormValues) -> Request<Body> {
    let parts: Vec<(&str, Option<&str>, &str)> = values
        .iter()
        .flat_map(|(key, all)| all.iter().map(move |v| (key, None, v.as_str())))
        .collect();
    multipart_request("/edit/", multipart_body(&parts))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn saved_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

fn form(pairs: &[(&str, &str)]) -> FormValues {
    pairs.iter().copied().collect()
}

// ── Chooser ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_root_serves_upload_form() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let request = Request::get("/").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("action=\"/open/\""));
    assert!(body.contains("name=\"user_file\""));
    assert!(body.contains("enctype=\"multipart/form-data\""));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let request = Request::get("/nope").body(Body::empty()).unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_open_renders_one_control_per_key() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let upload = json!({
        "host": "10.0.0.1",
        "port": 8080,
        "clients": [{"email": "a@b.test", "readyToJob": true}]
    });

    // Act
    let (status, body) = send(&app, upload_request("runner.json", &upload.to_string())).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"host\" value=\"10.0.0.1\""));
    assert!(body.contains("type=\"number\" step=\"any\" name=\"port\" value=\"8080\""));
    assert!(body.contains("name=\"clients.0.email\" value=\"a@b.test\""));
    assert!(body.contains("name=\"clients.0.readyToJob\" value=\"true\" data-kind=\"boolean\" checked"));
    assert!(body.contains(&format!("name=\"{NEW_FILE_NAME_KEY}\" value=\"runner\"")));
    assert!(body.contains("action=\"/edit/\""));
}

#[tokio::test]
async fn test_open_escapes_markup_in_values() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let upload = json!({"host": "<script>\"x\"</script>"});

    let (status, body) = send(&app, upload_request("x.json", &upload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_invalid_json_upload_is_rejected_and_server_keeps_serving() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    // Act
    let (status, body) = send(&app, upload_request("bad.json", "{not json")).await;

    // Assert: request-scoped 400, and the next request is served normally
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.is_empty());

    let request = Request::get("/").body(Body::empty()).unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_non_object_upload_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let (status, _) = send(&app, upload_request("list.json", "[1, 2, 3]")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_open_without_upload_field_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let body = multipart_body(&[("something_else", None, "x")]);

    let (status, body) = send(&app, multipart_request("/open/", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("user_file"));
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_limit(dir.path(), 256);
    let big = json!({ "host": "h".repeat(4096) });

    let (status, _) = send(&app, upload_request("big.json", &big.to_string())).await;

    assert!(status.is_client_error());
}

// ── Saver ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_save_writes_named_file_and_confirms_path() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let values = form(&[
        ("NewFileName", "myconfig"),
        ("host", "10.0.0.1"),
        ("port", "9000"),
        ("clients.0.email", "a@b.test"),
        ("clients.0.readyToJob", "false"),
        ("clients.0.readyToJob", "true"),
    ]);

    // Act
    let (status, body) = send(&app, edit_request(&values)).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("A new json file has been saved to: "));
    assert!(body.contains("myconfig.json"));
    assert_eq!(saved_files(dir.path()), ["myconfig.json"]);

    let saved = read_json(&dir.path().join("myconfig.json"));
    assert_eq!(saved["host"], "10.0.0.1");
    assert_eq!(saved["port"], 9000);
    assert_eq!(saved["clients"][0]["email"], "a@b.test");
    assert_eq!(saved["clients"][0]["readyToJob"], true);
    assert_eq!(saved["tests"], json!([]));
}

#[tokio::test]
async fn test_save_uses_four_space_indentation() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let (status, _) = send(&app, edit_request(&form(&[("NewFileName", "indent")]))).await;

    assert_eq!(status, StatusCode::OK);
    let text = std::fs::read_to_string(dir.path().join("indent.json")).unwrap();
    assert!(text.starts_with("{\n    \"projectGUID\": \"\""));
}

#[tokio::test]
async fn test_invalid_number_fails_without_writing() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let values = form(&[("NewFileName", "broken"), ("port", "abc")]);

    // Act
    let (status, body) = send(&app, edit_request(&values)).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("port"));
    assert!(saved_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_out_of_range_port_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let values = form(&[("NewFileName", "range"), ("port", "70000")]);

    let (status, _) = send(&app, edit_request(&values)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(saved_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_nested_list_padding_is_rejected_without_writing() {
    // Arrange: a small request whose indices each pad a separate nested list
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let mut values = form(&[("NewFileName", "big")]);
    for t in 0..=1000 {
        values.append(format!("tests.{t}.commands.1000.cmd"), "x");
    }

    // Act
    let (status, body) = send(&app, edit_request(&values)).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("list entries"));
    assert!(saved_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_traversal_file_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let values = form(&[("NewFileName", "../escape"), ("host", "h")]);

    let (status, _) = send(&app, edit_request(&values)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(saved_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_missing_file_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let (status, _) = send(&app, edit_request(&form(&[("host", "h")]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(saved_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_second_save_to_same_name_wins() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let first = form(&[("NewFileName", "same"), ("port", "1000")]);
    let second = form(&[("NewFileName", "same"), ("port", "2000")]);

    // Act
    let (first_status, _) = send(&app, edit_request(&first)).await;
    let (second_status, _) = send(&app, edit_request(&second)).await;

    // Assert
    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(saved_files(dir.path()), ["same.json"]);
    assert_eq!(read_json(&dir.path().join("same.json"))["port"], 2000);
}

// ── Full workflow ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_then_unmodified_submit_preserves_schema_fields() {
    // Arrange: an upload with one key the schema does not know
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let upload = json!({
        "projectGUID": "guid-1",
        "host": "10.0.0.1",
        "port": 8080,
        "minimumClientNumber": 2,
        "clients": [{"userName": "alice", "readyToJob": false}],
        "tests": [{
            "testId": 7,
            "description": "smoke",
            "commands": [{"cmdId": 1, "cmd": "build", "completed": true}]
        }],
        "notInSchema": "dropped"
    });
    let (status, _) = send(&app, upload_request("runner.json", &upload.to_string())).await;
    assert_eq!(status, StatusCode::OK);

    // Act: submit exactly what a browser would for the untouched form
    let document = Document::from_slice(upload.to_string().as_bytes()).unwrap();
    let mut values = FormValues::new();
    for widget in build_widgets(&document) {
        widget.submit_unchanged(&mut values);
    }
    values.append(NEW_FILE_NAME_KEY, "runner-copy");
    let (status, _) = send(&app, edit_request(&values)).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let saved = read_json(&dir.path().join("runner-copy.json"));
    assert_eq!(saved["projectGUID"], "guid-1");
    assert_eq!(saved["port"], 8080);
    assert_eq!(saved["minimumClientNumber"], 2);
    assert_eq!(saved["clients"][0]["userName"], "alice");
    assert_eq!(saved["clients"][0]["readyToJob"], false);
    assert_eq!(saved["tests"][0]["testId"], 7);
    assert_eq!(saved["tests"][0]["commands"][0]["cmd"], "build");
    assert_eq!(saved["tests"][0]["commands"][0]["completed"], true);
    assert!(saved.get("notInSchema").is_none());
}
