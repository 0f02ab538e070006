//! HTTP handlers for the chooser, loader, and saver steps.
//!
//! Handlers only extract multipart fields and translate results: the real
//! work happens in [`crate::application`].  Every failure is scoped to the
//! request that caused it and comes back as a plain-text error body.
//!
//! | Failure                                  | Status |
//! |------------------------------------------|--------|
//! | missing field, bad JSON, bad file name   | 400    |
//! | malformed multipart body                 | 4xx from axum |
//! | form decode / validation failure         | 500    |
//! | serialization or write failure           | 500    |

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{error, info, warn};

use runner_config_core::FormValues;

use crate::application::{open_document, save_config, ConfigWriter, EditorError, UPLOAD_FIELD};
use crate::infrastructure::pages::PageTemplates;

// ── Shared state ──────────────────────────────────────────────────────────────

/// Read-only state shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<PageTemplates>,
    pub writer: Arc<dyn ConfigWriter>,
}

impl AppState {
    pub fn new(writer: Arc<dyn ConfigWriter>) -> Self {
        Self {
            templates: Arc::new(PageTemplates::new()),
            writer,
        }
    }
}

// ── Error response ────────────────────────────────────────────────────────────

/// Request-scoped failure returned by a handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("could not read form data: {0}")]
    Multipart(#[from] MultipartError),

    #[error("save task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Editor(
                EditorError::MissingField(_) | EditorError::Document(_) | EditorError::FileName(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::Editor(
                EditorError::Decode(_) | EditorError::Serialize(_) | EditorError::Write(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Multipart(e) => e.status(),
            ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed with {status}: {self}");
        } else {
            warn!("request rejected with {status}: {self}");
        }
        (status, self.to_string()).into_response()
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /`: the upload form.
pub async fn choose_file(State(state): State<AppState>) -> Html<String> {
    Html(state.templates.choose())
}

/// `POST /open/`: parse the uploaded document and render its edit form.
pub async fn open_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload.ok_or(EditorError::MissingField(UPLOAD_FIELD))?;
    let form = open_document(&file_name, &bytes)?;
    info!(
        "opened {file_name:?} ({} bytes, {} top-level keys)",
        bytes.len(),
        form.widgets.len()
    );

    Ok(Html(state.templates.edit(&form)))
}

/// `POST /edit/`: decode the submitted form and write the config file.
pub async fn edit_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let mut values = FormValues::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await?;
        values.append(name, value);
    }

    let writer = Arc::clone(&state.writer);
    let saved = tokio::task::spawn_blocking(move || save_config(&values, writer.as_ref())).await??;

    Ok(Html(state.templates.saved(&saved)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
