//! The open and save use cases of the editor.
//!
//! Both use cases are plain functions over bytes and form values.  They know
//! nothing about HTTP: the infrastructure layer extracts the multipart fields,
//! calls these functions, and maps [`EditorError`] onto status codes.
//!
//! # Flow
//!
//! ```text
//! open_document(name, bytes)   → EditForm     (rendered as the edit page)
//! save_config(values, writer)  → SavedConfig  (rendered as the saved page)
//! ```
//!
//! Writing is delegated to a [`ConfigWriter`] so tests can record writes in
//! memory instead of touching the disk.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use runner_config_core::{
    build_widgets, decode_form, suggested_stem, to_pretty_json, ConfigRecord, DecodeError,
    Document, DocumentError, FileNameError, FormValues, FormWidget, OutputFileName,
};

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "user_file";

// ── Error types ───────────────────────────────────────────────────────────────

/// Failure to persist a serialized config.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The working directory could not be resolved.
    #[error("could not determine output directory: {0}")]
    OutputDir(#[source] io::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything that can go wrong while opening or saving a config.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A required multipart field was not submitted.
    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    /// The uploaded bytes are not a JSON object.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The submitted form failed coercion or validation.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// `NewFileName` is missing or could escape the output directory.
    #[error(transparent)]
    FileName(#[from] FileNameError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Write(#[from] WriteError),
}

// ── Writer seam ───────────────────────────────────────────────────────────────

/// Destination for serialized config files.
pub trait ConfigWriter: Send + Sync {
    /// Writes `contents` as the file for `name`, replacing any existing file,
    /// and returns the absolute path written.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError`] when the directory cannot be resolved or the
    /// file cannot be written.
    fn write(&self, name: &OutputFileName, contents: &[u8]) -> Result<PathBuf, WriteError>;
}

// ── Open ──────────────────────────────────────────────────────────────────────

/// The edit page model for one uploaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    /// File name as sent by the browser.
    pub uploaded_name: String,
    /// Pre-filled `NewFileName` value.
    pub suggested_name: String,
    pub widgets: Vec<FormWidget>,
}

/// Parses an uploaded document and builds its edit form.
///
/// # Errors
///
/// Returns [`EditorError::Document`] when `bytes` is not a JSON object.  The
/// error is scoped to this request.
pub fn open_document(uploaded_name: &str, bytes: &[u8]) -> Result<EditForm, EditorError> {
    let document = Document::from_slice(bytes)?;

    for field in document.fields() {
        debug!("document key {} is {}", field.key, field.kind);
    }

    Ok(EditForm {
        uploaded_name: uploaded_name.to_owned(),
        suggested_name: suggested_stem(uploaded_name).to_owned(),
        widgets: build_widgets(&document),
    })
}

// ── Save ──────────────────────────────────────────────────────────────────────

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedConfig {
    pub path: PathBuf,
    pub record: ConfigRecord,
    pub bytes_written: usize,
}

/// Decodes a submitted form, serializes the record, and writes it.
///
/// Nothing is written unless decoding, validation, and file name checks all
/// pass.
///
/// # Errors
///
/// - [`EditorError::Decode`] for coercion or validation failures.
/// - [`EditorError::FileName`] for a missing or unsafe `NewFileName`.
/// - [`EditorError::Write`] when the writer fails.
pub fn save_config(
    values: &FormValues,
    writer: &dyn ConfigWriter,
) -> Result<SavedConfig, EditorError> {
    let record = decode_form(values)?;
    let name = OutputFileName::parse(&record.new_file_name)?;
    let contents = to_pretty_json(&record)?;

    let path = writer.write(&name, &contents)?;
    info!("saved config {} ({} bytes)", path.display(), contents.len());

    Ok(SavedConfig {
        path,
        record,
        bytes_written: contents.len(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
