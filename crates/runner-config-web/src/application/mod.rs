//! Application layer for runner-config-web.
//!
//! # Responsibilities
//!
//! - Turning uploaded bytes into an edit form model
//! - Turning submitted form values into a written config file
//! - Defining the `ConfigWriter` seam and the `EditorError` type
//!
//! # What does NOT belong here?
//!
//! - Multipart parsing and status codes (infrastructure)
//! - HTML markup (infrastructure)
//! - Opening files (the `ConfigWriter` implementations)

pub mod editor_service;

pub use editor_service::{
    open_document, save_config, ConfigWriter, EditForm, EditorError, SavedConfig, WriteError,
    UPLOAD_FIELD,
};
