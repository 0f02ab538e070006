//! Infrastructure layer for runner-config-web.
//!
//! # Responsibilities
//!
//! - Binding the HTTP listener and routing requests (axum)
//! - Extracting multipart uploads and form fields
//! - Rendering HTML pages
//! - Writing config files to disk
//! - Reading the optional TOML settings file
//!
//! # What does NOT belong here?
//!
//! - Form decoding and validation (the `runner-config-core` crate)
//! - Use-case orchestration (the application layer)

pub mod handlers;
pub mod http_server;
pub mod pages;
pub mod settings_file;
pub mod writer;

pub use http_server::{create_router, run_server};
