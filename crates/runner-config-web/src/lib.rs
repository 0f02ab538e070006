//! runner-config-web library crate.
//!
//! A local web editor for test runner configuration files: upload a JSON
//! config, edit it in a generated form, and save it as a new JSON file.
//!
//! # Architecture
//!
//! ```text
//! Browser (HTML forms over HTTP)
//!         ↕
//! [runner-config-web]
//!   ├── domain/           ServerConfig
//!   ├── application/      open_document / save_config use cases
//!   └── infrastructure/
//!         ├── http_server/  axum router + serve loop
//!         ├── handlers/     multipart extraction, error responses
//!         ├── pages/        HTML rendering
//!         ├── writer/       file system and mock ConfigWriter
//!         └── settings_file/ optional TOML settings
//!         ↕
//! [runner-config-core]    schema, classification, form codec
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain` and `runner-config-core` only.
//! - `infrastructure` depends on every other layer plus `axum` and `tokio`.

pub mod application;
pub mod domain;
pub mod infrastructure;
