//! Domain layer for runner-config-web.
//!
//! Holds the server configuration.  The configuration schema itself and the
//! form codec live in the `runner-config-core` crate, which this layer
//! re-exports for convenience.
//!
//! Nothing here performs I/O or reads the environment.

pub mod config;

pub use config::{ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
pub use runner_config_core::{ConfigRecord, Document, FormValues, OutputFileName};
