//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for runtime settings.  It is
//! assembled in `main.rs` from CLI arguments, environment variables, and an
//! optional TOML file, then handed to the infrastructure layer.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default body limit for uploads and form submissions: 2 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// All runtime configuration for the editor server.
///
/// # Example
///
/// ```rust
/// use runner_config_web::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 8080);
/// assert!(cfg.output_dir.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    ///
    /// Defaults to loopback: the editor is a single-user local tool and writes
    /// files wherever the submitted form says.
    pub bind_addr: SocketAddr,

    /// Directory saved configs are written to.
    ///
    /// `None` means the process working directory, resolved at the moment of
    /// each write.
    pub output_dir: Option<PathBuf>,

    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    /// | Field            | Default          |
    /// |------------------|------------------|
    /// | bind_addr        | `127.0.0.1:8080` |
    /// | output_dir       | working directory|
    /// | max_upload_bytes | 2 MiB            |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            output_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
