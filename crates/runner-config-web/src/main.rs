//! Runner config editor: entry point.
//!
//! Serves a three-step HTML workflow on a local port:
//!
//! 1. `GET /` shows an upload form.
//! 2. `POST /open/` parses the uploaded JSON and renders one input per key.
//! 3. `POST /edit/` decodes the edited form and writes `<NewFileName>.json`.
//!
//! # Usage
//!
//! ```text
//! runner-config-web [OPTIONS]
//!
//! Options:
//!   --config           <FILE>  TOML settings file with a [server] table
//!   --bind             <IP>    Listener address [default: 127.0.0.1]
//!   --port             <PORT>  Listener port [default: 8080]
//!   --output-dir       <DIR>   Where saved configs go [default: working dir]
//!   --max-upload-bytes <N>     Request body limit [default: 2097152]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                   | Flag                 |
//! |----------------------------|----------------------|
//! | `RUNNER_CONFIG_FILE`       | `--config`           |
//! | `RUNNER_CONFIG_BIND`       | `--bind`             |
//! | `RUNNER_CONFIG_PORT`       | `--port`             |
//! | `RUNNER_CONFIG_OUTPUT_DIR` | `--output-dir`       |
//! | `RUNNER_CONFIG_MAX_UPLOAD` | `--max-upload-bytes` |
//!
//! Precedence, highest first: command line, environment, settings file,
//! built-in defaults.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use runner_config_web::domain::ServerConfig;
use runner_config_web::infrastructure::run_server;
use runner_config_web::infrastructure::settings_file::{load_settings, SettingsFile};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Local web editor for test runner JSON configuration files.
///
/// Every option is optional so that an unset flag falls through to the
/// settings file instead of shadowing it with a clap default.
#[derive(Debug, Parser)]
#[command(
    name = "runner-config-web",
    about = "Edit test runner JSON configs through a local web form",
    version
)]
struct Cli {
    /// TOML settings file.
    #[arg(long, env = "RUNNER_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// IP address to bind the HTTP listener to.
    ///
    /// Use `0.0.0.0` to expose the editor on the LAN.  Anyone who can reach
    /// the port can write files into the output directory.
    #[arg(long, env = "RUNNER_CONFIG_BIND")]
    bind: Option<String>,

    /// TCP port for the HTTP listener.
    #[arg(long, env = "RUNNER_CONFIG_PORT")]
    port: Option<u16>,

    /// Directory saved configs are written to.
    #[arg(long, env = "RUNNER_CONFIG_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum request body size in bytes.
    #[arg(long, env = "RUNNER_CONFIG_MAX_UPLOAD")]
    max_upload_bytes: Option<usize>,
}

impl Cli {
    /// Merges the CLI arguments over the settings file into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--config` names an unreadable or malformed file,
    /// or if the bind address is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let settings = match &self.config {
            Some(path) => load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => SettingsFile::default(),
        };
        let section = settings.server;

        let bind = self.bind.unwrap_or(section.bind);
        let port = self.port.unwrap_or(section.port);
        let ip: IpAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address: '{bind}'"))?;

        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, port),
            output_dir: self.output_dir.or(section.output_dir),
            max_upload_bytes: self.max_upload_bytes.unwrap_or(section.max_upload_bytes),
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_server_config()?;

    info!(
        "runner config editor starting: bind={}, max_upload_bytes={}",
        config.bind_addr, config.max_upload_bytes
    );

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, finishing in-flight requests"),
            Err(e) => {
                // Without a signal handler the server runs until killed.
                error!("failed to listen for Ctrl+C signal: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    run_server(config, shutdown).await?;

    info!("runner config editor stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
