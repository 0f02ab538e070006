//! The fixed configuration schema written to disk.
//!
//! Field names on the wire are camelCase and appear in declaration order.  The
//! output file name travels with the record through the form but is never
//! serialized.

use serde::{Deserialize, Serialize};

use crate::schema::numeric::Numeric;

/// Form key carrying the output file name.
pub const NEW_FILE_NAME_KEY: &str = "NewFileName";

/// Top-level runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigRecord {
    #[serde(rename = "projectGUID")]
    pub project_guid: String,
    pub org_id: String,
    pub project_id: String,
    /// Connection environment name (the misspelling is part of the format).
    pub unity_connect_environnement: String,
    pub unity_editor_path: String,
    /// Minimum number of clients that must be connected before tests start.
    pub minimum_client_number: Numeric,
    pub host: String,
    pub port: Numeric,
    pub clients: Vec<ClientRecord>,
    pub tests: Vec<TestRecord>,
    /// Output file name without the `.json` extension.
    #[serde(skip)]
    pub new_file_name: String,
}

/// A machine taking part in a test run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRecord {
    pub email: String,
    pub local_project_folder: String,
    pub ready_to_job: bool,
    pub socket: String,
    pub user_id: String,
    pub user_name: String,
    pub user_password: String,
}

/// An ordered sequence of commands plus its progress markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestRecord {
    pub commands: Vec<CommandRecord>,
    pub current_cmd: String,
    pub current_step: Numeric,
    pub description: String,
    pub required_client_number: Numeric,
    pub test_id: Numeric,
}

/// A single step of a test, addressed to one client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandRecord {
    pub cmd_id: Numeric,
    /// File to add before running the command; empty when there is none.
    pub add_file: String,
    pub client_id: String,
    pub cmd: String,
    pub completed: bool,
    pub description: String,
    pub execution_order: String,
    pub initialized: bool,
    pub action: String,
    pub comment: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
