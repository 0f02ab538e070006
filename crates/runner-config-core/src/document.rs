//! The uploaded, untyped JSON document and value classification.
//!
//! A [`Document`] is whatever JSON object the user uploaded.  Its shape is not
//! checked against the configuration schema: the edit page shows every key,
//! and keys the schema does not know are simply dropped when the form is saved.
//!
//! # Classification
//!
//! The renderer never inspects a `serde_json::Value` directly.  It asks
//! [`classify`] for a [`ValueKind`] and picks a widget from that tag:
//!
//! | JSON value          | `ValueKind` | Widget            |
//! |---------------------|-------------|-------------------|
//! | `"text"`            | `Text`      | text input        |
//! | `42`, `1.5`         | `Number`    | number input      |
//! | `true` / `false`    | `Boolean`   | checkbox          |
//! | `[ ... ]`           | `List`      | indexed fieldset  |
//! | `{ ... }`           | `Object`    | named fieldset    |
//! | `null`              | `Null`      | empty text input  |

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while turning uploaded bytes into a [`Document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The bytes are not syntactically valid JSON.
    #[error("uploaded file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The JSON parsed, but its root is not an object.
    #[error("uploaded JSON must be an object at the root, found {found}")]
    NotAnObject { found: ValueKind },
}

/// Shape tag for a JSON value, used to choose an input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Number,
    Boolean,
    List,
    Object,
    Null,
}

impl ValueKind {
    /// Lower-case name used in log output and HTML `data-kind` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::List => "list",
            ValueKind::Object => "object",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the shape tag of `value`.
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::String(_) => ValueKind::Text,
        Value::Number(_) => ValueKind::Number,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Array(_) => ValueKind::List,
        Value::Object(_) => ValueKind::Object,
        Value::Null => ValueKind::Null,
    }
}

/// A JSON object uploaded by the user, with keys in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    entries: Map<String, Value>,
}

/// One top-level key of a [`Document`] together with its shape tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentField<'a> {
    pub key: &'a str,
    pub value: &'a Value,
    pub kind: ValueKind,
}

impl Document {
    /// Parses uploaded bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidJson`] for malformed input and
    /// [`DocumentError::NotAnObject`] when the root is an array, string, or
    /// other non-object value.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Wraps an already parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotAnObject`] when `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(DocumentError::NotAnObject {
                found: classify(&other),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates the top-level keys in file order, each with its [`ValueKind`].
    pub fn fields(&self) -> impl Iterator<Item = DocumentField<'_>> {
        self.entries.iter().map(|(key, value)| DocumentField {
            key,
            value,
            kind: classify(value),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
