//! Decoding submitted form values into a [`ConfigRecord`].
//!
//! # Form-array encoding
//!
//! A form key is a dot-separated path.  Each segment names a record field,
//! matched case-insensitively against the field's JSON name.  A list field is
//! followed by a zero-based index and then a field of the list element:
//!
//! ```text
//! port                          -> ConfigRecord.port
//! clients.0.email               -> ConfigRecord.clients[0].email
//! tests.1.commands.2.cmdId      -> ConfigRecord.tests[1].commands[2].cmd_id
//! NewFileName                   -> ConfigRecord.new_file_name (not serialized)
//! ```
//!
//! When a key is submitted several times the last value is used.  Lists grow
//! to the highest index submitted; skipped entries hold default records.  A
//! key that stops at an index (`clients.1`) only creates that entry.  An
//! empty value leaves its field at the default.  Keys that match no field are
//! ignored.
//!
//! Growth is bounded twice: no index may exceed [`MAX_LIST_INDEX`], and the
//! whole form may create at most [`MAX_LIST_ENTRIES`] entries across all
//! lists, so nested padding cannot multiply.
//!
//! Decoding is all-or-nothing: every coercion failure is collected, then the
//! range checks in [`crate::schema::validate`] run, and any failure rejects
//! the whole form.

use thiserror::Error;
use tracing::debug;

use crate::form::fields::{assign, EntryBudget, Outcome};
use crate::form::values::FormValues;
use crate::schema::record::ConfigRecord;
use crate::schema::validate::validate;

/// Highest list index accepted in a form path.
pub const MAX_LIST_INDEX: usize = 1000;

/// Most list entries one form may create, counting every `clients`, `tests`
/// and `commands` entry including padding for skipped indices.
pub const MAX_LIST_ENTRIES: usize = 10_000;

/// Why a single form field was rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldErrorKind {
    #[error("expected a number, got {value:?}")]
    InvalidNumber { value: String },

    #[error("expected a boolean, got {value:?}")]
    InvalidFlag { value: String },

    #[error("list index {index} exceeds the maximum of {max}")]
    IndexTooLarge { index: usize, max: usize },

    #[error("form creates more than {max} list entries")]
    TooManyEntries { max: usize },

    #[error("number must be finite")]
    NotFinite,

    #[error("number must be a whole number")]
    NotInteger,

    #[error("number must not be negative")]
    Negative,

    #[error("number must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },
}

/// A rejected form field and the path it was submitted under.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{key}: {kind}")]
pub struct FieldError {
    pub key: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(key: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

/// The form could not be turned into a valid record.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid form submission: {}", join_errors(.errors))]
pub struct DecodeError {
    pub errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Decodes `values` into a validated [`ConfigRecord`].
///
/// # Errors
///
/// Returns [`DecodeError`] listing every field that failed coercion, or, when
/// all fields coerced, every field that failed validation.
///
/// # Example
///
/// ```rust
/// use runner_config_core::{decode_form, FormValues, Numeric};
///
/// let values: FormValues = [("port", "8080"), ("clients.0.email", "a@b.c")]
///     .into_iter()
///     .collect();
/// let record = decode_form(&values).unwrap();
/// assert_eq!(record.port, Numeric(8080.0));
/// assert_eq!(record.clients[0].email, "a@b.c");
/// ```
pub fn decode_form(values: &FormValues) -> Result<ConfigRecord, DecodeError> {
    let mut record = ConfigRecord::default();
    let mut budget = EntryBudget::new(MAX_LIST_ENTRIES);
    let mut errors = Vec::new();

    for (key, submitted) in values.iter() {
        let Some(value) = submitted.last() else {
            continue;
        };
        let path: Vec<&str> = key.split('.').collect();

        match assign(&mut record, &path, value, &mut budget) {
            Ok(Outcome::Applied) => {}
            Ok(Outcome::Unknown) => debug!("ignoring form key outside the schema: {key}"),
            Err(kind) => errors.push(FieldError::new(key, kind)),
        }
    }

    if errors.is_empty() {
        errors = validate(&record);
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(DecodeError { errors })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
