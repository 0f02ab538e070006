//! # runner-config-core
//!
//! Pure domain library for the runner configuration editor.  It has no
//! dependencies on sockets, async runtimes, or the file system.
//!
//! # Architecture overview
//!
//! The editor is a three-step pipeline: the user uploads a JSON document, edits
//! it through a generated HTML form, and saves the submitted form as a typed
//! configuration file.  This crate owns every step that does not touch I/O:
//!
//! - **`document`** – The uploaded, untyped JSON object and the
//!   [`classify`] function that tags each value with a [`ValueKind`] so a
//!   renderer can choose an input widget for it.
//!
//! - **`schema`** – The fixed [`ConfigRecord`] schema (clients, tests,
//!   commands), the [`Numeric`] wrapper used for every number field, and the
//!   range checks applied after decoding.
//!
//! - **`form`** – The form-array encoding.  Flat form keys such as
//!   `tests.0.commands.2.cmdId` are decoded into the nested record by
//!   [`decode_form`], and [`encode_form`] produces the inverse.  The
//!   [`widgets`](form::widgets) module turns a [`Document`] into the form
//!   model the edit page renders.
//!
//! - **`output`** – The rules for the output file name and the pretty JSON
//!   serialization written to disk.

pub mod document;
pub mod form;
pub mod output;
pub mod schema;

pub use document::{classify, Document, DocumentError, DocumentField, ValueKind};
pub use form::decode::{
    decode_form, DecodeError, FieldError, FieldErrorKind, MAX_LIST_ENTRIES, MAX_LIST_INDEX,
};
pub use form::encode::encode_form;
pub use form::values::FormValues;
pub use form::widgets::{build_widgets, Control, FormWidget};
pub use output::{suggested_stem, to_pretty_json, FileNameError, OutputFileName};
pub use schema::numeric::Numeric;
pub use schema::record::{ClientRecord, CommandRecord, ConfigRecord, TestRecord, NEW_FILE_NAME_KEY};
