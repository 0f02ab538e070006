//! Form-array encoding between flat HTML form fields and the typed schema.
//!
//! - [`values`] – the multi-valued field map a form submission produces.
//! - [`decode`] – flat fields → [`ConfigRecord`](crate::ConfigRecord).
//! - [`encode`] – [`ConfigRecord`](crate::ConfigRecord) → flat fields.
//! - [`widgets`] – uploaded document → edit-form model.

pub mod decode;
pub mod encode;
mod fields;
pub mod values;
pub mod widgets;

pub use decode::{decode_form, DecodeError, FieldError, FieldErrorKind};
pub use encode::encode_form;
pub use values::FormValues;
pub use widgets::{build_widgets, Control, FormWidget};
