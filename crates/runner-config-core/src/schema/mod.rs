//! The typed configuration schema.
//!
//! - [`record`] – the record structs and their wire names.
//! - [`numeric`] – the number type used by every numeric field.
//! - [`validate`] – range checks run after form decoding.

pub mod numeric;
pub mod record;
pub mod validate;

pub use numeric::Numeric;
pub use record::{ClientRecord, CommandRecord, ConfigRecord, TestRecord};
pub use validate::validate;
