//! Range checks applied to a record after its form values have been coerced.
//!
//! Coercion only guarantees that numbers parsed.  These checks reject values
//! that parse but cannot be meaningful: NaN or infinite numbers, ports outside
//! the TCP range, and negative or fractional client counts.  Failing keys are
//! reported with the same dotted form path the user submitted.

use crate::form::decode::{FieldError, FieldErrorKind};
use crate::schema::numeric::Numeric;
use crate::schema::record::ConfigRecord;

const MAX_PORT: i64 = 65_535;

/// Returns every range violation in `record`, in form-path order.
pub fn validate(record: &ConfigRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_count(&mut errors, "minimumClientNumber".into(), record.minimum_client_number);
    check_range(&mut errors, "port".into(), record.port, 0, MAX_PORT);

    for (t, test) in record.tests.iter().enumerate() {
        check_finite(&mut errors, format!("tests.{t}.currentStep"), test.current_step);
        check_count(
            &mut errors,
            format!("tests.{t}.requiredClientNumber"),
            test.required_client_number,
        );
        check_finite(&mut errors, format!("tests.{t}.testId"), test.test_id);

        for (c, command) in test.commands.iter().enumerate() {
            check_finite(&mut errors, format!("tests.{t}.commands.{c}.cmdId"), command.cmd_id);
        }
    }

    errors
}

fn check_finite(errors: &mut Vec<FieldError>, key: String, value: Numeric) -> bool {
    if value.is_finite() {
        true
    } else {
        errors.push(FieldError::new(key, FieldErrorKind::NotFinite));
        false
    }
}

fn check_range(errors: &mut Vec<FieldError>, key: String, value: Numeric, min: i64, max: i64) {
    if !check_finite(errors, key.clone(), value) {
        return;
    }
    match value.as_integer() {
        Some(n) if (min..=max).contains(&n) => {}
        Some(_) => errors.push(FieldError::new(key, FieldErrorKind::OutOfRange { min, max })),
        None => errors.push(FieldError::new(key, FieldErrorKind::NotInteger)),
    }
}

fn check_count(errors: &mut Vec<FieldError>, key: String, value: Numeric) {
    if !check_finite(errors, key.clone(), value) {
        return;
    }
    match value.as_integer() {
        Some(n) if n >= 0 => {}
        Some(_) => errors.push(FieldError::new(key, FieldErrorKind::Negative)),
        None => errors.push(FieldError::new(key, FieldErrorKind::NotInteger)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
