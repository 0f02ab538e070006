//! Field-name mapping between form paths and record fields.
//!
//! Each record lists its fields once in a [`FormRecord::slot`] table.  The
//! table maps a lower-cased field name to a typed [`Slot`] that borrows the
//! field mutably.  Path traversal and coercion are written once in
//! [`assign`] and shared by every record type.

use crate::form::decode::{FieldErrorKind, MAX_LIST_INDEX};
use crate::schema::numeric::Numeric;
use crate::schema::record::{ClientRecord, CommandRecord, ConfigRecord, TestRecord};

/// Result of applying one form value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Applied,
    /// The path names no field in the schema.
    Unknown,
}

/// Mutable view of one record field, tagged with how to coerce into it.
pub(crate) enum Slot<'a> {
    Text(&'a mut String),
    Numeric(&'a mut Numeric),
    Flag(&'a mut bool),
    List(&'a mut dyn ListSlot),
}

pub(crate) trait FormRecord {
    /// Looks up a field by its lower-cased wire name.
    fn slot(&mut self, field: &str) -> Option<Slot<'_>>;
}

/// Cap on the list entries a single decode may create, summed over every
/// list at every depth.
#[derive(Debug)]
pub(crate) struct EntryBudget {
    limit: usize,
    remaining: usize,
}

impl EntryBudget {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    fn take(&mut self, count: usize) -> Result<(), FieldErrorKind> {
        if count > self.remaining {
            return Err(FieldErrorKind::TooManyEntries { max: self.limit });
        }
        self.remaining -= count;
        Ok(())
    }
}

pub(crate) trait ListSlot {
    fn assign_at(
        &mut self,
        index: usize,
        path: &[&str],
        value: &str,
        budget: &mut EntryBudget,
    ) -> Result<Outcome, FieldErrorKind>;

    /// Makes sure element `index` exists without setting any of its fields.
    fn touch(&mut self, index: usize, budget: &mut EntryBudget) -> Result<(), FieldErrorKind>;
}

impl<T: FormRecord + Default> ListSlot for Vec<T> {
    /// Assigns into element `index`, growing the list only when the value
    /// lands on a known field.  Skipped indices are filled with defaults.
    fn assign_at(
        &mut self,
        index: usize,
        path: &[&str],
        value: &str,
        budget: &mut EntryBudget,
    ) -> Result<Outcome, FieldErrorKind> {
        if let Some(existing) = self.get_mut(index) {
            return assign(existing, path, value, budget);
        }

        let mut fresh = T::default();
        let outcome = assign(&mut fresh, path, value, budget)?;
        if outcome == Outcome::Applied {
            budget.take(index + 1 - self.len())?;
            self.resize_with(index, T::default);
            self.push(fresh);
        }
        Ok(outcome)
    }

    fn touch(&mut self, index: usize, budget: &mut EntryBudget) -> Result<(), FieldErrorKind> {
        if index >= self.len() {
            budget.take(index + 1 - self.len())?;
            self.resize_with(index + 1, T::default);
        }
        Ok(())
    }
}

/// Walks `path` from `record` and coerces `value` into the field it names.
///
/// An empty `value` still resolves the path (so list entries are created) but
/// leaves the field at its current value.  A path that stops at a list index
/// (`clients.1`) is an entry marker: it creates the entry and ignores `value`.
pub(crate) fn assign(
    record: &mut dyn FormRecord,
    path: &[&str],
    value: &str,
    budget: &mut EntryBudget,
) -> Result<Outcome, FieldErrorKind> {
    let Some((field, rest)) = path.split_first() else {
        return Ok(Outcome::Unknown);
    };
    let Some(slot) = record.slot(&field.to_ascii_lowercase()) else {
        return Ok(Outcome::Unknown);
    };

    match (slot, rest) {
        (Slot::Text(target), []) => {
            if !value.is_empty() {
                *target = value.to_owned();
            }
            Ok(Outcome::Applied)
        }
        (Slot::Numeric(target), []) => {
            if !value.is_empty() {
                *target = value.parse().map_err(|_| FieldErrorKind::InvalidNumber {
                    value: value.to_owned(),
                })?;
            }
            Ok(Outcome::Applied)
        }
        (Slot::Flag(target), []) => {
            if !value.is_empty() {
                *target = parse_flag(value).ok_or_else(|| FieldErrorKind::InvalidFlag {
                    value: value.to_owned(),
                })?;
            }
            Ok(Outcome::Applied)
        }
        (Slot::List(list), [index, tail @ ..]) => {
            let Ok(index) = index.parse::<usize>() else {
                return Ok(Outcome::Unknown);
            };
            if index > MAX_LIST_INDEX {
                return Err(FieldErrorKind::IndexTooLarge {
                    index,
                    max: MAX_LIST_INDEX,
                });
            }
            if tail.is_empty() {
                list.touch(index, budget)?;
                return Ok(Outcome::Applied);
            }
            list.assign_at(index, tail, value, budget)
        }
        _ => Ok(Outcome::Unknown),
    }
}

/// Checkbox and boolean spellings accepted for flag fields.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "on" | "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "off" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

// ── Field tables ──────────────────────────────────────────────────────────────

impl FormRecord for ConfigRecord {
    fn slot(&mut self, field: &str) -> Option<Slot<'_>> {
        Some(match field {
            "projectguid" => Slot::Text(&mut self.project_guid),
            "orgid" => Slot::Text(&mut self.org_id),
            "projectid" => Slot::Text(&mut self.project_id),
            "unityconnectenvironnement" => Slot::Text(&mut self.unity_connect_environnement),
            "unityeditorpath" => Slot::Text(&mut self.unity_editor_path),
            "minimumclientnumber" => Slot::Numeric(&mut self.minimum_client_number),
            "host" => Slot::Text(&mut self.host),
            "port" => Slot::Numeric(&mut self.port),
            "clients" => Slot::List(&mut self.clients),
            "tests" => Slot::List(&mut self.tests),
            "newfilename" => Slot::Text(&mut self.new_file_name),
            _ => return None,
        })
    }
}

impl FormRecord for ClientRecord {
    fn slot(&mut self, field: &str) -> Option<Slot<'_>> {
        Some(match field {
            "email" => Slot::Text(&mut self.email),
            "localprojectfolder" => Slot::Text(&mut self.local_project_folder),
            "readytojob" => Slot::Flag(&mut self.ready_to_job),
            "socket" => Slot::Text(&mut self.socket),
            "userid" => Slot::Text(&mut self.user_id),
            "username" => Slot::Text(&mut self.user_name),
            "userpassword" => Slot::Text(&mut self.user_password),
            _ => return None,
        })
    }
}

impl FormRecord for TestRecord {
    fn slot(&mut self, field: &str) -> Option<Slot<'_>> {
        Some(match field {
            "commands" => Slot::List(&mut self.commands),
            "currentcmd" => Slot::Text(&mut self.current_cmd),
            "currentstep" => Slot::Numeric(&mut self.current_step),
            "description" => Slot::Text(&mut self.description),
            "requiredclientnumber" => Slot::Numeric(&mut self.required_client_number),
            "testid" => Slot::Numeric(&mut self.test_id),
            _ => return None,
        })
    }
}

impl FormRecord for CommandRecord {
    fn slot(&mut self, field: &str) -> Option<Slot<'_>> {
        Some(match field {
            "cmdid" => Slot::Numeric(&mut self.cmd_id),
            "addfile" => Slot::Text(&mut self.add_file),
            "clientid" => Slot::Text(&mut self.client_id),
            "cmd" => Slot::Text(&mut self.cmd),
            "completed" => Slot::Flag(&mut self.completed),
            "description" => Slot::Text(&mut self.description),
            "executionorder" => Slot::Text(&mut self.execution_order),
            "initialized" => Slot::Flag(&mut self.initialized),
            "action" => Slot::Text(&mut self.action),
            "comment" => Slot::Text(&mut self.comment),
            _ => return None,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
