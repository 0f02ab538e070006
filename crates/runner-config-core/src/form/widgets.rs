//! Edit-form model built from an uploaded [`Document`].
//!
//! Every document value becomes a [`FormWidget`] whose `name` is the
//! form-array path of that value (`clients.0.email`).  The HTML renderer only
//! turns widgets into markup; [`FormWidget::submit_unchanged`] reports exactly
//! what a browser sends when the user submits the form without editing it.
//!
//! A top-level `NewFileName` key in the document gets no widget: the save
//! form supplies that field itself.

use serde_json::Value;
use tracing::debug;

use crate::document::{classify, Document, ValueKind};
use crate::form::values::FormValues;
use crate::schema::record::NEW_FILE_NAME_KEY;

/// One labelled control in the edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormWidget {
    /// Form-array path used as the HTML `name` attribute.
    pub name: String,
    /// The last path segment: a key or a list index.
    pub label: String,
    /// Shape of the source value.
    pub kind: ValueKind,
    pub control: Control,
    /// Object element of a list.  Submits an empty value under `name` so the
    /// entry survives even when none of its fields are in the schema.
    pub list_entry: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Free text input pre-filled with the value.  Also used for `null`.
    Text(String),
    /// Number input pre-filled with the value's JSON spelling.
    Number(String),
    /// Checkbox, rendered after a hidden `false` input of the same name.
    Checkbox(bool),
    /// Fieldset holding the widgets of an object's keys or a list's items.
    Group(Vec<FormWidget>),
}

/// Builds one widget per top-level document key, in file order.
pub fn build_widgets(document: &Document) -> Vec<FormWidget> {
    document
        .fields()
        .filter(|field| {
            let reserved = field.key.eq_ignore_ascii_case(NEW_FILE_NAME_KEY);
            if reserved {
                debug!("skipping document key {} reserved for the save form", field.key);
            }
            !reserved
        })
        .map(|field| widget_for(field.key.to_owned(), field.key.to_owned(), field.value, false))
        .collect()
}

fn widget_for(name: String, label: String, value: &Value, in_list: bool) -> FormWidget {
    let kind = classify(value);
    let control = match value {
        Value::String(text) => Control::Text(text.clone()),
        Value::Null => Control::Text(String::new()),
        Value::Number(number) => Control::Number(number.to_string()),
        Value::Bool(flag) => Control::Checkbox(*flag),
        Value::Array(items) => Control::Group(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| widget_for(format!("{name}.{i}"), i.to_string(), item, true))
                .collect(),
        ),
        Value::Object(map) => Control::Group(
            map.iter()
                .map(|(key, item)| widget_for(format!("{name}.{key}"), key.clone(), item, false))
                .collect(),
        ),
    };

    FormWidget {
        name,
        label,
        kind,
        control,
        list_entry: in_list && kind == ValueKind::Object,
    }
}

impl FormWidget {
    /// Appends the values a browser submits for this widget when untouched.
    pub fn submit_unchanged(&self, out: &mut FormValues) {
        match &self.control {
            Control::Text(value) | Control::Number(value) => out.append(&self.name, value),
            Control::Checkbox(checked) => {
                out.append(&self.name, "false");
                if *checked {
                    out.append(&self.name, "true");
                }
            }
            Control::Group(children) => {
                if self.list_entry {
                    out.append(&self.name, "");
                }
                for child in children {
                    child.submit_unchanged(out);
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
