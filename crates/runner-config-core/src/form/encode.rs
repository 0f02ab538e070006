//! Encoding a [`ConfigRecord`] as flat form values.
//!
//! This is the inverse of [`decode_form`](crate::form::decode::decode_form):
//! for any valid record `r`, `decode_form(&encode_form(&r)) == Ok(r)`.  Flags
//! are written as `true`/`false` and numbers with [`Numeric`]'s display rule.

use crate::form::values::FormValues;
use crate::schema::numeric::Numeric;
use crate::schema::record::{ConfigRecord, NEW_FILE_NAME_KEY};

/// Produces the form fields that decode back to `record`.
pub fn encode_form(record: &ConfigRecord) -> FormValues {
    let mut out = FormWriter::default();

    out.text("projectGUID", &record.project_guid);
    out.text("orgId", &record.org_id);
    out.text("projectId", &record.project_id);
    out.text("unityConnectEnvironnement", &record.unity_connect_environnement);
    out.text("unityEditorPath", &record.unity_editor_path);
    out.numeric("minimumClientNumber", record.minimum_client_number);
    out.text("host", &record.host);
    out.numeric("port", record.port);

    for (i, client) in record.clients.iter().enumerate() {
        let p = format!("clients.{i}");
        out.text(&format!("{p}.email"), &client.email);
        out.text(&format!("{p}.localProjectFolder"), &client.local_project_folder);
        out.flag(&format!("{p}.readyToJob"), client.ready_to_job);
        out.text(&format!("{p}.socket"), &client.socket);
        out.text(&format!("{p}.userId"), &client.user_id);
        out.text(&format!("{p}.userName"), &client.user_name);
        out.text(&format!("{p}.userPassword"), &client.user_password);
    }

    for (t, test) in record.tests.iter().enumerate() {
        let p = format!("tests.{t}");
        for (c, command) in test.commands.iter().enumerate() {
            let q = format!("{p}.commands.{c}");
            out.numeric(&format!("{q}.cmdId"), command.cmd_id);
            out.text(&format!("{q}.addFile"), &command.add_file);
            out.text(&format!("{q}.clientId"), &command.client_id);
            out.text(&format!("{q}.cmd"), &command.cmd);
            out.flag(&format!("{q}.completed"), command.completed);
            out.text(&format!("{q}.description"), &command.description);
            out.text(&format!("{q}.executionOrder"), &command.execution_order);
            out.flag(&format!("{q}.initialized"), command.initialized);
            out.text(&format!("{q}.action"), &command.action);
            out.text(&format!("{q}.comment"), &command.comment);
        }
        out.text(&format!("{p}.currentCmd"), &test.current_cmd);
        out.numeric(&format!("{p}.currentStep"), test.current_step);
        out.text(&format!("{p}.description"), &test.description);
        out.numeric(&format!("{p}.requiredClientNumber"), test.required_client_number);
        out.numeric(&format!("{p}.testId"), test.test_id);
    }

    if !record.new_file_name.is_empty() {
        out.text(NEW_FILE_NAME_KEY, &record.new_file_name);
    }

    out.values
}

#[derive(Default)]
struct FormWriter {
    values: FormValues,
}

impl FormWriter {
    fn text(&mut self, key: &str, value: &str) {
        self.values.append(key, value);
    }

    fn numeric(&mut self, key: &str, value: Numeric) {
        self.values.append(key, value.to_string());
    }

    fn flag(&mut self, key: &str, value: bool) {
        self.values.append(key, if value { "true" } else { "false" });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::decode::decode_form;
    use crate::schema::record::{ClientRecord, CommandRecord, TestRecord};

    fn sample_record() -> ConfigRecord {
        ConfigRecord {
            project_guid: "6f1c".to_string(),
            org_id: "acme".to_string(),
            project_id: "runner".to_string(),
            unity_connect_environnement: "production".to_string(),
            unity_editor_path: "C:/Unity/Editor.exe".to_string(),
            minimum_client_number: Numeric(2.0),
            host: "192.168.0.10".to_string(),
            port: Numeric(9000.0),
            clients: vec![ClientRecord {
                email: "qa@acme.test".to_string(),
                ready_to_job: true,
                user_password: "p.w.d".to_string(),
                ..ClientRecord::default()
            }],
            tests: vec![TestRecord {
                commands: vec![CommandRecord {
                    cmd_id: Numeric(1.0),
                    cmd: "open scene".to_string(),
                    initialized: true,
                    ..CommandRecord::default()
                }],
                current_step: Numeric(0.5),
                required_client_number: Numeric(1.0),
                test_id: Numeric(12.0),
                ..TestRecord::default()
            }],
            new_file_name: "edited".to_string(),
        }
    }

    #[test]
    fn test_encode_then_decode_restores_record() {
        let original = sample_record();
        let decoded = decode_form(&encode_form(&original)).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_flags_encode_as_true_false() {
        let values = encode_form(&sample_record());
        assert_eq!(values.last("clients.0.readyToJob"), Some("true"));
        assert_eq!(values.last("tests.0.commands.0.completed"), Some("false"));
    }

    #[test]
    fn test_numbers_encode_without_trailing_fraction() {
        let values = encode_form(&sample_record());
        assert_eq!(values.last("port"), Some("9000"));
        assert_eq!(values.last("tests.0.currentStep"), Some("0.5"));
    }

    #[test]
    fn test_empty_file_name_is_omitted() {
        let values = encode_form(&ConfigRecord::default());
        assert_eq!(values.last(NEW_FILE_NAME_KEY), None);
    }
}
