//! Output file naming and the JSON text written to disk.
//!
//! The user chooses the output name in the `NewFileName` form field; the file
//! is always written as `<name>.json` directly inside the output directory.
//! Names that could escape that directory are rejected.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::schema::record::ConfigRecord;

const EXTENSION: &str = "json";
const INDENT: &[u8] = b"    ";

/// Reasons an output file name is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileNameError {
    #[error("NewFileName is required")]
    Missing,

    #[error("file name {0:?} must not contain path separators")]
    Separator(String),

    #[error("file name {0:?} must not contain NUL bytes")]
    Nul(String),

    #[error("file name {0:?} is reserved")]
    Reserved(String),
}

/// A validated output file name, without the `.json` extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFileName(String);

impl OutputFileName {
    /// Validates a user-supplied name.
    ///
    /// # Errors
    ///
    /// - [`FileNameError::Missing`] for an empty name.
    /// - [`FileNameError::Separator`] when the name contains `/` or `\`.
    /// - [`FileNameError::Nul`] when the name contains a NUL byte.
    /// - [`FileNameError::Reserved`] for `.` and `..`.
    pub fn parse(raw: &str) -> Result<Self, FileNameError> {
        if raw.is_empty() {
            return Err(FileNameError::Missing);
        }
        if raw.contains(['/', '\\']) {
            return Err(FileNameError::Separator(raw.to_owned()));
        }
        if raw.contains('\0') {
            return Err(FileNameError::Nul(raw.to_owned()));
        }
        if raw == "." || raw == ".." {
            return Err(FileNameError::Reserved(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with the `.json` extension appended.
    pub fn file_name(&self) -> String {
        format!("{}.{EXTENSION}", self.0)
    }

    /// Full path of the output file inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Default `NewFileName` for an uploaded file: its final path component with
/// a trailing `.json` (any case) removed.
pub fn suggested_stem(uploaded_name: &str) -> &str {
    let base = uploaded_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(uploaded_name);
    let cut = base.len().saturating_sub(EXTENSION.len() + 1);
    match base.get(cut..) {
        Some(tail) if cut > 0 && tail.eq_ignore_ascii_case(".json") => &base[..cut],
        _ => base,
    }
}

/// Serializes `record` as JSON indented with four spaces, keys in schema order.
///
/// # Errors
///
/// Returns the underlying `serde_json` error; unreachable for records built
/// by the decoder, which rejects non-finite numbers.
pub fn to_pretty_json(record: &ConfigRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    record.serialize(&mut serializer)?;
    Ok(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::numeric::Numeric;

    #[test]
    fn test_plain_name_gets_json_extension() {
        let name = OutputFileName::parse("myconfig").unwrap();
        assert_eq!(name.as_str(), "myconfig");
        assert_eq!(name.file_name(), "myconfig.json");
        assert_eq!(
            name.path_in(Path::new("/srv/out")),
            PathBuf::from("/srv/out/myconfig.json")
        );
    }

    #[test]
    fn test_traversal_names_are_rejected() {
        assert_eq!(
            OutputFileName::parse("../etc/passwd"),
            Err(FileNameError::Separator("../etc/passwd".to_string()))
        );
        assert_eq!(
            OutputFileName::parse("..\\x"),
            Err(FileNameError::Separator("..\\x".to_string()))
        );
        assert_eq!(
            OutputFileName::parse(".."),
            Err(FileNameError::Reserved("..".to_string()))
        );
    }

    #[test]
    fn test_empty_and_nul_names_are_rejected() {
        assert_eq!(OutputFileName::parse(""), Err(FileNameError::Missing));
        assert!(matches!(
            OutputFileName::parse("a\0b"),
            Err(FileNameError::Nul(_))
        ));
    }

    #[test]
    fn test_dotted_names_are_allowed() {
        assert!(OutputFileName::parse("config.v2").is_ok());
        assert!(OutputFileName::parse(".hidden").is_ok());
    }

    #[test]
    fn test_suggested_stem_strips_extension_and_directories() {
        assert_eq!(suggested_stem("runner.json"), "runner");
        assert_eq!(suggested_stem("RUNNER.JSON"), "RUNNER");
        assert_eq!(suggested_stem("C:\\configs\\runner.json"), "runner");
        assert_eq!(suggested_stem("runner.txt"), "runner.txt");
        assert_eq!(suggested_stem(".json"), ".json");
        assert_eq!(suggested_stem(""), "");
    }

    #[test]
    fn test_pretty_json_uses_four_space_indent() {
        // Arrange
        let record = ConfigRecord {
            port: Numeric(8080.0),
            ..ConfigRecord::default()
        };

        // Act
        let text = String::from_utf8(to_pretty_json(&record).unwrap()).unwrap();

        // Assert
        assert!(text.starts_with("{\n    \"projectGUID\": \"\",\n"));
        assert!(text.contains("\n    \"port\": 8080,\n"));
        assert!(text.contains("\n    \"clients\": [],\n"));
        assert!(text.ends_with("\n}"));
    }
}
