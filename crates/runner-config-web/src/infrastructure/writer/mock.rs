//! In-memory config writer for tests.
//!
//! Records every write instead of touching the disk, so tests can assert what
//! would have been written and, just as often, that nothing was written.
//!
//! ```ignore
//! let writer = MockConfigWriter::new();
//! save_config(&values, &writer)?;
//! assert_eq!(writer.writes.lock().unwrap()[0].0, "myconfig.json");
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use runner_config_core::OutputFileName;

use crate::application::{ConfigWriter, WriteError};

/// Directory reported in the paths returned by the mock.
pub const MOCK_ROOT: &str = "/mock-output";

#[derive(Debug, Default)]
pub struct MockConfigWriter {
    /// `(file name, contents)` for each successful write, in call order.
    pub writes: Mutex<Vec<(String, Vec<u8>)>>,
    /// When `true`, every write fails with a permission error.
    pub should_fail: bool,
}

impl MockConfigWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigWriter for MockConfigWriter {
    fn write(&self, name: &OutputFileName, contents: &[u8]) -> Result<PathBuf, WriteError> {
        let path = PathBuf::from(MOCK_ROOT).join(name.file_name());
        if self.should_fail {
            return Err(WriteError::Io {
                path,
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock failure"),
            });
        }
        self.writes
            .lock()
            .unwrap()
            .push((name.file_name(), contents.to_vec()));
        Ok(path)
    }
}
