//! File system config writer.
//!
//! Writes `<output dir>/<name>.json`, truncating any existing file.  When no
//! output directory is configured, the process working directory is looked up
//! on every write, so a `chdir` between saves is honoured.
//!
//! Two saves to the same name are last-write-wins; concurrent saves to one
//! name are not serialized.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use runner_config_core::OutputFileName;

use crate::application::{ConfigWriter, WriteError};

#[derive(Debug, Clone, Default)]
pub struct FsConfigWriter {
    output_dir: Option<PathBuf>,
}

impl FsConfigWriter {
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        Self { output_dir }
    }

    /// Resolves the directory for the next write as an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::OutputDir`] if the working directory is needed
    /// and cannot be read.
    pub fn resolve_dir(&self) -> Result<PathBuf, WriteError> {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(current_dir()?.join(dir)),
            None => current_dir(),
        }
    }
}

fn current_dir() -> Result<PathBuf, WriteError> {
    std::env::current_dir().map_err(WriteError::OutputDir)
}

fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o664);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}

impl ConfigWriter for FsConfigWriter {
    fn write(&self, name: &OutputFileName, contents: &[u8]) -> Result<PathBuf, WriteError> {
        let path = name.path_in(&self.resolve_dir()?);
        write_file(&path, contents).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
