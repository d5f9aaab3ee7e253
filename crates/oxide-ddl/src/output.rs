//! Output file resolution and writing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use oxide_ddl_core::WriteMode;
use tracing::debug;

use crate::error::Result;

/// Default name of the generated file.
pub const DEFAULT_FILE_NAME: &str = "generator.go";

/// Where and how generated code is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    path: PathBuf,
    mode: WriteMode,
}

impl OutputTarget {
    /// Creates a target for an explicit path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    /// Resolves the output path for a SQL file.
    ///
    /// Without a target directory the file is placed next to the SQL file.
    #[must_use]
    pub fn resolve(source: &Path, target_dir: Option<&Path>, file_name: &str, mode: WriteMode) -> Self {
        let dir = target_dir
            .or_else(|| source.parent())
            .unwrap_or_else(|| Path::new(""));
        Self::new(dir.join(file_name), mode)
    }

    /// Returns the output path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the write mode.
    #[must_use]
    pub const fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Writes `content`, appending or truncating according to the mode.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened or written.
    pub fn write(&self, content: &str) -> Result<()> {
        let mut options = OpenOptions::new();
        options.create(true);
        match self.mode {
            WriteMode::Append => options.append(true),
            WriteMode::Overwrite => options.write(true).truncate(true),
        };
        debug!(path = %self.path.display(), mode = %self.mode, "opening output");
        let mut file = options.open(&self.path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}
