//! Scanner types.

use std::path::{Path, PathBuf};

use routemap_core::errors::ScanError;

/// A selected source file and its full text.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
}

impl SourceUnit {
    /// Read a file as UTF-8.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ScanError::Decode {
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Path relative to `base` with `/` separators, used as the route source.
    /// Falls back to the full path when the file lies outside `base`.
    pub fn relative_to(&self, base: &Path) -> String {
        let rel = self.path.strip_prefix(base).unwrap_or(&self.path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
