//! Configuration loaded from `routemap.toml`.
//!
//! Every field is optional; an absent file means defaults everywhere.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// File name looked up in the project root when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "routemap.toml";

pub const DEFAULT_SOURCE_DIR: &str = "backend/src/main/java";
pub const DEFAULT_FILE_SUFFIX: &str = "Controller.java";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteMapConfig {
    pub scan: ScanConfig,
}

/// How many string literals of one annotation become path fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathPolicy {
    /// Every literal is an alias of the same endpoint.
    #[default]
    AllLiterals,
    /// Only the first literal counts.
    FirstLiteral,
}

/// What to do when a selected file cannot be read or decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileErrorPolicy {
    /// Abort the whole run; no report is produced.
    #[default]
    Abort,
    /// Log a warning and continue with the remaining files.
    Skip,
}

/// Scan settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Source directory, relative to the project root.
    pub source_dir: PathBuf,
    /// Case-sensitive file name suffix selecting controller files.
    pub file_suffix: String,
    pub path_policy: PathPolicy,
    pub on_file_error: FileErrorPolicy,
    pub follow_symlinks: Option<bool>,
    pub respect_gitignore: Option<bool>,
    /// Extra glob patterns excluded from traversal.
    pub extra_ignore: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            path_policy: PathPolicy::default(),
            on_file_error: FileErrorPolicy::default(),
            follow_symlinks: None,
            respect_gitignore: None,
            extra_ignore: Vec::new(),
        }
    }
}

impl ScanConfig {
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(false)
    }
}

impl RouteMapConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration for a project.
    ///
    /// An explicit path must exist. Without one, `routemap.toml` in the
    /// project root is used when present, defaults otherwise.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = project_root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = RouteMapConfig::from_toml("").unwrap();
        assert_eq!(config, RouteMapConfig::default());
        assert_eq!(config.scan.source_dir, PathBuf::from("backend/src/main/java"));
        assert_eq!(config.scan.file_suffix, "Controller.java");
        assert_eq!(config.scan.path_policy, PathPolicy::AllLiterals);
        assert_eq!(config.scan.on_file_error, FileErrorPolicy::Abort);
        assert!(!config.scan.effective_follow_symlinks());
        assert!(!config.scan.effective_respect_gitignore());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let config = RouteMapConfig::from_toml(
            r#"
            [scan]
            source_dir = "src"
            path_policy = "first-literal"
            on_file_error = "skip"
            extra_ignore = ["legacy/**"]
            "#,
        )
        .unwrap();
        assert_eq!(config.scan.source_dir, PathBuf::from("src"));
        assert_eq!(config.scan.file_suffix, "Controller.java");
        assert_eq!(config.scan.path_policy, PathPolicy::FirstLiteral);
        assert_eq!(config.scan.on_file_error, FileErrorPolicy::Skip);
        assert_eq!(config.scan.extra_ignore, vec!["legacy/**".to_string()]);
    }

    #[test]
    fn test_invalid_policy_is_parse_error() {
        let err = RouteMapConfig::from_toml("[scan]\npath_policy = \"some\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RouteMapConfig::load(dir.path(), None).unwrap();
        assert_eq!(config, RouteMapConfig::default());
    }

    #[test]
    fn test_load_reads_project_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[scan]\nfile_suffix = \"Resource.java\"\n",
        )
        .unwrap();
        let config = RouteMapConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.scan.file_suffix, "Resource.java");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = RouteMapConfig::load(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
