//! Sequential file walker using the `ignore` crate's `Walk`.
//!
//! Selects files by a case-sensitive name suffix. Siblings are visited in
//! file-name order so the selection is identical across runs.

use std::path::{Path, PathBuf};

use routemap_core::config::ScanConfig;
use routemap_core::errors::ScanError;

/// Lazy iterator over the selected files of one source root.
pub struct ControllerFiles {
    walk: ignore::Walk,
    suffix: String,
}

impl Iterator for ControllerFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for entry in self.walk.by_ref() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            // Regular files, or unfollowed links that resolve to one
            let is_file = match entry.file_type() {
                Some(ft) if ft.is_file() => true,
                Some(ft) if ft.is_symlink() => entry.path().is_file(),
                _ => false,
            };
            if !is_file {
                continue;
            }

            if entry
                .file_name()
                .to_string_lossy()
                .ends_with(self.suffix.as_str())
            {
                return Some(entry.into_path());
            }
        }
        None
    }
}

/// Enumerate files under `root` whose name ends with `config.file_suffix`.
///
/// A missing root is fatal. By default nothing is filtered except
/// `config.extra_ignore`; `.gitignore` handling is opt-in. Symlinked files
/// are always selected; `follow_symlinks` only governs descending into
/// symlinked directories.
pub fn select_files(root: &Path, config: &ScanConfig) -> Result<ControllerFiles, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let respect_gitignore = config.effective_respect_gitignore();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .parents(respect_gitignore)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .follow_links(config.effective_follow_symlinks())
        .sort_by_file_name(|a, b| a.cmp(b));

    if !config.extra_ignore.is_empty() {
        let mut overrides = ignore::overrides::OverrideBuilder::new(root);
        for pattern in &config.extra_ignore {
            // Negated override: exclude matching paths
            if let Err(err) = overrides.add(&format!("!{}", pattern)) {
                tracing::warn!(pattern = %pattern, error = %err, "ignoring invalid exclude pattern");
            }
        }
        match overrides.build() {
            Ok(built) => {
                builder.overrides(built);
            }
            Err(err) => tracing::warn!(error = %err, "failed to build exclude patterns"),
        }
    }

    Ok(ControllerFiles {
        walk: builder.build(),
        suffix: config.file_suffix.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    fn names(root: &Path, config: &ScanConfig) -> Vec<String> {
        select_files(root, config)
            .unwrap()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_selects_suffix_recursively_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b/UserController.java");
        touch(dir.path(), "a/deep/FileController.java");
        touch(dir.path(), "a/FileService.java");
        touch(dir.path(), "ZController.java");

        assert_eq!(
            names(dir.path(), &ScanConfig::default()),
            vec![
                "ZController.java",
                "a/deep/FileController.java",
                "b/UserController.java",
            ]
        );
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Usercontroller.java");
        touch(dir.path(), "UserController.JAVA");
        assert!(names(dir.path(), &ScanConfig::default()).is_empty());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = select_files(&missing, &ScanConfig::default()).err().unwrap();
        assert!(matches!(err, ScanError::RootNotFound { .. }));
    }

    #[test]
    fn test_hidden_and_gitignored_files_selected_by_default() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".hidden/AController.java");
        touch(dir.path(), "gen/BController.java");
        std::fs::write(dir.path().join(".gitignore"), "gen/\n").unwrap();

        assert_eq!(
            names(dir.path(), &ScanConfig::default()),
            vec![".hidden/AController.java", "gen/BController.java"]
        );
    }

    #[test]
    fn test_extra_ignore_excludes_matches() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "legacy/OldController.java");
        touch(dir.path(), "api/NewController.java");
        let config = ScanConfig {
            extra_ignore: vec!["legacy".to_string()],
            ..ScanConfig::default()
        };
        assert_eq!(names(dir.path(), &config), vec!["api/NewController.java"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_selected_without_following() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "real/Target.java");
        std::os::unix::fs::symlink(
            dir.path().join("real/Target.java"),
            dir.path().join("LinkController.java"),
        )
        .unwrap();
        // Dangling link with a matching name is not a file
        std::os::unix::fs::symlink(
            dir.path().join("missing.java"),
            dir.path().join("DanglingController.java"),
        )
        .unwrap();

        assert_eq!(
            names(dir.path(), &ScanConfig::default()),
            vec!["LinkController.java"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_traversed_only_when_following() {
        let outside = tempfile::tempdir().unwrap();
        touch(outside.path(), "UserController.java");
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "api/FileController.java");
        std::os::unix::fs::symlink(outside.path(), dir.path().join("shared")).unwrap();

        assert_eq!(
            names(dir.path(), &ScanConfig::default()),
            vec!["api/FileController.java"]
        );

        let config = ScanConfig {
            follow_symlinks: Some(true),
            ..ScanConfig::default()
        };
        assert_eq!(
            names(dir.path(), &config),
            vec!["api/FileController.java", "shared/UserController.java"]
        );
    }
}
