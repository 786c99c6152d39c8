//! Project root resolution relative to the executable.
//!
//! The tool is installed one level below the project root (for example
//! `<project>/scripts/routemap`), so the root is the executable's
//! grandparent directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub fn default_project_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    project_root_from_exe(&exe)
        .with_context(|| format!("Executable {} has no grandparent directory", exe.display()))
}

pub fn project_root_from_exe(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}
