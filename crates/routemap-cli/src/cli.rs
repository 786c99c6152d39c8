use std::path::PathBuf;

use clap::Parser;
use routemap_core::config::{FileErrorPolicy, PathPolicy, RouteMapConfig};

#[derive(Parser, Debug)]
#[command(name = "routemap")]
#[command(about = "List HTTP routes declared by annotation-mapped controllers", long_about = None)]
pub struct Cli {
    /// Project root. Defaults to the grandparent of the executable, which
    /// suits `<project>/scripts/routemap`; a binary run from
    /// `<project>/target/release/` would resolve to `<project>/target`, so pass
    /// this flag there.
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Config file (default: <project-root>/routemap.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use only the first string literal of each mapping annotation
    #[arg(long)]
    pub first_literal_only: bool,

    /// Skip unreadable or non-UTF-8 files instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Flags win over the config file; unset flags leave it alone.
    pub fn apply_overrides(&self, config: &mut RouteMapConfig) {
        if self.first_literal_only {
            config.scan.path_policy = PathPolicy::FirstLiteral;
        }
        if self.skip_unreadable {
            config.scan.on_file_error = FileErrorPolicy::Skip;
        }
    }
}
