//! RouteScanner — select → load → extract → compose → deduplicate.
//!
//! Single-threaded and sequential. Files are processed in walker order, so
//! on a (method, path) collision the route from the later file survives.

use std::path::Path;

use routemap_core::config::{FileErrorPolicy, ScanConfig};
use routemap_core::errors::ScanError;

use crate::contracts::spring::SpringExtractor;
use crate::contracts::table::RouteTable;
use crate::scanner::{select_files, SourceUnit};

/// Counters reported alongside the route table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    /// Routes composed before deduplication.
    pub routes_composed: usize,
}

/// Result of one scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub table: RouteTable,
    pub stats: ScanStats,
}

/// Discovers routes in a project's controller sources.
pub struct RouteScanner {
    config: ScanConfig,
    extractor: SpringExtractor,
}

impl RouteScanner {
    pub fn new(config: ScanConfig) -> Self {
        let extractor = SpringExtractor::new(config.path_policy);
        Self { config, extractor }
    }

    /// Scan `<project_root>/<source_dir>`.
    ///
    /// Route sources are reported relative to `project_root`.
    pub fn scan(&self, project_root: &Path) -> Result<ScanOutcome, ScanError> {
        let source_root = project_root.join(&self.config.source_dir);
        tracing::info!(root = %source_root.display(), suffix = %self.config.file_suffix, "scan started");

        let mut table = RouteTable::new();
        let mut stats = ScanStats::default();

        for path in select_files(&source_root, &self.config)? {
            let unit = match SourceUnit::load(&path) {
                Ok(unit) => unit,
                Err(err) => match self.config.on_file_error {
                    FileErrorPolicy::Abort => return Err(err),
                    FileErrorPolicy::Skip => {
                        tracing::warn!(error = %err, "skipping unreadable file");
                        stats.files_skipped += 1;
                        continue;
                    }
                },
            };

            let source = unit.relative_to(project_root);
            let routes = self.extractor.extract(&unit.text, &source);
            tracing::debug!(file = %source, routes = routes.len(), "extracted");

            stats.files_scanned += 1;
            stats.routes_composed += routes.len();
            table.extend(routes);
        }

        tracing::info!(
            files = stats.files_scanned,
            skipped = stats.files_skipped,
            composed = stats.routes_composed,
            unique = table.len(),
            "scan finished"
        );

        Ok(ScanOutcome { table, stats })
    }
}
