//! # routemap-analysis
//!
//! Static route discovery for annotation-mapped controllers.
//! Contains the file scanner, the annotation extractor, path-argument
//! parsing, route composition, and the deduplicating route table.

pub mod contracts;
pub mod pipeline;
pub mod scanner;

pub use contracts::table::RouteTable;
pub use pipeline::{RouteScanner, ScanOutcome, ScanStats};
