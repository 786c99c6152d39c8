//! # routemap-core
//!
//! Core types, errors, configuration, and tracing setup shared by the
//! routemap crates.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::{FileErrorPolicy, PathPolicy, RouteMapConfig, ScanConfig};
pub use errors::{ConfigError, ScanError};
pub use types::{HttpMethod, RouteRecord};
