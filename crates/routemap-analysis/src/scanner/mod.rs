//! Scanner — controller file selection and loading.

pub mod types;
pub mod walker;

pub use types::SourceUnit;
pub use walker::{select_files, ControllerFiles};
