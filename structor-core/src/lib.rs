//! Core utilities and types for the structor constructor generator.
//!
//! This crate provides the error taxonomy, file writing and naming helpers
//! shared across the structor workspace.

mod error;
mod file;
mod paths;
mod utils;

// Errors
pub use error::{Error, ErrorKind, Result};
// File operations
pub use file::{File, WriteResult};
// Output location
pub use paths::{GENERATED_FILE_SUFFIX, resolve_output_path};
// String utilities
pub use utils::{to_pascal_case, to_snake_case};
