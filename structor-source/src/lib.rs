//! Source analysis for the structor generator.
//!
//! This crate covers everything upstream of synthesis:
//!
//! - [`load_package`] - resolve CLI patterns to the files of one Cargo package
//! - [`ParseCache`] - parse files with `syn`, once per path per invocation
//! - [`extract`] - locate a struct and build its [`TypeDeclaration`]
//! - [`type_text`] - canonical text for types, printed with `prettyplease`
//!
//! [`TypeDeclaration`]: structor_ir::TypeDeclaration

mod directive;
mod extract;
mod loader;
mod parser;
mod type_text;

pub use directive::{DIRECTIVE_ATTRIBUTE, SKIP_SENTINEL, is_excluded};
pub use extract::extract;
pub use loader::{Package, load_package};
pub use parser::{ParseCache, ParsedFile};
pub use type_text::type_text;
