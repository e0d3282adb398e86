//! Intermediate representation types for the structor generator.
//!
//! These types sit between source analysis and code synthesis:
//!
//! ```text
//! *.rs (syn) → structor-source (extraction) → structor-ir → structor-codegen-rust
//! ```
//!
//! A [`TypeDeclaration`] is read-only once extracted; the synthesizers only
//! ever borrow it.

mod declaration;
mod request;

pub use declaration::{FieldDeclaration, Generics, TypeDeclaration, Visibility};
pub use request::{ConstructorKind, ConstructorRequest, DuplicateKind};
