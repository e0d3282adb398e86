//! Rust constructor generation for structor.
//!
//! The pipeline inside this crate is [`synthesize`] (one
//! [`GeneratedArtifact`] per requested kind), [`compose`] (one
//! [`CompilationUnit`] per type) and [`emit`] (validated source text).

mod compose;
mod emit;
mod naming;
mod rust_file;
mod synth;

pub mod ast;

pub use ast::{Field, Fn, Impl, Param, Struct};
pub use compose::{CompilationUnit, ModuleHeader, compose};
pub use emit::emit;
pub use naming::RUST_NAMING;
pub use rust_file::{RustFile, Use, render_imports};
pub use synth::{GeneratedArtifact, Item, synthesize};
