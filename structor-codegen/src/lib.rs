//! Language-agnostic code building blocks for structor.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation primitives (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output bookkeeping (ImportCollector)
//! - [`NamingConvention`] - Identifier transforms and reserved words

pub mod builder;
pub mod generation;
mod naming;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::ImportCollector;
pub use naming::NamingConvention;
