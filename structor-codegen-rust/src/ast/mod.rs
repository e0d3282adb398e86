//! Rust syntax builders for structs, impls, and functions.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod impls;
mod structs;

pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};

use structor_codegen::CodeFragment;

/// Render a declaration header, moving `where` predicates onto their own
/// lines in rustfmt layout before the opening brace.
fn header_fragments(header: String, predicates: &[String]) -> Vec<CodeFragment> {
    if predicates.is_empty() {
        return vec![CodeFragment::Line(format!("{} {{", header))];
    }
    vec![
        CodeFragment::Line(header),
        CodeFragment::line("where"),
        CodeFragment::indent(
            predicates
                .iter()
                .map(|predicate| CodeFragment::Line(format!("{},", predicate)))
                .collect(),
        ),
        CodeFragment::line("{"),
    ]
}
