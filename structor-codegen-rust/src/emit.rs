use structor_core::{Error, Result};

use crate::compose::CompilationUnit;
use crate::rust_file::{RustFile, render_imports};

/// Render `unit` to source text and check that the text parses as a Rust
/// file.
pub fn emit(unit: &CompilationUnit) -> Result<String> {
    let file = RustFile::new()
        .header(&unit.banner)
        .inner_doc(unit.header.doc())
        .use_stmts(render_imports(&unit.imports))
        .add_all(unit.artifacts.iter().flat_map(|artifact| artifact.items.iter()));
    let text = file.render();

    if let Err(err) = syn::parse_file(&text) {
        let start = err.span().start();
        let span = Error::span_at(&text, start.line, start.column);
        return Err(Error::emission(
            &unit.header.type_name,
            &text,
            Some(span),
            err.to_string(),
        ));
    }

    tracing::debug!(
        type_name = %unit.header.type_name,
        bytes = text.len(),
        "emitted generated source"
    );
    Ok(text)
}
