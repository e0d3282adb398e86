//! Assembly of synthesized artifacts into one generated file.

use structor_codegen::ImportCollector;
use structor_ir::TypeDeclaration;

use crate::synth::GeneratedArtifact;

/// Module-level documentation of a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleHeader {
    pub type_name: String,
    pub package: String,
}

impl ModuleHeader {
    pub fn doc(&self) -> String {
        format!(
            "Constructors for `{}` in package `{}`.",
            self.type_name, self.package
        )
    }
}

/// Everything that ends up in one generated file, in output order.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    /// Provenance line, without the comment marker.
    pub banner: String,
    pub header: ModuleHeader,
    pub imports: ImportCollector,
    /// Artifacts sorted by constructor kind.
    pub artifacts: Vec<GeneratedArtifact>,
}

/// Compose the file for `decl` from its artifacts.
///
/// `args` are the invocation arguments recorded in the banner. Artifacts are
/// ordered all-args first, builder second, whatever the request order was.
pub fn compose(
    args: &[String],
    package: &str,
    decl: &TypeDeclaration,
    mut artifacts: Vec<GeneratedArtifact>,
) -> CompilationUnit {
    artifacts.sort_by_key(|artifact| artifact.kind);

    let mut imports = ImportCollector::new();
    imports.add("super", "*");

    CompilationUnit {
        banner: banner(args),
        header: ModuleHeader {
            type_name: decl.name.clone(),
            package: package.to_string(),
        },
        imports,
        artifacts,
    }
}

/// The banner is a single `//` line, so line breaks inside arguments are escaped.
fn banner(args: &[String]) -> String {
    if args.is_empty() {
        return "Code generated by structor; DO NOT EDIT.".to_string();
    }
    let args = args
        .iter()
        .map(|arg| arg.replace('\r', "\\r").replace('\n', "\\n"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("Code generated by structor {}; DO NOT EDIT.", args)
}
