//! Generate command report data structures.

use std::path::{Path, PathBuf};

use structor_core::WriteResult;
use structor_ir::ConstructorKind;

use super::output::{Output, Report};

/// Report data from constructor generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Name of the target struct.
    pub type_name: String,

    /// Cargo package owning the analyzed files.
    pub package: String,

    /// File the struct was declared in.
    pub source: PathBuf,

    /// Generated constructor kinds, in emission order.
    pub kinds: Vec<ConstructorKind>,

    /// Included fields as `name: type`.
    pub included: Vec<String>,

    /// Names of fields left at their default value.
    pub excluded: Vec<String>,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written { path: PathBuf, write: WriteResult },
    /// Dry-run preview.
    Preview(PreviewFile),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { path, write } => self.render_written(out, path, *write),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, path: &Path, write: WriteResult) {
        out.key_value(
            "Type",
            &format!("{} ({})", self.type_name, self.source.display()),
        );
        out.key_value("Package", &self.package);
        out.key_value("Constructors", &self.kind_list());
        out.newline();

        self.render_fields(out);
        out.newline();

        let verb = match write {
            WriteResult::Created => "Created",
            WriteResult::Overwritten => "Overwritten",
        };
        out.key_value(verb, &path.display().to_string());
    }

    fn render_fields(&self, out: &mut dyn Output) {
        out.section(&format!("Fields ({})", self.included.len()));
        for field in &self.included {
            out.list_item(field);
        }

        if !self.excluded.is_empty() {
            out.section("Left at default");
            for field in &self.excluded {
                out.removed_item(field);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewFile) {
        out.divider(&preview.path);
        out.preformatted(&preview.content);

        out.divider("Summary");
        out.preformatted(&format!(
            "{} for `{}` would be generated",
            self.kind_list(),
            self.type_name
        ));
    }

    fn kind_list(&self) -> String {
        self.kinds
            .iter()
            .map(ConstructorKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
