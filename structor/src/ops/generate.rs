//! Generate operation - constructor synthesis for one struct.

use std::path::Path;

use structor_codegen_rust::{compose, emit, synthesize};
use structor_core::{File, Result, resolve_output_path};
use structor_ir::ConstructorRequest;
use structor_source::{ParseCache, extract, load_package};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Name of the target struct.
    pub type_name: &'a str,
    /// Source patterns as given on the command line.
    pub patterns: &'a [String],
    /// Constructor kinds to synthesize.
    pub request: &'a ConstructorRequest,
    /// Explicit destination, overriding the default location.
    pub output: Option<&'a Path>,
    /// Invocation arguments recorded in the generated banner.
    pub args: &'a [String],
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Every stage runs before anything touches the filesystem, so a failure
/// at any point leaves the destination as it was.
pub fn generate(opts: GenerateOptions, cache: &mut ParseCache) -> Result<GenerateReport> {
    let package = load_package(opts.patterns)?;
    let files = cache.parse_all(&package.files)?;
    let decl = extract(opts.type_name, files.iter().map(|file| &**file))?;

    let artifacts = opts
        .request
        .kinds()
        .iter()
        .map(|kind| synthesize(&decl, *kind))
        .collect();
    let unit = compose(opts.args, &package.name, &decl, artifacts);
    let content = emit(&unit)?;

    let path = resolve_output_path(opts.output, opts.patterns, opts.type_name);
    let file = File::new(&path, content);

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewFile {
            path: path.display().to_string(),
            content: file.content().to_string(),
        })
    } else {
        GenerationResult::Written {
            path: path.clone(),
            write: file.write()?,
        }
    };

    Ok(GenerateReport {
        type_name: decl.name.clone(),
        package: package.name,
        source: decl.source.clone(),
        kinds: opts.request.kinds().to_vec(),
        included: decl
            .included_fields()
            .map(|field| format!("{}: {}", field.name, field.ty))
            .collect(),
        excluded: decl
            .excluded_fields()
            .map(|field| field.name.clone())
            .collect(),
        result,
    })
}
