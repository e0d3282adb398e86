use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for structor operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Coarse classification of an [`Error`].
///
/// Every failure is terminal for an invocation; the kind only tells the
/// caller which stage gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source set could not be resolved to exactly one package.
    Load,
    /// A source file is not valid Rust.
    Parse,
    /// No struct with the requested name exists in the analyzed files.
    NotFound,
    /// The matched struct cannot be represented by the generator.
    Structural,
    /// The synthesized code failed validation.
    Emission,
    /// The generated file could not be written.
    Write,
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no Rust source files matched {patterns}")]
    #[diagnostic(
        code(structor::no_sources),
        help("pass a directory, a `.rs` file or a recursive `dir/...` pattern")
    )]
    NoSources { patterns: String },

    #[error("'{path}' does not exist")]
    #[diagnostic(code(structor::missing_path))]
    MissingPath { path: PathBuf },

    #[error("'{path}' is not a Rust source file")]
    #[diagnostic(code(structor::not_rust_source))]
    NotRustSource { path: PathBuf },

    #[error("'{path}' is not inside a Cargo package")]
    #[diagnostic(
        code(structor::no_package),
        help("no ancestor directory holds a Cargo.toml with a [package] table")
    )]
    NoPackage { path: PathBuf },

    #[error("ambiguous source set; {count} packages found: {names}")]
    #[diagnostic(
        code(structor::ambiguous_package),
        help("restrict the patterns to files of a single Cargo package")
    )]
    AmbiguousPackage { count: usize, names: String },

    #[error("failed to parse Cargo manifest '{path}'")]
    #[diagnostic(code(structor::manifest_error))]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(code(structor::parse_error))]
    Parse {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("there is no struct named '{type_name}' in the analyzed files")]
    #[diagnostic(
        code(structor::not_found),
        help("searched {searched} file(s); only top-level structs are considered")
    )]
    NotFound { type_name: String, searched: usize },

    #[error("field #{index} of '{type_name}' in '{path}' has no name")]
    #[diagnostic(
        code(structor::unnamed_field),
        help("tuple structs are not supported; declare the fields with names")
    )]
    UnnamedField {
        type_name: String,
        index: usize,
        path: PathBuf,
    },

    #[error("generated code for '{type_name}' is not valid Rust")]
    #[diagnostic(
        code(structor::emission_error),
        help("this is a bug in structor; please report it with the input struct")
    )]
    Emission {
        type_name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Classify this error into the stage that produced it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoSources { .. }
            | Error::MissingPath { .. }
            | Error::NotRustSource { .. }
            | Error::NoPackage { .. }
            | Error::AmbiguousPackage { .. }
            | Error::Manifest { .. }
            | Error::Read { .. } => ErrorKind::Load,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::UnnamedField { .. } => ErrorKind::Structural,
            Error::Emission { .. } => ErrorKind::Emission,
            Error::Write { .. } => ErrorKind::Write,
        }
    }

    /// Create a parse error for a source file.
    pub fn parse(
        path: impl Into<PathBuf>,
        src: &str,
        span: Option<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        let path = path.into();
        Box::new(Error::Parse {
            src: NamedSource::new(path.display().to_string(), src.to_string()),
            path,
            span,
            message: message.into(),
        })
    }

    /// Build a one-character span from a line/column position in `src`.
    pub fn span_at(src: &str, line: usize, column: usize) -> SourceSpan {
        let start = byte_offset(src, line, column);
        let len = usize::from(start < src.len());
        SourceSpan::from((start, len))
    }

    /// Create an emission error for generated code.
    pub fn emission(
        type_name: impl Into<String>,
        generated: &str,
        span: Option<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Emission {
            type_name: type_name.into(),
            src: NamedSource::new("<generated>", generated.to_string()),
            span,
            message: message.into(),
        })
    }
}

/// Convert a 1-based line and 0-based character column into a byte offset.
///
/// Positions past the end of the text clamp to its length.
pub(crate) fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in src.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            return offset
                + text
                    .char_indices()
                    .nth(column)
                    .map_or(text.len(), |(i, _)| i);
        }
        offset += text.len();
    }
    src.len()
}
