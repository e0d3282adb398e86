use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use structor_core::{Error, Result};

/// A source file together with its syntax tree.
#[derive(Debug)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub syntax: syn::File,
}

/// Parsed files keyed by path, alive for one invocation.
///
/// Asking for the same path twice returns the same tree without touching
/// the filesystem again.
#[derive(Debug, Default)]
pub struct ParseCache {
    files: HashMap<PathBuf, Rc<ParsedFile>>,
}

impl ParseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every path, in order.
    pub fn parse_all<'a>(
        &mut self,
        paths: impl IntoIterator<Item = &'a PathBuf>,
    ) -> Result<Vec<Rc<ParsedFile>>> {
        paths.into_iter().map(|path| self.parse(path)).collect()
    }

    /// Parse a single file, reusing an earlier result for the same path.
    pub fn parse(&mut self, path: &Path) -> Result<Rc<ParsedFile>> {
        if let Some(parsed) = self.files.get(path) {
            tracing::debug!(path = %path.display(), "parse cache hit");
            return Ok(Rc::clone(parsed));
        }

        let parsed = Rc::new(parse_file(path)?);
        self.files.insert(path.to_path_buf(), Rc::clone(&parsed));
        Ok(parsed)
    }
}

fn parse_file(path: &Path) -> Result<ParsedFile> {
    let source = fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Read {
            path: path.to_path_buf(),
            source,
        })
    })?;

    let syntax = syn::parse_file(&source).map_err(|err| {
        let start = err.span().start();
        let span = Error::span_at(&source, start.line, start.column);
        Error::parse(path, &source, Some(span), err.to_string())
    })?;
    tracing::debug!(path = %path.display(), items = syntax.items.len(), "parsed source file");

    Ok(ParsedFile {
        path: path.to_path_buf(),
        source,
        syntax,
    })
}
