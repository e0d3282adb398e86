//! RustFile abstraction for structured Rust file generation.
//!
//! A file is laid out as header comment, inner docs, `use` statements and
//! body items, each section separated by one blank line.

use structor_codegen::{CodeBuilder, CodeFragment, ImportCollector, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            symbols => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// Turn collected imports into `use` statements, one per module.
pub fn render_imports(imports: &ImportCollector) -> Vec<Use> {
    imports
        .iter()
        .map(|(module, symbols)| Use::new(module).symbols(symbols.iter().cloned()))
        .collect()
}

/// A structured representation of a Rust file.
#[derive(Default)]
pub struct RustFile {
    header: Option<String>,
    inner_doc: Option<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading `//` comment line.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the module-level `//!` documentation.
    pub fn inner_doc(mut self, doc: impl Into<String>) -> Self {
        self.inner_doc = Some(doc.into());
        self
    }

    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();

        if let Some(header) = &self.header {
            sections.push(vec![CodeFragment::Line(format!("// {}", header))]);
        }
        if let Some(doc) = &self.inner_doc {
            sections.push(
                doc.lines()
                    .map(|line| CodeFragment::InnerDoc(line.to_string()))
                    .collect(),
            );
        }
        if !self.uses.is_empty() {
            sections.push(self.uses.iter().flat_map(|u| u.to_fragments()).collect());
        }
        sections.extend(self.body.iter().cloned());

        let mut builder = CodeBuilder::rust();
        for (i, fragments) in sections.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }
        builder.build()
    }
}
