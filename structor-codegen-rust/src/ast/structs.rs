//! Rust struct builder.

use structor_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::header_fragments;

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    /// Create a private field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn to_fragment(&self) -> CodeFragment {
        CodeFragment::Line(format!("{}: {},", self.name, self.ty))
    }
}

/// Builder for Rust structs with named fields.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    vis: String,
    generics: String,
    where_predicates: Vec<String>,
    doc: Option<String>,
    derives: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    /// Create a public struct.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: "pub".to_string(),
            generics: String::new(),
            where_predicates: Vec::new(),
            doc: None,
            derives: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn vis(mut self, vis: impl Into<String>) -> Self {
        self.vis = vis.into();
        self
    }

    /// Generic parameters as written after the name, e.g. `<'a, T: Clone>`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = generics.into();
        self
    }

    pub fn where_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.where_predicates.push(predicate.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.extend(CodeFragment::docs(doc));
        }
        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        let header = format!("{} struct {}{}", self.vis, self.name, self.generics);
        if self.fields.is_empty() && self.where_predicates.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", header)));
            return fragments;
        }

        fragments.extend(header_fragments(header, &self.where_predicates));
        fragments.push(CodeFragment::indent(
            self.fields.iter().map(Field::to_fragment).collect(),
        ));
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}
