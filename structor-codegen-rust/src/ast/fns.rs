//! Rust function builder.

use structor_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::header_fragments;

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Rust functions and methods.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    vis: String,
    doc: Option<String>,
    attrs: Vec<String>,
    receiver: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    where_predicates: Vec<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    /// Create a public function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: "pub".to_string(),
            doc: None,
            attrs: Vec::new(),
            receiver: None,
            params: Vec::new(),
            return_type: None,
            where_predicates: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn vis(mut self, vis: impl Into<String>) -> Self {
        self.vis = vis.into();
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    /// Make this a method taking `receiver` (`self`, `&self`, `mut self`...).
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn where_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.where_predicates.push(predicate.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a structured fragment to the function body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn signature(&self) -> String {
        let params = self
            .receiver
            .iter()
            .cloned()
            .chain(self.params.iter().map(|p| format!("{}: {}", p.name, p.ty)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = format!("{} fn {}({})", self.vis, self.name, params);
        if let Some(ret) = &self.return_type {
            signature.push_str(" -> ");
            signature.push_str(ret);
        }
        signature
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.extend(CodeFragment::docs(doc));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }
        fragments.extend(header_fragments(self.signature(), &self.where_predicates));
        fragments.push(CodeFragment::indent(self.body.clone()));
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}
