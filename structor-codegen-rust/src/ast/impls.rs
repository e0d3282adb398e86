//! Rust impl block builder.

use structor_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::{Fn, header_fragments};

/// Builder for inherent impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    generics: String,
    self_ty: String,
    where_predicates: Vec<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(self_ty: impl Into<String>) -> Self {
        Self {
            generics: String::new(),
            self_ty: self_ty.into(),
            where_predicates: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Parameters introduced by the block, e.g. `<'a, T: Clone>`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = generics.into();
        self
    }

    pub fn where_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.where_predicates.push(predicate.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn methods_to_fragments(&self) -> Vec<CodeFragment> {
        self.methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(method.to_fragments());
                fragments
            })
            .collect()
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("impl{} {}", self.generics, self.self_ty);
        let mut fragments = header_fragments(header, &self.where_predicates);
        fragments.push(CodeFragment::indent(self.methods_to_fragments()));
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Param;

    #[test]
    fn test_empty_impl() {
        let i = Impl::new("Marker").build();
        assert_eq!(i, "impl Marker {\n}\n");
    }

    #[test]
    fn test_impl_with_methods() {
        let i = Impl::new("PersonBuilder")
            .method(Fn::new("new").returns("Self").body_line("Self::default()"))
            .method(
                Fn::new("build")
                    .receiver("self")
                    .returns("Person")
                    .body_line("Person { name: self.name }"),
            )
            .build();
        assert_eq!(
            i,
            "impl PersonBuilder {\n    pub fn new() -> Self {\n        Self::default()\n    }\n\n    pub fn build(self) -> Person {\n        Person { name: self.name }\n    }\n}\n"
        );
    }

    #[test]
    fn test_generic_impl() {
        let i = Impl::new("Page<'a, T>")
            .generics("<'a, T: Clone>")
            .where_predicate("T: Send")
            .method(Fn::new("len").receiver("&self").param(Param::new("x", "u8")))
            .build();
        assert!(i.starts_with("impl<'a, T: Clone> Page<'a, T>\nwhere\n    T: Send,\n{\n"));
        assert!(i.contains("    pub fn len(&self, x: u8) {\n"));
    }
}
