//! Constructor synthesis.
//!
//! Each [`ConstructorKind`] has its own strategy module; both read the same
//! [`TypeDeclaration`] and agree on parameter names, field order and the
//! treatment of excluded fields.

mod all_args;
mod builder;

use structor_codegen::{CodeFragment, Renderable};
use structor_ir::{ConstructorKind, FieldDeclaration, TypeDeclaration};

use crate::RUST_NAMING;
use crate::ast::{Impl, Struct};

/// A top-level item produced by a strategy.
#[derive(Debug, Clone)]
pub enum Item {
    Struct(Struct),
    Impl(Impl),
}

impl Renderable for Item {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Item::Struct(s) => s.to_fragments(),
            Item::Impl(i) => i.to_fragments(),
        }
    }
}

/// The code one strategy contributes for one type.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub kind: ConstructorKind,
    pub items: Vec<Item>,
}

/// Synthesize the constructor of `kind` for `decl`.
pub fn synthesize(decl: &TypeDeclaration, kind: ConstructorKind) -> GeneratedArtifact {
    let items = match kind {
        ConstructorKind::AllArgs => all_args::items(decl),
        ConstructorKind::Builder => builder::items(decl),
    };
    tracing::debug!(
        type_name = %decl.name,
        kind = %kind,
        items = items.len(),
        "synthesized constructor"
    );
    GeneratedArtifact { kind, items }
}

/// Identifier used for a field's parameter, builder field and setter.
pub(crate) fn member_name(field: &FieldDeclaration) -> String {
    RUST_NAMING.member_name(&field.name)
}

/// A struct literal assigning every field in declaration order.
///
/// Included fields take the expression produced by `value`; excluded fields
/// are set to `Default::default()`.
pub(crate) fn struct_literal(
    head: &str,
    decl: &TypeDeclaration,
    value: impl Fn(&FieldDeclaration) -> String,
) -> CodeFragment {
    if decl.fields.is_empty() {
        return CodeFragment::Line(format!("{} {{}}", head));
    }

    let lines = decl
        .fields
        .iter()
        .map(|field| {
            let expr = if field.excluded {
                "Default::default()".to_string()
            } else {
                value(field)
            };
            if expr == field.name {
                CodeFragment::Line(format!("{},", field.name))
            } else {
                CodeFragment::Line(format!("{}: {},", field.name, expr))
            }
        })
        .collect();
    CodeFragment::block(format!("{} {{", head), lines, "}")
}

/// `<ty>: Default` for each distinct excluded field type of a generic struct.
/// Non-generic structs get none.
pub(crate) fn default_bounds(decl: &TypeDeclaration) -> Vec<String> {
    if decl.generics.is_empty() {
        return Vec::new();
    }
    let mut bounds: Vec<String> = Vec::new();
    for field in decl.excluded_fields() {
        let bound = format!("{}: Default", field.ty);
        if !bounds.contains(&bound) {
            bounds.push(bound);
        }
    }
    bounds
}

/// The `impl` block header shared by both strategies.
pub(crate) fn impl_for(decl: &TypeDeclaration, self_ty: String) -> Impl {
    decl.generics
        .where_predicates
        .iter()
        .fold(Impl::new(self_ty).generics(&decl.generics.impl_params), |i, p| {
            i.where_predicate(p)
        })
}

/// Inline-code list of excluded field names, e.g. "`a`, `b`".
pub(crate) fn excluded_list(decl: &TypeDeclaration) -> Option<String> {
    let names: Vec<String> = decl
        .excluded_fields()
        .map(|field| format!("`{}`", field.name))
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

#[cfg(test)]
mod tests {
    use structor_codegen::CodeBuilder;
    use structor_ir::Generics;

    use super::*;

    fn render(fragment: &CodeFragment) -> String {
        let mut builder = CodeBuilder::rust();
        builder.apply_fragment(fragment);
        builder.build()
    }

    fn person() -> TypeDeclaration {
        TypeDeclaration::new("Person")
            .field(FieldDeclaration::new("name", "String"))
            .field(FieldDeclaration::new("internal_id", "String").excluded())
            .field(FieldDeclaration::new("age", "u32"))
    }

    #[test]
    fn test_struct_literal_shorthand_and_defaults() {
        let literal = struct_literal("Self", &person(), |f| member_name(f));
        assert_eq!(
            render(&literal),
            "Self {\n    name,\n    internal_id: Default::default(),\n    age,\n}\n"
        );

        let literal = struct_literal("Person", &person(), |f| format!("self.{}", member_name(f)));
        assert_eq!(
            render(&literal),
            "Person {\n    name: self.name,\n    internal_id: Default::default(),\n    age: self.age,\n}\n"
        );
    }

    #[test]
    fn test_struct_literal_unit() {
        let literal = struct_literal("Self", &TypeDeclaration::new("Marker"), |f| member_name(f));
        assert_eq!(render(&literal), "Self {}\n");
    }

    #[test]
    fn test_default_bounds_only_for_generic_structs() {
        assert!(default_bounds(&person()).is_empty());

        let generic = TypeDeclaration::new("Slot")
            .generics(Generics {
                params: "<T>".to_string(),
                impl_params: "<T>".to_string(),
                args: "<T>".to_string(),
                field_params: vec!["T".to_string()],
                where_predicates: Vec::new(),
            })
            .field(FieldDeclaration::new("a", "T").excluded())
            .field(FieldDeclaration::new("b", "T").excluded())
            .field(FieldDeclaration::new("c", "Vec<T>").excluded());
        assert_eq!(default_bounds(&generic), ["T: Default", "Vec<T>: Default"]);
    }

    #[test]
    fn test_excluded_list() {
        assert_eq!(excluded_list(&person()).as_deref(), Some("`internal_id`"));
        assert_eq!(excluded_list(&TypeDeclaration::new("Marker")), None);
    }
}
