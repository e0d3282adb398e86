//! `TypeBuilder` with one chained setter per included field.

use structor_ir::TypeDeclaration;

use super::{Item, default_bounds, excluded_list, impl_for, member_name, struct_literal};
use crate::RUST_NAMING;
use crate::ast::{Field, Fn, Param, Struct};

/// Methods every builder defines or calls; setters must not reuse these names.
const BUILDER_METHODS: &[&str] = &["new", "build", "default"];

/// Name of the builder type generated for `decl`.
pub(crate) fn builder_name(decl: &TypeDeclaration) -> String {
    format!("{}Builder", RUST_NAMING.type_name(&decl.name))
}

/// Lifetime and type parameters that no included field mentions.
fn unused_params(decl: &TypeDeclaration) -> Vec<&str> {
    decl.generics
        .field_params
        .iter()
        .filter(|param| !decl.included_fields().any(|field| mentions(&field.ty, param)))
        .map(String::as_str)
        .collect()
}

fn mentions(ty: &str, param: &str) -> bool {
    ty.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '\''))
        .any(|word| word == param)
}

/// A `PhantomData` field holding `params`, named clear of every struct field.
fn marker_field(decl: &TypeDeclaration, params: &[&str]) -> Field {
    let mut name = "_marker".to_string();
    while decl.fields.iter().any(|field| member_name(field) == name) {
        name.insert(0, '_');
    }

    let types: Vec<String> = params
        .iter()
        .map(|param| {
            if param.starts_with('\'') {
                format!("&{} ()", param)
            } else {
                param.to_string()
            }
        })
        .collect();
    let output = match types.as_slice() {
        [single] => single.clone(),
        _ => format!("({})", types.join(", ")),
    };
    Field::new(name, format!("std::marker::PhantomData<fn() -> {}>", output))
}

fn setter_name(member: &str) -> String {
    if BUILDER_METHODS.contains(&member) {
        format!("with_{}", member)
    } else {
        member.to_string()
    }
}

pub(super) fn items(decl: &TypeDeclaration) -> Vec<Item> {
    let name = builder_name(decl);
    let vis = decl.visibility.for_child_module();
    let generic = !decl.generics.is_empty();

    let mut builder = Struct::new(&name)
        .vis(&vis)
        .doc(format!("Builder for [`{}`].", decl.name))
        .derive("Default")
        .generics(&decl.generics.params);
    for predicate in &decl.generics.where_predicates {
        builder = builder.where_predicate(predicate);
    }
    for field in decl.included_fields() {
        builder = builder.field(Field::new(member_name(field), &field.ty));
    }
    let unused = unused_params(decl);
    if !unused.is_empty() {
        builder = builder.field(marker_field(decl, &unused));
    }

    let mut new = Fn::new("new")
        .vis(&vis)
        .doc("Creates a builder with every field at its default value.")
        .returns("Self");
    if generic {
        new = new.where_predicate("Self: Default");
    }
    let mut methods = vec![new.body_line("Self::default()")];

    for field in decl.included_fields() {
        let member = member_name(field);
        methods.push(
            Fn::new(setter_name(&member))
                .vis(&vis)
                .doc(format!("Sets `{}`.", field.name))
                .receiver("mut self")
                .param(Param::new(&member, &field.ty))
                .returns("Self")
                .body_line(format!("self.{} = {};", member, member))
                .body_line("self"),
        );
    }

    let mut build_doc = format!("Builds the `{}` from the values set so far.", decl.name);
    if let Some(excluded) = excluded_list(decl) {
        build_doc.push_str(&format!("\n\nLeaves {} at the default value.", excluded));
    }
    let mut build = Fn::new("build")
        .vis(&vis)
        .doc(build_doc)
        .receiver("self")
        .returns(decl.self_type());
    for bound in default_bounds(decl) {
        build = build.where_predicate(bound);
    }
    methods.push(build.body_fragment(struct_literal(&decl.name, decl, |field| {
        format!("self.{}", member_name(field))
    })));

    let block = methods
        .into_iter()
        .fold(impl_for(decl, format!("{}{}", name, decl.generics.args)), |block, method| {
            block.method(method)
        });

    vec![Item::Struct(builder), Item::Impl(block)]
}
