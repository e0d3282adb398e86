//! `Type::new(..)` taking one argument per included field.

use structor_ir::TypeDeclaration;

use super::{Item, default_bounds, excluded_list, impl_for, member_name, struct_literal};
use crate::ast::{Fn, Param};

/// Clippy's default `too-many-arguments-threshold`.
const MAX_ARGS_BEFORE_LINT: usize = 7;

pub(super) fn items(decl: &TypeDeclaration) -> Vec<Item> {
    let params: Vec<Param> = decl
        .included_fields()
        .map(|field| Param::new(member_name(field), &field.ty))
        .collect();

    let mut doc = format!("Creates a new `{}`.", decl.name);
    if let Some(excluded) = excluded_list(decl) {
        doc.push_str(&format!("\n\nLeaves {} at the default value.", excluded));
    }

    let mut ctor = Fn::new("new")
        .vis(decl.visibility.for_child_module())
        .doc(doc)
        .returns("Self");
    if params.len() > MAX_ARGS_BEFORE_LINT {
        ctor = ctor.attr("allow(clippy::too_many_arguments)");
    }
    for param in params {
        ctor = ctor.param(param);
    }
    for bound in default_bounds(decl) {
        ctor = ctor.where_predicate(bound);
    }
    let ctor = ctor.body_fragment(struct_literal("Self", decl, member_name));

    vec![Item::Impl(impl_for(decl, decl.self_type()).method(ctor))]
}
