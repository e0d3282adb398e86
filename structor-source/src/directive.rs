//! The field exclusion directive.
//!
//! A field is left out of every generated constructor when it carries
//! `structor(skip)` behind a `cfg_attr` whose predicate never holds, which
//! keeps the annotated crate compiling without any helper attribute:
//!
//! ```
//! pub struct Person {
//!     name: String,
//!     #[cfg_attr(any(), structor(skip))]
//!     internal_id: String,
//! }
//! ```
//!
//! Other predicates and the bare `#[structor(skip)]` are recognised as well;
//! the bare form needs a `structor` attribute in scope to build.

use syn::punctuated::Punctuated;
use syn::{Attribute, Meta, MetaList, Token};

/// Attribute namespace recognised on fields.
pub const DIRECTIVE_ATTRIBUTE: &str = "structor";

/// Directive argument that excludes a field.
pub const SKIP_SENTINEL: &str = "skip";

/// Whether the attributes on a field exclude it from generated constructors.
///
/// Unknown or malformed directive contents never exclude a field.
pub fn is_excluded(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| match &attr.meta {
        Meta::List(list) if list.path.is_ident(DIRECTIVE_ATTRIBUTE) => list_has_skip(list),
        Meta::List(list) if list.path.is_ident("cfg_attr") => cfg_attr_has_skip(list),
        _ => false,
    })
}

fn list_has_skip(list: &MetaList) -> bool {
    list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
        .map(|metas| {
            metas
                .iter()
                .any(|meta| matches!(meta, Meta::Path(path) if path.is_ident(SKIP_SENTINEL)))
        })
        .unwrap_or(false)
}

/// `cfg_attr(predicate, attr, ...)`: the first entry is the predicate.
fn cfg_attr_has_skip(list: &MetaList) -> bool {
    let Ok(metas) = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated) else {
        return false;
    };
    metas.iter().skip(1).any(|meta| match meta {
        Meta::List(inner) if inner.path.is_ident(DIRECTIVE_ATTRIBUTE) => list_has_skip(inner),
        _ => false,
    })
}
