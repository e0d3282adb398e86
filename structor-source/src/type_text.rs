//! Canonical source text for types, paths and generics.
//!
//! `TokenStream::to_string` separates every token with a space
//! (`Vec < String >`). Each fragment is wrapped in a throwaway item, printed
//! with `prettyplease` and cut back out of the result.

use structor_ir::Generics;
use syn::{GenericParam, Item, Path, Type, WherePredicate, parse_quote};

/// Print a type as it would appear in formatted source.
///
/// ```
/// use structor_source::type_text;
///
/// let ty: syn::Type = syn::parse_str("HashMap < String , Vec < u8 > >").unwrap();
/// assert_eq!(type_text(&ty), "HashMap<String, Vec<u8>>");
/// ```
pub fn type_text(ty: &Type) -> String {
    let item: Item = parse_quote!(type __Structor = #ty;);
    let printed = unparse(item);
    printed
        .trim_end()
        .strip_prefix("type __Structor = ")
        .and_then(|rest| rest.strip_suffix(';'))
        .map(str::to_string)
        .unwrap_or_else(|| fallback(ty))
}

/// Print a path such as the one in `pub(in crate::model)`.
pub fn path_text(path: &Path) -> String {
    type_text(&Type::Path(syn::TypePath {
        qself: None,
        path: path.clone(),
    }))
}

/// Split a struct's generics into declaration, impl and argument text.
pub fn generics_text(generics: &syn::Generics) -> Generics {
    if generics.params.is_empty() && generics.where_clause.is_none() {
        return Generics::default();
    }

    let mut without_defaults = generics.params.clone();
    for param in &mut without_defaults {
        match param {
            GenericParam::Type(param) => {
                param.eq_token = None;
                param.default = None;
            }
            GenericParam::Const(param) => {
                param.eq_token = None;
                param.default = None;
            }
            GenericParam::Lifetime(_) => {}
        }
    }

    let args = generics
        .params
        .iter()
        .map(|param| match param {
            GenericParam::Lifetime(param) => param.lifetime.to_string(),
            GenericParam::Type(param) => param.ident.to_string(),
            GenericParam::Const(param) => param.ident.to_string(),
        })
        .collect::<Vec<_>>();
    let field_params = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Lifetime(param) => Some(param.lifetime.to_string()),
            GenericParam::Type(param) => Some(param.ident.to_string()),
            GenericParam::Const(_) => None,
        })
        .collect();

    Generics {
        params: params_text(&generics.params),
        impl_params: params_text(&without_defaults),
        args: if args.is_empty() {
            String::new()
        } else {
            format!("<{}>", args.join(", "))
        },
        field_params,
        where_predicates: generics
            .where_clause
            .iter()
            .flat_map(|clause| clause.predicates.iter())
            .map(predicate_text)
            .collect(),
    }
}

fn params_text(params: &syn::punctuated::Punctuated<GenericParam, syn::Token![,]>) -> String {
    if params.is_empty() {
        return String::new();
    }
    let item: Item = parse_quote!(type __Structor<#params> = (););
    let printed = unparse(item);
    printed
        .trim_end()
        .strip_suffix(';')
        .and_then(|rest| rest.rsplit_once(" = "))
        .and_then(|(head, _)| head.strip_prefix("type __Structor"))
        .map(str::to_string)
        .unwrap_or_else(|| format!("<{}>", fallback(params)))
}

/// A predicate is printed on its own line below `where`, with a trailing comma.
fn predicate_text(predicate: &WherePredicate) -> String {
    let item: Item = parse_quote!(fn __structor() where #predicate {});
    let printed = unparse(item);
    let text = printed
        .lines()
        .skip_while(|line| line.trim() != "where")
        .skip(1)
        .take_while(|line| !line.starts_with('{'))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    let text = text.trim_end_matches(',');
    if text.is_empty() {
        fallback(predicate)
    } else {
        text.to_string()
    }
}

fn unparse(item: Item) -> String {
    prettyplease::unparse(&syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: vec![item],
    })
}

/// Plain token text, valid Rust though loosely spaced.
fn fallback(tokens: &impl quote::ToTokens) -> String {
    tracing::warn!("unexpected printer output, using token text");
    tokens.to_token_stream().to_string()
}
