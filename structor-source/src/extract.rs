//! Locate the target struct and turn it into a [`TypeDeclaration`].

use structor_core::{Error, Result};
use structor_ir::{FieldDeclaration, TypeDeclaration, Visibility};
use syn::{Fields, Item, ItemStruct};

use crate::directive::is_excluded;
use crate::parser::ParsedFile;
use crate::type_text::{generics_text, path_text, type_text};

/// Find the first top-level struct named `type_name`.
///
/// Files are searched in the given order and items in source order. Other
/// item kinds sharing the name are passed over, as is anything inside an
/// inline `mod` block.
pub fn extract<'a>(
    type_name: &str,
    files: impl IntoIterator<Item = &'a ParsedFile>,
) -> Result<TypeDeclaration> {
    let mut searched = 0;
    for file in files {
        searched += 1;
        let found = file.syntax.items.iter().find_map(|item| match item {
            Item::Struct(item) if item.ident == type_name => Some(item),
            _ => None,
        });
        if let Some(item) = found {
            tracing::debug!(
                type_name,
                path = %file.path.display(),
                "found target struct"
            );
            return declaration(item, file);
        }
    }

    Err(Box::new(Error::NotFound {
        type_name: type_name.to_string(),
        searched,
    }))
}

fn declaration(item: &ItemStruct, file: &ParsedFile) -> Result<TypeDeclaration> {
    let mut decl = TypeDeclaration::new(item.ident.to_string())
        .visibility(visibility(&item.vis))
        .generics(generics_text(&item.generics));
    decl.source = file.path.clone();

    match &item.fields {
        Fields::Named(named) => {
            for (index, field) in named.named.iter().enumerate() {
                let Some(ident) = &field.ident else {
                    return Err(unnamed_field(decl, index, file));
                };
                let ty = type_text(&field.ty);
                let mut field_decl = FieldDeclaration::new(ident.to_string(), ty);
                if is_excluded(&field.attrs) {
                    field_decl = field_decl.excluded();
                }
                decl = decl.field(field_decl);
            }
        }
        Fields::Unnamed(_) => return Err(unnamed_field(decl, 0, file)),
        Fields::Unit => {}
    }

    tracing::debug!(
        type_name = %decl.name,
        included = decl.included_fields().count(),
        excluded = decl.excluded_fields().count(),
        "extracted fields"
    );
    Ok(decl)
}

fn visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(restricted) => {
            let path = path_text(&restricted.path);
            if path == "crate" {
                Visibility::Crate
            } else {
                Visibility::Restricted(path)
            }
        }
        syn::Visibility::Inherited => Visibility::Inherited,
    }
}

fn unnamed_field(decl: TypeDeclaration, index: usize, file: &ParsedFile) -> Box<Error> {
    Box::new(Error::UnnamedField {
        type_name: decl.name,
        index,
        path: file.path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use structor_core::ErrorKind;

    use super::*;

    fn parsed(path: &str, source: &str) -> ParsedFile {
        ParsedFile {
            path: PathBuf::from(path),
            source: source.to_string(),
            syntax: syn::parse_file(source).unwrap(),
        }
    }

    fn field_names(decl: &TypeDeclaration) -> Vec<&str> {
        decl.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_person_fields_in_order() {
        let file = parsed(
            "src/person.rs",
            r#"
            pub struct Person {
                name: String,
                age: u32,
                #[cfg_attr(any(), structor(skip))]
                internal_id: String,
            }
            "#,
        );

        let decl = extract("Person", [&file]).unwrap();

        assert_eq!(decl.name, "Person");
        assert_eq!(decl.visibility, Visibility::Public);
        assert_eq!(decl.source, PathBuf::from("src/person.rs"));
        assert_eq!(
            decl.fields,
            vec![
                FieldDeclaration::new("name", "String"),
                FieldDeclaration::new("age", "u32"),
                FieldDeclaration::new("internal_id", "String").excluded(),
            ]
        );
        assert!(decl.generics.is_empty());
    }

    #[test]
    fn test_type_text_is_canonical() {
        let file = parsed(
            "lib.rs",
            "struct Config { hooks: Vec < Box < dyn Fn ( & str ) -> bool > >, r#type: [u8;4] }",
        );

        let decl = extract("Config", [&file]).unwrap();

        assert_eq!(decl.fields[0].ty, "Vec<Box<dyn Fn(&str) -> bool>>");
        assert_eq!(decl.fields[1].name, "r#type");
        assert_eq!(decl.fields[1].ty, "[u8; 4]");
        assert_eq!(decl.visibility, Visibility::Inherited);
    }

    #[test]
    fn test_first_match_wins() {
        let first = parsed("a.rs", "pub struct Person { a: u8 }");
        let second = parsed("b.rs", "pub struct Person { b: u8 }");

        let decl = extract("Person", [&first, &second]).unwrap();

        assert_eq!(field_names(&decl), ["a"]);
        assert_eq!(decl.source, PathBuf::from("a.rs"));
    }

    #[test]
    fn test_non_struct_items_are_skipped() {
        let file = parsed(
            "lib.rs",
            r#"
            pub enum Person { A }
            pub type Alias = Person;
            mod inner { pub struct Person { hidden: u8 } }
            pub struct Person2 { x: u8 }
            "#,
        );

        let err = extract("Person", [&file]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let other = parsed("other.rs", "pub(crate) struct Person { found: u8 }");
        let decl = extract("Person", [&file, &other]).unwrap();
        assert_eq!(field_names(&decl), ["found"]);
        assert_eq!(decl.visibility, Visibility::Crate);
    }

    #[test]
    fn test_not_found_counts_files() {
        let a = parsed("a.rs", "struct A;");
        let b = parsed("b.rs", "struct B;");

        let err = extract("Missing", [&a, &b]).unwrap_err();

        match *err {
            Error::NotFound {
                ref type_name,
                searched,
            } => {
                assert_eq!(type_name, "Missing");
                assert_eq!(searched, 2);
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_tuple_struct_is_structural_error() {
        let file = parsed("pair.rs", "pub struct Pair(u8, u8);");

        let err = extract("Pair", [&file]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Structural);
        assert!(err.to_string().contains("Pair"));
    }

    #[test]
    fn test_named_field_without_ident_is_structural_error() {
        let file = parsed("person.rs", "pub struct Person { name: String, age: u32 }");
        let mut item: ItemStruct = syn::parse_str("pub struct Person { name: String, age: u32 }")
            .unwrap();
        if let Fields::Named(named) = &mut item.fields {
            named.named[1].ident = None;
        }

        let err = declaration(&item, &file).unwrap_err();

        match *err {
            Error::UnnamedField {
                ref type_name,
                index,
                ref path,
            } => {
                assert_eq!(type_name, "Person");
                assert_eq!(index, 1);
                assert_eq!(path, &PathBuf::from("person.rs"));
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unit_struct_has_no_fields() {
        let file = parsed("unit.rs", "pub struct Marker;");

        let decl = extract("Marker", [&file]).unwrap();

        assert!(decl.fields.is_empty());
    }

    #[test]
    fn test_generics_and_where_clause() {
        let file = parsed(
            "page.rs",
            "pub struct Page<'a, T: Clone = u8> where T: Send, { items: &'a [T], cursor: Option<T> }",
        );

        let decl = extract("Page", [&file]).unwrap();

        assert_eq!(decl.generics.params, "<'a, T: Clone = u8>");
        assert_eq!(decl.generics.impl_params, "<'a, T: Clone>");
        assert_eq!(decl.generics.args, "<'a, T>");
        assert_eq!(decl.generics.where_predicates, ["T: Send"]);
        assert_eq!(decl.self_type(), "Page<'a, T>");
        assert_eq!(decl.fields[0].ty, "&'a [T]");
    }

    #[test]
    fn test_restricted_visibility() {
        let file = parsed(
            "lib.rs",
            "pub(super) struct A { x: u8 } pub(in crate::model) struct B { x: u8 }",
        );

        let a = extract("A", [&file]).unwrap();
        let b = extract("B", [&file]).unwrap();

        assert_eq!(a.visibility, Visibility::Restricted("super".to_string()));
        assert_eq!(b.visibility, Visibility::Restricted("crate::model".to_string()));
    }
}
