//! Rust-specific naming conventions.

use structor_codegen::NamingConvention;
use structor_core::{to_pascal_case, to_snake_case};

/// Already snake_case names are kept as written, so `_id` and `id` stay apart.
fn to_member_name(name: &str) -> String {
    let is_snake = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if is_snake {
        name.to_string()
    } else {
        to_snake_case(name)
    }
}

/// Rust naming conventions.
///
/// `self`, `Self`, `super` and `crate` cannot be raw identifiers and never
/// come out of a field name, so they are not listed.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_member: to_member_name,
    escape_prefix: "r#",
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
        "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe",
        "use", "where", "while", "abstract", "become", "box", "do", "final", "macro", "override",
        "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_type() {
        assert_eq!(RUST_NAMING.type_name("person_info"), "PersonInfo");
        assert_eq!(RUST_NAMING.type_name("Person"), "Person");
    }

    #[test]
    fn test_rust_naming_member() {
        assert_eq!(RUST_NAMING.member_name("userName"), "user_name");
        assert_eq!(RUST_NAMING.member_name("internalID"), "internal_id");
        assert_eq!(RUST_NAMING.member_name("age"), "age");
        assert_eq!(RUST_NAMING.member_name("_private"), "_private");
        assert_eq!(RUST_NAMING.member_name("field_2"), "field_2");
    }

    #[test]
    fn test_rust_reserved_words() {
        assert!(RUST_NAMING.is_reserved("type"));
        assert!(RUST_NAMING.is_reserved("async"));
        assert!(!RUST_NAMING.is_reserved("name"));
    }

    #[test]
    fn test_raw_identifiers() {
        assert_eq!(RUST_NAMING.member_name("r#type"), "r#type");
        assert_eq!(RUST_NAMING.member_name("type"), "r#type");
        assert_eq!(RUST_NAMING.member_name("r#Match"), "r#match");
        assert_eq!(RUST_NAMING.member_name("r#kind"), "kind");
    }
}
