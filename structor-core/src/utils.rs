//! Shared utility functions for code generation.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.to_upper_camel_case()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
///
/// Acronyms stay together: "HTTPServer" becomes "http_server".
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("person"), "Person");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("PersonInfo"), "PersonInfo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Person"), "person");
        assert_eq!(to_snake_case("PersonInfo"), "person_info");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("internalID"), "internal_id");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(""), "");
    }
}
