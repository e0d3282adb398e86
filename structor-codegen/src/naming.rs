//! Naming conventions for generated identifiers.

/// Language-specific naming conventions.
///
/// Defines how type and member names are derived, and how reserved words are
/// made usable as identifiers.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a name into a type name (e.g., "person_info" -> "PersonInfo")
    pub to_type: fn(&str) -> String,
    /// Transform a name into a member name (e.g., "userId" -> "user_id")
    pub to_member: fn(&str) -> String,
    /// Prefix marking an already-escaped identifier (e.g., "r#" in Rust)
    pub escape_prefix: &'static str,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            format!("{}{}", self.escape_prefix, name)
        } else {
            name.to_string()
        }
    }

    /// Strip the escape prefix, if any.
    pub fn unescaped<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.escape_prefix).unwrap_or(name)
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.to_type)(self.unescaped(name));
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field, parameter or method name.
    pub fn member_name(&self, name: &str) -> String {
        let transformed = (self.to_member)(self.unescaped(name));
        self.safe_name(&transformed)
    }
}
