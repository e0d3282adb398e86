//! Extracted struct declarations.

use std::path::PathBuf;

/// One named member of a [`TypeDeclaration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// Declared identifier, including a `r#` prefix for raw identifiers.
    pub name: String,
    /// Field type as canonical source text, copied into generated code as is.
    pub ty: String,
    /// Whether the field carries the skip directive.
    pub excluded: bool,
}

impl FieldDeclaration {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            excluded: false,
        }
    }

    /// Mark the field as excluded from every generated constructor.
    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }
}

/// Declared visibility of the target struct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`
    Crate,
    /// `pub(self)`, `pub(super)` or `pub(in path)`, holding the path text.
    Restricted(String),
    /// No visibility keyword.
    #[default]
    Inherited,
}

impl Visibility {
    /// Visibility for items placed in a child module of the declaring module.
    ///
    /// The generated file is mounted one level below the struct, so relative
    /// visibilities gain one `super` to keep reaching the same modules.
    ///
    /// ```
    /// use structor_ir::Visibility;
    ///
    /// assert_eq!(Visibility::Public.for_child_module(), "pub");
    /// assert_eq!(Visibility::Inherited.for_child_module(), "pub(super)");
    /// assert_eq!(
    ///     Visibility::Restricted("super".into()).for_child_module(),
    ///     "pub(in super::super)"
    /// );
    /// ```
    pub fn for_child_module(&self) -> String {
        match self {
            Visibility::Public => "pub".to_string(),
            Visibility::Crate => "pub(crate)".to_string(),
            Visibility::Inherited => "pub(super)".to_string(),
            Visibility::Restricted(path) if path == "self" => "pub(super)".to_string(),
            Visibility::Restricted(path) if path == "super" || path.starts_with("super::") => {
                format!("pub(in super::{})", path)
            }
            Visibility::Restricted(path) => format!("pub(in {})", path),
        }
    }
}

/// Generic parameters of the target struct as canonical source text.
///
/// All strings are empty for a non-generic struct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Generics {
    /// Parameters as declared, with bounds and defaults: `<'a, T: Clone = u8>`.
    pub params: String,
    /// Parameters for an `impl` header, without defaults: `<'a, T: Clone>`.
    pub impl_params: String,
    /// Arguments for use positions: `<'a, T>`.
    pub args: String,
    /// Lifetime and type parameter names, `'a` and `T`. A struct declaring
    /// one must mention it in a field.
    pub field_params: Vec<String>,
    /// Where-clause predicates in declaration order: `T: Debug`.
    pub where_predicates: Vec<String>,
}

impl Generics {
    /// Whether the struct declares no generic parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// A record-like type located in the analyzed sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// The struct identifier.
    pub name: String,
    /// Declared visibility of the struct.
    pub visibility: Visibility,
    /// Declared generic parameters.
    pub generics: Generics,
    /// Fields in declaration order.
    pub fields: Vec<FieldDeclaration>,
    /// File the declaration was found in.
    pub source: PathBuf,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            generics: Generics::default(),
            fields: Vec::new(),
            source: PathBuf::new(),
        }
    }

    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn generics(mut self, generics: Generics) -> Self {
        self.generics = generics;
        self
    }

    /// Fields that take part in generated constructors, in declaration order.
    pub fn included_fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.fields.iter().filter(|f| !f.excluded)
    }

    /// Fields carrying the skip directive, in declaration order.
    pub fn excluded_fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.fields.iter().filter(|f| f.excluded)
    }

    /// The struct as a type in use position, e.g. `Page<'a, T>`.
    pub fn self_type(&self) -> String {
        format!("{}{}", self.name, self.generics.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> TypeDeclaration {
        TypeDeclaration::new("Person")
            .field(FieldDeclaration::new("name", "String"))
            .field(FieldDeclaration::new("internal_id", "String").excluded())
            .field(FieldDeclaration::new("age", "u32"))
    }

    #[test]
    fn test_included_fields_keep_order() {
        let decl = person();
        let names: Vec<_> = decl.included_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "age"]);
    }

    #[test]
    fn test_excluded_fields() {
        let decl = person();
        let names: Vec<_> = decl.excluded_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["internal_id"]);
    }

    #[test]
    fn test_self_type() {
        assert_eq!(person().self_type(), "Person");

        let page = TypeDeclaration::new("Page").generics(Generics {
            params: "<'a, T: Clone = u8>".to_string(),
            impl_params: "<'a, T: Clone>".to_string(),
            args: "<'a, T>".to_string(),
            field_params: vec!["'a".to_string(), "T".to_string()],
            where_predicates: Vec::new(),
        });
        assert_eq!(page.self_type(), "Page<'a, T>");
        assert!(!page.generics.is_empty());
    }

    #[test]
    fn test_visibility_for_child_module() {
        assert_eq!(Visibility::Public.for_child_module(), "pub");
        assert_eq!(Visibility::Crate.for_child_module(), "pub(crate)");
        assert_eq!(Visibility::Inherited.for_child_module(), "pub(super)");
        assert_eq!(
            Visibility::Restricted("self".to_string()).for_child_module(),
            "pub(super)"
        );
        assert_eq!(
            Visibility::Restricted("super::super".to_string()).for_child_module(),
            "pub(in super::super::super)"
        );
        assert_eq!(
            Visibility::Restricted("crate::model".to_string()).for_child_module(),
            "pub(in crate::model)"
        );
    }
}
