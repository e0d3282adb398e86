//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted, so the
/// rendered imports do not depend on registration order inside a module.
///
/// # Example
///
/// ```
/// use structor_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("super", "*");
/// imports.add("std::collections", "HashMap");
/// imports.add("std::collections", "BTreeMap");
///
/// let modules: Vec<&str> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["super", "std::collections"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }
}
