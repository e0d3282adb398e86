//! Resolve source patterns to the files of a single Cargo package.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use structor_core::{Error, Result};
use walkdir::{DirEntry, WalkDir};

/// Suffix that turns a directory pattern into a recursive one (`src/...`).
const RECURSIVE_MARKER: &str = "...";

/// Manifest file looked up in ancestor directories.
const MANIFEST_FILE: &str = "Cargo.toml";

/// Directories never entered by a recursive pattern.
const SKIPPED_DIRS: &[&str] = &["target"];

/// The Cargo package owning every analyzed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// `package.name` from the owning manifest.
    pub name: String,
    /// Source files in first-seen order, as spelled by the patterns.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<CargoPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    name: String,
}

/// Expand `patterns` and check that all resulting files share one package.
///
/// Each pattern is a `.rs` file, a directory (its `.rs` files, not
/// recursing) or `dir/...` (every `.rs` file below `dir`, skipping `target`
/// and hidden directories). Files reached by several patterns are kept once,
/// at their first position.
pub fn load_package(patterns: &[String]) -> Result<Package> {
    // canonical path -> path as spelled
    let mut files: IndexMap<PathBuf, PathBuf> = IndexMap::new();
    for pattern in patterns {
        let expanded = expand_pattern(pattern)?;
        tracing::debug!(pattern = %pattern, files = expanded.len(), "expanded source pattern");
        for path in expanded {
            let canonical = path.canonicalize().map_err(|source| {
                Box::new(Error::Read {
                    path: path.clone(),
                    source,
                })
            })?;
            files.entry(canonical).or_insert(path);
        }
    }

    if files.is_empty() {
        return Err(Box::new(Error::NoSources {
            patterns: patterns.join(", "),
        }));
    }

    let mut manifests = ManifestCache::default();
    // manifest dir -> package name
    let mut packages: IndexMap<PathBuf, String> = IndexMap::new();
    for (canonical, spelled) in &files {
        let Some((dir, name)) = manifests.owning_package(canonical)? else {
            return Err(Box::new(Error::NoPackage {
                path: spelled.clone(),
            }));
        };
        packages.entry(dir).or_insert(name);
    }

    if packages.len() > 1 {
        let names: Vec<&str> = packages.values().map(String::as_str).collect();
        return Err(Box::new(Error::AmbiguousPackage {
            count: packages.len(),
            names: names.join(", "),
        }));
    }

    let Some(name) = packages.into_values().next() else {
        return Err(Box::new(Error::NoSources {
            patterns: patterns.join(", "),
        }));
    };
    tracing::debug!(package = %name, files = files.len(), "resolved source package");

    Ok(Package {
        name,
        files: files.into_values().collect(),
    })
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    if let Some(base) = pattern.strip_suffix(RECURSIVE_MARKER) {
        let base = base.trim_end_matches('/');
        let base = if base.is_empty() { "." } else { base };
        let dir = Path::new(base);
        if !dir.is_dir() {
            return Err(Box::new(Error::MissingPath {
                path: dir.to_path_buf(),
            }));
        }
        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));
        return collect_sources(dir, walker);
    }

    let path = Path::new(pattern);
    if !path.exists() {
        return Err(Box::new(Error::MissingPath {
            path: path.to_path_buf(),
        }));
    }
    if path.is_dir() {
        let walker = WalkDir::new(path).max_depth(1).sort_by_file_name().into_iter();
        return collect_sources(path, walker);
    }
    if !is_rust_source(path) {
        return Err(Box::new(Error::NotRustSource {
            path: path.to_path_buf(),
        }));
    }
    Ok(vec![path.to_path_buf()])
}

fn collect_sources(
    root: &Path,
    walker: impl Iterator<Item = walkdir::Result<DirEntry>>,
) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop"));
            Box::new(Error::Read { path, source })
        })?;
        if entry.file_type().is_file() && is_rust_source(entry.path()) {
            sources.push(entry.into_path());
        }
    }
    Ok(sources)
}

fn is_rust_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

/// Parsed `Cargo.toml` files keyed by directory, `None` when a directory has
/// no manifest or only a `[workspace]` one.
#[derive(Default)]
struct ManifestCache {
    dirs: HashMap<PathBuf, Option<String>>,
}

impl ManifestCache {
    fn owning_package(&mut self, file: &Path) -> Result<Option<(PathBuf, String)>> {
        let Some(start) = file.parent() else {
            return Ok(None);
        };
        for dir in start.ancestors() {
            if let Some(name) = self.package_name(dir)? {
                return Ok(Some((dir.to_path_buf(), name)));
            }
        }
        Ok(None)
    }

    fn package_name(&mut self, dir: &Path) -> Result<Option<String>> {
        if let Some(cached) = self.dirs.get(dir) {
            return Ok(cached.clone());
        }

        let manifest = dir.join(MANIFEST_FILE);
        let name = if manifest.is_file() {
            read_package_name(&manifest)?
        } else {
            None
        };
        self.dirs.insert(dir.to_path_buf(), name.clone());
        Ok(name)
    }
}

fn read_package_name(manifest: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(manifest).map_err(|source| {
        Box::new(Error::Read {
            path: manifest.to_path_buf(),
            source,
        })
    })?;
    let parsed: CargoManifest = toml::from_str(&content).map_err(|source| {
        Box::new(Error::Manifest {
            path: manifest.to_path_buf(),
            source,
        })
    })?;
    Ok(parsed.package.map(|package| package.name))
}

#[cfg(test)]
mod tests {
    use structor_core::ErrorKind;
    use tempfile::TempDir;

    use super::*;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_crate(root: &Path, name: &str) {
        write(
            &root.join("Cargo.toml"),
            &format!("[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"2024\"\n"),
        );
        write(&root.join("src/lib.rs"), "pub mod model;\n");
        write(&root.join("src/model.rs"), "pub struct Person { pub name: String }\n");
        write(&root.join("src/nested/deep.rs"), "pub struct Deep;\n");
        write(&root.join("src/notes.txt"), "not rust");
        write(&root.join("src/target/ignored.rs"), "pub struct Ignored;\n");
        write(&root.join("src/.hidden/ignored.rs"), "pub struct Ignored;\n");
    }

    fn pattern(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    fn file_names(package: &Package) -> Vec<String> {
        package
            .files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_single_file() {
        let temp = TempDir::new().unwrap();
        create_crate(temp.path(), "people");

        let package = load_package(&[pattern(&temp.path().join("src/model.rs"))]).unwrap();

        assert_eq!(package.name, "people");
        assert_eq!(package.files, vec![temp.path().join("src/model.rs")]);
    }

    #[test]
    fn test_directory_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        create_crate(temp.path(), "people");

        let package = load_package(&[pattern(&temp.path().join("src"))]).unwrap();

        assert_eq!(file_names(&package), ["lib.rs", "model.rs"]);
    }

    #[test]
    fn test_recursive_pattern_skips_target_and_hidden() {
        let temp = TempDir::new().unwrap();
        create_crate(temp.path(), "people");

        let recursive = format!("{}/...", temp.path().join("src").display());
        let package = load_package(&[recursive]).unwrap();

        assert_eq!(file_names(&package), ["lib.rs", "model.rs", "deep.rs"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let temp = TempDir::new().unwrap();
        create_crate(temp.path(), "people");

        let package = load_package(&[
            pattern(&temp.path().join("src/model.rs")),
            pattern(&temp.path().join("src")),
        ])
        .unwrap();

        assert_eq!(file_names(&package), ["model.rs", "lib.rs"]);
    }

    #[test]
    fn test_workspace_manifest_is_skipped() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("Cargo.toml"),
            "[workspace]\nmembers = [\"member\"]\n",
        );
        create_crate(&temp.path().join("member"), "member");

        let package = load_package(&[pattern(&temp.path().join("member/src/lib.rs"))]).unwrap();

        assert_eq!(package.name, "member");
    }

    #[test]
    fn test_ambiguous_packages() {
        let temp = TempDir::new().unwrap();
        create_crate(&temp.path().join("alpha"), "alpha");
        create_crate(&temp.path().join("beta"), "beta");

        let err = load_package(&[
            pattern(&temp.path().join("alpha/src")),
            pattern(&temp.path().join("beta/src")),
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Load);
        assert_eq!(
            err.to_string(),
            "ambiguous source set; 2 packages found: alpha, beta"
        );
    }

    #[test]
    fn test_missing_path() {
        let temp = TempDir::new().unwrap();
        let err = load_package(&[pattern(&temp.path().join("nope.rs"))]).unwrap_err();
        assert!(matches!(*err, Error::MissingPath { .. }));

        let recursive = format!("{}/...", temp.path().join("nope").display());
        let err = load_package(&[recursive]).unwrap_err();
        assert!(matches!(*err, Error::MissingPath { .. }));
    }

    #[test]
    fn test_not_rust_source() {
        let temp = TempDir::new().unwrap();
        create_crate(temp.path(), "people");

        let err = load_package(&[pattern(&temp.path().join("src/notes.txt"))]).unwrap_err();
        assert!(matches!(*err, Error::NotRustSource { .. }));
    }

    #[test]
    fn test_no_sources() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();

        let err = load_package(&[pattern(&temp.path().join("empty"))]).unwrap_err();
        assert!(matches!(*err, Error::NoSources { .. }));
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[test]
    fn test_invalid_manifest() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("Cargo.toml"), "[package\nname = ");
        write(&temp.path().join("src/lib.rs"), "");

        let err = load_package(&[pattern(&temp.path().join("src"))]).unwrap_err();
        assert!(matches!(*err, Error::Manifest { .. }));
    }
}
