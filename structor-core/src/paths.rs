//! Destination path resolution for generated files.

use std::path::{Path, PathBuf};

use crate::to_snake_case;

/// Suffix appended to the snake_case type name to form the file name.
pub const GENERATED_FILE_SUFFIX: &str = "_gen.rs";

/// Marker for recursive source patterns (`src/...`).
const RECURSIVE_MARKER: &str = "...";

/// Compute where the generated file for `type_name` goes.
///
/// An explicit output path wins verbatim. Otherwise the file lands in the
/// single input directory when exactly one directory was given, or next to
/// the first input otherwise.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
///
/// use structor_core::resolve_output_path;
///
/// let inputs = vec!["src/model.rs".to_string()];
/// let path = resolve_output_path(None, &inputs, "PersonInfo");
/// assert_eq!(path, PathBuf::from("src/person_info_gen.rs"));
///
/// let explicit = resolve_output_path(Some(Path::new("out.rs")), &inputs, "PersonInfo");
/// assert_eq!(explicit, PathBuf::from("out.rs"));
/// ```
pub fn resolve_output_path(explicit: Option<&Path>, inputs: &[String], type_name: &str) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let dir = match inputs {
        [single] => match recursive_base(single) {
            Some(base) => base,
            None if Path::new(single).is_dir() => PathBuf::from(single),
            None => parent_dir(single),
        },
        [first, ..] => parent_dir(first),
        [] => PathBuf::from("."),
    };

    dir.join(format!("{}{}", to_snake_case(type_name), GENERATED_FILE_SUFFIX))
}

/// Base directory of a recursive pattern, if `pattern` is one.
fn recursive_base(pattern: &str) -> Option<PathBuf> {
    let base = pattern.strip_suffix(RECURSIVE_MARKER)?;
    let base = base.trim_end_matches('/');
    Some(if base.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(base)
    })
}

fn parent_dir(input: &str) -> PathBuf {
    match Path::new(input).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
