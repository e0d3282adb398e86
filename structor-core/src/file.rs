use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// A file to be generated.
///
/// Generated files are always written in full; whatever was at the
/// destination before is replaced without comparison.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, replacing any existing content.
    pub fn write(&self) -> Result<WriteResult> {
        let result = if self.exists() {
            WriteResult::Overwritten
        } else {
            WriteResult::Created
        };
        write_file(&self.path, &self.content)?;
        tracing::info!(path = %self.path.display(), bytes = self.content.len(), "wrote generated file");
        Ok(result)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let to_error = |source| {
        Box::new(Error::Write {
            path: path.to_path_buf(),
            source,
        })
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, content).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("person_gen.rs");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("person_gen.rs");

        let file = File::new(&path, "// generated");
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "// generated");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("person_gen.rs");

        fs::write(&path, "hand edits").unwrap();

        let file = File::new(&path, "// generated");
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "// generated");
    }

    #[test]
    fn test_file_write_reports_destination() {
        let temp = TempDir::new().unwrap();
        // A regular file where a directory is expected makes the write fail.
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("person_gen.rs");

        let err = File::new(&path, "x").write().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(err.to_string().contains("person_gen.rs"));
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.rs");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }
}
