use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A template that knows where it lives and how to render itself.
pub trait SourceFile {
    /// Path relative to the output directory, `/`-separated.
    fn path(&self) -> String;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Render into an owned [`GeneratedFile`].
    fn generate(&self) -> GeneratedFile {
        GeneratedFile {
            path: self.path(),
            content: self.render(),
            rules: self.rules(),
        }
    }
}

/// A rendered file: relative path plus text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory, `/`-separated.
    pub path: String,
    pub content: String,
    pub rules: FileRules,
}

impl GeneratedFile {
    /// Create a file that is always overwritten.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the overwrite policy.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.rules.overwrite = overwrite;
        self
    }

    /// Resolve the relative path against `base`.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
    }

    /// Write the file under `base` according to its rules.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.full_path(base);

        if self.rules.overwrite == Overwrite::IfMissing && path.exists() {
            tracing::debug!(path = %path.display(), "file exists, skipping");
            return Ok(WriteResult::Skipped);
        }

        write_file(&path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = self.content.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Always overwrite.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Only write when the file does not exist yet.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always()
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist (user-editable scaffolding)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Readme;

    impl SourceFile for Readme {
        fn path(&self) -> String {
            "docs/README.md".to_string()
        }

        fn rules(&self) -> FileRules {
            FileRules::create_once()
        }

        fn render(&self) -> String {
            "# readme\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_full_path_splits_segments() {
        let file = GeneratedFile::new("src/models/User.js", "");
        let base = Path::new("/project");

        assert_eq!(
            file.full_path(base),
            Path::new("/project").join("src").join("models").join("User.js")
        );
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app.js"), "original").unwrap();

        let result = GeneratedFile::new("app.js", "updated")
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("app.js")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();

        let result = GeneratedFile::new("src/new.js", "new content")
            .with_overwrite(Overwrite::IfMissing)
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("src").join("new.js")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("existing.js"), "original").unwrap();

        let result = GeneratedFile::new("existing.js", "should not write")
            .with_overwrite(Overwrite::IfMissing)
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("existing.js")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_source_file_generate_carries_rules() {
        let file = Readme.generate();

        assert_eq!(file.path, "docs/README.md");
        assert_eq!(file.content, "# readme\n");
        assert_eq!(file.rules.overwrite, Overwrite::IfMissing);
    }
}
