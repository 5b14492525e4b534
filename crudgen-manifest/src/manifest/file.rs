use std::path::{Path, PathBuf};

use super::{MANIFEST_FILE, Manifest};
use crate::{Error, Result};

/// Represents a crudgen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct CrudgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl CrudgenToml {
    /// Open and parse a crudgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Look for crudgen.toml directly inside `root`.
    ///
    /// A missing file is not an error; a present but invalid one is.
    pub fn discover(root: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = root.as_ref().join(MANIFEST_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no project manifest found");
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "loading project manifest");
        Self::open(path).map(Some)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
