//! Language-agnostic code generation traits.

use std::path::Path;

use crudgen_core::{GeneratedFile, WriteResult};
use crudgen_manifest::is_path_in_project;
use eyre::{Result, bail};

/// Trait for language-specific code generators.
///
/// Implementors only describe the files they produce; writing goes through
/// [`LanguageCodegen::generate`], which refuses any file that would land
/// outside the output directory.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "javascript", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "js", "ts")
    fn file_extension(&self) -> &'static str;

    /// Render every file this generator owns.
    fn files(&self) -> Vec<GeneratedFile>;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path,
                content: file.content,
            })
            .collect()
    }

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        write_files(&self.files(), output_dir)
    }
}

/// Write `files` under `output_dir` after confirming every target stays inside it.
///
/// Containment is checked for all files before the first one is written.
pub fn write_files(files: &[GeneratedFile], output_dir: &Path) -> Result<GenerateResult> {
    for file in files {
        let target = file.full_path(output_dir);
        if !is_path_in_project(&target, output_dir) {
            bail!(
                "refusing to write '{}': it resolves outside '{}'",
                target.display(),
                output_dir.display()
            );
        }
    }

    let mut result = GenerateResult::default();
    for file in files {
        match file.write(output_dir)? {
            WriteResult::Written => result.written.push(file.path.clone()),
            WriteResult::Skipped => result.skipped.push(file.path.clone()),
        }
    }
    tracing::debug!(
        written = result.written.len(),
        skipped = result.skipped.len(),
        "generation finished"
    );
    Ok(result)
}

/// Result of code generation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files that were written, relative to the output directory
    pub written: Vec<String>,
    /// Files left untouched because they already existed
    pub skipped: Vec<String>,
}

impl GenerateResult {
    /// Merge another result into this one.
    pub fn extend(&mut self, other: GenerateResult) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
