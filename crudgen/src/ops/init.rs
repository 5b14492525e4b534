//! Project scaffolding.

use std::path::{Path, PathBuf};

use crudgen_codegen::language::LanguageCodegen;
use crudgen_codegen_express::ProjectGenerator;
use crudgen_manifest::{
    DatabaseChoice, Error, LanguageVariant, Manifest, Result as ManifestResult, is_path_in_project,
    validate_path, validate_project_name,
};
use eyre::{Context, Result};

use crate::reports::InitReport;

/// Options for the init operation.
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub name: String,
    pub output_dir: PathBuf,
    pub language: LanguageVariant,
    pub database: DatabaseChoice,
}

impl InitOptions {
    /// Validate the project name and output directory against `cwd`.
    ///
    /// The output directory defaults to `./<name>` and must stay inside `cwd`.
    pub fn validate(
        name: &str,
        output: Option<&str>,
        cwd: &Path,
        language: LanguageVariant,
        database: DatabaseChoice,
    ) -> ManifestResult<Self> {
        validate_project_name(name)?;

        let requested = output.unwrap_or(name);
        let relative = validate_path(requested)?;
        let output_dir = cwd.join(relative);
        if !is_path_in_project(&output_dir, cwd) {
            return Err(Box::new(Error::PathTraversal {
                path: requested.to_string(),
                reason: "output directory must be inside the current directory".to_string(),
            }));
        }

        Ok(Self {
            name: name.to_string(),
            output_dir,
            language,
            database,
        })
    }
}

/// Write the project scaffold. Existing files are left untouched.
pub fn init(options: InitOptions) -> Result<InitReport> {
    let manifest = Manifest::new(options.name.as_str(), options.language, options.database);
    let generator = ProjectGenerator::new(manifest);

    std::fs::create_dir_all(&options.output_dir).wrap_err_with(|| {
        format!("failed to create '{}'", options.output_dir.display())
    })?;
    let result = generator
        .generate(&options.output_dir)
        .wrap_err("failed to write project files")?;
    tracing::info!(
        project = %options.name,
        written = result.written.len(),
        skipped = result.skipped.len(),
        "initialized project"
    );

    Ok(InitReport {
        project: options.name,
        output_dir: options.output_dir,
        language: options.language.to_string(),
        database: options.database.label().to_string(),
        result,
        dev_command: "npm run dev".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn validate(name: &str, output: Option<&str>, cwd: &Path) -> ManifestResult<InitOptions> {
        InitOptions::validate(
            name,
            output,
            cwd,
            LanguageVariant::TypeScript,
            DatabaseChoice::Document,
        )
    }

    #[test]
    fn test_output_defaults_to_name() {
        let temp = TempDir::new().unwrap();
        let options = validate("shop-api", None, temp.path()).unwrap();
        assert_eq!(options.output_dir, temp.path().join("shop-api"));
    }

    #[test]
    fn test_rejects_bad_names_and_paths() {
        let temp = TempDir::new().unwrap();
        assert!(validate("node_modules", None, temp.path()).unwrap_err().is_validation());
        assert!(validate(".hidden", None, temp.path()).unwrap_err().is_validation());
        assert!(validate("shop", Some("../elsewhere"), temp.path()).unwrap_err().is_validation());
        assert!(validate("shop", Some("/tmp/elsewhere"), temp.path()).is_err());
    }

    #[test]
    fn test_init_writes_scaffold_once() {
        let temp = TempDir::new().unwrap();
        let options = validate("shop", None, temp.path()).unwrap();
        let root = options.output_dir.clone();

        let first = init(options.clone()).unwrap();
        assert!(first.result.skipped.is_empty());
        assert!(root.join("crudgen.toml").is_file());
        assert!(root.join("tsconfig.json").is_file());
        assert!(root.join("src/config/database.ts").is_file());
        assert_eq!(first.database, "MongoDB (mongoose)");

        let second = init(options).unwrap();
        assert!(second.result.written.is_empty());
        assert_eq!(second.result.skipped.len(), first.result.written.len());
    }
}
