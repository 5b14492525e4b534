//! Resolution of generation options.
//!
//! Precedence is command-line flag, then `crudgen.toml` in the project root,
//! then built-in defaults.

use std::path::PathBuf;

use crudgen_manifest::{
    CrudgenToml, DatabaseChoice, Error, Isolation, LanguageVariant, ResourceSpec, Result,
    is_path_in_project, validate_path,
};

const DEFAULT_SRC_DIR: &str = "src";

/// Values given on the command line. `None` and `false` defer to the manifest.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub src_dir: Option<String>,
    pub database: Option<DatabaseChoice>,
    pub language: Option<LanguageVariant>,
    pub project_name: Option<String>,
    pub force: bool,
    pub dry_run: bool,
    pub in_process: bool,
}

/// Fully resolved settings for generating resources into one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub root: PathBuf,
    pub src_dir: String,
    pub database: DatabaseChoice,
    pub language: LanguageVariant,
    pub project_name: Option<String>,
    pub force: bool,
    pub dry_run: bool,
    pub isolation: Isolation,
}

impl GenerateOptions {
    /// Resolve options for the project rooted at `dir`.
    pub fn resolve(dir: &str, overrides: Overrides) -> Result<Self> {
        let root = validate_path(dir)?;
        let toml = CrudgenToml::discover(&root)?;
        let manifest = toml.as_ref().map(|toml| toml.manifest());

        let src_dir = overrides
            .src_dir
            .or_else(|| manifest.map(|m| m.project.src_dir.clone()))
            .unwrap_or_else(|| DEFAULT_SRC_DIR.to_string());
        let normalized = validate_path(&src_dir)?;
        if !is_path_in_project(&root.join(&normalized), &root) {
            return Err(Box::new(Error::PathTraversal {
                path: src_dir,
                reason: "source directory must be inside the project".to_string(),
            }));
        }

        let options = Self {
            src_dir: normalized.to_string_lossy().into_owned(),
            database: overrides
                .database
                .or(manifest.map(|m| m.project.database))
                .unwrap_or_default(),
            language: overrides
                .language
                .or(manifest.map(|m| m.project.language))
                .unwrap_or_default(),
            project_name: overrides
                .project_name
                .or_else(|| manifest.map(|m| m.project.name.clone())),
            force: overrides.force || manifest.is_some_and(|m| m.generate.force),
            dry_run: overrides.dry_run,
            isolation: if overrides.in_process {
                Isolation::InProcess
            } else {
                manifest.map(|m| m.generate.isolation).unwrap_or_default()
            },
            root,
        };
        tracing::debug!(
            root = %options.root.display(),
            src_dir = %options.src_dir,
            database = %options.database,
            language = %options.language,
            manifest = manifest.is_some(),
            "resolved generation options"
        );
        Ok(options)
    }
}

/// One resource of a batch, with everything needed to generate it alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationUnit {
    pub name: String,
    pub options: GenerateOptions,
}

impl GenerationUnit {
    pub fn new(name: impl Into<String>, options: GenerateOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Run the unit's name and source directory through the validation gate again.
    pub fn validate(&self) -> Result<ResourceSpec> {
        validate_path(&self.options.src_dir)?;
        ResourceSpec::parse(&self.name, self.options.database, self.options.language)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn dir(temp: &TempDir) -> String {
        temp.path().to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults_without_manifest() {
        let temp = TempDir::new().unwrap();
        let options = GenerateOptions::resolve(&dir(&temp), Overrides::default()).unwrap();

        assert_eq!(options.src_dir, "src");
        assert_eq!(options.database, DatabaseChoice::InMemory);
        assert_eq!(options.language, LanguageVariant::JavaScript);
        assert_eq!(options.isolation, Isolation::Process);
        assert_eq!(options.project_name, None);
        assert!(!options.force);
    }

    #[test]
    fn test_manifest_then_flags() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("crudgen.toml"),
            "[project]\nname = \"shop\"\nlanguage = \"typescript\"\ndatabase = \"relational\"\n\
             src_dir = \"server\"\n\n[generate]\nisolation = \"in-process\"\nforce = true\n",
        )
        .unwrap();

        let from_manifest = GenerateOptions::resolve(&dir(&temp), Overrides::default()).unwrap();
        assert_eq!(from_manifest.src_dir, "server");
        assert_eq!(from_manifest.database, DatabaseChoice::Relational);
        assert_eq!(from_manifest.language, LanguageVariant::TypeScript);
        assert_eq!(from_manifest.project_name.as_deref(), Some("shop"));
        assert_eq!(from_manifest.isolation, Isolation::InProcess);
        assert!(from_manifest.force);

        let overrides = Overrides {
            src_dir: Some("lib".to_string()),
            database: Some(DatabaseChoice::Document),
            language: Some(LanguageVariant::JavaScript),
            ..Overrides::default()
        };
        let from_flags = GenerateOptions::resolve(&dir(&temp), overrides).unwrap();
        assert_eq!(from_flags.src_dir, "lib");
        assert_eq!(from_flags.database, DatabaseChoice::Document);
        assert_eq!(from_flags.language, LanguageVariant::JavaScript);
    }

    #[test]
    fn test_rejects_escaping_src_dir() {
        let temp = TempDir::new().unwrap();
        for src_dir in ["../outside", "~/src", "/etc"] {
            let overrides = Overrides {
                src_dir: Some(src_dir.to_string()),
                ..Overrides::default()
            };
            let err = GenerateOptions::resolve(&dir(&temp), overrides).unwrap_err();
            assert!(err.is_validation(), "{src_dir}");
        }
    }

    #[test]
    fn test_unit_revalidates_name() {
        let temp = TempDir::new().unwrap();
        let options = GenerateOptions::resolve(&dir(&temp), Overrides::default()).unwrap();

        assert!(GenerationUnit::new("User", options.clone()).validate().is_ok());
        assert!(GenerationUnit::new("../evil", options).validate().is_err());
    }
}
