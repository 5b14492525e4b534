//! Manifest types and parsing for crudgen.toml files.

mod file;
mod parse;

pub use file::CrudgenToml;
use serde::{Deserialize, Serialize};

use crate::{DatabaseChoice, LanguageVariant};

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "crudgen.toml";

/// Root manifest for crudgen.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project metadata and generation defaults
    pub project: ProjectConfig,

    /// How resource generation is run
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name, also used as the npm package name
    pub name: String,

    /// Language variant for generated files
    #[serde(default)]
    pub language: LanguageVariant,

    /// Storage backend for generated models
    #[serde(default)]
    pub database: DatabaseChoice,

    /// Directory, relative to the project root, that holds generated sources
    #[serde(default = "default_src_dir")]
    pub src_dir: String,
}

fn default_src_dir() -> String {
    "src".to_string()
}

/// The `[generate]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// How each resource in a batch is isolated
    #[serde(default)]
    pub isolation: Isolation,

    /// Overwrite existing resource files
    #[serde(default)]
    pub force: bool,
}

/// Isolation of one resource's generation within a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Isolation {
    /// Each resource is generated by a child process.
    #[default]
    Process,
    /// Each resource is generated by a function call in the driver process.
    InProcess,
}

impl Manifest {
    /// A manifest for a new project with default generation settings.
    pub fn new(name: impl Into<String>, language: LanguageVariant, database: DatabaseChoice) -> Self {
        Self {
            project: ProjectConfig {
                name: name.into(),
                language,
                database,
                src_dir: default_src_dir(),
            },
            generate: GenerateConfig::default(),
        }
    }
}
