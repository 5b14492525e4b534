//! Resource naming, the validation gate, and `crudgen.toml` parsing.
//!
//! Everything that decides whether user input is safe to generate from lives
//! here: resource and project name rules, path checks, and the project manifest.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod database;
mod error;
mod language;
mod manifest;
mod resource;
mod validate;

pub use database::DatabaseChoice;
pub use error::{Error, NameKind, Result, SourceContext};
pub use language::LanguageVariant;
pub use manifest::{CrudgenToml, GenerateConfig, Isolation, MANIFEST_FILE, Manifest, ProjectConfig};
pub use resource::{ResourceName, ResourceNames, ResourceSpec};
pub use validate::{
    MAX_NAME_LENGTH, MAX_PATH_LENGTH, ReservedNames, is_path_in_project, normalize_path,
    resolve_path, validate_path, validate_project_name, validate_resource_name,
};
