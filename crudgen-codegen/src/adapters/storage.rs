//! Storage adapter abstraction.

use crudgen_manifest::DatabaseChoice;

/// A package the generated project depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub name: &'static str,
    pub version: &'static str,
}

impl Dependency {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

/// An environment variable the generated project reads, with an example value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: &'static str,
    pub example: String,
}

impl EnvVar {
    pub fn new(name: &'static str, example: impl Into<String>) -> Self {
        Self {
            name,
            example: example.into(),
        }
    }
}

/// How a backend identifies records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// 24-character hex document ids.
    ObjectId,
    /// Positive auto-incrementing integers.
    Integer,
}

/// Trait for storage backends.
pub trait StorageAdapter {
    /// Adapter name for identification (usually the driver package).
    fn name(&self) -> &'static str;

    /// The database choice this adapter implements.
    fn database(&self) -> DatabaseChoice;

    /// Runtime packages the generated model layer imports.
    fn dependencies(&self) -> Vec<Dependency>;

    /// Environment variables read by the connection code, with sample values
    /// pointing at `database_name`.
    fn env_vars(&self, _database_name: &str) -> Vec<EnvVar> {
        Vec::new()
    }

    /// Identifier shape used by `isValidId`.
    fn id_kind(&self) -> IdKind;

    /// Whether the backend needs a shared connection module and a connect
    /// step at startup.
    fn requires_connection(&self) -> bool;
}
