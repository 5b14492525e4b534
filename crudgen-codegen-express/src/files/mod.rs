//! Express file generators.
//!
//! Resource files ([`ModelFile`], [`ServiceFile`], [`ControllerFile`],
//! [`RoutesFile`]) are rendered per resource from a [`ResourceContext`].
//! The rest make up the project scaffold written by `init`.

mod app;
mod auth;
mod controller;
mod database_config;
mod env_example;
mod error_handler;
mod gitignore;
mod model;
mod package_json;
mod password;
mod routes;
mod server;
mod service;
mod tsconfig;

use crudgen_codegen::{fields::FieldRules, paths::ProjectLayout};
use crudgen_core::{FileRules, Overwrite};
use crudgen_manifest::{ResourceNames, ResourceSpec};

pub use app::AppFile;
pub use auth::AuthFile;
pub use controller::ControllerFile;
pub use crudgen_codegen::generation::CrudgenTomlFile;
pub use database_config::DatabaseConfigFile;
pub use env_example::EnvExample;
pub use error_handler::ErrorHandlerFile;
pub use gitignore::GitIgnore;
pub use model::ModelFile;
pub use package_json::PackageJson;
pub use password::PasswordFile;
pub use routes::RoutesFile;
pub use server::ServerFile;
pub use service::ServiceFile;
pub use tsconfig::TsConfig;

use crate::{Dialect, dialect_for, naming::TypeNames};

/// Shared inputs for the four per-resource files.
pub struct ResourceContext<'a> {
    pub spec: &'a ResourceSpec,
    pub layout: &'a ProjectLayout,
    pub rules: FieldRules,
    pub overwrite: Overwrite,
}

impl<'a> ResourceContext<'a> {
    pub fn new(spec: &'a ResourceSpec, layout: &'a ProjectLayout) -> Self {
        Self {
            spec,
            layout,
            rules: FieldRules::DEFAULT,
            overwrite: Overwrite::IfMissing,
        }
    }

    /// Overwrite resource files that already exist.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn names(&self) -> &'a ResourceNames {
        self.spec.names()
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        dialect_for(self.spec.language())
    }

    pub(crate) fn types(&self) -> TypeNames {
        TypeNames::new(self.names())
    }

    pub(crate) fn file_rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }
}

/// Database name used in connection defaults: the project name lower-cased,
/// with `-` replaced by `_`.
pub fn database_name(project: &str) -> String {
    project.to_lowercase().replace('-', "_")
}
