//! Where generated files live inside a project.

use crudgen_manifest::{LanguageVariant, ResourceNames};

use crate::TemplateKind;

/// Shared middleware file name stem.
pub const ERROR_HANDLER: &str = "errorHandler";

/// Database connection module stem under `config/`.
pub const DATABASE_CONFIG: &str = "database";

/// Path layout for one project: source directory plus file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    src_dir: String,
    ext: &'static str,
}

impl ProjectLayout {
    /// `src_dir` must already have passed path validation.
    pub fn new(src_dir: impl Into<String>, language: LanguageVariant) -> Self {
        let src_dir = src_dir.into();
        let src_dir = src_dir.trim_end_matches('/').to_string();
        Self {
            src_dir,
            ext: language.extension(),
        }
    }

    pub fn src_dir(&self) -> &str {
        &self.src_dir
    }

    pub fn extension(&self) -> &'static str {
        self.ext
    }

    /// Path of a source module, e.g. `src/app.js` for `source("app")`.
    pub fn source(&self, stem: &str) -> String {
        if self.src_dir.is_empty() || self.src_dir == "." {
            format!("{stem}.{}", self.ext)
        } else {
            format!("{}/{stem}.{}", self.src_dir, self.ext)
        }
    }

    /// Path of a module in a subdirectory of the source root.
    pub fn nested(&self, dir: &str, stem: &str) -> String {
        self.source(&format!("{dir}/{stem}"))
    }

    /// Path of a resource file of the given kind.
    pub fn resource_file(&self, kind: TemplateKind, names: &ResourceNames) -> String {
        let stem = match kind {
            TemplateKind::Model => names.model_stem.as_str(),
            TemplateKind::Service => names.service_stem.as_str(),
            TemplateKind::Controller => names.controller_stem.as_str(),
            TemplateKind::Route => names.routes_stem.as_str(),
            TemplateKind::Middleware => ERROR_HANDLER,
        };
        self.nested(kind.directory(), stem)
    }

    /// Path of the database connection module.
    pub fn database_config(&self) -> String {
        self.nested("config", DATABASE_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        let layout = ProjectLayout::new("src", LanguageVariant::JavaScript);
        let names = ResourceNames::derive("User").unwrap();

        assert_eq!(layout.resource_file(TemplateKind::Model, &names), "src/models/User.js");
        assert_eq!(
            layout.resource_file(TemplateKind::Service, &names),
            "src/services/userService.js"
        );
        assert_eq!(
            layout.resource_file(TemplateKind::Controller, &names),
            "src/controllers/userController.js"
        );
        assert_eq!(layout.resource_file(TemplateKind::Route, &names), "src/routes/userRoutes.js");
        assert_eq!(
            layout.resource_file(TemplateKind::Middleware, &names),
            "src/middleware/errorHandler.js"
        );
    }

    #[test]
    fn test_typescript_extension_and_nested_src() {
        let layout = ProjectLayout::new("app/src/", LanguageVariant::TypeScript);
        assert_eq!(layout.database_config(), "app/src/config/database.ts");
        assert_eq!(layout.source("server"), "app/src/server.ts");
    }

    #[test]
    fn test_current_dir_as_src() {
        let layout = ProjectLayout::new(".", LanguageVariant::JavaScript);
        assert_eq!(layout.source("app"), "app.js");
    }
}
