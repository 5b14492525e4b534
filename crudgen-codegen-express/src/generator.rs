//! Express code generators.

use crudgen_codegen::{
    TemplateKind,
    language::LanguageCodegen,
    paths::ProjectLayout,
};
use crudgen_core::{GeneratedFile, Overwrite, SourceFile};
use crudgen_manifest::{Manifest, ResourceSpec};

use crate::{
    adapters::{ModelBackend, backend_for},
    dialect_for,
    files::{
        AppFile, AuthFile, ControllerFile, CrudgenTomlFile, DatabaseConfigFile, EnvExample,
        ErrorHandlerFile, GitIgnore, ModelFile, PackageJson, PasswordFile, ResourceContext,
        RoutesFile, ServerFile, ServiceFile, TsConfig, database_name,
    },
};

/// Database name used when no project name is known.
const FALLBACK_PROJECT: &str = "app";

/// Generates the files of one resource.
pub struct ResourceGenerator {
    spec: ResourceSpec,
    layout: ProjectLayout,
    backend: Box<dyn ModelBackend>,
    force: bool,
    project_name: Option<String>,
}

impl ResourceGenerator {
    /// `src_dir` must already have passed path validation.
    pub fn new(spec: ResourceSpec, src_dir: impl Into<String>) -> Self {
        let layout = ProjectLayout::new(src_dir, spec.language());
        let backend = backend_for(spec.database());
        Self {
            spec,
            layout,
            backend,
            force: false,
            project_name: None,
        }
    }

    /// Overwrite existing model, service, controller and route files.
    ///
    /// Shared files (error middleware, database config) are never overwritten.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Project name used for the default database name in `config/database`.
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    /// Where the routes should be mounted, e.g. `/api/users`.
    pub fn route_path(&self) -> &str {
        &self.spec.names().route_path
    }

    /// Path of the application module the routes get mounted in.
    pub fn app_path(&self) -> String {
        self.layout.source("app")
    }

    /// Lines that mount this resource's router in the application module.
    pub fn mount_snippet(&self) -> Vec<String> {
        let names = self.spec.names();
        let module = format!("./{}/{}", TemplateKind::Route.directory(), names.routes_stem);
        if self.spec.language().is_typed() {
            vec![
                format!("import {} from '{module}';", names.routes_stem),
                format!("app.use('{}', {});", names.route_path, names.routes_stem),
            ]
        } else {
            vec![format!("app.use('{}', require('{module}'));", names.route_path)]
        }
    }

    fn context(&self) -> ResourceContext<'_> {
        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };
        ResourceContext::new(&self.spec, &self.layout).with_overwrite(overwrite)
    }

    /// Render one template kind for this resource.
    pub fn render(&self, kind: TemplateKind) -> GeneratedFile {
        let ctx = self.context();
        match kind {
            TemplateKind::Model => ModelFile::new(&ctx, self.backend.as_ref()).generate(),
            TemplateKind::Service => ServiceFile::new(&ctx).generate(),
            TemplateKind::Controller => ControllerFile::new(&ctx).generate(),
            TemplateKind::Route => RoutesFile::new(&ctx).generate(),
            TemplateKind::Middleware => {
                ErrorHandlerFile::new(&self.layout, ctx.dialect()).generate()
            }
        }
    }

    fn database_config(&self) -> Option<GeneratedFile> {
        if !self.backend.model_uses_config() {
            return None;
        }
        let project = self.project_name.as_deref().unwrap_or(FALLBACK_PROJECT);
        DatabaseConfigFile::for_backend(
            &self.layout,
            self.backend.as_ref(),
            dialect_for(self.spec.language()),
            &database_name(project),
        )
        .map(|file| file.generate())
    }
}

impl LanguageCodegen for ResourceGenerator {
    fn language(&self) -> &'static str {
        self.spec.language().as_str()
    }

    fn file_extension(&self) -> &'static str {
        self.layout.extension()
    }

    fn files(&self) -> Vec<GeneratedFile> {
        let mut files: Vec<GeneratedFile> = TemplateKind::ALL
            .iter()
            .map(|kind| self.render(*kind))
            .collect();
        files.extend(self.database_config());

        tracing::debug!(
            resource = %self.spec.name(),
            backend = self.backend.name(),
            files = files.len(),
            "rendered resource"
        );
        files
    }
}

/// Generates the project scaffold written by `init`.
pub struct ProjectGenerator {
    manifest: Manifest,
    layout: ProjectLayout,
    backend: Box<dyn ModelBackend>,
}

impl ProjectGenerator {
    pub fn new(manifest: Manifest) -> Self {
        let layout = ProjectLayout::new(manifest.project.src_dir.clone(), manifest.project.language);
        let backend = backend_for(manifest.project.database);
        Self {
            manifest,
            layout,
            backend,
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

impl LanguageCodegen for ProjectGenerator {
    fn language(&self) -> &'static str {
        self.manifest.project.language.as_str()
    }

    fn file_extension(&self) -> &'static str {
        self.layout.extension()
    }

    fn files(&self) -> Vec<GeneratedFile> {
        let project = &self.manifest.project;
        let dialect = dialect_for(project.language);
        let backend = self.backend.as_ref();
        let db_name = database_name(&project.name);

        let mut files = vec![
            CrudgenTomlFile::new(&self.manifest).generate(),
            PackageJson::new(&project.name, &self.layout, project.language, backend).generate(),
            GitIgnore.generate(),
            EnvExample::new(backend.env_vars(&db_name)).generate(),
        ];
        if project.language.is_typed() {
            files.push(TsConfig::new(&self.layout).generate());
        }
        files.extend([
            AppFile::new(&self.layout, dialect).generate(),
            ServerFile::new(&self.layout, dialect, backend.requires_connection()).generate(),
            ErrorHandlerFile::new(&self.layout, dialect).generate(),
            AuthFile::new(&self.layout, dialect).generate(),
            PasswordFile::new(&self.layout, dialect).generate(),
        ]);
        files.extend(
            DatabaseConfigFile::for_backend(&self.layout, backend, dialect, &db_name)
                .map(|file| file.generate()),
        );

        tracing::debug!(
            project = %project.name,
            files = files.len(),
            "rendered project scaffold"
        );
        files
    }
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::{DatabaseChoice, LanguageVariant};

    use super::*;

    fn generator(database: DatabaseChoice, language: LanguageVariant) -> ResourceGenerator {
        let spec = ResourceSpec::parse("User", database, language).unwrap();
        ResourceGenerator::new(spec, "src")
    }

    fn paths(files: &[GeneratedFile]) -> Vec<&str> {
        files.iter().map(|file| file.path.as_str()).collect()
    }

    #[test]
    fn test_resource_files() {
        let files = generator(DatabaseChoice::InMemory, LanguageVariant::JavaScript).files();

        assert_eq!(
            paths(&files),
            [
                "src/models/User.js",
                "src/services/userService.js",
                "src/controllers/userController.js",
                "src/routes/userRoutes.js",
                "src/middleware/errorHandler.js",
            ]
        );
    }

    #[test]
    fn test_relational_resource_ensures_config() {
        let files = generator(DatabaseChoice::Relational, LanguageVariant::TypeScript)
            .with_project_name("Shop-Api")
            .files();
        let config = files.last().unwrap();

        assert_eq!(config.path, "src/config/database.ts");
        assert_eq!(config.rules.overwrite, Overwrite::IfMissing);
        assert!(config.content.contains("'shop_api'"));
    }

    #[test]
    fn test_force_applies_to_resource_files_only() {
        let files = generator(DatabaseChoice::Relational, LanguageVariant::JavaScript)
            .with_force(true)
            .files();

        for file in &files {
            let shared = file.path.contains("/middleware/") || file.path.contains("/config/");
            let expected = if shared {
                Overwrite::IfMissing
            } else {
                Overwrite::Always
            };
            assert_eq!(file.rules.overwrite, expected, "{}", file.path);
        }
    }

    #[test]
    fn test_route_path() {
        let generator = generator(DatabaseChoice::Document, LanguageVariant::JavaScript);
        assert_eq!(generator.route_path(), "/api/users");
        assert_eq!(generator.language(), "javascript");
    }

    #[test]
    fn test_mount_snippet() {
        let js = generator(DatabaseChoice::InMemory, LanguageVariant::JavaScript);
        assert_eq!(js.app_path(), "src/app.js");
        assert_eq!(
            js.mount_snippet(),
            ["app.use('/api/users', require('./routes/userRoutes'));"]
        );

        let ts = generator(DatabaseChoice::InMemory, LanguageVariant::TypeScript);
        assert_eq!(
            ts.mount_snippet(),
            [
                "import userRoutes from './routes/userRoutes';",
                "app.use('/api/users', userRoutes);",
            ]
        );
    }

    #[test]
    fn test_project_files() {
        let manifest = Manifest::new("shop", LanguageVariant::TypeScript, DatabaseChoice::Document);
        let files = ProjectGenerator::new(manifest).files();

        assert_eq!(
            paths(&files),
            [
                "crudgen.toml",
                "package.json",
                ".gitignore",
                ".env.example",
                "tsconfig.json",
                "src/app.ts",
                "src/server.ts",
                "src/middleware/errorHandler.ts",
                "src/middleware/auth.ts",
                "src/utils/password.ts",
                "src/config/database.ts",
            ]
        );
        assert!(files.iter().all(|file| file.rules.overwrite == Overwrite::IfMissing));
    }

    #[test]
    fn test_in_memory_project_has_no_config() {
        let manifest = Manifest::new("shop", LanguageVariant::JavaScript, DatabaseChoice::InMemory);
        let files = ProjectGenerator::new(manifest).files();

        assert!(!files.iter().any(|file| file.path.contains("config/")));
        assert!(!files.iter().any(|file| file.path == "tsconfig.json"));
    }
}
