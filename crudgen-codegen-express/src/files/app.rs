//! Express application module generator.

use crudgen_codegen::{TemplateKind, paths::{ERROR_HANDLER, ProjectLayout}};
use crudgen_core::{FileRules, SourceFile};

use crate::{
    Dialect,
    ast::{Exports, Import, ModuleFile},
};

/// `app`: the Express instance with JSON parsing, a health route and the
/// error middleware.
pub struct AppFile<'a> {
    layout: &'a ProjectLayout,
    dialect: &'static dyn Dialect,
}

impl<'a> AppFile<'a> {
    pub fn new(layout: &'a ProjectLayout, dialect: &'static dyn Dialect) -> Self {
        Self { layout, dialect }
    }
}

impl SourceFile for AppFile<'_> {
    fn path(&self) -> String {
        self.layout.source("app")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        ModuleFile::new(self.dialect)
            .header("Express application.")
            .header("")
            .header("Mount generated routes before the error middleware, e.g.")
            .header("app.use('/api/users', userRoutes);")
            .import(Import::default_export("express", "express"))
            .import(Import::named(
                format!("./{}/{ERROR_HANDLER}", TemplateKind::Middleware.directory()),
                ["notFound", "errorHandler"],
            ))
            .section(|b| {
                b.line("const app = express();");
                b.blank();
                b.line("app.use(express.json());");
            })
            .section(|b| {
                b.block("app.get('/health', (req, res) => {", "});", |b| {
                    b.line("res.status(200).json({ success: true, data: { status: 'ok' } });");
                });
            })
            .section(|b| {
                b.line("app.use(notFound);");
                b.line("app.use(errorHandler);");
            })
            .exports(Exports::default_export("app"))
            .render()
    }
}
