//! Shared error middleware generator.

use crudgen_codegen::{TemplateKind, paths::{ERROR_HANDLER, ProjectLayout}};
use crudgen_core::{FileRules, SourceFile};

use crate::{
    Dialect,
    ast::{Exports, FnSig, Import, ModuleFile},
};

/// `middleware/errorHandler`: the catch-all 404 route and the error handler.
///
/// Shared by every resource, so it is only ever created once.
pub struct ErrorHandlerFile<'a> {
    layout: &'a ProjectLayout,
    dialect: &'static dyn Dialect,
}

impl<'a> ErrorHandlerFile<'a> {
    pub fn new(layout: &'a ProjectLayout, dialect: &'static dyn Dialect) -> Self {
        Self { layout, dialect }
    }
}

impl SourceFile for ErrorHandlerFile<'_> {
    fn path(&self) -> String {
        self.layout
            .nested(TemplateKind::Middleware.directory(), ERROR_HANDLER)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let d = self.dialect;

        ModuleFile::new(d)
            .header("Fallback 404 handler and JSON error responses.")
            .import(Import::types("express", ["NextFunction", "Request", "Response"]))
            .typed_section(|b| {
                b.block("interface HttpError extends Error {", "}", |b| {
                    b.line("status?: number;");
                });
            })
            .section(|b| {
                let sig = FnSig::new("notFound")
                    .param("req", "Request")
                    .param("res", "Response")
                    .returns("void");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line(
                        "res.status(404).json({ success: false, error: 'Route not found: ' + req.originalUrl });",
                    );
                });
            })
            .section(|b| {
                let sig = FnSig::new("errorHandler")
                    .param("err", "HttpError")
                    .param("req", "Request")
                    .param("res", "Response")
                    .param("next", "NextFunction")
                    .returns("void");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.block("if (res.headersSent) {", "}", |b| {
                        b.line("next(err);");
                        b.line("return;");
                    });
                    b.line("const status = typeof err.status === 'number' ? err.status : 500;");
                    b.line("const production = process.env.NODE_ENV === 'production';");
                    b.line(
                        "const message = status === 500 && production ? 'Internal server error' : err.message;",
                    );
                    b.block("if (status === 500) {", "}", |b| {
                        b.line("console.error(err);");
                    });
                    b.line("res.status(status).json({ success: false, error: message });");
                });
            })
            .exports(Exports::names(["notFound", "errorHandler"]))
            .render()
    }
}
