//! Routes file generator.

use crudgen_codegen::TemplateKind;
use crudgen_core::{FileRules, SourceFile};

use super::ResourceContext;
use crate::{
    ast::{Exports, Import, ModuleFile},
    naming::{CONTROLLER_BINDING, HandlerNames, sibling_module},
};

/// `routes/xRoutes`: the five REST routes bound to controller handlers.
pub struct RoutesFile<'a> {
    ctx: &'a ResourceContext<'a>,
}

impl<'a> RoutesFile<'a> {
    pub fn new(ctx: &'a ResourceContext<'a>) -> Self {
        Self { ctx }
    }
}

impl SourceFile for RoutesFile<'_> {
    fn path(&self) -> String {
        self.ctx
            .layout
            .resource_file(TemplateKind::Route, self.ctx.names())
    }

    fn rules(&self) -> FileRules {
        self.ctx.file_rules()
    }

    fn render(&self) -> String {
        let names = self.ctx.names();
        let handlers = HandlerNames::new(names);
        let routes = [
            ("get", "/", &handlers.get_all),
            ("get", "/:id", &handlers.get_by_id),
            ("post", "/", &handlers.create),
            ("put", "/:id", &handlers.update),
            ("delete", "/:id", &handlers.delete),
        ];

        ModuleFile::new(self.ctx.dialect())
            .header(format!("Routes for {}, mounted at {}.", names.canonical, names.route_path))
            .import(Import::named("express", ["Router"]))
            .import(Import::namespace(
                CONTROLLER_BINDING,
                sibling_module("controllers", &names.controller_stem),
            ))
            .section(|b| {
                b.line("const router = Router();");
            })
            .section(|b| {
                for (verb, path, handler) in routes {
                    b.line(&format!("router.{verb}('{path}', {CONTROLLER_BINDING}.{handler});"));
                }
            })
            .exports(Exports::default_export("router"))
            .render()
    }
}
