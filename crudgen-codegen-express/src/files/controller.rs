//! Controller file generator.

use crudgen_codegen::{TemplateKind, builder::CodeBuilder};
use crudgen_core::{FileRules, SourceFile};

use super::ResourceContext;
use crate::{
    Dialect,
    ast::{Exports, FnSig, Import, ModuleFile},
    naming::{HandlerNames, SERVICE_BINDING, sibling_module},
};

/// `controllers/xController`: HTTP handlers and response envelopes.
pub struct ControllerFile<'a> {
    ctx: &'a ResourceContext<'a>,
}

impl<'a> ControllerFile<'a> {
    pub fn new(ctx: &'a ResourceContext<'a>) -> Self {
        Self { ctx }
    }
}

/// One handler: the service call and the success response it produces.
struct Handler<'n> {
    name: &'n str,
    call: &'static str,
    respond: &'static str,
}

fn handlers(names: &HandlerNames) -> [Handler<'_>; 5] {
    [
        Handler {
            name: &names.get_all,
            call: "const records = await service.findAll();",
            respond: "res.status(200).json({ success: true, count: records.length, data: records });",
        },
        Handler {
            name: &names.get_by_id,
            call: "const record = await service.findById(req.params.id);",
            respond: "res.status(200).json({ success: true, data: record });",
        },
        Handler {
            name: &names.create,
            call: "const record = await service.create(req.body ?? {});",
            respond: "res.status(201).json({ success: true, data: record });",
        },
        Handler {
            name: &names.update,
            call: "const record = await service.update(req.params.id, req.body ?? {});",
            respond: "res.status(200).json({ success: true, data: record });",
        },
        Handler {
            name: &names.delete,
            call: "await service.remove(req.params.id);",
            respond: "res.status(200).json({ success: true, data: {} });",
        },
    ]
}

fn render_helpers(b: &mut CodeBuilder, d: &dyn Dialect) {
    let sig = FnSig::new("messageOf").param("err", "unknown").returns("string");
    b.block(&d.fn_header(&sig), "}", |b| {
        b.line("return err instanceof Error ? err.message : String(err);");
    });
    b.blank();

    let sig = FnSig::new("statusFor").param("err", "unknown").returns("number");
    b.block(&d.fn_header(&sig), "}", |b| {
        b.line("const message = messageOf(err);");
        b.block("if (message.includes('Invalid ID')) {", "}", |b| {
            b.line("return 400;");
        });
        b.block(
            &format!("if (err instanceof {SERVICE_BINDING}.ValidationError) {{"),
            "}",
            |b| {
                b.line("return 400;");
            },
        );
        b.block("if (message.includes('not found')) {", "}", |b| {
            b.line("return 404;");
        });
        b.line("return 500;");
    });
    b.blank();

    let sig = FnSig::new("sendError")
        .param("res", "Response")
        .param("err", "unknown")
        .returns("void");
    b.block(&d.fn_header(&sig), "}", |b| {
        b.line("const status = statusFor(err);");
        b.line("const production = process.env.NODE_ENV === 'production';");
        b.line(
            "const message = status === 500 && production ? 'Internal server error' : messageOf(err);",
        );
        b.block("if (status === 500) {", "}", |b| {
            b.line("console.error(err);");
        });
        b.line("res.status(status).json({ success: false, error: message });");
    });
}

impl SourceFile for ControllerFile<'_> {
    fn path(&self) -> String {
        self.ctx
            .layout
            .resource_file(TemplateKind::Controller, self.ctx.names())
    }

    fn rules(&self) -> FileRules {
        self.ctx.file_rules()
    }

    fn render(&self) -> String {
        let d = self.ctx.dialect();
        let names = self.ctx.names();
        let handler_names = HandlerNames::new(names);

        let mut file = ModuleFile::new(d)
            .header(format!("{} controller.", names.canonical))
            .header("")
            .header("Maps service outcomes to { success, data | error, count } envelopes.")
            .import(Import::types("express", ["Request", "Response"]))
            .import(Import::namespace(
                SERVICE_BINDING,
                sibling_module("services", &names.service_stem),
            ))
            .section(|b| render_helpers(b, d));

        for handler in handlers(&handler_names) {
            file = file.section(|b| {
                let sig = FnSig::new(handler.name)
                    .async_fn()
                    .param("req", "Request")
                    .param("res", "Response")
                    .returns("Promise<void>");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("try {");
                    b.indent();
                    b.line(handler.call);
                    b.line(handler.respond);
                    b.dedent();
                    b.block("} catch (err) {", "}", |b| {
                        b.line("sendError(res, err);");
                    });
                });
            });
        }

        file.exports(Exports::names(handler_names.all())).render()
    }
}
