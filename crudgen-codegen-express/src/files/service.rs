//! Service file generator.

use crudgen_codegen::{TemplateKind, builder::CodeBuilder, fields::FieldRules};
use crudgen_core::{FileRules, SourceFile};

use super::ResourceContext;
use crate::{
    Dialect,
    ast::{Exports, FnSig, Import, ModuleFile, js_string},
    naming::{MODEL_BINDING, sibling_module},
};

/// `services/xService`: input validation and not-found handling over the model.
pub struct ServiceFile<'a> {
    ctx: &'a ResourceContext<'a>,
}

impl<'a> ServiceFile<'a> {
    pub fn new(ctx: &'a ResourceContext<'a>) -> Self {
        Self { ctx }
    }
}

fn render_error_class(b: &mut CodeBuilder, d: &dyn Dialect, name: &str) {
    b.block(&format!("class {name} extends Error {{"), "}", |b| {
        b.block(&format!("constructor({}) {{", d.typed("message", "string")), "}", |b| {
            b.line("super(message);");
            b.line(&format!("this.name = {};", js_string(name)));
        });
    });
}

fn render_validate(b: &mut CodeBuilder, d: &dyn Dialect, rules: FieldRules) {
    let sig = FnSig::new("validate")
        .param("data", "Record<string, unknown>")
        .param("partial", "boolean")
        .returns("void");
    b.block(&d.fn_header(&sig), "}", |b| {
        b.line(&format!("const {} = [];", d.typed("errors", "string[]")));
        b.block("if (!partial || data.name !== undefined) {", "}", |b| {
            b.line("if (typeof data.name !== 'string' || data.name.trim() === '') {");
            b.indent();
            b.line("errors.push('Name is required and must be a non-empty string');");
            b.dedent();
            b.line(&format!(
                "}} else if (data.name.length > {}) {{",
                rules.name_max_length
            ));
            b.indent();
            b.line(&format!(
                "errors.push('Name cannot exceed {} characters');",
                rules.name_max_length
            ));
            b.dedent();
            b.line("}");
        });
        b.block(
            "if (data.description !== undefined && data.description !== null) {",
            "}",
            |b| {
                b.line("if (typeof data.description !== 'string') {");
                b.indent();
                b.line("errors.push('Description must be a string');");
                b.dedent();
                b.line(&format!(
                    "}} else if (data.description.length > {}) {{",
                    rules.description_max_length
                ));
                b.indent();
                b.line(&format!(
                    "errors.push('Description cannot exceed {} characters');",
                    rules.description_max_length
                ));
                b.dedent();
                b.line("}");
            },
        );
        b.block("if (data.price !== undefined) {", "}", |b| {
            b.block(
                &format!(
                    "if (typeof data.price !== 'number' || !Number.isFinite(data.price) || data.price < {}) {{",
                    rules.price_min
                ),
                "}",
                |b| {
                    b.line(&format!(
                        "errors.push('Price must be a number greater than or equal to {}');",
                        rules.price_min
                    ));
                },
            );
        });
        b.block("if (errors.length > 0) {", "}", |b| {
            b.line("throw new ValidationError('Validation failed: ' + errors.join(', '));");
        });
    });
}

fn render_sanitize(b: &mut CodeBuilder, d: &dyn Dialect, input: &str) {
    let partial = format!("Partial<{input}>");
    let sig = FnSig::new("sanitize")
        .param("data", "Record<string, unknown>")
        .returns(partial.as_str());
    b.block(&d.fn_header(&sig), "}", |b| {
        b.line(&format!("const {} = {{}};", d.typed("fields", &partial)));
        b.block("if (typeof data.name === 'string') {", "}", |b| {
            b.line("fields.name = data.name.trim();");
        });
        b.block("if (typeof data.description === 'string') {", "}", |b| {
            b.line("fields.description = data.description.trim();");
        });
        b.block("if (typeof data.price === 'number') {", "}", |b| {
            b.line("fields.price = data.price;");
        });
        b.line("return fields;");
    });
}

impl SourceFile for ServiceFile<'_> {
    fn path(&self) -> String {
        self.ctx
            .layout
            .resource_file(TemplateKind::Service, self.ctx.names())
    }

    fn rules(&self) -> FileRules {
        self.ctx.file_rules()
    }

    fn render(&self) -> String {
        let d = self.ctx.dialect();
        let names = self.ctx.names();
        let types = self.ctx.types();
        let rules = self.ctx.rules;
        let record = format!("{MODEL_BINDING}.{}", types.record);
        let input = format!("{MODEL_BINDING}.{}", types.input);
        let not_found = format!(
            "throw new NotFoundError({});",
            js_string(&format!("{} not found", names.canonical))
        );

        ModuleFile::new(d)
            .header(format!("{} service.", names.canonical))
            .header("")
            .header("Validates input and turns missing records into NotFoundError.")
            .import(Import::namespace(
                MODEL_BINDING,
                sibling_module("models", &names.model_stem),
            ))
            .section(|b| {
                render_error_class(b, d, "ValidationError");
                b.blank();
                render_error_class(b, d, "NotFoundError");
            })
            .section(|b| render_validate(b, d, rules))
            .section(|b| render_sanitize(b, d, &input))
            .section(|b| {
                let sig = FnSig::new("assertValidId").param("id", "string").returns("void");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.block(&format!("if (!{MODEL_BINDING}.isValidId(id)) {{"), "}", |b| {
                        b.line("throw new Error('Invalid ID format');");
                    });
                });
            })
            .section(|b| {
                let sig = FnSig::new("findAll")
                    .async_fn()
                    .returns(format!("Promise<{record}[]>"));
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line(&format!("return {MODEL_BINDING}.getAll();"));
                });
            })
            .section(|b| {
                let sig = FnSig::new("findById")
                    .async_fn()
                    .param("id", "string")
                    .returns(format!("Promise<{record}>"));
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("assertValidId(id);");
                    b.line(&format!("const record = await {MODEL_BINDING}.getById(id);"));
                    b.block("if (!record) {", "}", |b| {
                        b.line(&not_found);
                    });
                    b.line("return record;");
                });
            })
            .section(|b| {
                let sig = FnSig::new("create")
                    .async_fn()
                    .param("body", "Record<string, unknown>")
                    .returns(format!("Promise<{record}>"));
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("validate(body, false);");
                    b.line(&format!(
                        "return {MODEL_BINDING}.create({});",
                        d.cast("sanitize(body)", &input)
                    ));
                });
            })
            .section(|b| {
                let sig = FnSig::new("update")
                    .async_fn()
                    .param("id", "string")
                    .param("body", "Record<string, unknown>")
                    .returns(format!("Promise<{record}>"));
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("assertValidId(id);");
                    b.line("validate(body, true);");
                    b.line(&format!(
                        "const record = await {MODEL_BINDING}.update(id, sanitize(body));"
                    ));
                    b.block("if (!record) {", "}", |b| {
                        b.line(&not_found);
                    });
                    b.line("return record;");
                });
            })
            .section(|b| {
                let sig = FnSig::new("remove")
                    .async_fn()
                    .param("id", "string")
                    .returns("Promise<void>");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("assertValidId(id);");
                    b.line(&format!("const deleted = await {MODEL_BINDING}.delete(id);"));
                    b.block("if (!deleted) {", "}", |b| {
                        b.line(&not_found);
                    });
                });
            })
            .exports(Exports::names([
                "ValidationError",
                "NotFoundError",
                "findAll",
                "findById",
                "create",
                "update",
                "remove",
            ]))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::paths::ProjectLayout;
    use crudgen_manifest::{DatabaseChoice, LanguageVariant, ResourceSpec};

    use super::*;

    fn render(name: &str, language: LanguageVariant) -> String {
        let spec = ResourceSpec::parse(name, DatabaseChoice::InMemory, language).unwrap();
        let layout = ProjectLayout::new("src", language);
        let ctx = ResourceContext::new(&spec, &layout);
        ServiceFile::new(&ctx).render()
    }

    #[test]
    fn test_imports_model_namespace() {
        let js = render("Order", LanguageVariant::JavaScript);
        assert!(js.contains("const model = require('../models/Order');"));

        let ts = render("Order", LanguageVariant::TypeScript);
        assert!(ts.contains("import * as model from '../models/Order';"));
    }

    #[test]
    fn test_error_messages() {
        let js = render("Order", LanguageVariant::JavaScript);
        assert!(js.contains("throw new Error('Invalid ID format');"));
        assert!(js.contains("throw new NotFoundError('Order not found');"));
        assert!(js.contains("throw new ValidationError('Validation failed: ' + errors.join(', '));"));
        assert!(js.contains("} else if (data.name.length > 255) {"));
        assert!(js.contains("} else if (data.description.length > 2000) {"));
    }

    #[test]
    fn test_typescript_signatures() {
        let ts = render("Order", LanguageVariant::TypeScript);
        assert!(ts.contains("async function findById(id: string): Promise<model.Order> {"));
        assert!(ts.contains("return model.create(sanitize(body) as model.OrderInput);"));
        assert!(ts.contains("const fields: Partial<model.OrderInput> = {};"));
        assert!(ts.contains("constructor(message: string) {"));
    }

    #[test]
    fn test_error_class_snapshot() {
        let mut b = CodeBuilder::javascript();
        render_error_class(&mut b, &crate::JavaScript, "NotFoundError");
        insta::assert_snapshot!(b.build(), @r"
        class NotFoundError extends Error {
          constructor(message) {
            super(message);
            this.name = 'NotFoundError';
          }
        }
        ");
    }

    #[test]
    fn test_exports() {
        let js = render("Order", LanguageVariant::JavaScript);
        assert!(js.ends_with(
            "module.exports = {\n  ValidationError,\n  NotFoundError,\n  findAll,\n  findById,\n  create,\n  update,\n  remove,\n};\n"
        ));
    }
}
