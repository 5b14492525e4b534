//! Model file generator.

use crudgen_codegen::{
    TemplateKind,
    adapters::IdKind,
    builder::CodeBuilder,
};
use crudgen_core::{FileRules, SourceFile};

use super::ResourceContext;
use crate::{
    adapters::{ModelBackend, ModelContext, Operation, render_id_check},
    ast::{ExportName, Exports, FnSig, ModuleFile},
};

/// `models/X`: record types, storage and the five data-access functions.
pub struct ModelFile<'a> {
    ctx: &'a ResourceContext<'a>,
    backend: &'a dyn ModelBackend,
}

impl<'a> ModelFile<'a> {
    pub fn new(ctx: &'a ResourceContext<'a>, backend: &'a dyn ModelBackend) -> Self {
        Self { ctx, backend }
    }

    fn render_types(b: &mut CodeBuilder, model: &ModelContext<'_>, id_kind: IdKind) {
        b.block(&format!("export interface {} {{", model.types.record), "}", |b| {
            match id_kind {
                IdKind::Integer => b.line("id: number;"),
                IdKind::ObjectId => b.line("_id: string;"),
            };
            b.line("name: string;");
            b.line("description?: string | null;");
            b.line("price: number;");
            b.line("createdAt: Date;");
            b.line("updatedAt: Date;");
        });
        b.blank();
        b.block(&format!("export interface {} {{", model.types.input), "}", |b| {
            b.line("name: string;");
            b.line("description?: string;");
            b.line("price?: number;");
        });
    }

    fn exports(&self) -> Exports {
        let mut names: Vec<ExportName> = self
            .backend
            .extra_exports()
            .into_iter()
            .map(ExportName::new)
            .collect();
        names.push(ExportName::new("isValidId"));
        names.extend(Operation::ALL.iter().map(|op| {
            if op.function_name() == op.export_name() {
                ExportName::new(op.function_name())
            } else {
                ExportName::aliased(op.function_name(), op.export_name())
            }
        }));
        Exports::Named(names)
    }
}

impl SourceFile for ModelFile<'_> {
    fn path(&self) -> String {
        self.ctx
            .layout
            .resource_file(TemplateKind::Model, self.ctx.names())
    }

    fn rules(&self) -> FileRules {
        self.ctx.file_rules()
    }

    fn render(&self) -> String {
        let dialect = self.ctx.dialect();
        let names = self.ctx.names();
        let model = ModelContext::new(names, self.ctx.rules, dialect);
        let backend = self.backend;
        let id_kind = backend.id_kind();

        let mut file = ModuleFile::new(dialect)
            .header(format!(
                "{} model, storage: {}.",
                names.canonical,
                backend.database().label()
            ))
            .header("")
            .header("Exports isValidId, getAll, getById, create, update and delete.");
        for import in backend.imports(&model) {
            file = file.import(import);
        }

        file = file
            .typed_section(|b| Self::render_types(b, &model, id_kind))
            .section(|b| backend.render_storage(b, &model))
            .section(|b| {
                let sig = FnSig::new("isValidId").param("id", "string").returns("boolean");
                b.block(&dialect.fn_header(&sig), "}", |b| render_id_check(b, id_kind));
            });

        for op in Operation::ALL {
            file = file.section(|b| {
                model.function(b, op, |b| backend.render_operation(b, op, &model));
            });
        }

        file.exports(self.exports()).render()
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::paths::ProjectLayout;
    use crudgen_core::Overwrite;
    use crudgen_manifest::{DatabaseChoice, LanguageVariant, ResourceSpec};

    use super::*;
    use crate::backend_for;

    fn render(name: &str, database: DatabaseChoice, language: LanguageVariant) -> String {
        let spec = ResourceSpec::parse(name, database, language).unwrap();
        let layout = ProjectLayout::new("src", language);
        let ctx = ResourceContext::new(&spec, &layout);
        let backend = backend_for(database);
        ModelFile::new(&ctx, backend.as_ref()).render()
    }

    #[test]
    fn test_path_and_rules() {
        let spec = ResourceSpec::parse("User", DatabaseChoice::InMemory, LanguageVariant::TypeScript)
            .unwrap();
        let layout = ProjectLayout::new("src", LanguageVariant::TypeScript);
        let ctx = ResourceContext::new(&spec, &layout).with_overwrite(Overwrite::Always);
        let backend = backend_for(DatabaseChoice::InMemory);
        let file = ModelFile::new(&ctx, backend.as_ref()).generate();

        assert_eq!(file.path, "src/models/User.ts");
        assert_eq!(file.rules.overwrite, Overwrite::Always);
    }

    #[test]
    fn test_every_backend_exports_the_same_operations() {
        for database in DatabaseChoice::ALL {
            let js = render("User", database, LanguageVariant::JavaScript);
            assert!(js.contains("module.exports = {"), "{database}");
            assert!(js.contains("  isValidId,\n  getAll,\n  getById,\n  create,\n  update,\n  delete: remove,\n};"));
        }
    }

    #[test]
    fn test_document_model_exports_model() {
        let js = render("Product", DatabaseChoice::Document, LanguageVariant::JavaScript);
        assert!(js.contains("module.exports = {\n  Model,\n  isValidId,"));
        assert!(js.contains("return /^[0-9a-fA-F]{24}$/.test(String(id));"));
    }

    #[test]
    fn test_typescript_interfaces() {
        let ts = render("Product", DatabaseChoice::Relational, LanguageVariant::TypeScript);
        assert!(ts.contains("export interface Product {\n  id: number;\n  name: string;"));
        assert!(ts.contains("export interface ProductInput {\n  name: string;"));
        assert!(ts.contains("function isValidId(id: string): boolean {"));
        assert!(ts.contains("  remove as delete,\n};"));

        let js = render("Product", DatabaseChoice::Relational, LanguageVariant::JavaScript);
        assert!(!js.contains("interface"));
    }

    #[test]
    fn test_document_interface_has_object_id() {
        let ts = render("Book", DatabaseChoice::Document, LanguageVariant::TypeScript);
        assert!(ts.contains("export interface Book {\n  _id: string;\n  name: string;"));
        assert!(!ts.contains("  id: number;"));
    }

    #[test]
    fn test_header_names_storage_once() {
        let ts = render("Book", DatabaseChoice::Document, LanguageVariant::TypeScript);
        assert!(ts.contains(" * Book model, storage: MongoDB (mongoose).\n"));
        assert!(!ts.contains("(MongoDB (mongoose))"));
    }

    #[test]
    fn test_in_memory_javascript_model() {
        insta::assert_snapshot!(render("Item", DatabaseChoice::InMemory, LanguageVariant::JavaScript), @r"
        /**
         * Item model, storage: In-memory array.
         *
         * Exports isValidId, getAll, getById, create, update and delete.
         */

        const records = [
          {
            id: 1,
            name: 'Sample Item 1',
            description: 'This is the first sample item',
            price: 19.99,
            createdAt: new Date(),
            updatedAt: new Date(),
          },
          {
            id: 2,
            name: 'Sample Item 2',
            description: 'This is the second sample item',
            price: 29.99,
            createdAt: new Date(),
            updatedAt: new Date(),
          },
        ];

        let nextId = 3;

        function isValidId(id) {
          const value = Number(id);
          return Number.isInteger(value) && value > 0;
        }

        async function getAll() {
          return records.slice();
        }

        async function getById(id) {
          return records.find((record) => record.id === Number(id)) || null;
        }

        async function create(data) {
          const now = new Date();
          const record = {
            id: nextId++,
            name: data.name,
            description: data.description,
            price: data.price ?? 0,
            createdAt: now,
            updatedAt: now,
          };
          records.push(record);
          return record;
        }

        async function update(id, data) {
          const index = records.findIndex((record) => record.id === Number(id));
          if (index === -1) {
            return null;
          }
          const record = { ...records[index], ...data, updatedAt: new Date() };
          records[index] = record;
          return record;
        }

        async function remove(id) {
          const index = records.findIndex((record) => record.id === Number(id));
          if (index === -1) {
            return false;
          }
          records.splice(index, 1);
          return true;
        }

        module.exports = {
          isValidId,
          getAll,
          getById,
          create,
          update,
          delete: remove,
        };
        ");
    }
}
