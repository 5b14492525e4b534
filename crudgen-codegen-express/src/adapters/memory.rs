//! In-memory array backend.

use crudgen_codegen::{
    adapters::{Dependency, IdKind, StorageAdapter},
    builder::CodeBuilder,
    fields::{SAMPLE_RECORDS, SampleRecord},
};
use crudgen_manifest::DatabaseChoice;

use super::{ModelBackend, ModelContext, Operation};
use crate::{
    Dialect,
    ast::{Import, js_string},
};

/// Records live in a module-level array seeded with sample data.
#[derive(Debug, Clone, Copy)]
pub struct MemoryAdapter {
    seeds: &'static [SampleRecord],
}

impl MemoryAdapter {
    pub fn new(seeds: &'static [SampleRecord]) -> Self {
        Self { seeds }
    }
}

impl Default for MemoryAdapter {
    fn default() -> Self {
        Self::new(&SAMPLE_RECORDS)
    }
}

impl StorageAdapter for MemoryAdapter {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn database(&self) -> DatabaseChoice {
        DatabaseChoice::InMemory
    }

    fn dependencies(&self) -> Vec<Dependency> {
        Vec::new()
    }

    fn id_kind(&self) -> IdKind {
        IdKind::Integer
    }

    fn requires_connection(&self) -> bool {
        false
    }
}

impl ModelBackend for MemoryAdapter {
    fn imports(&self, _ctx: &ModelContext<'_>) -> Vec<Import> {
        Vec::new()
    }

    fn render_storage(&self, b: &mut CodeBuilder, ctx: &ModelContext<'_>) {
        let d = ctx.dialect;
        let records_ty = format!("{}[]", ctx.types.record);

        b.block(&format!("const {} = [", d.typed("records", &records_ty)), "];", |b| {
            for (index, seed) in self.seeds.iter().enumerate() {
                b.block("{", "},", |b| {
                    b.line(&format!("id: {},", index + 1));
                    b.line(&format!("name: {},", js_string(seed.name)));
                    b.line(&format!("description: {},", js_string(seed.description)));
                    b.line(&format!("price: {},", seed.price));
                    b.line("createdAt: new Date(),");
                    b.line("updatedAt: new Date(),");
                });
            }
        });
        b.blank();
        b.line(&format!("let nextId = {};", self.seeds.len() + 1));
    }

    fn render_operation(&self, b: &mut CodeBuilder, op: Operation, ctx: &ModelContext<'_>) {
        let d = ctx.dialect;
        match op {
            Operation::GetAll => {
                b.line("return records.slice();");
            }
            Operation::GetById => {
                b.line("return records.find((record) => record.id === Number(id)) || null;");
            }
            Operation::Create => {
                b.line("const now = new Date();");
                b.block(
                    &format!("const {} = {{", d.typed("record", &ctx.types.record)),
                    "};",
                    |b| {
                        b.line("id: nextId++,");
                        b.line("name: data.name,");
                        b.line("description: data.description,");
                        b.line("price: data.price ?? 0,");
                        b.line("createdAt: now,");
                        b.line("updatedAt: now,");
                    },
                );
                b.line("records.push(record);");
                b.line("return record;");
            }
            Operation::Update => {
                b.line("const index = records.findIndex((record) => record.id === Number(id));");
                b.block("if (index === -1) {", "}", |b| {
                    b.line("return null;");
                });
                b.line("const record = { ...records[index], ...data, updatedAt: new Date() };");
                b.line("records[index] = record;");
                b.line("return record;");
            }
            Operation::Delete => {
                b.line("const index = records.findIndex((record) => record.id === Number(id));");
                b.block("if (index === -1) {", "}", |b| {
                    b.line("return false;");
                });
                b.line("records.splice(index, 1);");
                b.line("return true;");
            }
        }
    }

    fn render_config(&self, _dialect: &dyn Dialect, _database_name: &str) -> Option<String> {
        None
    }
}
