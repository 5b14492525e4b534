//! Storage backends for generated models.
//!
//! Each backend implements [`StorageAdapter`] (what the project needs) and
//! [`ModelBackend`] (the code it renders). The model template owns the
//! shared parts: record types, `isValidId`, and the export list.

mod memory;
mod mongoose;
mod mysql;

use crudgen_codegen::{
    adapters::{IdKind, StorageAdapter},
    builder::CodeBuilder,
    fields::FieldRules,
};
use crudgen_manifest::{DatabaseChoice, ResourceNames};
pub use memory::MemoryAdapter;
pub use mongoose::MongooseAdapter;
pub use mysql::MysqlAdapter;

use crate::{
    Dialect,
    ast::{FnSig, Import},
    naming::TypeNames,
};

/// Everything a backend needs to render one model.
pub struct ModelContext<'a> {
    pub names: &'a ResourceNames,
    pub types: TypeNames,
    pub rules: FieldRules,
    pub dialect: &'a dyn Dialect,
}

impl<'a> ModelContext<'a> {
    pub fn new(names: &'a ResourceNames, rules: FieldRules, dialect: &'a dyn Dialect) -> Self {
        Self {
            names,
            types: TypeNames::new(names),
            rules,
            dialect,
        }
    }

    /// Signature of a data-access function, typed for this resource.
    pub fn sig(&self, op: Operation) -> FnSig {
        let record = &self.types.record;
        let input = &self.types.input;
        let sig = FnSig::new(op.function_name()).async_fn();
        match op {
            Operation::GetAll => sig.returns(format!("Promise<{record}[]>")),
            Operation::GetById => sig
                .param("id", "string")
                .returns(format!("Promise<{record} | null>")),
            Operation::Create => sig
                .param("data", input.as_str())
                .returns(format!("Promise<{record}>")),
            Operation::Update => sig
                .param("id", "string")
                .param("data", format!("Partial<{input}>"))
                .returns(format!("Promise<{record} | null>")),
            Operation::Delete => sig.param("id", "string").returns("Promise<boolean>"),
        }
    }

    /// Render one data-access function as `header { body }`.
    pub fn function(&self, b: &mut CodeBuilder, op: Operation, body: impl FnOnce(&mut CodeBuilder)) {
        b.block(&self.dialect.fn_header(&self.sig(op)), "}", body);
    }
}

/// The five data-access operations every model exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::GetAll,
        Operation::GetById,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    /// Local function name; `delete` is a keyword so it is exported under an alias.
    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::GetAll => "getAll",
            Operation::GetById => "getById",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "remove",
        }
    }

    /// Name the model module exports the function under.
    pub fn export_name(&self) -> &'static str {
        match self {
            Operation::Delete => "delete",
            other => other.function_name(),
        }
    }
}

/// Code rendered by a storage backend.
pub trait ModelBackend: StorageAdapter {
    /// Imports the model module needs.
    fn imports(&self, ctx: &ModelContext<'_>) -> Vec<Import>;

    /// Module-level storage: schema, table definition or record list.
    fn render_storage(&self, b: &mut CodeBuilder, ctx: &ModelContext<'_>);

    /// Body of one data-access function.
    fn render_operation(&self, b: &mut CodeBuilder, op: Operation, ctx: &ModelContext<'_>);

    /// Extra values exported next to the operations.
    fn extra_exports(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Whether the model imports the shared `config/database` module.
    fn model_uses_config(&self) -> bool {
        false
    }

    /// Contents of `config/database`, if the backend has one.
    fn render_config(&self, dialect: &dyn Dialect, database_name: &str) -> Option<String>;
}

/// The backend for a database choice.
pub fn backend_for(database: DatabaseChoice) -> Box<dyn ModelBackend> {
    match database {
        DatabaseChoice::Document => Box::new(MongooseAdapter),
        DatabaseChoice::Relational => Box::new(MysqlAdapter),
        DatabaseChoice::InMemory => Box::new(MemoryAdapter::default()),
    }
}

/// Body of `isValidId` for an identifier shape.
pub(crate) fn render_id_check(b: &mut CodeBuilder, id_kind: IdKind) {
    match id_kind {
        IdKind::ObjectId => {
            b.line("return /^[0-9a-fA-F]{24}$/.test(String(id));");
        }
        IdKind::Integer => {
            b.line("const value = Number(id);");
            b.line("return Number.isInteger(value) && value > 0;");
        }
    }
}
