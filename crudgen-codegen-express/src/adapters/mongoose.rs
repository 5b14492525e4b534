//! MongoDB backend using mongoose.

use crudgen_codegen::{
    adapters::{Dependency, EnvVar, IdKind, StorageAdapter},
    builder::CodeBuilder,
};
use crudgen_manifest::DatabaseChoice;

use super::{ModelBackend, ModelContext, Operation};
use crate::{
    Dialect,
    ast::{Exports, FnSig, Import, ModuleFile, js_string},
};

/// Documents are stored through a mongoose model with schema validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongooseAdapter;

impl StorageAdapter for MongooseAdapter {
    fn name(&self) -> &'static str {
        "mongoose"
    }

    fn database(&self) -> DatabaseChoice {
        DatabaseChoice::Document
    }

    fn dependencies(&self) -> Vec<Dependency> {
        vec![Dependency::new("mongoose", "^8.5.1")]
    }

    fn env_vars(&self, database_name: &str) -> Vec<EnvVar> {
        vec![EnvVar::new(
            "MONGODB_URI",
            format!("mongodb://127.0.0.1:27017/{database_name}"),
        )]
    }

    fn id_kind(&self) -> IdKind {
        IdKind::ObjectId
    }

    fn requires_connection(&self) -> bool {
        true
    }
}

impl ModelBackend for MongooseAdapter {
    fn imports(&self, _ctx: &ModelContext<'_>) -> Vec<Import> {
        vec![Import::default_export("mongoose", "mongoose")]
    }

    fn render_storage(&self, b: &mut CodeBuilder, ctx: &ModelContext<'_>) {
        let d = ctx.dialect;
        let rules = ctx.rules;
        let record = &ctx.types.record;

        b.line(&format!(
            "const recordSchema = new mongoose.Schema{}(",
            d.type_args(record)
        ));
        b.indent();
        b.block("{", "},", |b| {
            b.block("name: {", "},", |b| {
                b.line("type: String,");
                b.line("required: [true, 'Name is required'],");
                b.line("trim: true,");
                b.line(&format!(
                    "maxlength: [{0}, 'Name cannot exceed {0} characters'],",
                    rules.name_max_length
                ));
            });
            b.block("description: {", "},", |b| {
                b.line("type: String,");
                b.line("trim: true,");
                b.line(&format!(
                    "maxlength: [{0}, 'Description cannot exceed {0} characters'],",
                    rules.description_max_length
                ));
            });
            b.block("price: {", "},", |b| {
                b.line("type: Number,");
                b.line(&format!("default: {},", rules.price_min));
                b.line(&format!(
                    "min: [{0}, 'Price cannot be less than {0}'],",
                    rules.price_min
                ));
            });
        });
        b.line("{ timestamps: true },");
        b.dedent();
        b.line(");");
        b.blank();
        b.line(&format!(
            "const Model = mongoose.model{}({}, recordSchema);",
            d.type_args(record),
            js_string(&ctx.names.canonical)
        ));
    }

    fn render_operation(&self, b: &mut CodeBuilder, op: Operation, ctx: &ModelContext<'_>) {
        let d = ctx.dialect;
        let record = &ctx.types.record;
        match op {
            Operation::GetAll => {
                b.line(&format!(
                    "const records = await Model.find().sort({{ createdAt: -1 }}).lean{}();",
                    d.type_args(&format!("{record}[]"))
                ));
                b.line("return records;");
            }
            Operation::GetById => {
                b.line(&format!(
                    "const record = await Model.findById(id).lean{}();",
                    d.type_args(record)
                ));
                b.line("return record;");
            }
            Operation::Create => {
                b.line("const record = await Model.create(data);");
                b.line("return record.toObject();");
            }
            Operation::Update => {
                b.line(&format!(
                    "const record = await Model.findByIdAndUpdate(id, data, {{ new: true, runValidators: true }}).lean{}();",
                    d.type_args(record)
                ));
                b.line("return record;");
            }
            Operation::Delete => {
                b.line("const record = await Model.findByIdAndDelete(id);");
                b.line("return record !== null;");
            }
        }
    }

    fn extra_exports(&self) -> Vec<&'static str> {
        vec!["Model"]
    }

    fn render_config(&self, dialect: &dyn Dialect, database_name: &str) -> Option<String> {
        let uri = format!("mongodb://127.0.0.1:27017/{database_name}");
        let file = ModuleFile::new(dialect)
            .header("MongoDB connection.")
            .header("")
            .header("Reads MONGODB_URI from the environment.")
            .import(Import::default_export("mongoose", "mongoose"))
            .section(|b| {
                b.line(&format!(
                    "const MONGODB_URI = process.env.MONGODB_URI || {};",
                    js_string(&uri)
                ));
            })
            .section(|b| {
                let sig = FnSig::new("connectDatabase")
                    .async_fn()
                    .returns("Promise<void>");
                b.block(&dialect.fn_header(&sig), "}", |b| {
                    b.line("await mongoose.connect(MONGODB_URI);");
                    b.line("console.log('Connected to MongoDB');");
                });
            })
            .exports(Exports::names(["connectDatabase"]));
        Some(file.render())
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::fields::FieldRules;
    use crudgen_manifest::ResourceNames;

    use super::*;
    use crate::{JavaScript, TypeScript};

    #[test]
    fn test_schema_uses_field_rules() {
        let names = ResourceNames::derive("Book").unwrap();
        let rules = FieldRules {
            name_max_length: 80,
            description_max_length: 500,
            price_min: 1,
        };
        let ctx = ModelContext::new(&names, rules, &JavaScript);
        let mut b = CodeBuilder::javascript();
        MongooseAdapter.render_storage(&mut b, &ctx);
        let out = b.build();

        assert!(out.contains("maxlength: [80, 'Name cannot exceed 80 characters'],"));
        assert!(out.contains("maxlength: [500, 'Description cannot exceed 500 characters'],"));
        assert!(out.contains("min: [1, 'Price cannot be less than 1'],"));
        assert!(out.contains("{ timestamps: true },"));
        assert!(out.ends_with("const Model = mongoose.model('Book', recordSchema);\n"));
    }

    #[test]
    fn test_typed_schema() {
        let names = ResourceNames::derive("Book").unwrap();
        let ctx = ModelContext::new(&names, FieldRules::DEFAULT, &TypeScript);
        let mut b = CodeBuilder::javascript();
        MongooseAdapter.render_storage(&mut b, &ctx);
        let out = b.build();

        assert!(out.starts_with("const recordSchema = new mongoose.Schema<Book>(\n"));
        assert!(out.contains("mongoose.model<Book>('Book', recordSchema)"));
    }

    #[test]
    fn test_config_reads_env() {
        let config = MongooseAdapter.render_config(&JavaScript, "shop_api").unwrap();
        assert!(config.contains("const mongoose = require('mongoose');"));
        assert!(config.contains(
            "const MONGODB_URI = process.env.MONGODB_URI || 'mongodb://127.0.0.1:27017/shop_api';"
        ));
        assert!(config.contains("async function connectDatabase() {"));
        assert!(config.contains("module.exports = {\n  connectDatabase,\n};"));
    }
}
