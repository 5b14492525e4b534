//! MySQL backend using a mysql2 connection pool.

use crudgen_codegen::{
    adapters::{Dependency, EnvVar, IdKind, StorageAdapter},
    builder::CodeBuilder,
    paths::DATABASE_CONFIG,
};
use crudgen_manifest::DatabaseChoice;

use super::{ModelBackend, ModelContext, Operation};
use crate::{
    Dialect,
    ast::{Exports, FnSig, Import, ModuleFile, js_string},
    naming::sibling_module,
};

/// Rows are read and written with parameterized queries; the table is
/// created on first use.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlAdapter;

impl MysqlAdapter {
    fn row_type(ctx: &ModelContext<'_>) -> String {
        format!("{}Row", ctx.types.record)
    }
}

impl StorageAdapter for MysqlAdapter {
    fn name(&self) -> &'static str {
        "mysql2"
    }

    fn database(&self) -> DatabaseChoice {
        DatabaseChoice::Relational
    }

    fn dependencies(&self) -> Vec<Dependency> {
        vec![Dependency::new("mysql2", "^3.11.0")]
    }

    fn env_vars(&self, database_name: &str) -> Vec<EnvVar> {
        vec![
            EnvVar::new("DB_HOST", "localhost"),
            EnvVar::new("DB_PORT", "3306"),
            EnvVar::new("DB_USER", "root"),
            EnvVar::new("DB_PASSWORD", ""),
            EnvVar::new("DB_NAME", database_name),
        ]
    }

    fn id_kind(&self) -> IdKind {
        IdKind::Integer
    }

    fn requires_connection(&self) -> bool {
        true
    }
}

impl ModelBackend for MysqlAdapter {
    fn imports(&self, _ctx: &ModelContext<'_>) -> Vec<Import> {
        vec![
            Import::types("mysql2", ["ResultSetHeader", "RowDataPacket"]),
            Import::named(sibling_module("config", DATABASE_CONFIG), ["pool"]),
        ]
    }

    fn render_storage(&self, b: &mut CodeBuilder, ctx: &ModelContext<'_>) {
        let d = ctx.dialect;
        let table = &ctx.names.plural;
        let rules = ctx.rules;

        if d.is_typed() {
            b.line(&format!(
                "type {} = {} & RowDataPacket;",
                Self::row_type(ctx),
                ctx.types.record
            ));
            b.blank();
        }

        b.block("const CREATE_TABLE_SQL = [", "].join('\\n');", |b| {
            b.line(&format!("'CREATE TABLE IF NOT EXISTS `{table}` (',"));
            b.line("'  id INT AUTO_INCREMENT PRIMARY KEY,',");
            b.line(&format!(
                "'  name VARCHAR({}) NOT NULL,',",
                rules.name_max_length
            ));
            b.line(&format!(
                "'  description VARCHAR({}),',",
                rules.description_max_length
            ));
            b.line(&format!(
                "'  price DECIMAL(10, 2) NOT NULL DEFAULT {0} CHECK (price >= {0}),',",
                rules.price_min
            ));
            b.line("'  created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,',");
            b.line("'  updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP',");
            b.line("')',");
        });
        b.blank();
        b.line("const SELECT_SQL =");
        b.indent();
        b.line(&format!(
            "'SELECT id, name, description, price, created_at AS createdAt, updated_at AS updatedAt FROM `{table}`';"
        ));
        b.dedent();
        b.blank();
        b.line(&format!(
            "let {} = null;",
            d.typed("tableReady", "Promise<unknown> | null")
        ));
        b.blank();
        let sig = FnSig::new("ensureTable").returns("Promise<unknown>");
        b.block(&d.fn_header(&sig), "}", |b| {
            b.block("if (!tableReady) {", "}", |b| {
                b.block(
                    &format!(
                        "tableReady = pool.query(CREATE_TABLE_SQL).catch(({}) => {{",
                        d.typed("err", "unknown")
                    ),
                    "});",
                    |b| {
                        b.line("tableReady = null;");
                        b.line("throw err;");
                    },
                );
            });
            b.line("return tableReady;");
        });
    }

    fn render_operation(&self, b: &mut CodeBuilder, op: Operation, ctx: &ModelContext<'_>) {
        let d = ctx.dialect;
        let table = &ctx.names.plural;
        let rows = d.type_args(&format!("{}[]", Self::row_type(ctx)));
        let header = d.type_args("ResultSetHeader");

        b.line("await ensureTable();");
        match op {
            Operation::GetAll => {
                b.line(&format!(
                    "const [rows] = await pool.query{rows}(SELECT_SQL + ' ORDER BY id');"
                ));
                b.line("return rows;");
            }
            Operation::GetById => {
                b.line(&format!(
                    "const [rows] = await pool.query{rows}(SELECT_SQL + ' WHERE id = ?', [Number(id)]);"
                ));
                b.line("return rows[0] || null;");
            }
            Operation::Create => {
                b.line(&format!("const [result] = await pool.query{header}("));
                b.indent();
                b.line(&format!(
                    "'INSERT INTO `{table}` (name, description, price) VALUES (?, ?, ?)',"
                ));
                b.line("[data.name, data.description ?? null, data.price ?? 0],");
                b.dedent();
                b.line(");");
                b.line("const record = await getById(String(result.insertId));");
                b.block("if (!record) {", "}", |b| {
                    b.line("throw new Error('Failed to load the created record');");
                });
                b.line("return record;");
            }
            Operation::Update => {
                b.line(&format!("const {} = [];", d.typed("assignments", "string[]")));
                b.line(&format!(
                    "const {} = [];",
                    d.typed("values", "Array<string | number>")
                ));
                for column in ["name", "description", "price"] {
                    b.block(&format!("if (data.{column} !== undefined) {{"), "}", |b| {
                        b.line(&format!("assignments.push({});", js_string(&format!("{column} = ?"))));
                        b.line(&format!("values.push(data.{column});"));
                    });
                }
                b.block("if (assignments.length > 0) {", "}", |b| {
                    b.line("values.push(Number(id));");
                    b.line(&format!(
                        "await pool.query('UPDATE `{table}` SET ' + assignments.join(', ') + ' WHERE id = ?', values);"
                    ));
                });
                b.line("return getById(id);");
            }
            Operation::Delete => {
                b.line(&format!(
                    "const [result] = await pool.query{header}('DELETE FROM `{table}` WHERE id = ?', [Number(id)]);"
                ));
                b.line("return result.affectedRows > 0;");
            }
        }
    }

    fn model_uses_config(&self) -> bool {
        true
    }

    fn render_config(&self, dialect: &dyn Dialect, database_name: &str) -> Option<String> {
        let file = ModuleFile::new(dialect)
            .header("MySQL connection pool.")
            .header("")
            .header("Reads DB_HOST, DB_PORT, DB_USER, DB_PASSWORD and DB_NAME from the environment.")
            .import(Import::namespace("mysql", "mysql2/promise"))
            .section(|b| {
                b.block("const pool = mysql.createPool({", "});", |b| {
                    b.line("host: process.env.DB_HOST || 'localhost',");
                    b.line("port: Number(process.env.DB_PORT) || 3306,");
                    b.line("user: process.env.DB_USER || 'root',");
                    b.line("password: process.env.DB_PASSWORD || '',");
                    b.line(&format!(
                        "database: process.env.DB_NAME || {},",
                        js_string(database_name)
                    ));
                    b.line("waitForConnections: true,");
                    b.line("connectionLimit: 10,");
                    b.line("decimalNumbers: true,");
                });
            })
            .section(|b| {
                let sig = FnSig::new("connectDatabase")
                    .async_fn()
                    .returns("Promise<void>");
                b.block(&dialect.fn_header(&sig), "}", |b| {
                    b.line("const connection = await pool.getConnection();");
                    b.line("connection.release();");
                    b.line("console.log('Connected to MySQL');");
                });
            })
            .exports(Exports::names(["pool", "connectDatabase"]));
        Some(file.render())
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::fields::FieldRules;
    use crudgen_manifest::ResourceNames;

    use super::*;
    use crate::{JavaScript, TypeScript};

    fn storage(dialect: &dyn Dialect) -> String {
        let names = ResourceNames::derive("Category").unwrap();
        let ctx = ModelContext::new(&names, FieldRules::DEFAULT, dialect);
        let mut b = CodeBuilder::javascript();
        MysqlAdapter.render_storage(&mut b, &ctx);
        b.build()
    }

    #[test]
    fn test_create_table_statement() {
        let out = storage(&JavaScript);

        assert!(out.contains("'CREATE TABLE IF NOT EXISTS `categorys` (',"));
        assert!(out.contains("'  id INT AUTO_INCREMENT PRIMARY KEY,',"));
        assert!(out.contains("'  name VARCHAR(255) NOT NULL,',"));
        assert!(out.contains("ON UPDATE CURRENT_TIMESTAMP"));
        assert!(out.contains("].join('\\n');"));
        assert!(out.contains("let tableReady = null;"));
        assert!(!out.contains("RowDataPacket"));
    }

    #[test]
    fn test_typed_storage() {
        let out = storage(&TypeScript);

        assert!(out.starts_with("type CategoryRow = Category & RowDataPacket;\n"));
        assert!(out.contains("let tableReady: Promise<unknown> | null = null;"));
        assert!(out.contains("function ensureTable(): Promise<unknown> {"));
        assert!(out.contains(".catch((err: unknown) => {"));
    }

    #[test]
    fn test_queries_are_parameterized() {
        let names = ResourceNames::derive("Category").unwrap();
        let ctx = ModelContext::new(&names, FieldRules::DEFAULT, &JavaScript);
        let mut b = CodeBuilder::javascript();
        for op in Operation::ALL {
            MysqlAdapter.render_operation(&mut b, op, &ctx);
        }
        let out = b.build();

        assert!(out.contains("SELECT_SQL + ' WHERE id = ?', [Number(id)]"));
        assert!(out.contains("[data.name, data.description ?? null, data.price ?? 0]"));
        assert!(out.contains("assignments.push('price = ?');"));
        assert!(out.contains("'DELETE FROM `categorys` WHERE id = ?', [Number(id)]"));
    }

    #[test]
    fn test_config_exports_pool() {
        let config = MysqlAdapter.render_config(&TypeScript, "shop_api").unwrap();
        assert!(config.contains("import * as mysql from 'mysql2/promise';"));
        assert!(config.contains("database: process.env.DB_NAME || 'shop_api',"));
        assert!(config.contains("async function connectDatabase(): Promise<void> {"));
        assert!(config.contains("export {\n  pool,\n  connectDatabase,\n};"));
    }
}
