//! Password hashing helper generator.

use crudgen_codegen::paths::ProjectLayout;
use crudgen_core::{FileRules, SourceFile};

use crate::{
    Dialect,
    ast::{Exports, FnSig, Import, ModuleFile},
};

/// `utils/password`: bcrypt hash and verify.
pub struct PasswordFile<'a> {
    layout: &'a ProjectLayout,
    dialect: &'static dyn Dialect,
}

impl<'a> PasswordFile<'a> {
    pub fn new(layout: &'a ProjectLayout, dialect: &'static dyn Dialect) -> Self {
        Self { layout, dialect }
    }
}

impl SourceFile for PasswordFile<'_> {
    fn path(&self) -> String {
        self.layout.nested("utils", "password")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let d = self.dialect;

        ModuleFile::new(d)
            .header("Password hashing with bcrypt.")
            .import(Import::default_export("bcrypt", "bcryptjs"))
            .section(|b| {
                b.line("const SALT_ROUNDS = 10;");
            })
            .section(|b| {
                let sig = FnSig::new("hashPassword")
                    .async_fn()
                    .param("password", "string")
                    .returns("Promise<string>");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("return bcrypt.hash(password, SALT_ROUNDS);");
                });
            })
            .section(|b| {
                let sig = FnSig::new("verifyPassword")
                    .async_fn()
                    .param("password", "string")
                    .param("hash", "string")
                    .returns("Promise<boolean>");
                b.block(&d.fn_header(&sig), "}", |b| {
                    b.line("return bcrypt.compare(password, hash);");
                });
            })
            .exports(Exports::names(["hashPassword", "verifyPassword"]))
            .render()
    }
}
