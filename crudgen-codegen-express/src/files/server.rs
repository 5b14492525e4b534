//! Server entry point generator.

use crudgen_codegen::paths::{DATABASE_CONFIG, ProjectLayout};
use crudgen_core::{FileRules, SourceFile};

use crate::{
    Dialect,
    ast::{FnSig, Import, ModuleFile},
};

/// `server`: loads `.env`, connects the database when the backend needs one
/// and starts listening.
pub struct ServerFile<'a> {
    layout: &'a ProjectLayout,
    dialect: &'static dyn Dialect,
    connects: bool,
}

impl<'a> ServerFile<'a> {
    pub fn new(layout: &'a ProjectLayout, dialect: &'static dyn Dialect, connects: bool) -> Self {
        Self {
            layout,
            dialect,
            connects,
        }
    }
}

impl SourceFile for ServerFile<'_> {
    fn path(&self) -> String {
        self.layout.source("server")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let d = self.dialect;

        let mut file = ModuleFile::new(d)
            .header("Server entry point.")
            .import(Import::side_effect("dotenv/config"))
            .import(Import::default_export("app", "./app"));
        if self.connects {
            file = file.import(Import::named(
                format!("./config/{DATABASE_CONFIG}"),
                ["connectDatabase"],
            ));
        }

        file = file.section(|b| {
            b.line("const PORT = Number(process.env.PORT) || 3000;");
        });

        if self.connects {
            file = file
                .section(|b| {
                    let sig = FnSig::new("start").async_fn().returns("Promise<void>");
                    b.block(&d.fn_header(&sig), "}", |b| {
                        b.line("await connectDatabase();");
                        b.block("app.listen(PORT, () => {", "});", |b| {
                            b.line("console.log('Server listening on port ' + PORT);");
                        });
                    });
                })
                .section(|b| {
                    b.block(
                        &format!("start().catch(({}) => {{", d.typed("err", "unknown")),
                        "});",
                        |b| {
                            b.line("console.error('Failed to start server:', err);");
                            b.line("process.exit(1);");
                        },
                    );
                });
        } else {
            file = file.section(|b| {
                b.block("app.listen(PORT, () => {", "});", |b| {
                    b.line("console.log('Server listening on port ' + PORT);");
                });
            });
        }

        file.render()
    }
}
