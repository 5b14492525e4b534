//! Init command report data structures.

use std::path::PathBuf;

use crudgen_codegen::language::GenerateResult;

use super::output::{Output, Report};

/// Report data from scaffolding a project.
#[derive(Debug)]
pub struct InitReport {
    pub project: String,
    pub output_dir: PathBuf,
    pub language: String,
    pub database: String,
    pub result: GenerateResult,
    /// Shell command that starts the development server.
    pub dev_command: String,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Created", &self.project);
        out.key_value("Language", &self.language);
        out.key_value("Database", &self.database);
        for path in &self.result.written {
            out.added_item(path);
        }
        for path in &self.result.skipped {
            out.kept_item(&format!("{path} (exists)"));
        }
        out.newline();

        out.section("Next steps");
        out.list_item(&format!("cd {}", self.output_dir.display()));
        out.list_item("npm install");
        out.list_item("cp .env.example .env");
        out.list_item("crudgen generate <Resource>");
        out.list_item(&self.dev_command);
    }
}
