use clap::Args;
use crudgen_manifest::{DatabaseChoice, LanguageVariant};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, GenerationUnit, Overrides},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ResourceCommand {
    /// Resource name in PascalCase (e.g. User)
    pub name: String,

    /// Project root containing crudgen.toml
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Source directory relative to the project root (overrides crudgen.toml)
    #[arg(long)]
    pub src_dir: Option<String>,

    /// Storage backend (overrides crudgen.toml)
    #[arg(short, long)]
    pub database: Option<DatabaseChoice>,

    /// Target language (overrides crudgen.toml)
    #[arg(short, long)]
    pub language: Option<LanguageVariant>,

    /// Overwrite existing model, service, controller and route files
    #[arg(long)]
    pub force: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Project name used for the default database name
    #[arg(long, hide = true)]
    pub project_name: Option<String>,
}

impl ResourceCommand {
    pub fn run(&self) -> Result<()> {
        let overrides = Overrides {
            src_dir: self.src_dir.clone(),
            database: self.database,
            language: self.language,
            project_name: self.project_name.clone(),
            force: self.force,
            dry_run: self.dry_run,
            in_process: false,
        };
        let options = GenerateOptions::resolve(&self.dir, overrides).unwrap_or_exit();
        let spec = GenerationUnit::new(self.name.as_str(), options.clone())
            .validate()
            .unwrap_or_exit();

        let report = ops::generate_resource(spec, &options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
