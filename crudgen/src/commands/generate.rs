use clap::Args;
use crudgen_manifest::{DatabaseChoice, Isolation, LanguageVariant};
use eyre::Result;

use super::{CommandContext, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions, Overrides},
    reports::{Report, TerminalOutput},
    runner::{InProcessRunner, ProcessRunner, UnitRunner},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Resource names in PascalCase (e.g. User BlogPost)
    pub names: Vec<String>,

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

    /// Generate every resource inside this process instead of a child process
    #[arg(long)]
    pub in_process: bool,
}

impl GenerateCommand {
    pub fn run(&self, ctx: &CommandContext) -> Result<()> {
        if self.names.is_empty() {
            eprintln!("error: no resource names given");
            eprintln!("usage: crudgen generate <Name>... (e.g. crudgen generate User Product)");
            std::process::exit(1);
        }

        let overrides = Overrides {
            src_dir: self.src_dir.clone(),
            database: self.database,
            language: self.language,
            project_name: None,
            force: self.force,
            dry_run: self.dry_run,
            in_process: self.in_process,
        };
        let options = GenerateOptions::resolve(&self.dir, overrides).unwrap_or_exit();

        let runner: Box<dyn UnitRunner> = match options.isolation {
            Isolation::Process => Box::new(ProcessRunner::current(ctx.verbosity, ctx.policy.mode())?),
            Isolation::InProcess => Box::new(InProcessRunner),
        };

        let mut out = TerminalOutput::new();
        let report = match ops::generate_batch(
            &self.names,
            &options,
            runner.as_ref(),
            &ctx.policy,
            &mut out,
        ) {
            Ok(report) => report,
            Err(rejected) => {
                for err in rejected {
                    eprintln!("{:?}", miette::Report::new(*err));
                }
                eprintln!("error: no resources were generated");
                std::process::exit(1);
            }
        };
        report.render(&mut out);

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
