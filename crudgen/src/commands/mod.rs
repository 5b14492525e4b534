mod check;
mod completions;
mod generate;
mod init;
mod resource;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use resource::ResourceCommand;

use crate::policy::{MODE_ENV, MessagePolicy, Mode};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CommandContext {
    pub policy: MessagePolicy,
    pub verbosity: u8,
}

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate CRUD REST boilerplate for Express projects")]
pub(crate) struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Show internal error details (development) or hide them (production)
    #[arg(long, value_enum, env = MODE_ENV, default_value_t = Mode::Development, global = true)]
    mode: Mode,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        let ctx = CommandContext {
            policy: MessagePolicy::new(self.mode),
            verbosity: self.verbose,
        };
        let result = match &self.command {
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Resource(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        };
        result.map_err(|err| ctx.policy.report(err))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more resources, each in its own process
    Generate(GenerateCommand),

    /// Generate a single resource
    Resource(ResourceCommand),

    /// Initialize a new Express project
    Init(InitCommand),

    /// Validate resource names without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
