use std::io::IsTerminal;

use clap::Args;
use crudgen_manifest::{DatabaseChoice, LanguageVariant};
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, InitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project name
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Storage backend for generated models
    #[arg(short, long)]
    pub database: Option<DatabaseChoice>,

    /// Target language for generated code
    #[arg(short, long)]
    pub language: Option<LanguageVariant>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let interactive = std::io::stdin().is_terminal();
        let language = match self.language {
            Some(language) => language,
            None if interactive => Self::prompt_language()?,
            None => LanguageVariant::default(),
        };
        let database = match self.database {
            Some(database) => database,
            None if interactive => Self::prompt_database()?,
            None => DatabaseChoice::default(),
        };

        let cwd = std::env::current_dir().wrap_err("failed to read the current directory")?;
        let options =
            InitOptions::validate(&self.name, self.output.as_deref(), &cwd, language, database)
                .unwrap_or_exit();

        let report = ops::init(options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn prompt_language() -> Result<LanguageVariant> {
        let languages = ["JavaScript", "TypeScript"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a language")
            .items(&languages)
            .default(0)
            .interact()
            .wrap_err("Failed to get language selection")?;

        Ok(LanguageVariant::ALL[selection])
    }

    fn prompt_database() -> Result<DatabaseChoice> {
        let labels: Vec<&str> = DatabaseChoice::ALL.iter().map(|db| db.label()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a database")
            .items(&labels)
            .default(2)
            .interact()
            .wrap_err("Failed to get database selection")?;

        Ok(DatabaseChoice::ALL[selection])
    }
}
