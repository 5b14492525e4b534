//! Execution of single-resource units for the batch driver.
//!
//! [`ProcessRunner`] re-invokes the current executable with the `resource`
//! subcommand so a crash in one unit cannot take the batch down with it.
//! [`InProcessRunner`] calls the generator directly.

use std::{
    ffi::OsString,
    io,
    path::PathBuf,
    process::{Command, ExitStatus},
};

use eyre::{Context, Result};
use thiserror::Error;

use crate::{
    ops::{self, GenerationUnit},
    policy::Mode,
    reports::{Report, TerminalOutput},
};

/// Why a unit did not produce its files.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("failed to start generator for {name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("generator for {name} exited with status {code}")]
    Exit { name: String, code: i32 },

    #[error("generator for {name} was terminated by a signal")]
    Signal { name: String },

    #[error("generation of {name} failed: {message}")]
    InProcess { name: String, message: String },
}

/// Runs one unit to completion.
pub trait UnitRunner {
    fn run(&self, unit: &GenerationUnit) -> std::result::Result<(), GenerationFailure>;
}

/// Runs each unit as a child process of the current executable.
#[derive(Debug)]
pub struct ProcessRunner {
    exe: PathBuf,
    verbosity: u8,
    mode: Mode,
}

impl ProcessRunner {
    pub fn new(exe: impl Into<PathBuf>, verbosity: u8, mode: Mode) -> Self {
        Self {
            exe: exe.into(),
            verbosity,
            mode,
        }
    }

    /// A runner that re-invokes the running binary.
    pub fn current(verbosity: u8, mode: Mode) -> Result<Self> {
        let exe = std::env::current_exe().wrap_err("failed to locate the crudgen executable")?;
        Ok(Self::new(exe, verbosity, mode))
    }

    /// The command line a unit is run with, minus the executable.
    pub fn args(&self, unit: &GenerationUnit) -> Vec<OsString> {
        let options = &unit.options;
        let mut args: Vec<OsString> = vec!["--mode".into(), self.mode.as_str().into()];
        if self.verbosity > 0 {
            args.push(format!("-{}", "v".repeat(usize::from(self.verbosity))).into());
        }
        args.extend([
            "resource".into(),
            unit.name.as_str().into(),
            "--dir".into(),
            options.root.clone().into_os_string(),
            "--src-dir".into(),
            options.src_dir.as_str().into(),
            "--database".into(),
            options.database.as_str().into(),
            "--language".into(),
            options.language.as_str().into(),
        ]);
        if let Some(project) = &options.project_name {
            args.push("--project-name".into());
            args.push(project.as_str().into());
        }
        if options.force {
            args.push("--force".into());
        }
        if options.dry_run {
            args.push("--dry-run".into());
        }
        args
    }
}

impl UnitRunner for ProcessRunner {
    fn run(&self, unit: &GenerationUnit) -> std::result::Result<(), GenerationFailure> {
        tracing::debug!(exe = %self.exe.display(), resource = %unit.name, "spawning unit");
        let status = Command::new(&self.exe)
            .args(self.args(unit))
            .status()
            .map_err(|source| GenerationFailure::Spawn {
                name: unit.name.clone(),
                source,
            })?;
        check_status(&unit.name, status)
    }
}

fn check_status(name: &str, status: ExitStatus) -> std::result::Result<(), GenerationFailure> {
    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(GenerationFailure::Exit {
            name: name.to_string(),
            code,
        }),
        None => Err(GenerationFailure::Signal {
            name: name.to_string(),
        }),
    }
}

/// Runs each unit by calling the generator in this process.
#[derive(Debug, Default)]
pub struct InProcessRunner;

impl UnitRunner for InProcessRunner {
    fn run(&self, unit: &GenerationUnit) -> std::result::Result<(), GenerationFailure> {
        let failure = |message: String| GenerationFailure::InProcess {
            name: unit.name.clone(),
            message,
        };
        let spec = unit.validate().map_err(|err| failure(err.to_string()))?;
        let report =
            ops::generate_resource(spec, &unit.options).map_err(|err| failure(format!("{err:#}")))?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::{DatabaseChoice, Isolation, LanguageVariant};

    use super::*;
    use crate::ops::GenerateOptions;

    fn unit() -> GenerationUnit {
        GenerationUnit::new(
            "Book",
            GenerateOptions {
                root: PathBuf::from("/work/shop"),
                src_dir: "src".to_string(),
                database: DatabaseChoice::Relational,
                language: LanguageVariant::TypeScript,
                project_name: Some("shop".to_string()),
                force: true,
                dry_run: false,
                isolation: Isolation::Process,
            },
        )
    }

    #[test]
    fn test_args_forward_resolved_options() {
        let runner = ProcessRunner::new("crudgen", 2, Mode::Production);
        let args: Vec<String> = runner
            .args(&unit())
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            args,
            [
                "--mode",
                "production",
                "-vv",
                "resource",
                "Book",
                "--dir",
                "/work/shop",
                "--src-dir",
                "src",
                "--database",
                "relational",
                "--language",
                "typescript",
                "--project-name",
                "shop",
                "--force",
            ]
        );
    }

    #[test]
    fn test_args_without_verbosity() {
        let runner = ProcessRunner::new("crudgen", 0, Mode::Development);
        let args = runner.args(&unit());
        assert_eq!(args[2], OsString::from("resource"));
    }

    #[test]
    fn test_spawn_failure() {
        let runner = ProcessRunner::new("/nonexistent/crudgen-binary", 0, Mode::Development);
        let err = runner.run(&unit()).unwrap_err();
        assert!(matches!(err, GenerationFailure::Spawn { .. }));
        assert!(err.to_string().starts_with("failed to start generator for Book"));
    }

    #[test]
    fn test_failure_messages() {
        let exit = GenerationFailure::Exit {
            name: "Book".to_string(),
            code: 1,
        };
        assert_eq!(exit.to_string(), "generator for Book exited with status 1");

        let signal = GenerationFailure::Signal {
            name: "Car".to_string(),
        };
        assert_eq!(signal.to_string(), "generator for Car was terminated by a signal");
    }
}
