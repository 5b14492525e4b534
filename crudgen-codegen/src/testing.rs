//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};

/// Error from syntax checking.
#[derive(Debug)]
pub struct CheckError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CheckError {}

/// Trait for verifying generated code parses or type-checks.
pub trait SyntaxChecker {
    /// Check the generated file at `file`, relative to `dir`.
    fn check(&self, dir: &Path, file: &str) -> Result<(), CheckError>;
}

/// JavaScript syntax checker using `node --check`.
pub struct NodeChecker;

impl SyntaxChecker for NodeChecker {
    fn check(&self, dir: &Path, file: &str) -> Result<(), CheckError> {
        run_checker(Command::new("node").args(["--check", file]).current_dir(dir), "node --check")
    }
}

/// TypeScript syntax checker using `tsc --noEmit` with module resolution off.
pub struct TypeScriptChecker;

impl SyntaxChecker for TypeScriptChecker {
    fn check(&self, dir: &Path, file: &str) -> Result<(), CheckError> {
        run_checker(
            Command::new("npx")
                .args(["tsc", "--noEmit", "--noResolve", "--skipLibCheck", file])
                .current_dir(dir),
            "tsc --noEmit",
        )
    }
}

fn run_checker(command: &mut Command, name: &str) -> Result<(), CheckError> {
    let output = command.output().map_err(|e| CheckError {
        message: format!("Failed to run {}: {}", name, e),
        output: String::new(),
    })?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        Err(CheckError {
            message: format!("{} failed", name),
            output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
        })
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Generate into a temporary directory and syntax-check each listed file.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    files: &[String],
    checker: &C,
) -> Result<()>
where
    C: SyntaxChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    for file in files {
        checker
            .check(temp_dir.path(), file)
            .map_err(|e| eyre!("Syntax check of {} failed: {}", file, e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_content_eq_passes_on_equal() {
        assert_content_eq("a\nb\n", "a\nb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }

    #[test]
    fn test_generate_to_temp_runs_closure() {
        let dir = generate_to_temp(|path| {
            std::fs::write(path.join("x.js"), "1;")?;
            Ok(())
        })
        .unwrap();
        assert!(dir.path().join("x.js").exists());
    }
}
