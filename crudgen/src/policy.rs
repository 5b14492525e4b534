//! Production and development message handling.
//!
//! Failure diagnostics that may expose internals (I/O errors, child process
//! output) pass through [`MessagePolicy`] before they reach the user.
//! Validation diagnostics describe user input and are always shown verbatim.

use std::fmt;

use clap::ValueEnum;

/// Environment variable selecting the mode.
pub const MODE_ENV: &str = "CRUDGEN_ENV";

/// Replacement text for hidden messages.
pub const GENERIC_MESSAGE: &str = "an internal error occurred";

/// Whether diagnostics are shown in full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides how much of an internal failure is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessagePolicy {
    mode: Mode,
}

impl MessagePolicy {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }

    /// The message to show for an internal failure.
    pub fn message<'a>(&self, detail: &'a str) -> &'a str {
        if self.is_production() {
            GENERIC_MESSAGE
        } else {
            detail
        }
    }

    /// Apply the policy to a top-level error before it is reported.
    pub fn report(&self, err: eyre::Report) -> eyre::Report {
        if self.is_production() {
            tracing::debug!(error = %format!("{err:#}"), "hiding internal error");
            eyre::eyre!(GENERIC_MESSAGE)
        } else {
            err
        }
    }
}
