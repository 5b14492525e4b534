//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod batch;
mod check;
mod init;
mod output;
mod resource;

pub use batch::{BatchReport, UnitOutcome};
pub use check::CheckReport;
pub use init::InitReport;
#[cfg(test)]
pub use output::CapturedOutput;
pub use output::{Output, Report, TerminalOutput};
pub use resource::{GenerationOutput, ResourceReport};
