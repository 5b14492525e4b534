//! Batch generation report data structures.

use super::output::{Output, Report};

/// What happened to one resource of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    Succeeded,
    /// Generation ran and failed; the diagnostic has already passed the message policy.
    Failed(String),
    /// The name no longer passed validation when its turn came.
    Skipped(String),
}

/// Outcomes of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(String, UnitOutcome)>,
}

impl BatchReport {
    pub fn push(&mut self, name: impl Into<String>, outcome: UnitOutcome) {
        self.outcomes.push((name.into(), outcome));
    }

    pub fn succeeded(&self) -> usize {
        self.count(|outcome| matches!(outcome, UnitOutcome::Succeeded))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, UnitOutcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, UnitOutcome::Skipped(_)))
    }

    /// Whether every resource was generated.
    pub fn is_success(&self) -> bool {
        self.succeeded() == self.outcomes.len()
    }

    fn count(&self, f: impl Fn(&UnitOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| f(outcome)).count()
    }

    /// One-line summary, e.g. `Summary: 1 succeeded, 1 failed`.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "Summary: {} succeeded, {} failed",
            self.succeeded(),
            self.failed()
        );
        if self.skipped() > 0 {
            line.push_str(&format!(", {} skipped", self.skipped()));
        }
        line
    }
}

impl Report for BatchReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        for (name, outcome) in &self.outcomes {
            match outcome {
                UnitOutcome::Succeeded => {}
                UnitOutcome::Failed(diagnostic) => out.error(&format!("{name}: {diagnostic}")),
                UnitOutcome::Skipped(diagnostic) => {
                    out.warning(&format!("{name} skipped: {diagnostic}"))
                }
            }
        }
        out.preformatted(&self.summary());
    }
}
