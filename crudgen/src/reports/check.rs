//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from validating resource names.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Names that passed, with their route path.
    pub valid: Vec<(String, String)>,
    /// Rendered diagnostics for rejected names.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether every name passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.preformatted(error);
        }
        if !self.errors.is_empty() {
            out.newline();
        }

        for (name, route) in &self.valid {
            out.list_item(&format!("{name} -> {route}"));
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} valid", plural(self.valid.len())));
        } else {
            out.error(&format!(
                "{} of {} rejected",
                self.errors.len(),
                plural(self.errors.len() + self.valid.len())
            ));
        }
    }
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 name".to_string()
    } else {
        format!("{count} names")
    }
}
