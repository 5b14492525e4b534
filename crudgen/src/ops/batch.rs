//! The batch driver: validate every name, then generate each as its own unit.

use crudgen_manifest::{Error, validate_resource_name};

use super::{GenerateOptions, GenerationUnit};
use crate::{
    policy::MessagePolicy,
    reports::{BatchReport, Output, UnitOutcome},
    runner::UnitRunner,
};

/// Validate every name before any work starts.
///
/// Returns one diagnostic per rejected name.
pub fn preflight(names: &[String]) -> Vec<Box<Error>> {
    names
        .iter()
        .filter_map(|name| validate_resource_name(name).err())
        .collect()
}

/// Run `units` in order, continuing past failures.
pub fn run_batch(
    units: &[GenerationUnit],
    runner: &dyn UnitRunner,
    policy: &MessagePolicy,
    out: &mut dyn Output,
) -> BatchReport {
    let total = units.len();
    let mut report = BatchReport::default();

    for (index, unit) in units.iter().enumerate() {
        out.preformatted(&format!("[{}/{}] Processing: {}", index + 1, total, unit.name));

        let outcome = match unit.validate() {
            Err(err) => {
                tracing::warn!(resource = %unit.name, error = %err, "skipping resource");
                UnitOutcome::Skipped(err.to_string())
            }
            Ok(_) => match runner.run(unit) {
                Ok(()) => UnitOutcome::Succeeded,
                Err(failure) => {
                    tracing::warn!(resource = %unit.name, error = %failure, "resource failed");
                    UnitOutcome::Failed(policy.message(&failure.to_string()).to_string())
                }
            },
        };
        report.push(unit.name.as_str(), outcome);
    }

    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        skipped = report.skipped(),
        "batch finished"
    );
    report
}

/// Validate `names`, then generate each one.
///
/// If any name is rejected nothing is generated and every diagnostic is returned.
pub fn generate_batch(
    names: &[String],
    options: &GenerateOptions,
    runner: &dyn UnitRunner,
    policy: &MessagePolicy,
    out: &mut dyn Output,
) -> Result<BatchReport, Vec<Box<Error>>> {
    let rejected = preflight(names);
    if !rejected.is_empty() {
        return Err(rejected);
    }

    let units: Vec<GenerationUnit> = names
        .iter()
        .map(|name| GenerationUnit::new(name.as_str(), options.clone()))
        .collect();
    Ok(run_batch(&units, runner, policy, out))
}
