//! Name validation without generation.

use crudgen_manifest::{ResourceName, ResourceNames};

use crate::reports::CheckReport;

/// Run every name through the validation gate.
pub fn check(names: &[String]) -> CheckReport {
    let mut report = CheckReport::default();
    for name in names {
        match ResourceName::parse(name) {
            Ok(valid) => {
                let derived = ResourceNames::from(&valid);
                report.valid.push((derived.canonical, derived.route_path));
            }
            Err(err) => report
                .errors
                .push(format!("{:?}", miette::Report::new(*err))),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_splits_valid_and_rejected() {
        let names: Vec<String> = ["Category", "user", "Map"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        let report = check(&names);

        assert_eq!(
            report.valid,
            [("Category".to_string(), "/api/categorys".to_string())]
        );
        assert_eq!(report.errors.len(), 2);
        assert!(!report.is_valid());
    }
}
