//! Generation of a single resource.

use crudgen_codegen::language::LanguageCodegen;
use crudgen_codegen_express::ResourceGenerator;
use crudgen_manifest::ResourceSpec;
use eyre::{Context, Result};

use super::GenerateOptions;
use crate::reports::{GenerationOutput, ResourceReport};

/// Render the files of `spec` and write them under the project root, or
/// preview them when `dry_run` is set.
pub fn generate_resource(spec: ResourceSpec, options: &GenerateOptions) -> Result<ResourceReport> {
    let resource = spec.name().to_string();
    let mut generator = ResourceGenerator::new(spec, options.src_dir.clone()).with_force(options.force);
    if let Some(project) = &options.project_name {
        generator = generator.with_project_name(project.clone());
    }

    let output = if options.dry_run {
        GenerationOutput::Preview(generator.preview())
    } else {
        let result = generator
            .generate(&options.root)
            .wrap_err_with(|| format!("failed to generate {resource}"))?;
        tracing::info!(
            resource = %resource,
            written = result.written.len(),
            skipped = result.skipped.len(),
            "generated resource"
        );
        GenerationOutput::Written(result)
    };

    Ok(ResourceReport {
        app_path: generator.app_path(),
        mount_snippet: generator.mount_snippet(),
        resource,
        output,
    })
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::{DatabaseChoice, Isolation, LanguageVariant};
    use tempfile::TempDir;

    use super::*;

    fn options(temp: &TempDir, dry_run: bool) -> GenerateOptions {
        GenerateOptions {
            root: temp.path().to_path_buf(),
            src_dir: "src".to_string(),
            database: DatabaseChoice::InMemory,
            language: LanguageVariant::JavaScript,
            project_name: None,
            force: false,
            dry_run,
            isolation: Isolation::InProcess,
        }
    }

    fn spec() -> ResourceSpec {
        ResourceSpec::parse("User", DatabaseChoice::InMemory, LanguageVariant::JavaScript).unwrap()
    }

    #[test]
    fn test_writes_resource_files() {
        let temp = TempDir::new().unwrap();
        let report = generate_resource(spec(), &options(&temp, false)).unwrap();

        let GenerationOutput::Written(result) = report.output else {
            panic!("expected written output");
        };
        assert_eq!(result.written.len(), 5);
        assert!(temp.path().join("src/routes/userRoutes.js").is_file());
        assert_eq!(report.app_path, "src/app.js");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = generate_resource(spec(), &options(&temp, true)).unwrap();

        let GenerationOutput::Preview(files) = report.output else {
            panic!("expected preview output");
        };
        assert_eq!(files.len(), 5);
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
