//! Integration tests for overwrite rules when generating into an existing project.

use std::fs;

use crudgen_codegen_express::{LanguageCodegen, ProjectGenerator, ResourceGenerator};
use crudgen_manifest::{DatabaseChoice, LanguageVariant, Manifest, ResourceSpec};
use tempfile::TempDir;

fn user_generator(force: bool) -> ResourceGenerator {
    let spec = ResourceSpec::parse("User", DatabaseChoice::Relational, LanguageVariant::JavaScript)
        .expect("valid resource name");
    ResourceGenerator::new(spec, "src").with_force(force)
}

#[test]
fn test_existing_resource_files_are_kept() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let model = temp_dir.path().join("src/models/User.js");
    fs::create_dir_all(model.parent().unwrap()).unwrap();
    fs::write(&model, "// edited by hand\n").unwrap();

    let result = user_generator(false).generate(temp_dir.path()).unwrap();

    assert_eq!(fs::read_to_string(&model).unwrap(), "// edited by hand\n");
    assert!(result.skipped.contains(&"src/models/User.js".to_string()));
    assert!(result.written.contains(&"src/routes/userRoutes.js".to_string()));
    assert!(temp_dir.path().join("src/config/database.js").exists());
}

#[test]
fn test_force_overwrites_resource_files_but_not_shared_ones() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    user_generator(false).generate(root).unwrap();

    let model = root.join("src/models/User.js");
    let middleware = root.join("src/middleware/errorHandler.js");
    fs::write(&model, "// stale\n").unwrap();
    fs::write(&middleware, "// customized\n").unwrap();

    let result = user_generator(true).generate(root).unwrap();

    assert!(fs::read_to_string(&model).unwrap().contains("async function getAll()"));
    assert_eq!(fs::read_to_string(&middleware).unwrap(), "// customized\n");
    assert_eq!(
        result.skipped,
        vec![
            "src/middleware/errorHandler.js".to_string(),
            "src/config/database.js".to_string()
        ]
    );
}

#[test]
fn test_second_run_skips_everything() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    user_generator(false).generate(temp_dir.path()).unwrap();

    let result = user_generator(false).generate(temp_dir.path()).unwrap();

    assert!(result.written.is_empty());
    assert_eq!(result.skipped.len(), 6);
}

#[test]
fn test_init_preserves_existing_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let existing = "[project]\nname = \"mine\"\nlanguage = \"javascript\"\ndatabase = \"in-memory\"\n";
    fs::write(temp_dir.path().join("crudgen.toml"), existing).unwrap();

    let manifest = Manifest::new("shop", LanguageVariant::TypeScript, DatabaseChoice::Document);
    let result = ProjectGenerator::new(manifest).generate(temp_dir.path()).unwrap();

    assert_eq!(fs::read_to_string(temp_dir.path().join("crudgen.toml")).unwrap(), existing);
    assert_eq!(result.skipped, vec!["crudgen.toml".to_string()]);
    assert!(temp_dir.path().join("src/server.ts").exists());
    assert!(temp_dir.path().join("tsconfig.json").exists());
}
