//! Shared crudgen.toml generator.

use crudgen_core::{FileRules, SourceFile};
use crudgen_manifest::{Isolation, MANIFEST_FILE, Manifest};

/// The crudgen.toml project manifest.
pub struct CrudgenTomlFile<'a> {
    manifest: &'a Manifest,
}

impl<'a> CrudgenTomlFile<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }
}

impl SourceFile for CrudgenTomlFile<'_> {
    fn path(&self) -> String {
        MANIFEST_FILE.to_string()
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let project = &self.manifest.project;
        let generate = &self.manifest.generate;
        let isolation = match generate.isolation {
            Isolation::Process => "process",
            Isolation::InProcess => "in-process",
        };

        format!(
            r#"[project]
name = "{}"
language = "{}"
database = "{}"
src_dir = "{}"

[generate]
# "process" runs each resource in its own child process, "in-process" runs them inline
isolation = "{}"
# Overwrite existing model, service, controller and route files
force = {}
"#,
            project.name,
            project.language,
            project.database,
            project.src_dir,
            isolation,
            generate.force
        )
    }
}

#[cfg(test)]
mod tests {
    use crudgen_core::Overwrite;
    use crudgen_manifest::{DatabaseChoice, LanguageVariant};

    use super::*;

    #[test]
    fn test_rendered_manifest_parses_back() {
        let manifest = Manifest::new("shop-api", LanguageVariant::TypeScript, DatabaseChoice::Relational);
        let file = CrudgenTomlFile::new(&manifest).generate();

        assert_eq!(file.path, "crudgen.toml");
        assert_eq!(file.rules.overwrite, Overwrite::IfMissing);

        let parsed: Manifest = file.content.parse().unwrap();
        assert_eq!(parsed, manifest);
    }
}
