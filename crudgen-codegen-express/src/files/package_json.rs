//! package.json generator.

use crudgen_codegen::{
    adapters::Dependency,
    generation::PackageManifest,
    paths::ProjectLayout,
};
use crudgen_core::{FileRules, SourceFile, to_kebab_case};
use crudgen_manifest::LanguageVariant;

use crate::adapters::ModelBackend;

/// Packages every generated project depends on at runtime.
const RUNTIME: [Dependency; 4] = [
    Dependency::new("express", "^4.19.2"),
    Dependency::new("dotenv", "^16.4.5"),
    Dependency::new("jsonwebtoken", "^9.0.2"),
    Dependency::new("bcryptjs", "^2.4.3"),
];

const JAVASCRIPT_DEV: [Dependency; 1] = [Dependency::new("nodemon", "^3.1.4")];

const TYPESCRIPT_DEV: [Dependency; 6] = [
    Dependency::new("typescript", "^5.5.4"),
    Dependency::new("tsx", "^4.16.2"),
    Dependency::new("@types/node", "^20.14.10"),
    Dependency::new("@types/express", "^4.17.21"),
    Dependency::new("@types/jsonwebtoken", "^9.0.6"),
    Dependency::new("@types/bcryptjs", "^2.4.6"),
];

/// The project's `package.json`.
pub struct PackageJson<'a> {
    name: &'a str,
    layout: &'a ProjectLayout,
    language: LanguageVariant,
    storage: &'a dyn ModelBackend,
}

impl<'a> PackageJson<'a> {
    pub fn new(
        name: &'a str,
        layout: &'a ProjectLayout,
        language: LanguageVariant,
        storage: &'a dyn ModelBackend,
    ) -> Self {
        Self {
            name,
            layout,
            language,
            storage,
        }
    }

    fn manifest(&self) -> PackageManifest {
        let server = self.layout.source("server");
        let main = match self.language {
            LanguageVariant::JavaScript => server.clone(),
            LanguageVariant::TypeScript => "dist/server.js".to_string(),
        };
        let manifest = PackageManifest::new(to_kebab_case(self.name), main)
            .with_description(format!(
                "Express REST API ({}, {})",
                self.language,
                self.storage.database().label()
            ))
            .with_dependencies(RUNTIME)
            .with_dependencies(self.storage.dependencies());

        match self.language {
            LanguageVariant::JavaScript => manifest
                .with_script("start", format!("node {server}"))
                .with_script("dev", format!("nodemon {server}"))
                .with_dev_dependencies(JAVASCRIPT_DEV),
            LanguageVariant::TypeScript => manifest
                .with_script("build", "tsc")
                .with_script("start", "node dist/server.js")
                .with_script("dev", format!("tsx watch {server}"))
                .with_dev_dependencies(TYPESCRIPT_DEV),
        }
    }
}

impl SourceFile for PackageJson<'_> {
    fn path(&self) -> String {
        "package.json".to_string()
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        self.manifest().to_json()
    }
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::DatabaseChoice;

    use super::*;
    use crate::backend_for;

    #[test]
    fn test_javascript_in_memory_package() {
        let layout = ProjectLayout::new("src", LanguageVariant::JavaScript);
        let backend = backend_for(DatabaseChoice::InMemory);
        let json = PackageJson::new("ShopApi", &layout, LanguageVariant::JavaScript, backend.as_ref())
            .render();

        insta::assert_snapshot!(json, @r#"
        {
          "name": "shop-api",
          "version": "1.0.0",
          "description": "Express REST API (javascript, In-memory array)",
          "main": "src/server.js",
          "private": true,
          "scripts": {
            "start": "node src/server.js",
            "dev": "nodemon src/server.js"
          },
          "dependencies": {
            "express": "^4.19.2",
            "dotenv": "^16.4.5",
            "jsonwebtoken": "^9.0.2",
            "bcryptjs": "^2.4.3"
          },
          "devDependencies": {
            "nodemon": "^3.1.4"
          }
        }
        "#);
    }

    #[test]
    fn test_typescript_relational_package() {
        let layout = ProjectLayout::new("src", LanguageVariant::TypeScript);
        let backend = backend_for(DatabaseChoice::Relational);
        let json = PackageJson::new("shop", &layout, LanguageVariant::TypeScript, backend.as_ref())
            .render();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["main"], "dist/server.js");
        assert_eq!(value["scripts"]["build"], "tsc");
        assert_eq!(value["scripts"]["dev"], "tsx watch src/server.ts");
        assert_eq!(value["dependencies"]["mysql2"], "^3.11.0");
        assert_eq!(value["devDependencies"]["@types/express"], "^4.17.21");
    }
}
