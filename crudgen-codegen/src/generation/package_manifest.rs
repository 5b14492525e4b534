//! npm package manifest model.

use indexmap::IndexMap;
use serde::Serialize;

use crate::adapters::Dependency;

/// The subset of `package.json` crudgen writes, in the order npm prints it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub private: bool,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    pub fn new(name: impl Into<String>, main: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "1.0.0".to_string(),
            description: String::new(),
            main: main.into(),
            private: true,
            scripts: IndexMap::new(),
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_script(mut self, name: &str, command: impl Into<String>) -> Self {
        self.scripts.insert(name.to_string(), command.into());
        self
    }

    /// Add runtime dependencies; later entries win on duplicate names.
    pub fn with_dependencies(mut self, deps: impl IntoIterator<Item = Dependency>) -> Self {
        for dep in deps {
            self.dependencies
                .insert(dep.name.to_string(), dep.version.to_string());
        }
        self
    }

    pub fn with_dev_dependencies(mut self, deps: impl IntoIterator<Item = Dependency>) -> Self {
        for dep in deps {
            self.dev_dependencies
                .insert(dep.name.to_string(), dep.version.to_string());
        }
        self
    }

    /// Render as two-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> String {
        let mut json = serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string());
        json.push('\n');
        json
    }
}
