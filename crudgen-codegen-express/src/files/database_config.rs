//! Database connection module generator.

use crudgen_codegen::paths::ProjectLayout;
use crudgen_core::{FileRules, SourceFile};

use crate::{Dialect, adapters::ModelBackend};

/// `config/database`: the connection code of a backend that needs one.
pub struct DatabaseConfigFile {
    path: String,
    content: String,
}

impl DatabaseConfigFile {
    /// Render the module, or `None` when the backend keeps no connection.
    pub fn for_backend(
        layout: &ProjectLayout,
        backend: &dyn ModelBackend,
        dialect: &dyn Dialect,
        database_name: &str,
    ) -> Option<Self> {
        let content = backend.render_config(dialect, database_name)?;
        Some(Self {
            path: layout.database_config(),
            content,
        })
    }
}

impl SourceFile for DatabaseConfigFile {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
