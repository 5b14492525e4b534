//! .gitignore generator for Node projects.

use crudgen_core::{FileRules, SourceFile};

/// The .gitignore file for Node.js projects.
pub struct GitIgnore;

impl SourceFile for GitIgnore {
    fn path(&self) -> String {
        ".gitignore".to_string()
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"# Dependencies
node_modules/

# Build output
dist/

# Environment
.env
.env.local
.env.*.local

# IDE
.idea/
.vscode/
*.swp

# OS
.DS_Store
Thumbs.db

# Logs
*.log
npm-debug.log*

# Test coverage
coverage/
"#
        .to_string()
    }
}
