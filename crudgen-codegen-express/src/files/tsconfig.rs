//! tsconfig.json generator for TypeScript projects.

use crudgen_codegen::paths::ProjectLayout;
use crudgen_core::{FileRules, SourceFile};

/// Compiler settings: strict CommonJS output from the source directory into `dist`.
pub struct TsConfig<'a> {
    layout: &'a ProjectLayout,
}

impl<'a> TsConfig<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        Self { layout }
    }
}

impl SourceFile for TsConfig<'_> {
    fn path(&self) -> String {
        "tsconfig.json".to_string()
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let root = match self.layout.src_dir() {
            "" => ".",
            dir => dir,
        };
        format!(
            r#"{{
  "compilerOptions": {{
    "target": "ES2020",
    "module": "commonjs",
    "rootDir": "{root}",
    "outDir": "dist",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true
  }},
  "include": ["{root}"],
  "exclude": ["node_modules", "dist"]
}}
"#
        )
    }
}
