//! ModuleFile abstraction for structured module generation.

use crudgen_codegen::builder::CodeBuilder;

use super::{Exports, Import};
use crate::Dialect;

/// A generated module: header comment, imports, body sections and exports.
///
/// Sections are separated by one blank line. Imports the dialect cannot
/// express (type-only imports in JavaScript) are left out.
pub struct ModuleFile<'d> {
    dialect: &'d dyn Dialect,
    header: Vec<String>,
    imports: Vec<Import>,
    sections: Vec<String>,
    exports: Option<Exports>,
}

impl<'d> ModuleFile<'d> {
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            header: Vec::new(),
            imports: Vec::new(),
            sections: Vec::new(),
            exports: None,
        }
    }

    pub fn dialect(&self) -> &'d dyn Dialect {
        self.dialect
    }

    /// Add a line to the leading doc comment.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body section built with a fresh [`CodeBuilder`].
    pub fn section(mut self, f: impl FnOnce(&mut CodeBuilder)) -> Self {
        let mut builder = CodeBuilder::javascript();
        f(&mut builder);
        self.sections.push(builder.build());
        self
    }

    /// Add a body section only for typed output.
    pub fn typed_section(self, f: impl FnOnce(&mut CodeBuilder)) -> Self {
        if self.dialect.is_typed() {
            self.section(f)
        } else {
            self
        }
    }

    pub fn exports(mut self, exports: Exports) -> Self {
        self.exports = Some(exports);
        self
    }

    pub fn render(&self) -> String {
        let mut parts = Vec::new();

        if !self.header.is_empty() {
            let mut b = CodeBuilder::javascript();
            b.line("/**");
            for line in &self.header {
                if line.is_empty() {
                    b.line(" *");
                } else {
                    b.line(&format!(" * {line}"));
                }
            }
            b.line(" */");
            parts.push(b.build());
        }

        let imports: Vec<String> = self
            .imports
            .iter()
            .filter_map(|import| self.dialect.import(import))
            .collect();
        if !imports.is_empty() {
            let mut b = CodeBuilder::javascript();
            b.lines(imports.iter().map(String::as_str));
            parts.push(b.build());
        }

        parts.extend(self.sections.iter().cloned());

        if let Some(exports) = &self.exports {
            let lines = self.dialect.exports(exports);
            let mut b = CodeBuilder::javascript();
            b.lines(lines.iter().map(String::as_str));
            parts.push(b.build());
        }

        parts.join("\n")
    }
}

/// Quote `s` as a single-quoted JavaScript string literal.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JavaScript, TypeScript};

    fn sample(dialect: &dyn Dialect) -> String {
        ModuleFile::new(dialect)
            .header("Example module.")
            .import(Import::types("express", ["Request"]))
            .import(Import::named("express", ["Router"]))
            .typed_section(|b| {
                b.line("type Id = string;");
            })
            .section(|b| {
                b.line("const router = Router();");
            })
            .exports(Exports::default_export("router"))
            .render()
    }

    #[test]
    fn test_render_javascript() {
        insta::assert_snapshot!(sample(&JavaScript), @r"
        /**
         * Example module.
         */

        const { Router } = require('express');

        const router = Router();

        module.exports = router;
        ");
    }

    #[test]
    fn test_render_typescript() {
        insta::assert_snapshot!(sample(&TypeScript), @r"
        /**
         * Example module.
         */

        import type { Request } from 'express';
        import { Router } from 'express';

        type Id = string;

        const router = Router();

        export default router;
        ");
    }

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("a\\b"), "'a\\\\b'");
    }
}
