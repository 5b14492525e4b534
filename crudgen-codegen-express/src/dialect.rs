//! Syntax differences between the JavaScript and TypeScript output.
//!
//! Templates are written once against [`Dialect`]; module syntax and type
//! annotations are the only things that vary.

use crudgen_manifest::LanguageVariant;

use crate::ast::{Exports, FnSig, Import, ImportKind};

/// Language-specific rendering of module syntax and annotations.
pub trait Dialect: Send + Sync {
    fn language(&self) -> LanguageVariant;

    fn is_typed(&self) -> bool {
        self.language().is_typed()
    }

    /// Render an import, or `None` when the dialect has no equivalent.
    fn import(&self, import: &Import) -> Option<String>;

    /// Render the export section of a module.
    fn exports(&self, exports: &Exports) -> Vec<String>;

    /// A parameter or binding with its type.
    fn typed(&self, name: &str, ty: &str) -> String;

    /// A return type suffix for a function header.
    fn return_type(&self, ty: &str) -> String;

    /// Assert the type of an expression.
    fn cast(&self, expr: &str, ty: &str) -> String;

    /// Explicit type arguments for a generic call, e.g. `<User[]>`.
    fn type_args(&self, ty: &str) -> String;

    /// Header line of a function declaration, ending in `{`.
    fn fn_header(&self, sig: &FnSig) -> String {
        let params = sig
            .params
            .iter()
            .map(|(name, ty)| self.typed(name, ty))
            .collect::<Vec<_>>()
            .join(", ");
        let returns = sig
            .returns
            .as_deref()
            .map(|ty| self.return_type(ty))
            .unwrap_or_default();
        let prefix = if sig.is_async { "async " } else { "" };
        format!("{prefix}function {}({params}){returns} {{", sig.name)
    }
}

/// CommonJS JavaScript.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScript;

/// TypeScript with ES module syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScript;

/// The dialect for a language variant.
pub fn dialect_for(language: LanguageVariant) -> &'static dyn Dialect {
    match language {
        LanguageVariant::JavaScript => &JavaScript,
        LanguageVariant::TypeScript => &TypeScript,
    }
}

impl Dialect for JavaScript {
    fn language(&self) -> LanguageVariant {
        LanguageVariant::JavaScript
    }

    fn import(&self, import: &Import) -> Option<String> {
        let from = import.source();
        match import.kind() {
            ImportKind::Default(name) | ImportKind::Namespace(name) => {
                Some(format!("const {name} = require('{from}');"))
            }
            ImportKind::Named(names) => {
                Some(format!("const {{ {} }} = require('{from}');", names.join(", ")))
            }
            ImportKind::Types(_) => None,
            ImportKind::SideEffect => Some(format!("require('{from}');")),
        }
    }

    fn exports(&self, exports: &Exports) -> Vec<String> {
        match exports {
            Exports::Default(name) => vec![format!("module.exports = {name};")],
            Exports::Named(names) => {
                let mut lines = vec!["module.exports = {".to_string()];
                lines.extend(names.iter().map(|export| match &export.exported {
                    Some(exported) => format!("  {exported}: {},", export.local),
                    None => format!("  {},", export.local),
                }));
                lines.push("};".to_string());
                lines
            }
        }
    }

    fn typed(&self, name: &str, _ty: &str) -> String {
        name.to_string()
    }

    fn return_type(&self, _ty: &str) -> String {
        String::new()
    }

    fn cast(&self, expr: &str, _ty: &str) -> String {
        expr.to_string()
    }

    fn type_args(&self, _ty: &str) -> String {
        String::new()
    }
}

impl Dialect for TypeScript {
    fn language(&self) -> LanguageVariant {
        LanguageVariant::TypeScript
    }

    fn import(&self, import: &Import) -> Option<String> {
        let from = import.source();
        Some(match import.kind() {
            ImportKind::Default(name) => format!("import {name} from '{from}';"),
            ImportKind::Namespace(name) => format!("import * as {name} from '{from}';"),
            ImportKind::Named(names) => format!("import {{ {} }} from '{from}';", names.join(", ")),
            ImportKind::Types(names) => {
                format!("import type {{ {} }} from '{from}';", names.join(", "))
            }
            ImportKind::SideEffect => format!("import '{from}';"),
        })
    }

    fn exports(&self, exports: &Exports) -> Vec<String> {
        match exports {
            Exports::Default(name) => vec![format!("export default {name};")],
            Exports::Named(names) => {
                let mut lines = vec!["export {".to_string()];
                lines.extend(names.iter().map(|export| match &export.exported {
                    Some(exported) => format!("  {} as {exported},", export.local),
                    None => format!("  {},", export.local),
                }));
                lines.push("};".to_string());
                lines
            }
        }
    }

    fn typed(&self, name: &str, ty: &str) -> String {
        format!("{name}: {ty}")
    }

    fn return_type(&self, ty: &str) -> String {
        format!(": {ty}")
    }

    fn cast(&self, expr: &str, ty: &str) -> String {
        format!("{expr} as {ty}")
    }

    fn type_args(&self, ty: &str) -> String {
        format!("<{ty}>")
    }
}
