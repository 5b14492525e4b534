//! The validation gate.
//!
//! Every name and path supplied by the user passes through here before any
//! template is rendered or any file is written.

use std::path::{Component, Path, PathBuf};

use crudgen_core::to_pascal_case;

use crate::{
    Result,
    error::{Error, NameKind},
};

/// Maximum length of a resource or project name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a user-supplied path.
pub const MAX_PATH_LENGTH: usize = 500;

/// Identifier sets that generated code cannot use.
#[derive(Debug, Clone, Copy)]
pub struct ReservedNames {
    /// Language keywords, compared against the lower-cased name.
    pub keywords: &'static [&'static str],
    /// Runtime and framework globals, compared against the name as written.
    pub globals: &'static [&'static str],
    /// File names that a project directory must not shadow, compared case-insensitively.
    pub tooling: &'static [&'static str],
}

impl ReservedNames {
    /// Reserved names for JavaScript and TypeScript output on Node.
    pub const NODE: ReservedNames = ReservedNames {
        keywords: &[
            // ECMAScript keywords and strict-mode reserved words
            "await", "break", "case", "catch", "class", "const", "continue", "debugger",
            "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally",
            "for", "function", "if", "implements", "import", "in", "instanceof", "interface",
            "let", "new", "null", "package", "private", "protected", "public", "return",
            "static", "super", "switch", "this", "throw", "true", "try", "typeof", "var",
            "void", "while", "with", "yield", "async", "arguments", "eval", "undefined", "nan",
            "infinity",
            // TypeScript contextual keywords
            "abstract", "any", "as", "boolean", "declare", "is", "keyof", "module", "namespace",
            "never", "number", "readonly", "string", "symbol", "type", "unknown",
            // CommonJS module scope
            "require", "exports",
        ],
        globals: &[
            "Object", "Array", "String", "Number", "Boolean", "Function", "Symbol", "BigInt",
            "Error", "TypeError", "RangeError", "SyntaxError", "ReferenceError", "EvalError",
            "URIError", "AggregateError", "Date", "RegExp", "Promise", "Proxy", "Reflect", "Map",
            "Set", "WeakMap", "WeakSet", "WeakRef", "JSON", "Math", "Intl", "Atomics",
            "ArrayBuffer", "SharedArrayBuffer", "DataView", "Buffer", "Process", "Global",
            "GlobalThis", "Console", "URL", "URLSearchParams", "TextEncoder", "TextDecoder",
            "AbortController", "Request", "Response", "Headers", "Blob", "Document", "Record",
            "Partial", "Required", "Readonly", "Pick", "Omit", "Exclude", "Extract", "Awaited",
            "Router", "Schema", "NextFunction", "ValidationError", "NotFoundError", "HttpError",
            "Model", "RowDataPacket", "ResultSetHeader",
        ],
        tooling: &[
            "node_modules",
            ".git",
            ".env",
            ".gitignore",
            ".npmrc",
            "package.json",
            "package-lock.json",
            "yarn.lock",
            "pnpm-lock.yaml",
            "tsconfig.json",
            "crudgen.toml",
            "dist",
        ],
    };

    /// Whether a resource name collides with a keyword or global.
    pub fn is_reserved_identifier(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.globals.contains(&name) || self.keywords.contains(&lower.as_str())
    }

    /// Whether a project name collides with a tooling file name.
    pub fn is_reserved_tooling(&self, name: &str) -> bool {
        self.tooling
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
    }

    /// Validate a resource name against this reserved set.
    pub fn validate_resource_name(&self, name: &str) -> Result<()> {
        check_length(name, NameKind::Resource)?;

        if has_traversal(name) {
            return Err(Error::invalid_name(
                name,
                NameKind::Resource,
                "name must not contain path separators or '..'",
                None,
            ));
        }

        if let Some(reason) = pascal_case_violation(name) {
            return Err(Error::invalid_name(
                name,
                NameKind::Resource,
                reason,
                pascal_suggestion(name),
            ));
        }

        if self.is_reserved_identifier(name) {
            return Err(Error::invalid_name(
                name,
                NameKind::Resource,
                "name is a reserved identifier in generated code",
                Some(format!("try a more specific name, e.g. '{name}Item'")),
            ));
        }

        Ok(())
    }

    /// Validate a project (directory) name against this reserved set.
    pub fn validate_project_name(&self, name: &str) -> Result<()> {
        check_length(name, NameKind::Project)?;

        if has_traversal(name) {
            return Err(Error::invalid_name(
                name,
                NameKind::Project,
                "name must not contain path separators or '..'",
                None,
            ));
        }

        if name.starts_with('.') {
            return Err(Error::invalid_name(
                name,
                NameKind::Project,
                "name must not begin with a dot",
                None,
            ));
        }

        if self.is_reserved_tooling(name) {
            return Err(Error::invalid_name(
                name,
                NameKind::Project,
                "name collides with a reserved tooling file",
                None,
            ));
        }

        let mut chars = name.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter {
            return Err(Error::invalid_name(
                name,
                NameKind::Project,
                "name must start with a letter",
                None,
            ));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(Error::invalid_name(
                name,
                NameKind::Project,
                "name may only contain letters, digits, '-' and '_'",
                None,
            ));
        }

        Ok(())
    }
}

/// Validate a resource name with the default reserved set.
///
/// Accepts names matching `^[A-Z][a-zA-Z0-9]*$` of 1 to [`MAX_NAME_LENGTH`]
/// characters that are not reserved identifiers.
pub fn validate_resource_name(name: &str) -> Result<()> {
    ReservedNames::NODE.validate_resource_name(name)
}

/// Validate a project name with the default reserved set.
pub fn validate_project_name(name: &str) -> Result<()> {
    ReservedNames::NODE.validate_project_name(name)
}

/// Normalize a user-supplied path and reject anything that could escape it.
///
/// Returns the normalized path on success.
pub fn validate_path(path: &str) -> Result<PathBuf> {
    if path.is_empty() {
        return Err(Error::path_traversal(path, "path cannot be empty"));
    }
    if path.chars().count() > MAX_PATH_LENGTH {
        return Err(Error::path_traversal(
            path,
            format!("path exceeds {MAX_PATH_LENGTH} characters"),
        ));
    }
    if path.contains('\0') {
        return Err(Error::path_traversal(path, "path contains a NUL byte"));
    }
    if path.starts_with('~') {
        return Err(Error::path_traversal(
            path,
            "home directory shortcuts are not allowed",
        ));
    }

    let normalized = normalize_path(Path::new(path));
    if normalized
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(Error::path_traversal(
            path,
            "path escapes its starting directory",
        ));
    }

    Ok(normalized)
}

/// Check that `target` resolves to a location inside `root`.
///
/// Both paths are made absolute, normalized, and have their longest existing
/// prefix canonicalized, so targets that do not exist yet can be checked.
pub fn is_path_in_project(target: &Path, root: &Path) -> bool {
    match (resolve_path(target), resolve_path(root)) {
        (Ok(target), Ok(root)) => target.starts_with(&root),
        _ => false,
    }
}

/// Lexically normalize a path: drop `.` and fold `name/..` pairs.
///
/// Leading `..` components of relative paths are kept; `..` directly under
/// the root is dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Resolve a path to its absolute form.
///
/// Relative paths are joined onto the current directory. The longest existing
/// ancestor is canonicalized (resolving symlinks) and the remaining components
/// are appended unchanged.
pub fn resolve_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    let normalized = normalize_path(&absolute);

    let mut existing = normalized.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing
        .canonicalize()
        .unwrap_or_else(|_| existing.to_path_buf());
    for name in missing.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

fn check_length(name: &str, kind: NameKind) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, kind, "name cannot be empty", None));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(Error::invalid_name(
            name,
            kind,
            format!("name must be at most {MAX_NAME_LENGTH} characters"),
            None,
        ));
    }
    Ok(())
}

fn has_traversal(name: &str) -> bool {
    name.contains("..") || name.contains('/') || name.contains('\\')
}

/// Returns a reason if `name` does not match `^[A-Z][a-zA-Z0-9]*$`.
pub(crate) fn pascal_case_violation(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if !c.is_ascii_uppercase() => {
            return Some("name must start with an uppercase letter (A-Z)");
        }
        _ => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Some("name may only contain ASCII letters and digits");
    }
    None
}

fn pascal_suggestion(name: &str) -> Option<String> {
    let suggestion = to_pascal_case(name);
    if suggestion != name && pascal_case_violation(&suggestion).is_none() {
        Some(format!("resource names are PascalCase, did you mean '{suggestion}'?"))
    } else {
        Some("resource names are PascalCase, e.g. 'User' or 'BlogPost'".to_string())
    }
}
