//! Import declarations, rendered per dialect.

/// What an import binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportKind {
    /// The module's default export (`module.exports` in CommonJS).
    Default(String),
    /// Named bindings.
    Named(Vec<String>),
    /// The whole module under one name.
    Namespace(String),
    /// Type-only bindings; dropped from untyped output.
    Types(Vec<String>),
    /// Evaluated for its side effects only.
    SideEffect,
}

/// An import of one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    kind: ImportKind,
}

impl Import {
    pub fn default_export(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            kind: ImportKind::Default(name.into()),
        }
    }

    pub fn named<I, S>(from: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into(),
            kind: ImportKind::Named(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn namespace(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            kind: ImportKind::Namespace(name.into()),
        }
    }

    pub fn types<I, S>(from: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into(),
            kind: ImportKind::Types(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn side_effect(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            kind: ImportKind::SideEffect,
        }
    }

    pub fn source(&self) -> &str {
        &self.from
    }

    pub fn kind(&self) -> &ImportKind {
        &self.kind
    }
}
