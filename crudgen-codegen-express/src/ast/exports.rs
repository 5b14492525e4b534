//! Export sections.

/// One exported binding, optionally under a different public name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportName {
    pub local: String,
    pub exported: Option<String>,
}

impl ExportName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            exported: None,
        }
    }

    /// Export `local` as `exported`, e.g. `remove` as `delete`.
    pub fn aliased(local: impl Into<String>, exported: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            exported: Some(exported.into()),
        }
    }
}

/// The export section of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exports {
    Named(Vec<ExportName>),
    Default(String),
}

impl Exports {
    /// Export every name as-is.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Named(names.into_iter().map(ExportName::new).collect())
    }

    pub fn default_export(name: impl Into<String>) -> Self {
        Self::Default(name.into())
    }
}
