use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest and validation operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of a `crudgen.toml`, used to attach spans to errors.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config error pointing at `span` when known.
    pub fn config_error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Find the span of the string value assigned to `key`.
    ///
    /// Matches `key = "value"` and `key = 'value'`; returns `None` rather than
    /// guessing when neither form is present.
    pub fn find_value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        for quote in ['"', '\''] {
            let pattern = format!("{key} = {quote}{value}{quote}");
            if let Some(pos) = self.src.find(&pattern) {
                let start = pos + key.len() + 4;
                return Some(SourceSpan::from((start, value.len())));
            }
        }
        None
    }
}

/// Kind of name being validated, used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Resource,
    Project,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Resource => write!(f, "resource"),
            NameKind::Project => write!(f, "project"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(crudgen::io),
        help("run 'crudgen init <name>' to create a new project")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse crudgen.toml")]
    #[diagnostic(code(crudgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(crudgen::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {kind} name '{name}': {reason}")]
    #[diagnostic(code(crudgen::invalid_name))]
    InvalidName {
        name: String,
        kind: NameKind,
        reason: String,
        #[help]
        help: Option<String>,
    },

    #[error("unsafe path '{path}': {reason}")]
    #[diagnostic(
        code(crudgen::path_traversal),
        help("use a relative path inside the project directory, without '..' or '~'")
    )]
    PathTraversal { path: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_name(
        name: &str,
        kind: NameKind,
        reason: impl Into<String>,
        help: Option<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.to_string(),
            kind,
            reason: reason.into(),
            help,
        })
    }

    pub(crate) fn path_traversal(path: &str, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::PathTraversal {
            path: path.to_string(),
            reason: reason.into(),
        })
    }

    /// Whether this error came from the validation gate.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidName { .. } | Error::PathTraversal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span_double_quotes() {
        let ctx = SourceContext::new("[project]\nname = \"shop\"\n", "crudgen.toml");
        let span = ctx.find_value_span("name", "shop").unwrap();

        assert_eq!(span.offset(), 18);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_value_span_single_quotes() {
        let ctx = SourceContext::new("src_dir = '../out'", "crudgen.toml");
        let span = ctx.find_value_span("src_dir", "../out").unwrap();

        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_value_span_missing() {
        let ctx = SourceContext::new("name=\"shop\"", "crudgen.toml");
        assert!(ctx.find_value_span("name", "shop").is_none());
    }

    #[test]
    fn test_invalid_name_display() {
        let err = Error::invalid_name("user", NameKind::Resource, "must start with an uppercase letter", None);
        assert_eq!(
            err.to_string(),
            "invalid resource name 'user': must start with an uppercase letter"
        );
        assert!(err.is_validation());
    }
}
