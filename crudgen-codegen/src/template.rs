use std::fmt;

/// The kinds of file rendered for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Model,
    Service,
    Controller,
    Route,
    Middleware,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Model,
        TemplateKind::Service,
        TemplateKind::Controller,
        TemplateKind::Route,
        TemplateKind::Middleware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Model => "model",
            TemplateKind::Service => "service",
            TemplateKind::Controller => "controller",
            TemplateKind::Route => "route",
            TemplateKind::Middleware => "middleware",
        }
    }

    /// Directory under the source root holding files of this kind.
    pub fn directory(&self) -> &'static str {
        match self {
            TemplateKind::Model => "models",
            TemplateKind::Service => "services",
            TemplateKind::Controller => "controllers",
            TemplateKind::Route => "routes",
            TemplateKind::Middleware => "middleware",
        }
    }

    /// Whether one file of this kind is shared by all resources.
    pub fn is_shared(&self) -> bool {
        matches!(self, TemplateKind::Middleware)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
