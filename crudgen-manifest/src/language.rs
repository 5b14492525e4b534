use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which flavor of JavaScript the generated files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    /// Plain JavaScript with CommonJS modules.
    #[default]
    #[serde(alias = "js", alias = "dynamic")]
    JavaScript,
    /// TypeScript with ES module syntax and explicit type annotations.
    #[serde(alias = "ts", alias = "static", alias = "statically-typed")]
    TypeScript,
}

impl LanguageVariant {
    pub const ALL: [LanguageVariant; 2] = [LanguageVariant::JavaScript, LanguageVariant::TypeScript];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageVariant::JavaScript => "javascript",
            LanguageVariant::TypeScript => "typescript",
        }
    }

    /// Whether generated code carries static type annotations.
    pub fn is_typed(&self) -> bool {
        matches!(self, LanguageVariant::TypeScript)
    }

    /// Source file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            LanguageVariant::JavaScript => "js",
            LanguageVariant::TypeScript => "ts",
        }
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" | "dynamic" => Ok(LanguageVariant::JavaScript),
            "typescript" | "ts" | "static" | "statically-typed" => Ok(LanguageVariant::TypeScript),
            other => Err(format!(
                "unknown language '{other}', expected 'javascript' or 'typescript'"
            )),
        }
    }
}
