//! Resource names and the names derived from them.

use std::fmt;

use crate::{
    DatabaseChoice, LanguageVariant, MAX_NAME_LENGTH, Result,
    error::{Error, NameKind},
    validate::{pascal_case_violation, validate_resource_name},
};

/// A resource name that has passed the full validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate `name` and wrap it.
    pub fn parse(name: &str) -> Result<Self> {
        validate_resource_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Every identifier the templates need for one resource.
///
/// Plurals are formed by appending `s` with no irregular forms, so
/// `Category` becomes `categorys`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    /// The PascalCase name as given, e.g. `BlogPost`.
    pub canonical: String,
    /// Fully lower-cased name, e.g. `blogpost`.
    pub lower: String,
    /// `lower` with an `s` appended, e.g. `blogposts`.
    pub plural: String,
    /// Model file stem, e.g. `BlogPost`.
    pub model_stem: String,
    /// Service file stem, e.g. `blogpostService`.
    pub service_stem: String,
    /// Controller file stem, e.g. `blogpostController`.
    pub controller_stem: String,
    /// Routes file stem, e.g. `blogpostRoutes`.
    pub routes_stem: String,
    /// Mount path, e.g. `/api/blogposts`.
    pub route_path: String,
}

impl ResourceNames {
    /// Derive names from a canonical PascalCase name.
    ///
    /// Only the pattern and length are checked here; reserved words are the
    /// validation gate's concern.
    pub fn derive(canonical: &str) -> Result<Self> {
        if let Some(reason) = pascal_case_violation(canonical) {
            return Err(Error::invalid_name(canonical, NameKind::Resource, reason, None));
        }
        if canonical.len() > MAX_NAME_LENGTH {
            return Err(Error::invalid_name(
                canonical,
                NameKind::Resource,
                format!("name must be at most {MAX_NAME_LENGTH} characters"),
                None,
            ));
        }
        Ok(Self::from_valid(canonical))
    }

    fn from_valid(canonical: &str) -> Self {
        let lower = canonical.to_lowercase();
        let plural = format!("{lower}s");
        Self {
            canonical: canonical.to_string(),
            model_stem: canonical.to_string(),
            service_stem: format!("{lower}Service"),
            controller_stem: format!("{lower}Controller"),
            routes_stem: format!("{lower}Routes"),
            route_path: format!("/api/{plural}"),
            lower,
            plural,
        }
    }
}

impl From<&ResourceName> for ResourceNames {
    fn from(name: &ResourceName) -> Self {
        Self::from_valid(name.as_str())
    }
}

/// The unit of generation: one validated resource plus its target choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    name: ResourceName,
    names: ResourceNames,
    database: DatabaseChoice,
    language: LanguageVariant,
}

impl ResourceSpec {
    pub fn new(name: ResourceName, database: DatabaseChoice, language: LanguageVariant) -> Self {
        let names = ResourceNames::from(&name);
        Self {
            name,
            names,
            database,
            language,
        }
    }

    /// Validate `name` and build a spec from it.
    pub fn parse(name: &str, database: DatabaseChoice, language: LanguageVariant) -> Result<Self> {
        Ok(Self::new(ResourceName::parse(name)?, database, language))
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn names(&self) -> &ResourceNames {
        &self.names
    }

    pub fn database(&self) -> DatabaseChoice {
        self.database
    }

    pub fn language(&self) -> LanguageVariant {
        self.language
    }
}
