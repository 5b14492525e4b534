//! Identifiers used inside generated modules.
//!
//! Module-local bindings are fixed (`model`, `service`, `controller`,
//! `record`, `records`) so no resource name can shadow them.

use crudgen_manifest::ResourceNames;

/// Local binding for the imported model module.
pub const MODEL_BINDING: &str = "model";
/// Local binding for the imported service module.
pub const SERVICE_BINDING: &str = "service";
/// Local binding for the imported controller module.
pub const CONTROLLER_BINDING: &str = "controller";

/// Controller function names for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerNames {
    pub get_all: String,
    pub get_by_id: String,
    pub create: String,
    pub update: String,
    pub delete: String,
}

impl HandlerNames {
    pub fn new(names: &ResourceNames) -> Self {
        let name = &names.canonical;
        Self {
            get_all: format!("getAll{name}s"),
            get_by_id: format!("get{name}ById"),
            create: format!("create{name}"),
            update: format!("update{name}"),
            delete: format!("delete{name}"),
        }
    }

    /// All handler names in route order.
    pub fn all(&self) -> [&str; 5] {
        [
            self.get_all.as_str(),
            self.get_by_id.as_str(),
            self.create.as_str(),
            self.update.as_str(),
            self.delete.as_str(),
        ]
    }
}

/// TypeScript type names for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    /// The stored record, e.g. `User`.
    pub record: String,
    /// Fields accepted on create, e.g. `UserInput`.
    pub input: String,
}

impl TypeNames {
    pub fn new(names: &ResourceNames) -> Self {
        Self {
            record: names.canonical.clone(),
            input: format!("{}Input", names.canonical),
        }
    }
}

/// Relative import path from one source subdirectory to a sibling module.
pub fn sibling_module(dir: &str, stem: &str) -> String {
    format!("../{dir}/{stem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_names() {
        let names = ResourceNames::derive("Category").unwrap();
        let handlers = HandlerNames::new(&names);

        assert_eq!(
            handlers.all(),
            [
                "getAllCategorys",
                "getCategoryById",
                "createCategory",
                "updateCategory",
                "deleteCategory"
            ]
        );
    }

    #[test]
    fn test_type_names() {
        let types = TypeNames::new(&ResourceNames::derive("BlogPost").unwrap());
        assert_eq!(types.record, "BlogPost");
        assert_eq!(types.input, "BlogPostInput");
    }

    #[test]
    fn test_sibling_module() {
        assert_eq!(sibling_module("models", "User"), "../models/User");
    }
}
