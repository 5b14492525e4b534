//! Shared code generation utilities for crudgen.
//!
//! This crate provides the language-agnostic pieces used by the template
//! crates (e.g., `crudgen-codegen-express`).
//!
//! # Module Organization
//!
//! - [`adapters`] - Storage backend abstraction (StorageAdapter, Dependency, EnvVar)
//! - [`builder`] - Code generation building blocks (CodeBuilder)
//! - [`fields`] - Field constraints and seed records shared by every resource
//! - [`generation`] - Files that do not depend on the target language
//! - [`language`] - The LanguageCodegen trait and its results
//! - [`paths`] - Where each template kind lives in a project
//! - [`testing`] - Test utilities (feature-gated)

pub mod adapters;
pub mod builder;
pub mod fields;
pub mod generation;
pub mod language;
pub mod paths;
mod template;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use template::TemplateKind;
