//! Core utilities and types for the crudgen scaffolding tool.
//!
//! This crate provides the file-writing primitives and string helpers
//! shared by every other crudgen crate.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, SourceFile, WriteResult};
// String utilities
pub use utils::{to_kebab_case, to_pascal_case};
