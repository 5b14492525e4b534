//! Adapter abstractions for storage-specific code generation.
//!
//! A [`StorageAdapter`] describes what a backend needs from the project
//! around it: packages, environment variables and the shape of record ids.
//! Template crates extend it with the code each backend renders.

mod storage;

pub use storage::{Dependency, EnvVar, IdKind, StorageAdapter};
