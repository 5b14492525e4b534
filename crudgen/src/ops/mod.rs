//! Core operations.
//!
//! This module contains the business logic for crudgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod batch;
pub mod check;
pub mod init;
pub mod options;
pub mod resource;

pub use batch::generate_batch;
pub use check::check;
pub use init::{InitOptions, init};
pub use options::{GenerateOptions, GenerationUnit, Overrides};
pub use resource::generate_resource;
