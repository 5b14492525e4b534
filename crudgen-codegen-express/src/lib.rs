//! Express code generator for crudgen.
//!
//! This crate renders CRUD boilerplate for [Express](https://expressjs.com/)
//! applications, in plain JavaScript (CommonJS) or TypeScript, over three
//! storage backends: MongoDB through mongoose, MySQL through mysql2, and an
//! in-memory array.
//!
//! # Usage
//!
//! ```ignore
//! use crudgen_codegen_express::ResourceGenerator;
//! use crudgen_codegen::language::LanguageCodegen;
//! use crudgen_manifest::{DatabaseChoice, LanguageVariant, ResourceSpec};
//!
//! let spec = ResourceSpec::parse("User", DatabaseChoice::InMemory, LanguageVariant::JavaScript)?;
//! let generator = ResourceGenerator::new(spec, "src");
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! For a resource `User` with the default source directory:
//!
//! - `src/models/User.js` - Data access for the chosen backend
//! - `src/services/userService.js` - Validation and not-found handling
//! - `src/controllers/userController.js` - HTTP handlers and response envelopes
//! - `src/routes/userRoutes.js` - The five REST routes
//! - `src/middleware/errorHandler.js` - Shared 404 and error middleware
//!
//! [`ProjectGenerator`] writes the surrounding project: `package.json`,
//! `app`, `server`, auth and password helpers, and `crudgen.toml`.

mod dialect;
mod generator;
mod naming;

pub mod adapters;
pub mod ast;
pub mod files;

pub use adapters::{MemoryAdapter, ModelBackend, MongooseAdapter, MysqlAdapter, backend_for};
pub use crudgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use dialect::{Dialect, JavaScript, TypeScript, dialect_for};
pub use generator::{ProjectGenerator, ResourceGenerator};
pub use naming::HandlerNames;
