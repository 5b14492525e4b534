//! Files whose format does not depend on the target language.
//!
//! - [`CrudgenTomlFile`] - The project manifest written by `init`
//! - [`PackageManifest`] - Serializable npm package manifest

mod crudgen_toml;
mod package_manifest;

pub use crudgen_toml::CrudgenTomlFile;
pub use package_manifest::PackageManifest;
