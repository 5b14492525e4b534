//! Small syntax tree for generated modules.

mod exports;
mod fns;
mod imports;
mod module_file;

pub use exports::{ExportName, Exports};
pub use fns::FnSig;
pub use imports::{Import, ImportKind};
pub use module_file::{ModuleFile, js_string};
