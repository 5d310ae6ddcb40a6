//! Discovery of an installed package's on-disk footprint.
//!
//! - `binary` - resolve an external command's absolute path
//! - `module` - enumerate installed module directories from the search path

mod binary;
mod module;

pub use binary::locate_binary;
pub use module::{MODULE_PATH_ENV, installed_module_dirs, module_search_dirs};
