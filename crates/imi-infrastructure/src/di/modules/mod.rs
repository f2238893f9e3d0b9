//! DI Module Organization
//!
//! ```text
//! IgnoreModule (per graph, scope-aware)
//! ├── UtilsModule (scope-independent utilities)
//! ├── Open-IDE facades (VirtualFileManager; PSI/FileStatus/VCS with a project)
//! ├── Plugin services (settings, application component; outer loader with a project)
//! └── Proxies (IgnoreManager, AddTemplateAction) + the Scope value
//! ```

/// Scope-aware root module
pub mod ignore_module;
/// Scope-independent utilities
pub mod utils_module;

pub use ignore_module::{IgnoreModule, ProjectModule};
pub use utils_module::UtilsModule;
