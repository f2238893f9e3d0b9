//! # Infrastructure Layer
//!
//! Builds, caches and resolves per-project object graphs for the ignore
//! plugin services.
//!
//! ## Module Categories
//!
//! ### Dependency Injection
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Object graphs, binder, modules, per-project cache, registry |
//! | [`services`] | Constructible services wired by the graph |
//! | [`utils`] | Scope-independent utilities (glob translation, regex cache) |
//!
//! ### Host
//! | Module | Description |
//! |--------|-------------|
//! | [`host`] | In-memory host implementation of the domain ports |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod host;
pub mod logging;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use di::{InjectorRegistry, ObjectGraph};
pub use error_ext::ErrorContext;
