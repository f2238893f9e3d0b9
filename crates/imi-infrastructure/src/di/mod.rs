//! Dependency Injection
//!
//! Typed object graphs scoped to one project (or to no project at all).
//!
//! ```text
//! InjectorRegistry
//! ├── ScopeGraphCache<ProjectId>  one graph per project, built once
//! └── IgnoreModule(scope)
//!     ├── UtilsModule             glob + regex cache
//!     ├── application collaborators
//!     ├── ProjectModule           only for Scope::Project
//!     └── IgnoreManager, AddTemplateAction
//! ```
//!
//! ## Key Principles
//!
//! - **Trait-object bindings**: host facades are bound and resolved as
//!   `Arc<dyn Trait>`
//! - **Scope-conditional declaration**: project-level bindings exist only in
//!   project graphs; a scope-free lookup for them fails with
//!   `UnresolvedType`
//! - **No cached failures**: a failed build leaves nothing behind

pub mod binder;
pub mod cache;
pub mod graph;
pub mod modules;
pub mod registry;

pub use binder::{GraphBinder, Module};
pub use cache::ScopeGraphCache;
pub use graph::{Injectable, Lifetime, ObjectGraph, Resolver};
pub use modules::{IgnoreModule, ProjectModule, UtilsModule};
pub use registry::InjectorRegistry;
