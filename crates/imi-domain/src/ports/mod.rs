//! Domain Port Interfaces
//!
//! Boundary contracts between the injector and its host. The injector never
//! creates platform services itself; it asks the host for them through these
//! traits and binds what it receives.
//!
//! ## Organization
//!
//! - **host** - Scope provider (`Project`) and singleton registry (`Application`)
//! - **platform** - Platform facades bound into graphs

/// Host scope provider and singleton registry
pub mod host;
/// Platform facades
pub mod platform;

pub use host::{Application, Project};
pub use platform::{
    FileStatusManager, OuterIgnoreLoader, PsiManager, VcsManager, VirtualFileManager,
};
