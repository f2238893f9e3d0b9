//! Host Ports
//!
//! The host owns project lifecycle and process-wide singletons. Every
//! accessor may report absence; the injector turns absence of a required
//! collaborator into a graph construction failure.

use std::sync::Arc;

use super::platform::{
    FileStatusManager, OuterIgnoreLoader, PsiManager, VcsManager, VirtualFileManager,
};
use crate::value_objects::{IgnoreApplicationComponent, IgnoreSettings, ProjectId};

/// Host scope provider
///
/// One implementation per open project. Equality of projects is decided by
/// [`Project::id`].
pub trait Project: Send + Sync {
    /// Host-assigned identity
    fn id(&self) -> ProjectId;

    /// Display name
    fn name(&self) -> &str;

    /// Whether the host has already disposed this project
    fn is_disposed(&self) -> bool;

    /// Project-level PSI manager
    fn psi_manager(&self) -> Option<Arc<dyn PsiManager>>;

    /// Project-level file status manager
    fn file_status_manager(&self) -> Option<Arc<dyn FileStatusManager>>;

    /// Project-level VCS manager
    fn vcs_manager(&self) -> Option<Arc<dyn VcsManager>>;

    /// Loader for ignore files living outside the project
    fn outer_ignore_loader(&self) -> Option<Arc<dyn OuterIgnoreLoader>>;
}

/// Host singleton registry
///
/// Process-wide services that do not depend on a project.
pub trait Application: Send + Sync {
    /// Plugin settings service
    fn settings(&self) -> Option<Arc<IgnoreSettings>>;

    /// Application-level plugin component
    fn ignore_component(&self) -> Option<Arc<IgnoreApplicationComponent>>;

    /// Virtual file system manager
    fn virtual_file_manager(&self) -> Option<Arc<dyn VirtualFileManager>>;
}
