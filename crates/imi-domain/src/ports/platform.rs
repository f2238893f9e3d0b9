//! Platform Facade Ports
//!
//! Narrow views of the platform services the ignore plugin consumes.

use std::path::{Path, PathBuf};

/// Virtual file system manager (application-wide)
pub trait VirtualFileManager: Send + Sync {
    /// Ask the platform to refresh its view of the file system
    fn refresh(&self);

    /// Number of file system modifications observed so far
    fn modification_count(&self) -> u64;
}

/// PSI manager (project-level)
pub trait PsiManager: Send + Sync {
    /// Drop cached resolve results after ignore rules change
    fn drop_resolve_caches(&self);
}

/// File status manager (project-level)
pub trait FileStatusManager: Send + Sync {
    /// Notify that file statuses must be recomputed
    fn file_statuses_changed(&self);
}

/// Version control manager (project-level)
pub trait VcsManager: Send + Sync {
    /// Whether at least one VCS is active for the project
    fn has_active_vcss(&self) -> bool;

    /// Whether `path` is under version control
    fn is_file_under_vcs(&self, path: &Path) -> bool;
}

/// Outer ignore file loader (project-level)
pub trait OuterIgnoreLoader: Send + Sync {
    /// Ignore files outside the project for the given ignore language
    /// (for example a global `core.excludesfile` for `git`)
    fn outer_files(&self, language: &str) -> Vec<PathBuf>;
}
