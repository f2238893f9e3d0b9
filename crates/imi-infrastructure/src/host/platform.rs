//! In-memory platform facades
//!
//! Record every call so tests and embedders can observe what the ignore
//! services asked the platform to do.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use imi_domain::ports::{
    FileStatusManager, OuterIgnoreLoader, PsiManager, VcsManager, VirtualFileManager,
};

/// Virtual file manager counting refreshes
#[derive(Debug, Default)]
pub struct InMemoryVirtualFileManager {
    modifications: AtomicU64,
}

impl InMemoryVirtualFileManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VirtualFileManager for InMemoryVirtualFileManager {
    fn refresh(&self) {
        self.modifications.fetch_add(1, Ordering::Relaxed);
    }

    fn modification_count(&self) -> u64 {
        self.modifications.load(Ordering::Relaxed)
    }
}

/// PSI manager counting cache drops
#[derive(Debug, Default)]
pub struct InMemoryPsiManager {
    drops: AtomicUsize,
}

impl InMemoryPsiManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `drop_resolve_caches` calls
    pub fn drop_count(&self) -> usize {
        self.drops.load(Ordering::Relaxed)
    }
}

impl PsiManager for InMemoryPsiManager {
    fn drop_resolve_caches(&self) {
        self.drops.fetch_add(1, Ordering::Relaxed);
    }
}

/// File status manager counting change notifications
#[derive(Debug, Default)]
pub struct InMemoryFileStatusManager {
    notifications: AtomicUsize,
}

impl InMemoryFileStatusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `file_statuses_changed` calls
    pub fn notification_count(&self) -> usize {
        self.notifications.load(Ordering::Relaxed)
    }
}

impl FileStatusManager for InMemoryFileStatusManager {
    fn file_statuses_changed(&self) {
        self.notifications.fetch_add(1, Ordering::Relaxed);
    }
}

/// VCS manager backed by a set of tracked paths
#[derive(Debug)]
pub struct InMemoryVcsManager {
    active: AtomicBool,
    tracked: RwLock<HashSet<PathBuf>>,
}

impl InMemoryVcsManager {
    /// Active VCS with no tracked files
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(true),
            tracked: RwLock::new(HashSet::new()),
        }
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    /// Mark `path` as tracked
    pub fn track(&self, path: impl Into<PathBuf>) {
        self.tracked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into());
    }
}

impl Default for InMemoryVcsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsManager for InMemoryVcsManager {
    fn has_active_vcss(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn is_file_under_vcs(&self, path: &Path) -> bool {
        self.tracked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path)
    }
}

/// Outer ignore loader with files registered per language
#[derive(Debug, Default)]
pub struct InMemoryOuterIgnoreLoader {
    files: RwLock<HashMap<String, Vec<PathBuf>>>,
}

impl InMemoryOuterIgnoreLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an outer ignore file for `language`
    pub fn add(&self, language: &str, path: impl Into<PathBuf>) {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(language.to_string())
            .or_default()
            .push(path.into());
    }
}

impl OuterIgnoreLoader for InMemoryOuterIgnoreLoader {
    fn outer_files(&self, language: &str) -> Vec<PathBuf> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(language)
            .cloned()
            .unwrap_or_default()
    }
}
