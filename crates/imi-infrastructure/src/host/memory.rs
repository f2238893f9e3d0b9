//! In-memory host
//!
//! A self-contained [`Application`] and [`Project`] for embedding the
//! injector without an IDE, and for tests. Every collaborator slot can be
//! emptied and refilled at runtime to model a host that is still starting
//! up or already shutting down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use imi_domain::ports::{
    Application, FileStatusManager, OuterIgnoreLoader, Project, PsiManager, VcsManager,
    VirtualFileManager,
};
use imi_domain::value_objects::{IgnoreApplicationComponent, IgnoreSettings};
use imi_domain::{ProjectId, ProjectRef};

use super::platform::{
    InMemoryFileStatusManager, InMemoryOuterIgnoreLoader, InMemoryPsiManager, InMemoryVcsManager,
    InMemoryVirtualFileManager,
};
use crate::config::AppConfig;

/// Replaceable collaborator
struct Slot<T: ?Sized>(RwLock<Option<Arc<T>>>);

impl<T: ?Sized> Slot<T> {
    fn new(value: Option<Arc<T>>) -> Self {
        Self(RwLock::new(value))
    }

    fn get(&self) -> Option<Arc<T>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, value: Option<Arc<T>>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

/// In-memory singleton registry
pub struct InMemoryApplication {
    settings: Slot<IgnoreSettings>,
    component: Slot<IgnoreApplicationComponent>,
    virtual_file_manager: Slot<dyn VirtualFileManager>,
}

impl InMemoryApplication {
    /// Application with default settings and every collaborator present
    pub fn new() -> Self {
        Self::with_settings(IgnoreSettings::default())
    }

    /// Application seeded from loaded configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_settings(IgnoreSettings::new(config.settings.clone()))
    }

    fn with_settings(settings: IgnoreSettings) -> Self {
        Self {
            settings: Slot::new(Some(Arc::new(settings))),
            component: Slot::new(Some(Arc::new(IgnoreApplicationComponent::default()))),
            virtual_file_manager: Slot::new(Some(Arc::new(InMemoryVirtualFileManager::new()))),
        }
    }

    /// Application with no collaborators at all
    pub fn empty() -> Self {
        Self {
            settings: Slot::new(None),
            component: Slot::new(None),
            virtual_file_manager: Slot::new(None),
        }
    }

    pub fn set_settings(&self, settings: Option<Arc<IgnoreSettings>>) {
        self.settings.set(settings);
    }

    pub fn set_ignore_component(&self, component: Option<Arc<IgnoreApplicationComponent>>) {
        self.component.set(component);
    }

    pub fn set_virtual_file_manager(&self, manager: Option<Arc<dyn VirtualFileManager>>) {
        self.virtual_file_manager.set(manager);
    }
}

impl Default for InMemoryApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl Application for InMemoryApplication {
    fn settings(&self) -> Option<Arc<IgnoreSettings>> {
        self.settings.get()
    }

    fn ignore_component(&self) -> Option<Arc<IgnoreApplicationComponent>> {
        self.component.get()
    }

    fn virtual_file_manager(&self) -> Option<Arc<dyn VirtualFileManager>> {
        self.virtual_file_manager.get()
    }
}

/// In-memory project
pub struct InMemoryProject {
    id: ProjectId,
    name: String,
    disposed: AtomicBool,
    psi_manager: Slot<dyn PsiManager>,
    file_status_manager: Slot<dyn FileStatusManager>,
    vcs_manager: Slot<dyn VcsManager>,
    outer_ignore_loader: Slot<dyn OuterIgnoreLoader>,
}

impl InMemoryProject {
    /// Project with a fresh id and every facade present
    pub fn new<S: Into<String>>(name: S) -> Self {
        let project = Self::bare(name);
        project.set_psi_manager(Some(Arc::new(InMemoryPsiManager::new())));
        project.set_file_status_manager(Some(Arc::new(InMemoryFileStatusManager::new())));
        project.set_vcs_manager(Some(Arc::new(InMemoryVcsManager::new())));
        project.set_outer_ignore_loader(Some(Arc::new(InMemoryOuterIgnoreLoader::new())));
        project
    }

    /// Project with a fresh id and no facades
    pub fn bare<S: Into<String>>(name: S) -> Self {
        Self::with_id(ProjectId::new(), name)
    }

    /// Project with a host-chosen id and no facades
    pub fn with_id<S: Into<String>>(id: ProjectId, name: S) -> Self {
        Self {
            id,
            name: name.into(),
            disposed: AtomicBool::new(false),
            psi_manager: Slot::new(None),
            file_status_manager: Slot::new(None),
            vcs_manager: Slot::new(None),
            outer_ignore_loader: Slot::new(None),
        }
    }

    pub fn set_psi_manager(&self, manager: Option<Arc<dyn PsiManager>>) {
        self.psi_manager.set(manager);
    }

    pub fn set_file_status_manager(&self, manager: Option<Arc<dyn FileStatusManager>>) {
        self.file_status_manager.set(manager);
    }

    pub fn set_vcs_manager(&self, manager: Option<Arc<dyn VcsManager>>) {
        self.vcs_manager.set(manager);
    }

    pub fn set_outer_ignore_loader(&self, loader: Option<Arc<dyn OuterIgnoreLoader>>) {
        self.outer_ignore_loader.set(loader);
    }

    /// Mark the project as closed by the host
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    /// Share this project as a [`ProjectRef`]
    pub fn into_ref(self: Arc<Self>) -> ProjectRef {
        ProjectRef::new(self)
    }
}

impl Project for InMemoryProject {
    fn id(&self) -> ProjectId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn psi_manager(&self) -> Option<Arc<dyn PsiManager>> {
        self.psi_manager.get()
    }

    fn file_status_manager(&self) -> Option<Arc<dyn FileStatusManager>> {
        self.file_status_manager.get()
    }

    fn vcs_manager(&self) -> Option<Arc<dyn VcsManager>> {
        self.vcs_manager.get()
    }

    fn outer_ignore_loader(&self) -> Option<Arc<dyn OuterIgnoreLoader>> {
        self.outer_ignore_loader.get()
    }
}
