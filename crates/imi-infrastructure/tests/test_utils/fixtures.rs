//! Host fixtures

use std::sync::Arc;

use imi_domain::ProjectRef;
use imi_infrastructure::config::InjectorConfig;
use imi_infrastructure::host::{
    InMemoryApplication, InMemoryFileStatusManager, InMemoryOuterIgnoreLoader, InMemoryPsiManager,
    InMemoryProject, InMemoryVcsManager,
};
use imi_infrastructure::InjectorRegistry;

/// Project with concrete handles to every facade
pub struct TestProject {
    pub project: Arc<InMemoryProject>,
    pub handle: ProjectRef,
    pub psi: Arc<InMemoryPsiManager>,
    pub file_status: Arc<InMemoryFileStatusManager>,
    pub vcs: Arc<InMemoryVcsManager>,
    pub outer: Arc<InMemoryOuterIgnoreLoader>,
}

impl TestProject {
    pub fn new(name: &str) -> Self {
        let project = Arc::new(InMemoryProject::bare(name));
        let psi = Arc::new(InMemoryPsiManager::new());
        let file_status = Arc::new(InMemoryFileStatusManager::new());
        let vcs = Arc::new(InMemoryVcsManager::new());
        let outer = Arc::new(InMemoryOuterIgnoreLoader::new());

        project.set_psi_manager(Some(psi.clone()));
        project.set_file_status_manager(Some(file_status.clone()));
        project.set_vcs_manager(Some(vcs.clone()));
        project.set_outer_ignore_loader(Some(outer.clone()));

        Self {
            handle: Arc::clone(&project).into_ref(),
            project,
            psi,
            file_status,
            vcs,
            outer,
        }
    }
}

/// Application with every collaborator present
pub fn application() -> Arc<InMemoryApplication> {
    Arc::new(InMemoryApplication::new())
}

/// Registry over `app` with default injector settings
pub fn registry(app: &Arc<InMemoryApplication>) -> InjectorRegistry {
    registry_with(app, InjectorConfig::default())
}

pub fn registry_with(app: &Arc<InMemoryApplication>, config: InjectorConfig) -> InjectorRegistry {
    InjectorRegistry::new(app.clone(), config)
}
