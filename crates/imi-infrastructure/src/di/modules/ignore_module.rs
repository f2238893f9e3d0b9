//! Ignore Module
//!
//! Declares every binding of one object graph. The [`Scope`] decides which
//! declaration path runs:
//!
//! | Binding | `Scope::Unscoped` | `Scope::Project` |
//! |---------|:-----------------:|:----------------:|
//! | `Glob`, `MatcherUtil` | yes | yes |
//! | `dyn VirtualFileManager` | yes | yes |
//! | `IgnoreSettings`, `IgnoreApplicationComponent` | yes | yes |
//! | `dyn PsiManager`, `dyn FileStatusManager`, `dyn VcsManager` | - | yes |
//! | `dyn OuterIgnoreLoader` | - | yes |
//! | `IgnoreManager` (singleton), `AddTemplateAction` (transient) | yes | yes |
//! | `Scope` | yes | yes |
//!
//! Project-level bindings live in [`ProjectModule`], which can only be built
//! from a [`ProjectRef`], so a scope-free graph cannot declare them.
//! `IgnoreManager` is declared in both graphs but only resolves with a
//! project, because its dependencies are project-level.

use std::sync::Arc;
use std::time::Instant;

use imi_domain::error::{Error, Result};
use imi_domain::ports::Application;
use imi_domain::{ProjectRef, Scope};
use tracing::{info, warn};

use super::UtilsModule;
use crate::config::InjectorConfig;
use crate::di::binder::{GraphBinder, Module};
use crate::di::graph::{Lifetime, ObjectGraph};
use crate::services::{AddTemplateAction, IgnoreManager};

/// Root module for one graph construction
pub struct IgnoreModule {
    scope: Scope,
    application: Arc<dyn Application>,
}

impl IgnoreModule {
    /// Module for `scope`, drawing process-wide singletons from `application`
    pub fn new(scope: Scope, application: Arc<dyn Application>) -> Self {
        Self { scope, application }
    }

    /// Scope this module declares bindings for
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Declare all bindings and build the graph
    pub fn build_graph(&self, config: &InjectorConfig) -> Result<ObjectGraph> {
        let started = Instant::now();
        let label = self.scope.label();

        let mut binder =
            GraphBinder::new(self.scope.clone()).with_binding_logs(config.log_bindings);
        binder.install(self)?;
        let graph = binder.build()?;

        if config.eager_singletons && !self.scope.is_unscoped() {
            graph.instantiate_singletons().map_err(|e| {
                warn!(scope = %label, error = %e, "Eager singleton construction failed");
                Error::graph_construction_with_source(
                    format!("eager singleton construction failed for {label}"),
                    e,
                )
            })?;
        }

        info!(
            scope = %label,
            bindings = graph.binding_count(),
            elapsed = ?started.elapsed(),
            "Built object graph"
        );
        Ok(graph)
    }

    fn install_open_ide_dependencies(&self, binder: &mut GraphBinder) -> Result<()> {
        binder.bind_instance(require(
            self.application.virtual_file_manager(),
            "VirtualFileManager",
            &self.scope,
        )?);
        Ok(())
    }

    fn install_application_dependencies(&self, binder: &mut GraphBinder) -> Result<()> {
        binder
            .bind_instance(require(
                self.application.settings(),
                "IgnoreSettings",
                &self.scope,
            )?)
            .bind_instance(require(
                self.application.ignore_component(),
                "IgnoreApplicationComponent",
                &self.scope,
            )?);
        Ok(())
    }

    fn install_project_factories(binder: &mut GraphBinder) {
        // Proxies
        binder
            .bind_injectable::<IgnoreManager>(Lifetime::Singleton)
            .bind_injectable::<AddTemplateAction>(Lifetime::Transient);
    }
}

impl Module for IgnoreModule {
    fn name(&self) -> &'static str {
        "ignore"
    }

    fn configure(&self, binder: &mut GraphBinder) -> Result<()> {
        binder.install(&UtilsModule)?;
        self.install_open_ide_dependencies(binder)?;
        self.install_application_dependencies(binder)?;

        match &self.scope {
            Scope::Project(project) => binder.install(&ProjectModule::new(project.clone()))?,
            Scope::Unscoped => {}
        }

        Self::install_project_factories(binder);
        binder.bind_instance(Arc::new(self.scope.clone()));
        Ok(())
    }
}

/// Project-level platform facades and plugin components
pub struct ProjectModule {
    project: ProjectRef,
}

impl ProjectModule {
    pub fn new(project: ProjectRef) -> Self {
        Self { project }
    }
}

impl Module for ProjectModule {
    fn name(&self) -> &'static str {
        "project"
    }

    fn configure(&self, binder: &mut GraphBinder) -> Result<()> {
        let project = &self.project;
        let scope = binder.scope().clone();
        if project.is_disposed() {
            return Err(Error::graph_construction(format!(
                "project {} is disposed",
                project.label()
            )));
        }

        binder
            .bind_instance(require(project.psi_manager(), "PsiManager", &scope)?)
            .bind_instance(require(
                project.file_status_manager(),
                "FileStatusManager",
                &scope,
            )?)
            .bind_instance(require(project.vcs_manager(), "VcsManager", &scope)?)
            .bind_instance(require(
                project.outer_ignore_loader(),
                "OuterIgnoreLoader",
                &scope,
            )?);
        Ok(())
    }
}

/// Unwrap a host collaborator or fail graph construction
fn require<T: ?Sized>(
    collaborator: Option<Arc<T>>,
    name: &str,
    scope: &Scope,
) -> Result<Arc<T>> {
    collaborator.ok_or_else(|| Error::collaborator_unavailable(name, scope.label()))
}
