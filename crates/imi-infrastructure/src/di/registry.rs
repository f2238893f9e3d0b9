//! Injector Registry
//!
//! Entry point for service lookup. Project lookups go through the per-project
//! [`ScopeGraphCache`]; scope-free lookups build a throwaway graph every time.
//!
//! ```text
//! get_instance::<T>(project) ──► cache.get_or_build(project.id) ──► graph.get::<T>()
//! get_unscoped_instance::<T>() ─► IgnoreModule(Unscoped).build ──► graph.get::<T>()
//! ```

use std::sync::Arc;

use imi_domain::error::Result;
use imi_domain::ports::Application;
use imi_domain::{ProjectId, ProjectRef, Scope};
use tracing::{info, warn};

use super::cache::ScopeGraphCache;
use super::graph::ObjectGraph;
use super::modules::IgnoreModule;
use crate::config::InjectorConfig;

/// Per-project object graph registry
pub struct InjectorRegistry {
    application: Arc<dyn Application>,
    config: InjectorConfig,
    cache: ScopeGraphCache<ProjectId>,
}

impl InjectorRegistry {
    /// Registry drawing process-wide collaborators from `application`
    pub fn new(application: Arc<dyn Application>, config: InjectorConfig) -> Self {
        Self {
            application,
            config,
            cache: ScopeGraphCache::new(),
        }
    }

    /// Resolve `T` from the graph of `project`, building that graph on first use
    pub fn get_instance<T>(&self, project: &ProjectRef) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.graph_for(project)?.get::<T>()
    }

    /// Resolve `T` from a freshly built scope-free graph
    ///
    /// Nothing is cached: every call builds a new graph, so singletons are
    /// not shared between calls.
    pub fn get_unscoped_instance<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.unscoped_graph()?.get::<T>()
    }

    /// Cached graph for `project`
    pub fn graph_for(&self, project: &ProjectRef) -> Result<Arc<ObjectGraph>> {
        self.cache.get_or_build(&project.id(), || {
            self.build_graph(Scope::Project(project.clone()))
        })
    }

    /// New scope-free graph
    pub fn unscoped_graph(&self) -> Result<ObjectGraph> {
        self.build_graph(Scope::Unscoped)
    }

    fn build_graph(&self, scope: Scope) -> Result<ObjectGraph> {
        let label = scope.label();
        IgnoreModule::new(scope, Arc::clone(&self.application))
            .build_graph(&self.config)
            .inspect_err(|e| warn!(scope = %label, error = %e, "Object graph construction failed"))
    }

    /// Forget the graph of a closed project
    ///
    /// Returns whether a graph was cached. A later lookup for the same id
    /// builds a new graph.
    pub fn release(&self, project: &ProjectId) -> bool {
        let released = self.cache.remove(project).is_some();
        if released {
            info!(project = %project, "Released object graph");
        }
        released
    }

    /// Forget every cached graph
    pub fn clear(&self) {
        let count = self.cache.len();
        self.cache.clear();
        info!(graphs = count, "Cleared object graph cache");
    }

    /// Whether a graph is cached for `project`
    pub fn is_cached(&self, project: &ProjectId) -> bool {
        self.cache.contains(project)
    }

    /// Projects with a cached graph
    pub fn cached_scopes(&self) -> Vec<ProjectId> {
        self.cache.keys()
    }

    /// Number of project graphs built since creation (scope-free graphs are
    /// not counted)
    pub fn graphs_built(&self) -> usize {
        self.cache.builds()
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }
}
