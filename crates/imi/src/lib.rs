//! # Ignore Module Injector
//!
//! Per-project object graphs for the ignore plugin services.
//!
//! Each open project gets exactly one graph, built on first use and shared
//! by every later lookup. Lookups without a project build a fresh graph
//! that only holds application-level bindings.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use imi::host::{InMemoryApplication, InMemoryProject};
//! use imi::services::IgnoreManager;
//! use imi::{InjectorConfig, InjectorRegistry};
//!
//! let registry = InjectorRegistry::new(Arc::new(InMemoryApplication::new()), InjectorConfig::default());
//! let project = Arc::new(InMemoryProject::new("demo")).into_ref();
//!
//! let manager = registry.get_instance::<IgnoreManager>(&project).unwrap();
//! manager.add_rules(["*.log"]).unwrap();
//! assert!(manager.is_ignored(std::path::Path::new("debug.log"), false));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, scopes, host ports
//! - `infrastructure` - Object graphs, per-project cache, registry, config, logging

use std::sync::Arc;

use tracing::info;

/// Domain layer - error taxonomy, scopes and host ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use imi_domain::*;
}

/// Infrastructure layer - DI, config, logging and the in-memory host
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use imi_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, ProjectId, ProjectRef, Result, Scope};

pub use infrastructure::config::{AppConfig, ConfigLoader, InjectorConfig};
pub use infrastructure::di::{InjectorRegistry, ObjectGraph};
pub use infrastructure::{host, services};

/// In-memory host and registry built from loaded configuration
pub struct Runtime {
    pub application: Arc<host::InMemoryApplication>,
    pub registry: InjectorRegistry,
}

impl Runtime {
    /// Build a runtime from an already loaded configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let application = Arc::new(host::InMemoryApplication::from_config(config));
        let registry = InjectorRegistry::new(application.clone(), config.injector);
        Self {
            application,
            registry,
        }
    }

    /// Load configuration, install logging and build the runtime
    ///
    /// Fails if the configuration is invalid or a global tracing subscriber
    /// is already installed.
    pub fn init(loader: &ConfigLoader) -> Result<Self> {
        let config = loader.load()?;
        infrastructure::logging::init_logging(config.logging.clone())?;
        info!(
            eager_singletons = config.injector.eager_singletons,
            "Ignore module injector ready"
        );
        Ok(Self::from_config(&config))
    }
}
