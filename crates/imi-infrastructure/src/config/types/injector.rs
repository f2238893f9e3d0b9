//! Injector configuration types

use crate::constants::{DEFAULT_EAGER_SINGLETONS, DEFAULT_LOG_BINDINGS};
use serde::{Deserialize, Serialize};

/// Graph construction behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Instantiate every singleton while building a project graph, so wiring
    /// defects fail construction instead of the first lookup.
    /// Scope-free graphs are always lazy.
    pub eager_singletons: bool,

    /// Log each binding declaration at debug level
    pub log_bindings: bool,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            eager_singletons: DEFAULT_EAGER_SINGLETONS,
            log_bindings: DEFAULT_LOG_BINDINGS,
        }
    }
}
