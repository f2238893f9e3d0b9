//! Application-level plugin component

use std::sync::atomic::{AtomicBool, Ordering};

use crate::constants::PLUGIN_VERSION;

/// Process-wide plugin component
///
/// Tracks whether the plugin was updated since the previous run so the
/// host can show a one-time notification.
#[derive(Debug)]
pub struct IgnoreApplicationComponent {
    version: String,
    updated: AtomicBool,
}

impl IgnoreApplicationComponent {
    /// Create the component for `version`, comparing against the version
    /// recorded on the previous run
    pub fn new<S: Into<String>>(version: S, previous_version: Option<&str>) -> Self {
        let version = version.into();
        let updated = previous_version.is_some_and(|previous| previous != version);
        Self {
            version,
            updated: AtomicBool::new(updated),
        }
    }

    /// Current plugin version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the plugin changed version since the previous run
    pub fn is_updated(&self) -> bool {
        self.updated.load(Ordering::Acquire)
    }

    /// Consume the update flag, returning its previous value
    pub fn acknowledge_update(&self) -> bool {
        self.updated.swap(false, Ordering::AcqRel)
    }
}

impl Default for IgnoreApplicationComponent {
    fn default() -> Self {
        Self::new(PLUGIN_VERSION, None)
    }
}
