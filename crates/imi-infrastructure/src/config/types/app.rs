//! Main application configuration

use imi_domain::value_objects::SettingsState;
use serde::{Deserialize, Serialize};

use super::{InjectorConfig, LoggingConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging output
    pub logging: LoggingConfig,

    /// Graph construction behaviour
    pub injector: InjectorConfig,

    /// Initial plugin settings handed to the in-memory host
    pub settings: SettingsState,
}
