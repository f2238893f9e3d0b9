//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `imi_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "imi.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "imi";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "IMI";

/// Separator between nested keys in environment variables
/// (e.g. `IMI_INJECTOR__EAGER_SINGLETONS`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured filter
pub const LOG_FILTER_ENV: &str = "IMI_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "imi";

// ============================================================================
// INJECTOR CONSTANTS
// ============================================================================

/// Instantiate singletons when a project graph is built
pub const DEFAULT_EAGER_SINGLETONS: bool = false;

/// Log every binding declaration at debug level
pub const DEFAULT_LOG_BINDINGS: bool = false;
