//! Domain layer constants
//!
//! Infrastructure-specific constants live in `imi_infrastructure::constants`.

// ============================================================================
// SCOPE CONSTANTS
// ============================================================================

/// Label used in diagnostics for graphs built without a project
pub const UNSCOPED_LABEL: &str = "<unscoped>";

// ============================================================================
// PLUGIN CONSTANTS
// ============================================================================

/// Plugin version reported by the default application component
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the ignore file the template action writes to by default
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Header written above merged template content
pub const TEMPLATE_HEADER_PREFIX: &str = "### ";
