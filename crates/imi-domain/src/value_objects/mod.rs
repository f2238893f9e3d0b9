//! Value Objects
//!
//! Immutable or self-synchronised values shared between the host and the
//! injector.

/// Application-level plugin component
pub mod component;
/// Project handles and scopes
pub mod scope;
/// Plugin settings
pub mod settings;

pub use component::IgnoreApplicationComponent;
pub use scope::{ProjectId, ProjectRef, Scope};
pub use settings::{IgnoreSettings, SettingsState};
