//! Plugin settings
//!
//! [`SettingsState`] is the persisted form; [`IgnoreSettings`] is the
//! process-wide service handed out by the host and shared by every graph.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

/// Persisted plugin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsState {
    /// Notify when a project has no `.gitignore`
    pub missing_gitignore: bool,

    /// Colour ignored files in the project view
    pub ignored_file_status: bool,

    /// Load ignore rules from files outside the project
    pub outer_ignore_rules: bool,

    /// Insert templates at the caret instead of appending
    pub insert_at_cursor: bool,

    /// Offer to add unversioned files to the ignore file
    pub add_unversioned_files: bool,

    /// Show actions that remove entries from ignore files
    pub unignore_actions: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            missing_gitignore: true,
            ignored_file_status: true,
            outer_ignore_rules: true,
            insert_at_cursor: false,
            add_unversioned_files: true,
            unignore_actions: true,
        }
    }
}

/// Settings service shared across projects
#[derive(Debug, Default)]
pub struct IgnoreSettings {
    state: RwLock<SettingsState>,
}

impl IgnoreSettings {
    /// Create the service from a persisted state
    pub fn new(state: SettingsState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SettingsState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole state
    pub fn load_state(&self, state: SettingsState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Mutate the state in place
    pub fn update<F: FnOnce(&mut SettingsState)>(&self, f: F) {
        f(&mut self.state.write().unwrap_or_else(PoisonError::into_inner));
    }

    pub fn missing_gitignore(&self) -> bool {
        self.read(|s| s.missing_gitignore)
    }

    pub fn ignored_file_status(&self) -> bool {
        self.read(|s| s.ignored_file_status)
    }

    pub fn outer_ignore_rules(&self) -> bool {
        self.read(|s| s.outer_ignore_rules)
    }

    pub fn insert_at_cursor(&self) -> bool {
        self.read(|s| s.insert_at_cursor)
    }

    pub fn add_unversioned_files(&self) -> bool {
        self.read(|s| s.add_unversioned_files)
    }

    pub fn unignore_actions(&self) -> bool {
        self.read(|s| s.unignore_actions)
    }

    fn read<T, F: FnOnce(&SettingsState) -> T>(&self, f: F) -> T {
        f(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }
}
