//! Unit tests for plugin settings

use imi_domain::value_objects::{IgnoreSettings, SettingsState};

#[test]
fn test_default_state() {
    let state = SettingsState::default();
    assert!(state.missing_gitignore);
    assert!(state.ignored_file_status);
    assert!(state.outer_ignore_rules);
    assert!(!state.insert_at_cursor);
    assert!(state.add_unversioned_files);
    assert!(state.unignore_actions);
}

#[test]
fn test_update_and_snapshot() {
    let settings = IgnoreSettings::default();
    settings.update(|s| s.insert_at_cursor = true);

    assert!(settings.insert_at_cursor());
    assert!(settings.state().insert_at_cursor);
}

#[test]
fn test_load_state_replaces_everything() {
    let settings = IgnoreSettings::default();
    let state = SettingsState {
        missing_gitignore: false,
        ignored_file_status: false,
        outer_ignore_rules: false,
        insert_at_cursor: true,
        add_unversioned_files: false,
        unignore_actions: false,
    };
    settings.load_state(state.clone());

    assert_eq!(settings.state(), state);
    assert!(!settings.missing_gitignore());
    assert!(!settings.outer_ignore_rules());
    assert!(!settings.unignore_actions());
}
