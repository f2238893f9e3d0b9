//! Add Template Action Tests

use std::fs;
use std::sync::Arc;

use imi_domain::error::Error;
use imi_domain::ports::Application;
use imi_infrastructure::host::InMemoryApplication;
use imi_infrastructure::services::AddTemplateAction;
use tempfile::TempDir;

use crate::test_utils::{TestProject, application, registry};

fn action() -> (Arc<InMemoryApplication>, Arc<AddTemplateAction>) {
    let app = application();
    let project = TestProject::new("templates");
    let action = registry(&app)
        .get_instance::<AddTemplateAction>(&project.handle)
        .unwrap();
    (app, action)
}

#[test]
fn test_target_file() {
    let (_, action) = action();
    assert_eq!(action.target_file(), ".gitignore");
}

#[test]
fn test_template_into_empty_file() {
    let (_, action) = action();
    let merged = action.apply("Rust", "/target\n*.rs.bk\n", "", None);
    assert_eq!(merged, "### Rust\n/target\n*.rs.bk\n");
}

#[test]
fn test_existing_rules_are_skipped() {
    let (_, action) = action();
    let merged = action.apply("Rust", "/target\nCargo.lock\n", "/target\n", None);
    assert_eq!(merged, "/target\n\n### Rust\nCargo.lock\n");
}

#[test]
fn test_nothing_new_leaves_content_unchanged() {
    let (_, action) = action();
    let existing = "/target\nCargo.lock";
    assert_eq!(
        action.apply("Rust", "# Rust\n/target\n\nCargo.lock\n", existing, None),
        existing
    );
}

#[test]
fn test_cursor_ignored_unless_enabled() {
    let (_, action) = action();
    let merged = action.apply("T", "c", "a\nb\n", Some(2));
    assert_eq!(merged, "a\nb\n\n### T\nc\n");
}

#[test]
fn test_insert_at_cursor() {
    let (app, action) = action();
    app.settings()
        .unwrap()
        .update(|state| state.insert_at_cursor = true);

    assert_eq!(action.apply("T", "c", "a\nb\n", Some(2)), "a\n### T\nc\nb\n");
    // Out of range cursor falls back to appending
    assert_eq!(
        action.apply("T", "c", "a\nb\n", Some(99)),
        "a\nb\n\n### T\nc\n"
    );
}

#[test]
fn test_apply_to_file_creates_and_refreshes() {
    let (app, action) = action();
    let vfm = app.virtual_file_manager().unwrap();
    let temp_dir = TempDir::new().unwrap();

    assert!(action.apply_to_file(temp_dir.path(), "Rust", "/target\n").unwrap());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap(),
        "### Rust\n/target\n"
    );
    assert_eq!(vfm.modification_count(), 1);
}

#[test]
fn test_apply_to_file_without_changes_skips_refresh() {
    let (app, action) = action();
    let vfm = app.virtual_file_manager().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".gitignore");
    fs::write(&path, "/target\n").unwrap();

    assert!(!action.apply_to_file(temp_dir.path(), "Rust", "/target\n").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "/target\n");
    assert_eq!(vfm.modification_count(), 0);
}

#[test]
fn test_apply_to_missing_directory_is_io_error() {
    let (app, action) = action();
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    let err = action
        .apply_to_file(&missing, "Rust", "/target\n")
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(app.virtual_file_manager().unwrap().modification_count(), 0);
}

#[test]
fn test_unscoped_action_leaves_file_alone() {
    let app = application();
    let action = registry(&app)
        .get_unscoped_instance::<AddTemplateAction>()
        .unwrap();
    let temp_dir = TempDir::new().unwrap();

    assert!(!action.apply_to_file(temp_dir.path(), "Rust", "/target\n").unwrap());
    assert!(!temp_dir.path().join(".gitignore").exists());
    assert_eq!(app.virtual_file_manager().unwrap().modification_count(), 0);
}
