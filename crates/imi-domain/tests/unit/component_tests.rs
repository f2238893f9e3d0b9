//! Unit tests for the application component

use imi_domain::value_objects::IgnoreApplicationComponent;

#[test]
fn test_fresh_install_is_not_an_update() {
    let component = IgnoreApplicationComponent::new("2.0.0", None);
    assert_eq!(component.version(), "2.0.0");
    assert!(!component.is_updated());
}

#[test]
fn test_version_change_is_acknowledged_once() {
    let component = IgnoreApplicationComponent::new("2.0.0", Some("1.9.0"));
    assert!(component.is_updated());
    assert!(component.acknowledge_update());
    assert!(!component.acknowledge_update());
    assert!(!component.is_updated());
}

#[test]
fn test_same_version_is_not_an_update() {
    let component = IgnoreApplicationComponent::new("2.0.0", Some("2.0.0"));
    assert!(!component.is_updated());
}
