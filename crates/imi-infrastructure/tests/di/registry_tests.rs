//! Injector Registry Tests

use std::sync::{Arc, Barrier};
use std::thread;

use imi_domain::error::Error;
use imi_domain::ports::{Application, VcsManager, VirtualFileManager};
use imi_domain::value_objects::{IgnoreApplicationComponent, IgnoreSettings};
use imi_domain::ProjectRef;
use imi_infrastructure::config::InjectorConfig;
use imi_infrastructure::host::InMemoryProject;
use imi_infrastructure::services::{AddTemplateAction, IgnoreManager};
use imi_infrastructure::utils::Glob;

use crate::test_utils::{TestProject, application, registry, registry_with};

#[test]
fn test_same_project_same_graph() {
    let app = application();
    let registry = registry(&app);
    let project = TestProject::new("p1");

    let first = registry.graph_for(&project.handle).unwrap();
    let second = registry.graph_for(&project.handle).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.graphs_built(), 1);
    assert!(registry.is_cached(&project.handle.id()));
}

#[test]
fn test_concurrent_first_lookups_build_one_graph() {
    const THREADS: usize = 8;
    let app = application();
    let registry = registry(&app);
    let project = TestProject::new("contended");
    let barrier = Barrier::new(THREADS);

    let managers: Vec<Arc<IgnoreManager>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    registry
                        .get_instance::<IgnoreManager>(&project.handle)
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(registry.graphs_built(), 1);
    assert!(managers.iter().all(|m| Arc::ptr_eq(m, &managers[0])));
}

#[test]
fn test_same_settings_for_repeated_lookups() {
    let app = application();
    let registry = registry(&app);
    let project = TestProject::new("p1");

    let first = registry.get_instance::<IgnoreSettings>(&project.handle).unwrap();
    let second = registry.get_instance::<IgnoreSettings>(&project.handle).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &app.settings().unwrap()));
}

#[test]
fn test_projects_get_their_own_collaborators() {
    let app = application();
    let registry = registry(&app);
    let p1 = TestProject::new("p1");
    let p2 = TestProject::new("p2");

    let vcs1 = registry.get_instance::<dyn VcsManager>(&p1.handle).unwrap();
    let vcs2 = registry.get_instance::<dyn VcsManager>(&p2.handle).unwrap();
    assert!(!Arc::ptr_eq(&vcs1, &vcs2));

    // Each graph binds its own project's collaborator
    let host_vcs1: Arc<dyn VcsManager> = p1.vcs.clone();
    let host_vcs2: Arc<dyn VcsManager> = p2.vcs.clone();
    assert!(Arc::ptr_eq(&vcs1, &host_vcs1));
    assert!(Arc::ptr_eq(&vcs2, &host_vcs2));

    let graph1 = registry.graph_for(&p1.handle).unwrap();
    let graph2 = registry.graph_for(&p2.handle).unwrap();
    assert!(!Arc::ptr_eq(&graph1, &graph2));
    assert_eq!(registry.graphs_built(), 2);

    // Application-level bindings are shared between projects
    let settings1 = registry.get_instance::<IgnoreSettings>(&p1.handle).unwrap();
    let settings2 = registry.get_instance::<IgnoreSettings>(&p2.handle).unwrap();
    assert!(Arc::ptr_eq(&settings1, &settings2));
}

#[test]
fn test_project_singletons_are_per_project() {
    let app = application();
    let registry = registry(&app);
    let p1 = TestProject::new("p1");
    let p2 = TestProject::new("p2");

    let m1 = registry.get_instance::<IgnoreManager>(&p1.handle).unwrap();
    let m1_again = registry.get_instance::<IgnoreManager>(&p1.handle).unwrap();
    let m2 = registry.get_instance::<IgnoreManager>(&p2.handle).unwrap();

    assert!(Arc::ptr_eq(&m1, &m1_again));
    assert!(!Arc::ptr_eq(&m1, &m2));
    assert_eq!(m1.project(), &p1.handle);
}

#[test]
fn test_transient_action_is_new_each_time() {
    let app = application();
    let registry = registry(&app);
    let project = TestProject::new("p1");

    let first = registry.get_instance::<AddTemplateAction>(&project.handle).unwrap();
    let second = registry.get_instance::<AddTemplateAction>(&project.handle).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(first.is_enabled());
}

#[test]
fn test_handles_with_same_id_share_a_graph() {
    let app = application();
    let registry = registry(&app);
    let project = TestProject::new("shared");
    let id = project.handle.id();

    let other_handle: ProjectRef = Arc::clone(&project.project).into_ref();
    let first = registry.graph_for(&project.handle).unwrap();
    let second = registry.graph_for(&other_handle).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.cached_scopes(), vec![id]);
}

#[test]
fn test_unscoped_lookup_resolves_application_bindings() {
    let app = application();
    let registry = registry(&app);

    let settings = registry.get_unscoped_instance::<IgnoreSettings>().unwrap();
    assert!(Arc::ptr_eq(&settings, &app.settings().unwrap()));
    assert!(registry.get_unscoped_instance::<IgnoreApplicationComponent>().is_ok());
    assert!(registry.get_unscoped_instance::<dyn VirtualFileManager>().is_ok());

    let action = registry.get_unscoped_instance::<AddTemplateAction>().unwrap();
    assert!(!action.is_enabled());
}

#[test]
fn test_unscoped_lookup_never_caches() {
    let app = application();
    let registry = registry(&app);

    let first = registry.unscoped_graph().unwrap();
    let second = registry.unscoped_graph().unwrap();
    assert!(first.scope().is_unscoped());

    // Singletons live in the graph, so two scope-free graphs never share one
    let glob1 = first.get::<Glob>().unwrap();
    let glob2 = second.get::<Glob>().unwrap();
    assert!(!Arc::ptr_eq(&glob1, &glob2));

    registry.get_unscoped_instance::<IgnoreSettings>().unwrap();
    assert!(registry.cached_scopes().is_empty());
    assert_eq!(registry.graphs_built(), 0);
}

#[test]
fn test_unscoped_lookup_of_project_type_is_unresolved() {
    let app = application();
    let registry = registry(&app);

    let err = registry
        .get_unscoped_instance::<dyn VcsManager>()
        .err()
        .expect("project-level type must not resolve without a project");
    match err {
        Error::UnresolvedType { type_name, scope } => {
            assert!(type_name.contains("VcsManager"));
            assert_eq!(scope, imi_domain::constants::UNSCOPED_LABEL);
        }
        other => panic!("Expected UnresolvedType, got {other:?}"),
    }

    let err = registry
        .get_unscoped_instance::<IgnoreManager>()
        .err()
        .expect("IgnoreManager needs a project");
    assert!(matches!(err, Error::UnresolvedType { .. }));
}

#[test]
fn test_unscoped_lookup_fails_without_application_collaborator() {
    let app = application();
    app.set_settings(None);
    let registry = registry(&app);

    let err = registry.get_unscoped_instance::<Glob>().unwrap_err();
    assert!(matches!(err, Error::GraphConstruction { .. }));
}

#[test]
fn test_failed_construction_is_retried() {
    let app = application();
    let registry = registry(&app);
    let project = TestProject::new("late");
    project.project.set_vcs_manager(None);

    let err = registry
        .get_instance::<IgnoreSettings>(&project.handle)
        .unwrap_err();
    assert!(matches!(err, Error::GraphConstruction { .. }));
    assert!(!registry.is_cached(&project.handle.id()));
    assert_eq!(registry.graphs_built(), 0);

    project.project.set_vcs_manager(Some(project.vcs.clone()));
    let vcs = registry.get_instance::<dyn VcsManager>(&project.handle).unwrap();
    let expected: Arc<dyn VcsManager> = project.vcs.clone();
    assert!(Arc::ptr_eq(&vcs, &expected));
    assert_eq!(registry.graphs_built(), 1);
}

#[test]
fn test_bare_project_fails_until_host_is_ready() {
    let app = application();
    let registry = registry(&app);
    let project = Arc::new(InMemoryProject::bare("bare"));
    let handle = Arc::clone(&project).into_ref();

    assert!(matches!(
        registry.graph_for(&handle),
        Err(Error::GraphConstruction { .. })
    ));
    assert!(registry.cached_scopes().is_empty());
}

#[test]
fn test_release_drops_graph() {
    let app = application();
    let registry = registry(&app);
    let project = TestProject::new("closing");
    let id = project.handle.id();

    let before = registry.graph_for(&project.handle).unwrap();
    assert!(registry.release(&id));
    assert!(!registry.is_cached(&id));
    assert!(!registry.release(&id));

    let after = registry.graph_for(&project.handle).unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(registry.graphs_built(), 2);
}

#[test]
fn test_clear_drops_every_graph() {
    let app = application();
    let registry = registry(&app);
    let p1 = TestProject::new("p1");
    let p2 = TestProject::new("p2");
    registry.graph_for(&p1.handle).unwrap();
    registry.graph_for(&p2.handle).unwrap();

    registry.clear();
    assert!(registry.cached_scopes().is_empty());
}

#[test]
fn test_eager_registry() {
    let app = application();
    let config = InjectorConfig {
        eager_singletons: true,
        log_bindings: true,
    };
    let registry = registry_with(&app, config);
    let project = TestProject::new("eager");

    assert_eq!(registry.config(), &config);
    assert!(registry.get_instance::<IgnoreManager>(&project.handle).is_ok());
    assert!(registry.get_unscoped_instance::<IgnoreSettings>().is_ok());
}
