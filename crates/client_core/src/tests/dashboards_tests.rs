use std::sync::{Arc, Mutex};

use super::*;

#[derive(Clone, Default)]
struct RecordingDashboard {
    sections: Arc<Mutex<Vec<String>>>,
}

impl DashboardModule for RecordingDashboard {
    fn load_section(&self, section: &str, main: &mut MainContent) {
        self.sections.lock().expect("lock").push(section.to_string());
        main.push(format!("section:{section}"));
    }
}

fn full_registry(citizen: RecordingDashboard) -> DashboardRegistry {
    DashboardRegistry::builder()
        .register(Role::Citizen, citizen)
        .register(Role::Worker, RecordingDashboard::default())
        .register(Role::GreenChampion, RecordingDashboard::default())
        .register(Role::Admin, RecordingDashboard::default())
        .register(Role::Superadmin, RecordingDashboard::default())
        .build()
}

#[test]
fn loads_default_section_of_registered_role() {
    let citizen = RecordingDashboard::default();
    let registry = full_registry(citizen.clone());
    let mut main = MainContent::default();

    let outcome = registry.load_default(&Role::Citizen, &mut main);

    assert_eq!(outcome, DashboardOutcome::Loaded);
    assert_eq!(*citizen.sections.lock().expect("lock"), vec!["dashboard"]);
    assert_eq!(main.render(), "section:dashboard");
}

#[test]
fn clears_previous_main_content_before_loading() {
    let registry = full_registry(RecordingDashboard::default());
    let mut main = MainContent::default();
    main.push("stale content from another role");

    registry.load_default(&Role::Citizen, &mut main);

    assert_eq!(main.blocks(), ["section:dashboard".to_string()]);
}

#[test]
fn unknown_role_renders_fallback_notice() {
    let citizen = RecordingDashboard::default();
    let registry = full_registry(citizen.clone());
    let mut main = MainContent::default();
    main.push("stale");

    let outcome = registry.load_default(&Role::Unrecognized("ghost".into()), &mut main);

    assert_eq!(outcome, DashboardOutcome::UnknownRole);
    assert_eq!(main.render(), UNKNOWN_ROLE_NOTICE);
    assert!(citizen.sections.lock().expect("lock").is_empty());
}

#[test]
fn unregistered_known_role_falls_back_too() {
    let registry = DashboardRegistry::builder()
        .register(Role::Citizen, RecordingDashboard::default())
        .build();
    let mut main = MainContent::default();

    assert_eq!(
        registry.load_default(&Role::Admin, &mut main),
        DashboardOutcome::UnknownRole
    );
}

#[test]
fn reports_known_roles_without_module() {
    let registry = DashboardRegistry::builder()
        .register(Role::Citizen, RecordingDashboard::default())
        .register(Role::Admin, RecordingDashboard::default())
        .build();

    assert_eq!(
        registry.missing_roles(),
        vec![Role::Worker, Role::GreenChampion, Role::Superadmin]
    );
    assert!(full_registry(RecordingDashboard::default())
        .missing_roles()
        .is_empty());
}
