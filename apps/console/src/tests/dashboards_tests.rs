use super::*;

#[test]
fn registry_covers_every_known_role() {
    assert!(registry().missing_roles().is_empty());
}

#[test]
fn renders_default_section_with_title() {
    let mut main = MainContent::default();
    registry().load_default(&Role::Worker, &mut main);
    assert_eq!(main.blocks()[0], "== Worker Dashboard :: dashboard ==");
    assert_eq!(main.blocks().len(), 4);
}

#[test]
fn unknown_section_is_reported_inline() {
    let mut main = MainContent::default();
    CITIZEN.load_section("payroll", &mut main);
    assert_eq!(main.blocks()[1], "  section 'payroll' is not available");
}
