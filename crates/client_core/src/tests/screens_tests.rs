use super::*;

fn assert_login_only(screens: &ScreenController) {
    assert_eq!(screens.visible_screens(), vec![ScreenName::Login]);
    for screen in [ScreenName::NavHeader, ScreenName::Sidebar, ScreenName::Main] {
        assert!(!screens.is_visible(screen), "{screen} should be hidden");
    }
}

fn assert_authenticated_trio(screens: &ScreenController) {
    assert!(!screens.is_visible(ScreenName::Login));
    assert_eq!(
        screens.visible_screens(),
        vec![ScreenName::NavHeader, ScreenName::Sidebar, ScreenName::Main]
    );
}

#[test]
fn starts_on_login_layout() {
    let screens = ScreenController::new();
    assert_eq!(screens.layout(), Layout::Unauthenticated);
    assert_login_only(&screens);
}

#[test]
fn authenticated_layout_shows_exactly_the_trio() {
    let mut screens = ScreenController::new();
    screens.enter_authenticated();
    assert_authenticated_trio(&screens);
}

#[test]
fn transitions_are_idempotent() {
    let mut screens = ScreenController::new();
    screens.enter_authenticated();
    let once = screens.visible_screens();
    screens.enter_authenticated();
    assert_eq!(screens.visible_screens(), once);

    screens.enter_unauthenticated();
    screens.enter_unauthenticated();
    assert_login_only(&screens);
}

#[test]
fn every_screen_belongs_to_exactly_one_layout() {
    for screen in ScreenName::ALL {
        let in_login = Layout::Unauthenticated.screens().contains(&screen);
        let in_app = Layout::Authenticated.screens().contains(&screen);
        assert!(in_login ^ in_app, "{screen} must be in exactly one group");
    }
}

#[test]
fn leaving_authenticated_layout_clears_main() {
    let mut screens = ScreenController::new();
    screens.enter_authenticated();
    screens.main_content_mut().push("citizen dashboard");
    screens.enter_unauthenticated();
    assert!(screens.main_content().is_empty());
}

#[test]
fn re_entering_authenticated_keeps_main_until_cleared() {
    let mut screens = ScreenController::new();
    screens.enter_authenticated();
    screens.main_content_mut().push("worker tasks");
    screens.enter_authenticated();
    assert_eq!(screens.main_content().render(), "worker tasks");
    screens.clear_main();
    assert!(screens.main_content().is_empty());
}
