use crate::Page;

#[test]
fn test_page_transitions() {
    assert_eq!(Page::Login.on_success(), Page::Dashboard);
    assert_eq!(Page::Register.on_success(), Page::Login);
    assert_eq!(Page::Dashboard.on_success(), Page::Dashboard);
}

#[test]
fn test_page_display_is_route_path() {
    assert_eq!(Page::Register.to_string(), "/register");
}

#[test]
fn test_page_default_is_login() {
    assert_eq!(Page::default(), Page::Login);
}
