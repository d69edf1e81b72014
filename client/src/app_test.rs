use super::*;
use navigation::RouteTable;

fn state_for(href: &str) -> NavigationState {
    NavigationState::resolve(&RouteTable::gradpath(), navigation::Location::parse(href))
}

#[test]
fn document_title_includes_id_for_dynamic_routes() {
    assert_eq!(document_title(&state_for("/student/application/42")), "My Application #42 · GradPath");
    assert_eq!(document_title(&state_for("/reviewer/application/7")), "Review Application #7 · GradPath");
}

#[test]
fn document_title_for_static_routes() {
    assert_eq!(document_title(&state_for("/reviewer/applications")), "Applications · GradPath");
    assert_eq!(document_title(&state_for("/admin/overview")), "System Overview · GradPath");
}

#[test]
fn document_title_for_not_found() {
    assert_eq!(document_title(&state_for("/unknown")), "Page not found · GradPath");
    assert_eq!(document_title(&NavigationState::default()), "Page not found · GradPath");
}
