use super::*;

#[test]
fn identifiers_match_page_component_names() {
    assert_eq!(ViewId::MyApplication.identifier(), "MyApplicationPage");
    assert_eq!(ViewId::ApplicationList.identifier(), "ApplicationListPage");
    assert_eq!(ViewId::ReviewDetail.identifier(), "ReviewDetailPage");
    assert_eq!(ViewId::SystemOverview.identifier(), "SystemOverviewPage");
}

#[test]
fn from_identifier_inverts_identifier() {
    for view in ViewId::ALL {
        assert_eq!(ViewId::from_identifier(view.identifier()), Some(view));
    }
    assert_eq!(ViewId::from_identifier("LoginPage"), None);
}

#[test]
fn views_belong_to_expected_roles() {
    assert_eq!(ViewId::MyApplication.role(), Role::Student);
    assert_eq!(ViewId::ApplicationList.role(), Role::Reviewer);
    assert_eq!(ViewId::ReviewDetail.role(), Role::Reviewer);
    assert_eq!(ViewId::SystemOverview.role(), Role::Admin);
}

#[test]
fn every_role_owns_at_least_one_view() {
    for role in Role::ALL {
        assert!(ViewId::ALL.iter().any(|v| v.role() == role), "{role:?} has no view");
    }
}

#[test]
fn view_serializes_as_identifier() {
    let json = serde_json::to_string(&ViewId::ReviewDetail).expect("serialize");
    assert_eq!(json, "\"ReviewDetailPage\"");
    let back: ViewId = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, ViewId::ReviewDetail);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).expect("serialize"), "\"admin\"");
    assert_eq!(Role::Reviewer.as_str(), "reviewer");
}

#[test]
fn display_uses_identifier() {
    assert_eq!(ViewId::SystemOverview.to_string(), "SystemOverviewPage");
}
