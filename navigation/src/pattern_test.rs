use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_splits_static_and_param_segments() {
    let pattern = PathPattern::parse("/reviewer/application/:id").expect("pattern");
    assert_eq!(pattern.as_str(), "/reviewer/application/:id");
    assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
    assert!(pattern.has_params());
}

#[test]
fn parse_root_has_no_segments() {
    let pattern = PathPattern::parse("/").expect("pattern");
    assert_eq!(pattern.shape(), "/");
    assert_eq!(pattern.matches(&[]), Some(Params::new()));
}

#[test]
fn parse_rejects_missing_leading_slash() {
    let err = PathPattern::parse("admin/overview").expect_err("should fail");
    assert_eq!(err, PatternError::MissingLeadingSlash("admin/overview".into()));
}

#[test]
fn parse_rejects_empty_interior_segment() {
    let err = PathPattern::parse("/admin//overview").expect_err("should fail");
    assert!(matches!(err, PatternError::EmptySegment(_)));
}

#[test]
fn parse_rejects_invalid_param_name() {
    let err = PathPattern::parse("/student/application/:").expect_err("should fail");
    assert!(matches!(err, PatternError::InvalidParamName { ref name, .. } if name.is_empty()));

    let err = PathPattern::parse("/student/:1st").expect_err("should fail");
    assert!(matches!(err, PatternError::InvalidParamName { ref name, .. } if name == "1st"));
}

#[test]
fn parse_rejects_duplicate_param() {
    let err = PathPattern::parse("/a/:id/b/:id").expect_err("should fail");
    assert!(matches!(err, PatternError::DuplicateParam { ref name, .. } if name == "id"));
}

#[test]
fn parse_tolerates_trailing_slash() {
    let pattern = PathPattern::parse("/admin/overview/").expect("pattern");
    assert_eq!(pattern.shape(), "/admin/overview");
}

#[test]
fn shape_erases_param_names_and_case() {
    let a = PathPattern::parse("/Reviewer/application/:id").expect("pattern");
    let b = PathPattern::parse("/reviewer/application/:appId").expect("pattern");
    assert_eq!(a.shape(), b.shape());
    assert_eq!(a.shape(), "/reviewer/application/:");
}

// =============================================================
// Matching
// =============================================================

#[test]
fn matches_captures_dynamic_segment() {
    let pattern = PathPattern::parse("/student/application/:id").expect("pattern");
    let params = pattern.matches(&["student", "application", "42"]).expect("match");
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.len(), 1);
}

#[test]
fn matches_static_pattern_without_params() {
    let pattern = PathPattern::parse("/reviewer/applications").expect("pattern");
    let params = pattern.matches(&["reviewer", "applications"]).expect("match");
    assert!(params.is_empty());
}

#[test]
fn matches_static_segments_case_insensitively() {
    let pattern = PathPattern::parse("/admin/overview").expect("pattern");
    assert!(pattern.matches(&["ADMIN", "Overview"]).is_some());
}

#[test]
fn matches_rejects_wrong_length_and_wrong_static() {
    let pattern = PathPattern::parse("/student/application/:id").expect("pattern");
    assert!(pattern.matches(&["student", "application"]).is_none());
    assert!(pattern.matches(&["student", "application", "1", "extra"]).is_none());
    assert!(pattern.matches(&["student", "applications", "1"]).is_none());
}

#[test]
fn matches_rejects_empty_param_segment() {
    let pattern = PathPattern::parse("/student/application/:id").expect("pattern");
    assert!(pattern.matches(&["student", "application", ""]).is_none());
}

#[test]
fn matches_decodes_param_value() {
    let pattern = PathPattern::parse("/reviewer/application/:id").expect("pattern");
    let params = pattern.matches(&["reviewer", "application", "a%2Fb%20c"]).expect("match");
    assert_eq!(params.get("id"), Some("a/b c"));
}

#[test]
fn matches_param_value_keeps_case() {
    let pattern = PathPattern::parse("/reviewer/application/:id").expect("pattern");
    let params = pattern.matches(&["reviewer", "application", "AbC"]).expect("match");
    assert_eq!(params.get("id"), Some("AbC"));
}

// =============================================================
// Building
// =============================================================

#[test]
fn build_substitutes_params() {
    let pattern = PathPattern::parse("/student/application/:id").expect("pattern");
    let href = pattern.build(&Params::from([("id", "42")])).expect("build");
    assert_eq!(href, "/student/application/42");
}

#[test]
fn build_encodes_reserved_characters() {
    let pattern = PathPattern::parse("/reviewer/application/:id").expect("pattern");
    let href = pattern.build(&Params::from([("id", "a/b c?#%")])).expect("build");
    assert_eq!(href, "/reviewer/application/a%2Fb%20c%3F%23%25");
}

#[test]
fn build_reports_missing_param() {
    let pattern = PathPattern::parse("/student/application/:id").expect("pattern");
    assert_eq!(pattern.build(&Params::new()), Err(BuildError::MissingParam("id".to_owned())));
    assert_eq!(pattern.build(&Params::from([("id", "")])), Err(BuildError::MissingParam("id".to_owned())));
}

#[test]
fn build_rejects_dot_segments() {
    let pattern = PathPattern::parse("/reviewer/application/:id").expect("pattern");
    for value in [".", ".."] {
        assert_eq!(
            pattern.build(&Params::from([("id", value)])),
            Err(BuildError::DotSegment { name: "id".to_owned(), value: value.to_owned() }),
        );
    }
}

#[test]
fn build_keeps_dots_inside_values() {
    let pattern = PathPattern::parse("/reviewer/application/:id").expect("pattern");
    assert_eq!(pattern.build(&Params::from([("id", "a.b")])), Ok("/reviewer/application/a.b".to_owned()));
    assert_eq!(pattern.build(&Params::from([("id", "...")])), Ok("/reviewer/application/...".to_owned()));
}

#[test]
fn build_static_pattern_ignores_params() {
    let pattern = PathPattern::parse("/admin/overview").expect("pattern");
    assert_eq!(pattern.build(&Params::from([("id", "1")])), Ok("/admin/overview".to_owned()));
}
