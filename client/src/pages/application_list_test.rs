use super::*;

#[test]
fn parse_application_id_trims_input() {
    assert_eq!(parse_application_id("  42 "), Some("42".to_owned()));
}

#[test]
fn parse_application_id_rejects_blank_input() {
    assert_eq!(parse_application_id(""), None);
    assert_eq!(parse_application_id("   "), None);
}

#[test]
fn parse_application_id_keeps_inner_characters() {
    assert_eq!(parse_application_id("2024/CS-7"), Some("2024/CS-7".to_owned()));
}
