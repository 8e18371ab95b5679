use super::*;

#[test]
fn route_id_parses_to_case_id() {
    assert_eq!(parse_case_id(Some("7")), Some(ItemId(7)));
    assert_eq!(parse_case_id(Some(" 42 ")), Some(ItemId(42)));
}

#[test]
fn bad_route_id_is_rejected() {
    assert_eq!(parse_case_id(None), None);
    assert_eq!(parse_case_id(Some("")), None);
    assert_eq!(parse_case_id(Some("sieben")), None);
}
