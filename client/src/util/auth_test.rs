use super::*;

#[test]
fn stored_token_is_trimmed() {
    assert_eq!(normalize_token(Some(" eyJhbGciOi.x.y \n".to_owned())), Some("eyJhbGciOi.x.y".to_owned()));
}

#[test]
fn empty_or_placeholder_tokens_are_ignored() {
    assert_eq!(normalize_token(None), None);
    assert_eq!(normalize_token(Some(String::new())), None);
    assert_eq!(normalize_token(Some("null".to_owned())), None);
    assert_eq!(normalize_token(Some("undefined".to_owned())), None);
}

#[test]
fn no_session_without_browser_storage() {
    assert!(!has_session());
}
