use super::*;

const SAMPLE: &str = r#"{
    "id": 7,
    "titel": "Drucker druckt nicht",
    "beschreibung": "Papierstau im 2. OG",
    "prioritaet": "Hoch",
    "zustand": "In Bearbeitung",
    "erstellt_am": "2024-03-01T09:15:00",
    "benutzer_id": 3,
    "comments": [
        {"id": 1, "text": "Techniker informiert", "erstellt_am": "2024-03-01T10:00:00", "benutzer_id": 3, "servicefall_id": 7}
    ]
}"#;

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn decodes_service_shape() {
    let item: WorkItem = serde_json::from_str(SAMPLE).unwrap_or_else(|e| panic!("decode: {e}"));
    assert_eq!(item.id, ItemId(7));
    assert_eq!(item.title, "Drucker druckt nicht");
    assert_eq!(item.priority, Priority::High);
    assert_eq!(item.status, Status::InProgress);
    assert_eq!(item.owner_id, Some(3));
    assert_eq!(item.comments.len(), 1);
    assert_eq!(item.comments[0].text, "Techniker informiert");
    assert_eq!(item.comments[0].created_at, "2024-03-01T10:00:00");
    assert_eq!(item.comments[0].id, 1);
    assert_eq!(item.comments[0].author_id, Some(3));
}

#[test]
fn optional_fields_default() {
    let raw = r#"{"id": 1, "titel": "t", "prioritaet": "Niedrig", "zustand": "Offen"}"#;
    let item: WorkItem = serde_json::from_str(raw).unwrap_or_else(|e| panic!("decode: {e}"));
    assert!(item.description.is_empty());
    assert!(item.comments.is_empty());
    assert_eq!(item.owner_id, None);
}

#[test]
fn unknown_status_fails_decoding() {
    let raw = r#"{"id": 1, "titel": "t", "prioritaet": "Niedrig", "zustand": "Archiviert"}"#;
    assert!(serde_json::from_str::<WorkItem>(raw).is_err());
}

#[test]
fn unknown_priority_fails_decoding() {
    let raw = r#"{"id": 1, "titel": "t", "prioritaet": "Kritisch", "zustand": "Offen"}"#;
    assert!(serde_json::from_str::<WorkItem>(raw).is_err());
}

// =============================================================
// Status
// =============================================================

#[test]
fn status_wire_literals() {
    let wire: Vec<&str> = Status::ALL.into_iter().map(Status::as_wire).collect();
    assert_eq!(wire, vec!["Offen", "In Bearbeitung", "Test", "Geschlossen"]);
}

#[test]
fn status_serializes_to_wire_literal() {
    assert_eq!(serde_json::to_string(&Status::InProgress).unwrap_or_default(), "\"In Bearbeitung\"");
}

#[test]
fn status_positions_follow_column_order() {
    for (index, status) in Status::ALL.into_iter().enumerate() {
        assert_eq!(status.position(), index);
    }
    assert!(Status::Open < Status::InProgress && Status::Test < Status::Closed);
}

#[test]
fn status_from_wire_is_exact() {
    assert_eq!(Status::from_wire("Geschlossen"), Some(Status::Closed));
    assert_eq!(Status::from_wire("geschlossen"), None);
}

#[test]
fn status_parses_wire_and_slug_case_insensitively() {
    assert_eq!("in bearbeitung".parse::<Status>(), Ok(Status::InProgress));
    assert_eq!("in_progress".parse::<Status>(), Ok(Status::InProgress));
    assert_eq!("CLOSED".parse::<Status>(), Ok(Status::Closed));
    assert_eq!(
        "done".parse::<Status>(),
        Err(UnknownVariant { kind: "status", value: "done".to_owned() })
    );
}

// =============================================================
// Priority and ItemId
// =============================================================

#[test]
fn priority_parses_wire_and_slug() {
    assert_eq!("Mittel".parse::<Priority>(), Ok(Priority::Medium));
    assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn item_id_is_a_bare_number_on_the_wire() {
    assert_eq!(serde_json::to_string(&ItemId(42)).unwrap_or_default(), "42");
    assert_eq!(" 42 ".parse::<ItemId>(), Ok(ItemId(42)));
    assert_eq!(ItemId(42).to_string(), "42");
}
