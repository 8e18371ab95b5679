use super::*;

#[test]
fn timestamp_is_shown_day_first_to_the_minute() {
    assert_eq!(format_timestamp("2024-03-01T10:00:00"), "01.03.2024 10:00");
    assert_eq!(format_timestamp("2024-12-24T18:45:12.337000"), "24.12.2024 18:45");
}

#[test]
fn unexpected_timestamps_pass_through() {
    assert_eq!(format_timestamp(""), "");
    assert_eq!(format_timestamp("gestern"), "gestern");
    assert_eq!(format_timestamp("2024-03T1"), "2024-03T1");
}

#[test]
fn short_text_is_untouched() {
    assert_eq!(truncate("Papierstau", 20), "Papierstau");
}

#[test]
fn long_text_is_cut_on_char_boundary() {
    assert_eq!(truncate("Drucker im Büro druckt nicht", 12), "Drucker im…");
    assert_eq!(truncate("äöüäöü", 4), "äöü…");
}
