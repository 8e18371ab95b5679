//! Display formatting for service values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a service timestamp (`2024-03-01T10:00:00.123456`) as
/// `01.03.2024 10:00`. Anything not in that shape is shown as sent.
pub fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_owned();
    };
    let Some(minutes) = time.get(..5) else {
        return raw.to_owned();
    };
    format!("{day}.{month}.{year} {minutes}")
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
