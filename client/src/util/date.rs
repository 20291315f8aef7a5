//! Display formatting for service timestamps.
//!
//! Timestamps arrive as ISO-8601 strings (`2024-01-01T09:30:00.000Z`). The
//! list shows the date, the detail page shows date and minute. Anything that
//! does not look like ISO-8601 is shown as-is.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

fn looks_iso(ts: &str) -> bool {
    let bytes = ts.as_bytes();
    bytes.len() >= 10
        && bytes[..10]
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() })
}

/// `YYYY-MM-DD` portion of an ISO timestamp.
pub fn display_date(ts: &str) -> String {
    if looks_iso(ts) { ts[..10].to_owned() } else { ts.to_owned() }
}

/// `YYYY-MM-DD HH:MM` portion of an ISO timestamp.
pub fn display_date_time(ts: &str) -> String {
    if !looks_iso(ts) {
        return ts.to_owned();
    }
    match ts.get(11..16) {
        Some(time) if ts.as_bytes().get(10) == Some(&b'T') => format!("{} {time}", &ts[..10]),
        _ => ts[..10].to_owned(),
    }
}
