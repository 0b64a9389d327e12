//! Format - Formatting Utilities

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format just the date portion, local time
pub fn format_date(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d").to_string()
}

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Normalize a backend date string to `yyyy-MM-dd`.
///
/// The backend serves dates of birth as either full ISO datetimes or plain
/// dates; both the profile form and update payloads want the plain form.
pub fn to_ymd(s: &str) -> Option<String> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    // "2024-03-18 09:30:00" and similar, date first
    let prefix: String = s.chars().take(10).collect();
    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Truncate a string to max chars with ellipsis, safe on multi-byte text
pub fn truncate(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 && *c != '-' && chars[i - 1] != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// First letters of the first two name parts, uppercased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ymd_from_rfc3339() {
        assert_eq!(
            to_ymd("1992-07-14T00:00:00.000Z").as_deref(),
            Some("1992-07-14")
        );
    }

    #[test]
    fn test_to_ymd_from_plain_date() {
        assert_eq!(to_ymd("1992-07-14").as_deref(), Some("1992-07-14"));
        assert_eq!(to_ymd(" 1992-07-14 ").as_deref(), Some("1992-07-14"));
    }

    #[test]
    fn test_to_ymd_rejects_garbage() {
        assert_eq!(to_ymd("not a date"), None);
        assert_eq!(to_ymd(""), None);
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("paracetamol", 20), "paracetamol");
        assert_eq!(truncate("paracetamol", 8), "parac...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Bangla text must never split inside a character.
        let bn = "প্যারাসিটামল ৫০০ মিগ্রা";
        let short = truncate(bn, 10);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 10);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-4521), "-4,521");
        assert_eq!(format_number(-123456), "-123,456");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Ahmed"), "SA");
        assert_eq!(initials("admin"), "A");
        assert_eq!(initials(""), "");
    }
}
