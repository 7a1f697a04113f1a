//! Display formatting helpers shared by the UI.

use chrono::{DateTime, Datelike, Utc};

use crate::models::parse_utc;

/// Two-letter badge for shows without artwork: the first two
/// characters of the name, uppercased.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

/// English month name, 1-based.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

/// Format a backend date string for cards: "Fri, Mar 15 · 23:00".
/// Falls back to the raw string when unparseable.
pub fn display_date(raw: &str) -> String {
    match parse_utc(raw) {
        Some(dt) => format!(
            "{}, {} {} · {:02}:{:02}",
            dt.format("%a"),
            dt.format("%b"),
            dt.day(),
            dt.format("%H"),
            dt.format("%M")
        ),
        None => raw.to_string(),
    }
}

/// Format a UTC timestamp as a human-readable relative time string.
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let secs = (now - *dt).num_seconds().max(0);

    if secs < 60 {
        "just now".into()
    } else if secs < 3600 {
        let m = secs / 60;
        format!("{m}m ago")
    } else if secs < 86400 {
        let h = secs / 3600;
        format!("{h}h ago")
    } else {
        let d = secs / 86400;
        format!("{d}d ago")
    }
}

/// Relative time for a raw backend date string; raw string on failure.
pub fn relative_time_str(raw: &str) -> String {
    match parse_utc(raw) {
        Some(dt) => relative_time(&dt),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn initials_are_two_uppercased_chars() {
        assert_eq!(initials("frieren"), "FR");
        assert_eq!(initials("x"), "X");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn display_date_falls_back_to_raw() {
        assert_eq!(display_date("garbage"), "garbage");
        assert_eq!(display_date("2024-03-15 23:00:00"), "Fri, Mar 15 · 23:00");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(&(now - Duration::seconds(10))), "just now");
        assert_eq!(relative_time(&(now - Duration::minutes(5))), "5m ago");
        assert_eq!(relative_time(&(now - Duration::hours(3))), "3h ago");
        assert_eq!(relative_time(&(now - Duration::days(2))), "2d ago");
    }
}
