use chrono::{DateTime, Datelike, Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {0:?}")]
pub struct InvalidDate(pub String);

/// Accepts `dd-MM-yyyy`, `yyyy-MM-dd` or an RFC 3339 timestamp.
pub fn normalize_date(input: &str) -> Result<NaiveDate, InvalidDate> {
    let trimmed = input.trim();
    if let Some(date) = parse_day_first(trimmed).or_else(|| parse_iso(trimmed)) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| InvalidDate(trimmed.to_string()))
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Parses the year picker's value, keeping `current` when it is not a
/// plausible year.
pub fn parse_year(raw: &str, current: i32) -> i32 {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|year| (1970..=9999).contains(year))
        .unwrap_or(current)
}

fn parse_day_first(value: &str) -> Option<NaiveDate> {
    if !has_shape(value, &[2, 5]) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%d-%m-%Y").ok()
}

fn parse_iso(value: &str) -> Option<NaiveDate> {
    if !has_shape(value, &[4, 7]) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

// Ten ASCII characters, dashes exactly at `dashes`, digits elsewhere.
fn has_shape(value: &str, dashes: &[usize]) -> bool {
    value.len() == 10
        && value.char_indices().all(|(idx, ch)| {
            if dashes.contains(&idx) {
                ch == '-'
            } else {
                ch.is_ascii_digit()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(input: &str) -> String {
        to_iso(normalize_date(input).unwrap())
    }

    #[test]
    fn day_first_dates_become_iso() {
        assert_eq!(iso("26-08-2025"), "2025-08-26");
        assert_eq!(iso(" 01-01-2024 "), "2024-01-01");
    }

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(iso("2025-08-30"), "2025-08-30");
    }

    #[test]
    fn timestamps_keep_their_date() {
        assert_eq!(iso("2025-08-26T10:00:00+02:00"), "2025-08-26");
    }

    #[test]
    fn year_input_falls_back_to_current() {
        assert_eq!(parse_year("2024", 2025), 2024);
        assert_eq!(parse_year("", 2025), 2025);
        assert_eq!(parse_year("24x", 2025), 2025);
        assert_eq!(parse_year("12", 2025), 2025);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for input in ["", "tomorrow", "2025/08/26", "26-8-2025", "31-02-2025", "2025-13-01"] {
            assert_eq!(
                normalize_date(input),
                Err(InvalidDate(input.trim().to_string())),
                "{input:?} should be rejected"
            );
        }
    }
}
