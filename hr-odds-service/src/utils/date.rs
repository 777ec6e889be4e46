use chrono::{DateTime, NaiveDate, NaiveDateTime};
use service_core::error::AppError;

/// Date layouts accepted from callers. `%m` and `%d` also accept unpadded
/// values, so `2023-7-4` matches the first entry.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Normalise a caller-supplied date to the `YYYY-MM-DD` key used in the store.
pub fn normalize_date(input: &str) -> Result<String, AppError> {
    parse_date(input.trim())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AppError::InvalidDate(input.to_string()))
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if input.is_empty() {
        return None;
    }

    if let Some(date) = parse_compact(input) {
        return Some(date);
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }

    // Timestamps keep the calendar date of their own offset.
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|datetime| datetime.date())
}

/// `YYYYMMDD`
fn parse_compact(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = input[0..4].parse().ok()?;
    let month = input[4..6].parse().ok()?;
    let day = input[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(normalize_date("2023-07-04").unwrap(), "2023-07-04");
    }

    #[test]
    fn unpadded_dates_are_padded() {
        assert_eq!(normalize_date("2023-7-4").unwrap(), "2023-07-04");
        assert_eq!(normalize_date("2023/7/4").unwrap(), "2023-07-04");
    }

    #[test]
    fn other_common_layouts() {
        assert_eq!(normalize_date("20230704").unwrap(), "2023-07-04");
        assert_eq!(normalize_date("7/4/2023").unwrap(), "2023-07-04");
        assert_eq!(normalize_date("July 4, 2023").unwrap(), "2023-07-04");
        assert_eq!(normalize_date("4 July 2023").unwrap(), "2023-07-04");
        assert_eq!(normalize_date("  2023-07-04 ").unwrap(), "2023-07-04");
    }

    #[test]
    fn timestamps_keep_their_date() {
        assert_eq!(normalize_date("2023-07-04T18:05:00").unwrap(), "2023-07-04");
        assert_eq!(normalize_date("2023-07-04 18:05:00.250").unwrap(), "2023-07-04");
        assert_eq!(
            normalize_date("2023-07-04T23:30:00-05:00").unwrap(),
            "2023-07-04"
        );
    }

    #[test]
    fn garbage_is_rejected() {
        for input in ["", "   ", "yesterday", "2023-13-01", "2023-02-30", "99999999"] {
            match normalize_date(input) {
                Err(AppError::InvalidDate(echo)) => assert_eq!(echo, input),
                other => panic!("{:?} should be rejected, got {:?}", input, other),
            }
        }
    }
}
