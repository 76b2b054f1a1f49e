use chrono::{DateTime, Duration, NaiveDate};

use crate::{
    LOOKBACK_DAYS,
    error::{DvError, DvResult},
};

pub fn date_from_str(s: &str) -> DvResult<NaiveDate> {
    const FORMATS: &[&str] = &[
        "%Y%m%d",
        "%Y-%m-%d",
        "%Y%m%dT%H%M%S",        // ISO 8601 Basic
        "%Y-%m-%dT%H:%M:%S%.f", // ISO 8601 Extended
    ];

    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        // RFC 3339
        return Ok(datetime.date_naive());
    }

    Err(DvError::Invalid {
        code: "INVALID_DATE",
        message: format!("Unable to parse date '{s}'"),
    })
}

pub fn date_to_str(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Trailing window ending at the as-of date, inclusive on both sides
pub fn lookback_window(as_of: &NaiveDate) -> (NaiveDate, NaiveDate) {
    (*as_of - Duration::days(LOOKBACK_DAYS), *as_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_str() {
        assert_eq!(
            date_to_str(&date_from_str("20231231").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("20231231T235959").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31T23:59:59").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31T23:59:59Z").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31T23:59:59+08:00").unwrap()),
            "2023-12-31"
        );
        assert!(date_from_str("invalid-date").is_err());
    }

    #[test]
    fn test_date_to_str() {
        assert_eq!(
            date_to_str(&NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
            "2023-01-01"
        );
        assert_eq!(
            date_to_str(&NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
            "2023-12-31"
        );
    }

    #[test]
    fn test_lookback_window() {
        let (start, end) = lookback_window(&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(date_to_str(&start), "2023-03-02");
        assert_eq!(date_to_str(&end), "2024-03-01");
    }
}
