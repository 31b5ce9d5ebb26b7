/// Utilities for date formatting
///
/// Sample records carry `NaiveDate`; the UI shows them as ISO dates.
use chrono::NaiveDate;

/// Format a date as YYYY-MM-DD
/// Example: 2024-01-15 -> "2024-01-15"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an optional date, "—" when absent
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
    }

    #[test]
    fn test_format_optional_date() {
        assert_eq!(format_optional_date(None), "—");
        assert_eq!(
            format_optional_date(NaiveDate::from_ymd_opt(2029, 1, 10)),
            "2029-01-10"
        );
    }
}
