use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Гарантийный срок, заявленный поставщиком (в полных годах)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarrantyPeriod {
    pub years: u32,
}

impl WarrantyPeriod {
    pub fn years(years: u32) -> Self {
        Self { years }
    }

    /// Дата окончания гарантии от даты производства.
    ///
    /// 29 февраля переносится на последний день месяца: 2024-02-29 + 1 год = 2025-02-28.
    pub fn expires_on(&self, manufactured: NaiveDate) -> Option<NaiveDate> {
        let months = self.years.checked_mul(12)?;
        manufactured.checked_add_months(Months::new(months))
    }
}

impl fmt::Display for WarrantyPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years == 1 {
            write!(f, "1 year")
        } else {
            write!(f, "{} years", self.years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(WarrantyPeriod::years(5).to_string(), "5 years");
        assert_eq!(WarrantyPeriod::years(1).to_string(), "1 year");
        assert_eq!(WarrantyPeriod::years(0).to_string(), "0 years");
    }

    #[test]
    fn test_expires_on() {
        assert_eq!(
            WarrantyPeriod::years(5).expires_on(ymd(2024, 1, 10)),
            Some(ymd(2029, 1, 10))
        );
    }

    #[test]
    fn test_expires_on_leap_day_clamps() {
        assert_eq!(
            WarrantyPeriod::years(1).expires_on(ymd(2024, 2, 29)),
            Some(ymd(2025, 2, 28))
        );
        assert_eq!(
            WarrantyPeriod::years(4).expires_on(ymd(2024, 2, 29)),
            Some(ymd(2028, 2, 29))
        );
    }

    #[test]
    fn test_expires_on_overflow() {
        assert_eq!(WarrantyPeriod::years(u32::MAX).expires_on(ymd(2024, 1, 1)), None);
    }
}
