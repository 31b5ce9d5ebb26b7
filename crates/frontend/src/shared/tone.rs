//! Colour tones used for conditional styling of records.

use contracts::enums::{AlertSeverity, BatchStatus, InspectionResult, UserRole, VendorStanding};
use thaw::BadgeColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pass,
    Fail,
    Pending,
    Muted,
    Vendor,
    Inspector,
    Admin,
}

impl Tone {
    /// Modifier suffix for BEM classes, e.g. `record__tile--pass`
    pub fn modifier(&self) -> &'static str {
        match self {
            Tone::Pass => "pass",
            Tone::Fail => "fail",
            Tone::Pending => "pending",
            Tone::Muted => "muted",
            Tone::Vendor => "vendor",
            Tone::Inspector => "inspector",
            Tone::Admin => "admin",
        }
    }

    /// Filled accent class for buttons, e.g. `accent--vendor`
    pub fn accent_class(&self) -> String {
        format!("accent--{}", self.modifier())
    }

    pub fn badge_color(&self) -> BadgeColor {
        match self {
            Tone::Pass => BadgeColor::Success,
            Tone::Fail => BadgeColor::Danger,
            Tone::Pending => BadgeColor::Warning,
            Tone::Muted => BadgeColor::Subtle,
            Tone::Vendor => BadgeColor::Severe,
            Tone::Inspector => BadgeColor::Success,
            Tone::Admin => BadgeColor::Brand,
        }
    }
}

impl From<UserRole> for Tone {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Vendor => Tone::Vendor,
            UserRole::Inspector => Tone::Inspector,
            UserRole::Admin => Tone::Admin,
        }
    }
}

impl From<BatchStatus> for Tone {
    fn from(status: BatchStatus) -> Self {
        match status {
            BatchStatus::Active => Tone::Pass,
            BatchStatus::Completed => Tone::Muted,
            BatchStatus::Pending => Tone::Pending,
        }
    }
}

impl From<InspectionResult> for Tone {
    fn from(result: InspectionResult) -> Self {
        match result {
            InspectionResult::Pass => Tone::Pass,
            InspectionResult::Fail => Tone::Fail,
        }
    }
}

impl From<AlertSeverity> for Tone {
    fn from(severity: AlertSeverity) -> Self {
        match severity {
            AlertSeverity::High => Tone::Fail,
            AlertSeverity::Medium => Tone::Pending,
            AlertSeverity::Low => Tone::Muted,
        }
    }
}

impl From<VendorStanding> for Tone {
    fn from(standing: VendorStanding) -> Self {
        match standing {
            VendorStanding::Excellent => Tone::Pass,
            VendorStanding::Good => Tone::Pending,
            VendorStanding::Warning => Tone::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_status_tones() {
        assert_eq!(Tone::from(BatchStatus::Active), Tone::Pass);
        assert_eq!(Tone::from(BatchStatus::Completed), Tone::Muted);
        assert_eq!(Tone::from(BatchStatus::Pending), Tone::Pending);
    }

    #[test]
    fn test_severity_tones() {
        assert_eq!(Tone::from(AlertSeverity::High).modifier(), "fail");
        assert_eq!(Tone::from(AlertSeverity::Medium).modifier(), "pending");
        assert_eq!(Tone::from(AlertSeverity::Low).modifier(), "muted");
    }

    #[test]
    fn test_role_tones() {
        assert_eq!(Tone::from(UserRole::Vendor).modifier(), "vendor");
        assert_eq!(Tone::from(UserRole::Admin).modifier(), "admin");
    }

    #[test]
    fn test_role_accent_class() {
        assert_eq!(Tone::from(UserRole::Vendor).accent_class(), "accent--vendor");
        assert_eq!(Tone::from(UserRole::Inspector).accent_class(), "accent--inspector");
    }
}
