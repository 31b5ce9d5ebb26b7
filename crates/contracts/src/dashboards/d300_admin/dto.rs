use serde::{Deserialize, Serialize};

/// Сводные показатели системы (карточки на вкладке "Overview")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_vendors: u32,
    pub active_inspectors: u32,
    pub monthly_inspections: u32,
    /// Общая доля принятых изделий, %
    pub pass_rate: f64,
    pub pending_alerts: u32,
    pub warranty_expiring: u32,
}

impl SystemStats {
    /// Доля для индикатора прогресса, 0.0..=1.0
    pub fn pass_rate_fraction(&self) -> f64 {
        (self.pass_rate / 100.0).clamp(0.0, 1.0)
    }

    pub fn pass_rate_label(&self) -> String {
        format!("{:.1}%", self.pass_rate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    VendorPerformance,
    WarrantyExpiry,
    QualityExceptions,
    InventoryStatus,
}

/// Карточка отчёта на вкладке "Reports" (сами отчёты не формируются)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDescriptor {
    pub kind: ReportKind,
    pub title: String,
    pub subtitle: String,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(pass_rate: f64) -> SystemStats {
        SystemStats {
            total_vendors: 1,
            active_inspectors: 1,
            monthly_inspections: 1,
            pass_rate,
            pending_alerts: 0,
            warranty_expiring: 0,
        }
    }

    #[test]
    fn test_pass_rate_fraction_is_clamped() {
        assert!((stats(92.5).pass_rate_fraction() - 0.925).abs() < 1e-9);
        assert_eq!(stats(140.0).pass_rate_fraction(), 1.0);
        assert_eq!(stats(-3.0).pass_rate_fraction(), 0.0);
    }

    #[test]
    fn test_pass_rate_label() {
        assert_eq!(stats(92.5).pass_rate_label(), "92.5%");
    }
}
