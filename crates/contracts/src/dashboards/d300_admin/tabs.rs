use crate::dashboards::tabs::DashboardTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Reports,
    Alerts,
}

impl AdminTab {
    /// Заголовок вкладки; у "Alerts" выводится число необработанных уведомлений
    pub fn label(&self, pending_alerts: u32) -> String {
        match self {
            AdminTab::Alerts => format!("{} ({})", self.title(), pending_alerts),
            _ => self.title().to_string(),
        }
    }
}

impl DashboardTab for AdminTab {
    fn all() -> &'static [Self] {
        &[AdminTab::Overview, AdminTab::Reports, AdminTab::Alerts]
    }

    fn code(&self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Reports => "reports",
            AdminTab::Alerts => "alerts",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Reports => "Reports",
            AdminTab::Alerts => "Alerts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(AdminTab::Alerts.label(5), "Alerts (5)");
        assert_eq!(AdminTab::Reports.label(5), "Reports");
    }
}
