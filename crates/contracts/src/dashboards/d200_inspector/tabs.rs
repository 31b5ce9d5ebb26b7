use crate::dashboards::tabs::DashboardTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectorTab {
    #[default]
    Scanner,
    History,
}

impl DashboardTab for InspectorTab {
    fn all() -> &'static [Self] {
        &[InspectorTab::Scanner, InspectorTab::History]
    }

    fn code(&self) -> &'static str {
        match self {
            InspectorTab::Scanner => "scanner",
            InspectorTab::History => "history",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            InspectorTab::Scanner => "QR Scanner",
            InspectorTab::History => "Inspection History",
        }
    }
}
