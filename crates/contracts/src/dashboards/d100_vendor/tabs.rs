use crate::dashboards::tabs::DashboardTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorTab {
    #[default]
    Entry,
    Batches,
}

impl DashboardTab for VendorTab {
    fn all() -> &'static [Self] {
        &[VendorTab::Entry, VendorTab::Batches]
    }

    fn code(&self) -> &'static str {
        match self {
            VendorTab::Entry => "entry",
            VendorTab::Batches => "batches",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            VendorTab::Entry => "Product Entry",
            VendorTab::Batches => "My Batches",
        }
    }
}
