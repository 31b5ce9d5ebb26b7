use super::batches::BatchList;
use super::product_entry::ProductEntryForm;
use crate::layout::{Shell, TabNav};
use contracts::dashboards::d100_vendor::VendorTab;
use contracts::dashboards::TabSelector;
use contracts::domain::a006_product_entry::ProductEntryDraft;
use contracts::enums::UserRole;
use leptos::prelude::*;

fn tab_icon(tab: VendorTab) -> &'static str {
    match tab {
        VendorTab::Entry => "plus",
        VendorTab::Batches => "bar-chart",
    }
}

/// Vendor Dashboard component
#[component]
pub fn VendorDashboard(on_logout: Callback<()>) -> impl IntoView {
    let tabs = RwSignal::new(TabSelector::<VendorTab>::new());
    // черновик живёт на уровне дашборда и переживает переключение вкладок
    let draft = RwSignal::new(ProductEntryDraft::default());

    view! {
        <Shell
            role=UserRole::Vendor
            title="Vendor Dashboard"
            subtitle="Product Management System"
            icon_name="package"
            on_logout=on_logout
            nav=move || view! { <TabNav selector=tabs icon_for=tab_icon /> }.into_any()
            content=move || match tabs.with(|t| t.active()) {
                VendorTab::Entry => view! { <ProductEntryForm draft=draft /> }.into_any(),
                VendorTab::Batches => view! { <BatchList /> }.into_any(),
            }
        />
    }
}
