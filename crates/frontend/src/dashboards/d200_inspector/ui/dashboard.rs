use super::history::InspectionHistory;
use super::scanner::Scanner;
use crate::layout::{Shell, TabNav};
use contracts::dashboards::d200_inspector::{InspectorTab, ScannerState};
use contracts::dashboards::TabSelector;
use contracts::enums::UserRole;
use leptos::prelude::*;

fn tab_icon(tab: InspectorTab) -> &'static str {
    match tab {
        InspectorTab::Scanner => "qr-code",
        InspectorTab::History => "file-text",
    }
}

/// Inspector Dashboard component
#[component]
pub fn InspectorDashboard(on_logout: Callback<()>) -> impl IntoView {
    let tabs = RwSignal::new(TabSelector::<InspectorTab>::new());
    let scanner = RwSignal::new(ScannerState::default());

    view! {
        <Shell
            role=UserRole::Inspector
            title="Inspector Dashboard"
            subtitle="Quality Control & Inspection"
            icon_name="search-check"
            on_logout=on_logout
            nav=move || view! { <TabNav selector=tabs icon_for=tab_icon /> }.into_any()
            content=move || match tabs.with(|t| t.active()) {
                InspectorTab::Scanner => view! { <Scanner state=scanner /> }.into_any(),
                InspectorTab::History => view! { <InspectionHistory /> }.into_any(),
            }
        />
    }
}
