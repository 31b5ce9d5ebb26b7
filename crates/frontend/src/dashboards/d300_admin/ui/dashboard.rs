use super::alerts::AlertList;
use super::overview::Overview;
use super::reports::Reports;
use crate::layout::{Shell, TabNav};
use contracts::dashboards::d300_admin::AdminTab;
use contracts::dashboards::TabSelector;
use contracts::enums::UserRole;
use contracts::shared::sample_data;
use leptos::prelude::*;

fn tab_icon(tab: AdminTab) -> &'static str {
    match tab {
        AdminTab::Overview => "trending-up",
        AdminTab::Reports => "file-text",
        AdminTab::Alerts => "alert-triangle",
    }
}

fn tab_label(tab: AdminTab) -> String {
    tab.label(sample_data::SYSTEM_STATS.pending_alerts)
}

/// Admin Dashboard component
#[component]
pub fn AdminDashboard(on_logout: Callback<()>) -> impl IntoView {
    let tabs = RwSignal::new(TabSelector::<AdminTab>::new());

    view! {
        <Shell
            role=UserRole::Admin
            title="Admin Dashboard"
            subtitle="System Monitoring & Management"
            icon_name="settings"
            on_logout=on_logout
            nav=move || {
                view! { <TabNav selector=tabs icon_for=tab_icon label_for=tab_label /> }.into_any()
            }
            content=move || match tabs.with(|t| t.active()) {
                AdminTab::Overview => view! { <Overview /> }.into_any(),
                AdminTab::Reports => view! { <Reports /> }.into_any(),
                AdminTab::Alerts => view! { <AlertList /> }.into_any(),
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_tab_shows_pending_count() {
        assert_eq!(tab_label(AdminTab::Alerts), "Alerts (5)");
        assert_eq!(tab_label(AdminTab::Overview), "Overview");
    }
}
