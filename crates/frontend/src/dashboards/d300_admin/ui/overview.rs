use crate::shared::components::{RecordCard, StatCard};
use crate::shared::tone::Tone;
use contracts::shared::sample_data;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn Overview() -> impl IntoView {
    let stats = &*sample_data::SYSTEM_STATS;

    view! {
        <div class="stack">
            <div class="stat-grid">
                <StatCard
                    label="Total Vendors"
                    icon_name="users"
                    value=stats.total_vendors.to_string()
                    tone=Tone::Admin
                />
                <StatCard
                    label="Active Inspectors"
                    icon_name="check-circle"
                    value=stats.active_inspectors.to_string()
                    tone=Tone::Inspector
                />
                <StatCard
                    label="Monthly Inspections"
                    icon_name="package"
                    value=stats.monthly_inspections.to_string()
                    tone=Tone::Vendor
                />
                <StatCard
                    label="Overall Pass Rate"
                    value=stats.pass_rate_label()
                    tone=Tone::Pass
                    progress=stats.pass_rate_fraction()
                />
                <StatCard
                    label="Pending Alerts"
                    icon_name="alert-triangle"
                    value=stats.pending_alerts.to_string()
                    tone=Tone::Fail
                />
                <StatCard
                    label="Warranty Expiring"
                    icon_name="file-text"
                    value=stats.warranty_expiring.to_string()
                    tone=Tone::Pending
                />
            </div>

            <Card>
                <div class="card__header">
                    <h2 class="card__title">"Vendor Performance"</h2>
                    <p class="card__description">"Quality metrics and performance analysis"</p>
                </div>
                <div class="record-list">
                    {sample_data::VENDORS
                        .iter()
                        .map(|vendor| view! {
                            <RecordCard
                                icon_name="package"
                                tile_tone=Tone::Admin
                                title=vendor.name.clone()
                                subtitle=format!("ID: {}", vendor.id)
                                meta=vec![vendor.pass_rate_label(), vendor.total_items_label()]
                                badge=(vendor.standing.badge_label(), Tone::from(vendor.standing))
                            />
                        })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}
