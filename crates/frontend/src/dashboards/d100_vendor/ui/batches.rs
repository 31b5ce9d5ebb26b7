use crate::shared::components::ui::Button;
use crate::shared::components::RecordCard;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::tone::Tone;
use contracts::shared::sample_data;
use leptos::prelude::*;

/// "My Batch Reports" list
#[component]
pub fn BatchList() -> impl IntoView {
    view! {
        <div>
            <div class="section-header">
                <h2>"My Batch Reports"</h2>
                <Button
                    variant="outline"
                    on_click=Callback::new(|_| log::debug!("Export batch report requested"))
                >
                    {icon("file-text")}
                    "Export Report"
                </Button>
            </div>

            <div class="record-list">
                {sample_data::BATCHES
                    .iter()
                    .map(|batch| view! {
                        <RecordCard
                            icon_name="package"
                            tile_tone=Tone::Vendor
                            title=batch.product.clone()
                            subtitle=format!("Batch ID: {}", batch.id)
                            meta=vec![batch.quantity_label(), format_date(batch.date)]
                            badge=(batch.status.display_name().to_string(), Tone::from(batch.status))
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
