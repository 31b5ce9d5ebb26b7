use crate::shared::components::ui::Button;
use crate::shared::components::RecordCard;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::tone::Tone;
use contracts::shared::sample_data;
use leptos::prelude::*;

/// Inspection History tab
#[component]
pub fn InspectionHistory() -> impl IntoView {
    view! {
        <div>
            <div class="section-header">
                <h2>"Inspection History"</h2>
                <Button
                    variant="outline"
                    on_click=Callback::new(|_| log::debug!("Export inspection report requested"))
                >
                    {icon("file-text")}
                    "Export Report"
                </Button>
            </div>

            <div class="record-list">
                {sample_data::INSPECTIONS
                    .iter()
                    .map(|inspection| {
                        let tone = Tone::from(inspection.result);
                        let icon_name = if inspection.is_pass() { "check-circle" } else { "x-circle" };
                        view! {
                            <RecordCard
                                icon_name=icon_name
                                tile_tone=tone
                                title=inspection.product.clone()
                                subtitle=format!("Lot: {}", inspection.lot_number)
                                meta=vec![
                                    format_date(inspection.date),
                                    format!("Vendor: {}", inspection.vendor_id),
                                ]
                                badge=(inspection.result.badge_label(), tone)
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
