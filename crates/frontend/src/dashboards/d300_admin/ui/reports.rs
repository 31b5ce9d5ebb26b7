use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::shared::sample_data;
use leptos::prelude::*;
use thaw::Card;

/// System Reports tab. Report generation is not implemented; buttons only log.
#[component]
pub fn Reports() -> impl IntoView {
    view! {
        <div class="stack">
            <div class="section-header">
                <h2>"System Reports"</h2>
                <Button
                    class="accent--admin"
                    on_click=Callback::new(|_| log::debug!("Generate report requested"))
                >
                    {icon("download")}
                    "Generate Report"
                </Button>
            </div>

            <div class="report-grid">
                {sample_data::REPORTS
                    .iter()
                    .map(|report| {
                        let kind = report.kind;
                        view! {
                            <Card>
                                <div class="card__header">
                                    <h3 class="card__title">{report.title.clone()}</h3>
                                    <p class="card__description">{report.subtitle.clone()}</p>
                                </div>
                                <p class="report__summary">{report.summary.clone()}</p>
                                <Button
                                    variant="outline"
                                    class="report__open"
                                    on_click=Callback::new(move |_| log::debug!("View report requested: {:?}", kind))
                                >
                                    {icon("file-text")}
                                    "View Report"
                                </Button>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
