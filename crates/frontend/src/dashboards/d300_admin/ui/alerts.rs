use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::tone::Tone;
use contracts::domain::a005_alert::AlertKind;
use contracts::shared::sample_data;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, Card};

/// Row class with a per-source modifier, e.g. `alert-row--warranty`
pub fn alert_row_class(kind: AlertKind) -> String {
    format!("alert-row alert-row--{}", kind.code())
}

#[component]
pub fn AlertList() -> impl IntoView {
    view! {
        <div class="stack">
            <div class="section-header">
                <h2>"System Alerts"</h2>
                <Button
                    variant="outline"
                    on_click=Callback::new(|_| log::debug!("Mark all alerts as read requested"))
                >
                    "Mark All as Read"
                </Button>
            </div>

            <div class="record-list">
                {sample_data::ALERTS
                    .iter()
                    .map(|alert| {
                        let tone = Tone::from(alert.severity);
                        view! {
                            <Card class="record">
                                <div class=alert_row_class(alert.kind)>
                                    <span class=format!("alert-row__icon record__tile--{}", tone.modifier())>
                                        {icon("alert-triangle")}
                                    </span>
                                    <div class="alert-row__body">
                                        <p class="alert-row__message">{alert.message.clone()}</p>
                                        <p class="record__subtitle">{format_date(alert.date)}</p>
                                    </div>
                                    <Badge appearance=BadgeAppearance::Filled color=tone.badge_color()>
                                        {alert.severity.badge_label()}
                                    </Badge>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_row_class() {
        assert_eq!(alert_row_class(AlertKind::Quality), "alert-row alert-row--quality");
        assert_eq!(alert_row_class(AlertKind::Inventory), "alert-row alert-row--inventory");
    }
}
