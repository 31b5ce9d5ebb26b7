use crate::shared::icons::icon;
use crate::shared::tone::Tone;
use leptos::prelude::*;

/// Single headline number on the admin overview
#[component]
pub fn StatCard(
    /// Label displayed under the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,
    /// Already formatted value
    #[prop(into)]
    value: String,
    tone: Tone,
    /// Optional progress (0.0..=1.0) drawn under the value
    #[prop(optional)]
    progress: Option<f64>,
) -> impl IntoView {
    let tone_class = format!("stat-card stat-card--{}", tone.modifier());

    view! {
        <div class=tone_class>
            {icon_name.map(|name| view! { <div class="stat-card__icon">{icon(&name)}</div> })}
            <div class="stat-card__content">
                <div class="stat-card__value">{value}</div>
                <div class="stat-card__label">{label}</div>
                {progress.map(|p| view! {
                    <progress class="stat-card__progress" max="1" value=p.clamp(0.0, 1.0)></progress>
                })}
            </div>
        </div>
    }
}
