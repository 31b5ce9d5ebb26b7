use crate::shared::icons::icon;
use crate::shared::tone::Tone;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, Card};

/// One sample record as a card row: icon tile, title, subtitle, meta column and status badge.
#[component]
pub fn RecordCard(
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Tone of the icon tile
    tile_tone: Tone,
    #[prop(into)]
    title: String,
    #[prop(into)]
    subtitle: String,
    /// Lines of the right-hand meta column
    #[prop(optional)]
    meta: Vec<String>,
    /// Badge text and tone
    #[prop(optional)]
    badge: Option<(String, Tone)>,
) -> impl IntoView {
    let tile_class = format!("record__tile record__tile--{}", tile_tone.modifier());

    view! {
        <Card class="record">
            <div class="record__row">
                <div class="record__main">
                    <div class=tile_class>{icon(&icon_name)}</div>
                    <div>
                        <h3 class="record__title">{title}</h3>
                        <p class="record__subtitle">{subtitle}</p>
                    </div>
                </div>
                <div class="record__meta">
                    {meta.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
                {badge.map(|(text, tone)| view! {
                    <Badge appearance=BadgeAppearance::Filled color=tone.badge_color()>
                        {text}
                    </Badge>
                })}
            </div>
        </Card>
    }
}
