use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn DashboardHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    icon_name: &'static str,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__brand">
                <span class="dashboard-header__icon">{icon(icon_name)}</span>
                <div>
                    <h1 class="dashboard-header__title">{title}</h1>
                    <p class="dashboard-header__subtitle">{subtitle}</p>
                </div>
            </div>
            <Button
                variant="ghost"
                class="dashboard-header__logout"
                on_click=Callback::new(move |_| on_logout.run(()))
            >
                {icon("log-out")}
                "Logout"
            </Button>
        </header>
    }
}
