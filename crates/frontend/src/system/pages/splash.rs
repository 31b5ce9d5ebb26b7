use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::system::app_config::use_app_config;
use contracts::enums::UserRole;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn SplashScreen(on_get_started: Callback<()>) -> impl IntoView {
    let config = use_app_config();
    let backdrop = format!("background-color: {};", config.splash.background_color);

    view! {
        <div class="backdrop" style=backdrop>
            <Card class="splash">
                <div class="splash__logo">
                    {icon("train")}
                    <span class="splash__badge">{icon("check-circle")}</span>
                </div>
                <h1 class="splash__title">{config.app.title.clone()}</h1>
                <p class="splash__subtitle">
                    "Professional quality control system for railway track fittings"
                </p>

                <div class="splash__roles">
                    {UserRole::all()
                        .into_iter()
                        .map(|role| {
                            let (icon_name, caption) = match role {
                                UserRole::Vendor => ("users", "Vendors"),
                                UserRole::Inspector => ("check-circle", "Inspectors"),
                                UserRole::Admin => ("bar-chart", "Admins"),
                            };
                            view! {
                                <div class="splash__role">
                                    <div class=format!("splash__role-icon splash__role-icon--{}", role.code())>
                                        {icon(icon_name)}
                                    </div>
                                    <p>{caption}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <Button
                    size="lg"
                    class="splash__start"
                    on_click=Callback::new(move |_| on_get_started.run(()))
                >
                    "Get Started"
                </Button>
                <p class="splash__footer">"Secure • Reliable • Compliant"</p>
            </Card>
        </div>
    }
}
