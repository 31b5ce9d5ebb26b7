use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::reducer::apply;
use crate::shared::tone::Tone;
use crate::system::app_config::use_app_config;
use contracts::enums::UserRole;
use contracts::system::auth::LoginRequest;
use contracts::system::role_selection::{self, Event, Message, RoleSelectionState};
use leptos::prelude::*;
use thaw::Card;

fn role_icon(role: UserRole) -> &'static str {
    match role {
        UserRole::Vendor => "package",
        UserRole::Inspector => "search-check",
        UserRole::Admin => "settings",
    }
}

/// Two-step login: pick a role, then enter credentials.
///
/// Credentials are not checked; an incomplete form simply does nothing on submit.
#[component]
pub fn RoleSelection(on_back: Callback<()>, on_login: Callback<LoginRequest>) -> impl IntoView {
    let config = use_app_config();
    let backdrop = format!("background-color: {};", config.splash.background_color);
    let state = RwSignal::new(RoleSelectionState::default());

    let send = move |message: Message| match apply(state, |s| role_selection::update(s, message)) {
        Event::None => {}
        Event::BackToSplash => on_back.run(()),
        Event::Login(request) => on_login.run(request),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send(Message::Submit);
    };

    let selected_role = Memo::new(move |_| state.with(|s| s.selected_role));
    let username = Signal::derive(move || state.with(|s| s.credentials.username.clone()));
    let password = Signal::derive(move || state.with(|s| s.credentials.password.clone()));

    view! {
        <div class="backdrop" style=backdrop>
            {move || match selected_role.get() {
                None => view! {
                    <div class="role-picker">
                        <Button
                            variant="ghost"
                            class="role-picker__back"
                            on_click=Callback::new(move |_| send(Message::Back))
                        >
                            {icon("arrow-left")}
                            "Back"
                        </Button>

                        <div class="role-picker__heading">
                            <h1>"Select Your Role"</h1>
                            <p>"Choose your role to access the appropriate dashboard"</p>
                        </div>

                        <div class="role-picker__grid">
                            {UserRole::all()
                                .into_iter()
                                .map(|role| view! {
                                    <div
                                        class="role-card"
                                        on:click=move |_| send(Message::PickRole(role))
                                    >
                                        <Card>
                                            <div class=format!("role-card__icon role-card__icon--{}", role.code())>
                                                {icon(role_icon(role))}
                                            </div>
                                            <h2 class="role-card__title">{role.display_name()}</h2>
                                            <p class="role-card__description">{role.description()}</p>
                                            <Button size="sm" class=Tone::from(role).accent_class()>
                                                {format!("Continue as {}", role.display_name())}
                                            </Button>
                                        </Card>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
                Some(role) => view! {
                    <Card class="login-box">
                        <Button
                            variant="ghost"
                            size="sm"
                            class="login-box__back"
                            on_click=Callback::new(move |_| send(Message::ClearRole))
                        >
                            {icon("arrow-left")}
                        </Button>

                        <div class=format!("role-card__icon role-card__icon--{}", role.code())>
                            {icon(role_icon(role))}
                        </div>
                        <h1 class="login-box__title">{format!("{} Login", role.display_name())}</h1>
                        <p class="login-box__description">{role.description()}</p>

                        <form on:submit=on_submit>
                            <Input
                                id="username"
                                label="Username"
                                label_icon="user"
                                placeholder="Enter username"
                                autocomplete="username"
                                value=username
                                on_input=Callback::new(move |v| send(Message::UsernameChanged(v)))
                            />
                            <Input
                                id="password"
                                label="Password"
                                label_icon="lock"
                                input_type="password"
                                placeholder="Enter password"
                                autocomplete="current-password"
                                value=password
                                on_input=Callback::new(move |v| send(Message::PasswordChanged(v)))
                            />
                            <Button
                                button_type="submit"
                                size="lg"
                                class=format!("login-box__submit {}", Tone::from(role).accent_class())
                            >
                                "Sign In"
                            </Button>
                        </form>
                    </Card>
                }
                .into_any(),
            }}
        </div>
    }
}
