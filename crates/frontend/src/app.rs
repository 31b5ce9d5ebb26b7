use crate::app_shell::AppShell;
use crate::system::app_config::{apply_document_title, load_app_config};
use crate::system::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_app_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return view! { <div class="fatal-error">{e}</div> }.into_any();
        }
    };
    apply_document_title(&config);

    // Packaging config and navigation state for the whole app
    provide_context(config);
    provide_context(SessionContext::new());

    view! { <AppShell /> }.into_any()
}
