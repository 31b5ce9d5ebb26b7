pub mod dashboard_header;
pub mod tab_nav;

pub use dashboard_header::DashboardHeader;
pub use tab_nav::TabNav;

use contracts::enums::UserRole;
use leptos::prelude::*;

/// Dashboard shell: role header, tab navigation and the active tab's content.
///
/// `content` is re-run whenever a signal it reads changes, so it can switch on the active tab.
///
/// ```text
/// +------------------------------------------+
/// |  DashboardHeader (title, logout)         |
/// +------------------------------------------+
/// |  TabNav                                  |
/// +------------------------------------------+
/// |  content                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<N, C>(
    role: UserRole,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    icon_name: &'static str,
    on_logout: Callback<()>,
    nav: N,
    content: C,
) -> impl IntoView
where
    N: Fn() -> AnyView + 'static + Send + Sync,
    C: Fn() -> AnyView + 'static + Send + Sync,
{
    view! {
        <div class=format!("dashboard dashboard--{}", role.code())>
            <DashboardHeader
                title=title
                subtitle=subtitle
                icon_name=icon_name
                on_logout=on_logout
            />
            <div class="dashboard__nav">
                {nav()}
            </div>
            <main class="dashboard__main">
                {move || content()}
            </main>
        </div>
    }
}
