use crate::shared::icons::icon;
use contracts::dashboards::{DashboardTab, TabSelector};
use leptos::prelude::*;

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tab-nav__item tab-nav__item--active"
    } else {
        "tab-nav__item"
    }
}

/// Tab strip bound to a dashboard's [`TabSelector`].
#[component]
pub fn TabNav<T>(
    selector: RwSignal<TabSelector<T>>,
    /// Icon shown before each tab title
    icon_for: fn(T) -> &'static str,
    /// Tab caption; defaults to the tab title
    #[prop(optional)]
    label_for: Option<fn(T) -> String>,
) -> impl IntoView
where
    T: DashboardTab + Send + Sync,
{
    let label_for = label_for.unwrap_or(|tab: T| tab.title().to_string());

    view! {
        <nav class="tab-nav">
            {T::all()
                .iter()
                .copied()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            class=move || tab_class(selector.with(|s| s.is_active(tab)))
                            on:click=move |_| {
                                if selector.with_untracked(|s| s.is_active(tab)) {
                                    return;
                                }
                                selector.update(|s| {
                                    s.select(tab);
                                });
                                log::debug!("tab selected: {}", tab.code());
                            }
                        >
                            {icon(icon_for(tab))}
                            {label_for(tab)}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_class() {
        assert_eq!(tab_class(true), "tab-nav__item tab-nav__item--active");
        assert_eq!(tab_class(false), "tab-nav__item");
    }
}
