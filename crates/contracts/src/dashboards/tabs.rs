//! Переключатель вкладок дашборда.

/// Набор вкладок одного дашборда
pub trait DashboardTab: Copy + Eq + Default + 'static {
    /// Все вкладки в порядке отображения
    fn all() -> &'static [Self];

    fn code(&self) -> &'static str;

    fn title(&self) -> &'static str;
}

/// Текущая вкладка дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelector<T: DashboardTab> {
    active: T,
}

impl<T: DashboardTab> TabSelector<T> {
    pub fn new() -> Self {
        Self { active: T::default() }
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }

    /// Выбрать вкладку. Возвращает `false`, если она уже активна (состояние не меняется).
    pub fn select(&mut self, tab: T) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_vendor::VendorTab;
    use crate::dashboards::d200_inspector::InspectorTab;
    use crate::dashboards::d300_admin::AdminTab;

    fn assert_idempotent<T: DashboardTab + std::fmt::Debug>() {
        for &tab in T::all() {
            let mut selector = TabSelector::<T>::new();
            selector.select(tab);
            let before = selector;
            assert!(!selector.select(tab));
            assert_eq!(selector, before);
            assert_eq!(selector.active(), tab);
        }
    }

    #[test]
    fn test_select_is_idempotent_for_every_dashboard() {
        assert_idempotent::<VendorTab>();
        assert_idempotent::<InspectorTab>();
        assert_idempotent::<AdminTab>();
    }

    #[test]
    fn test_select_other_tab() {
        let mut selector = TabSelector::<AdminTab>::new();
        assert_eq!(selector.active(), AdminTab::Overview);
        assert!(selector.select(AdminTab::Alerts));
        assert!(selector.is_active(AdminTab::Alerts));
        assert!(!selector.is_active(AdminTab::Overview));
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: Vec<_> = AdminTab::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["overview", "reports", "alerts"]);
    }
}
