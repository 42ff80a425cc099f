use fraudshield_core::{ContentView, Icon, MenuEntry, Route, TabButton, TabId, TabStyle};
use slint::SharedString;

pub use crate::{ContentKind, IconKind, RouteKind, TabButtonData, TabKind, TabStyleKind};

impl From<TabKind> for TabId {
    fn from(kind: TabKind) -> Self {
        match kind {
            TabKind::Payment => TabId::Payment,
            TabKind::History => TabId::History,
        }
    }
}

impl From<TabId> for TabKind {
    fn from(id: TabId) -> Self {
        match id {
            TabId::Payment => TabKind::Payment,
            TabId::History => TabKind::History,
        }
    }
}

impl From<Icon> for IconKind {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::CreditCard => IconKind::CreditCard,
            Icon::History => IconKind::History,
            Icon::Menu => IconKind::Menu,
            Icon::Close => IconKind::Close,
            Icon::LogOut => IconKind::LogOut,
        }
    }
}

impl From<TabStyle> for TabStyleKind {
    fn from(style: TabStyle) -> Self {
        match style {
            TabStyle::Active => TabStyleKind::Active,
            TabStyle::ActiveIndicator => TabStyleKind::ActiveIndicator,
            TabStyle::Inactive => TabStyleKind::Inactive,
        }
    }
}

impl From<ContentView> for ContentKind {
    fn from(view: ContentView) -> Self {
        match view {
            ContentView::PaymentSection => ContentKind::PaymentSection,
            ContentView::PaymentHistory => ContentKind::PaymentHistory,
        }
    }
}

impl From<Route> for RouteKind {
    fn from(route: Route) -> Self {
        match route {
            Route::Login => RouteKind::Login,
            Route::Dashboard => RouteKind::Dashboard,
        }
    }
}

impl From<&TabButton> for TabButtonData {
    fn from(button: &TabButton) -> Self {
        TabButtonData {
            id: button.id.into(),
            label: SharedString::from(button.label),
            icon: button.icon.into(),
            style: button.style.into(),
        }
    }
}

/// Compact menu rows: tab buttons, then an optional logout row with no tab id
#[derive(Debug, Default)]
pub struct MobileMenu {
    pub tabs: Vec<TabButtonData>,
    pub show_logout: bool,
}

impl From<&[MenuEntry]> for MobileMenu {
    fn from(entries: &[MenuEntry]) -> Self {
        let mut menu = MobileMenu::default();
        for entry in entries {
            match entry {
                MenuEntry::Tab(button) => menu.tabs.push(button.into()),
                MenuEntry::Logout => menu.show_logout = true,
            }
        }
        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudshield_core::{NavOrigin, ShellConfig, ShellState, ShellView};

    #[test]
    fn test_open_menu_splits_tabs_and_logout() {
        let mut shell = ShellState::new();
        shell.select_tab(TabId::History, NavOrigin::Desktop);
        shell.toggle_mobile_menu();
        let view = ShellView::resolve(&shell, 390.0, &ShellConfig::default());

        let menu = MobileMenu::from(view.mobile_menu.as_slice());
        assert!(menu.show_logout);
        assert_eq!(menu.tabs.len(), 2);
        assert_eq!(menu.tabs[0].id, TabKind::Payment);
        assert_eq!(menu.tabs[1].id, TabKind::History);
        assert_eq!(menu.tabs[1].style, TabStyleKind::ActiveIndicator);
        assert_eq!(menu.tabs[1].label.as_str(), "History");
    }

    #[test]
    fn test_closed_menu_has_no_rows() {
        let view = ShellView::resolve(&ShellState::new(), 390.0, &ShellConfig::default());

        let menu = MobileMenu::from(view.mobile_menu.as_slice());
        assert!(menu.tabs.is_empty());
        assert!(!menu.show_logout);
    }
}
