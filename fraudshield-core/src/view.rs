//! Resolved view model for the shell
//!
//! Everything the markup needs to draw the header and pick the content
//! view, computed from the shell state and the current window width.

use crate::config::ShellConfig;
use crate::layout::Layout;
use crate::shell::{ContentView, ShellState};
use crate::tabs::{Icon, TabId, TABS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStyle {
    /// Highlighted background and text
    Active,
    /// Active entry in the compact menu, with a trailing accent bar
    ActiveIndicator,
    /// Neutral, with hover affordance
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub id: TabId,
    pub label: &'static str,
    pub icon: Icon,
    pub style: TabStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Tab(TabButton),
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellView {
    pub brand: String,
    pub layout: Layout,
    /// Empty at compact widths
    pub desktop_tabs: Vec<TabButton>,
    /// `None` at desktop widths
    pub menu_toggle: Option<Icon>,
    /// Empty unless compact and open
    pub mobile_menu: Vec<MenuEntry>,
    pub show_logout_label: bool,
    pub content: ContentView,
}

impl ShellView {
    pub fn resolve(shell: &ShellState, width: f32, config: &ShellConfig) -> Self {
        let layout = config.breakpoint().layout_for(width);
        let active = shell.active_tab();

        let buttons = |active_style: TabStyle| -> Vec<TabButton> {
            TABS.iter()
                .map(|tab| TabButton {
                    id: tab.id,
                    label: tab.label,
                    icon: tab.icon,
                    style: if tab.id == active {
                        active_style
                    } else {
                        TabStyle::Inactive
                    },
                })
                .collect()
        };

        let (desktop_tabs, menu_toggle, mobile_menu) = match layout {
            Layout::Desktop => (buttons(TabStyle::Active), None, Vec::new()),
            Layout::Compact => {
                let open = shell.is_mobile_menu_open();
                let icon = if open { Icon::Close } else { Icon::Menu };
                let menu = if open {
                    buttons(TabStyle::ActiveIndicator)
                        .into_iter()
                        .map(MenuEntry::Tab)
                        .chain(std::iter::once(MenuEntry::Logout))
                        .collect()
                } else {
                    Vec::new()
                };
                (Vec::new(), Some(icon), menu)
            }
        };

        Self {
            brand: config.brand.clone(),
            layout,
            desktop_tabs,
            menu_toggle,
            mobile_menu,
            show_logout_label: !layout.is_compact(),
            content: shell.content(),
        }
    }

    pub fn is_mobile_menu_visible(&self) -> bool {
        !self.mobile_menu.is_empty()
    }
}
