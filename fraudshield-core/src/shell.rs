//! Dashboard shell state
//!
//! Two pieces of local UI state: the active tab and whether the compact
//! menu is open. Content selection is a match over the active tab, so
//! exactly one content view exists at any time.

use crate::auth::{SignOut, SignOutOptions};
use crate::tabs::TabId;

/// Where a tab selection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    Desktop,
    Mobile,
}

/// The child view mounted in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView {
    PaymentSection,
    PaymentHistory,
}

impl From<TabId> for ContentView {
    fn from(tab: TabId) -> Self {
        match tab {
            TabId::Payment => ContentView::PaymentSection,
            TabId::History => ContentView::PaymentHistory,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellState {
    active_tab: TabId,
    mobile_menu_open: bool,
}

impl ShellState {
    /// Fresh shell: Payment tab, menu closed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn select_tab(&mut self, id: TabId, origin: NavOrigin) {
        tracing::debug!(from = %self.active_tab, to = %id, ?origin, "Tab selected");
        self.active_tab = id;
        if origin == NavOrigin::Mobile {
            self.mobile_menu_open = false;
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        tracing::debug!(open = self.mobile_menu_open, "Mobile menu toggled");
    }

    /// Ask the auth provider to end the session. Fire-and-forget.
    pub fn logout(&mut self, auth: &dyn SignOut, login_route: &str, origin: NavOrigin) {
        if origin == NavOrigin::Mobile {
            self.mobile_menu_open = false;
        }
        auth.sign_out(SignOutOptions::new(login_route));
    }

    pub fn content(&self) -> ContentView {
        ContentView::from(self.active_tab)
    }
}
