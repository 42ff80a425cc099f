use std::cell::RefCell;
use std::rc::Rc;

use fraudshield_core::NavOrigin;

use crate::operations::validate_user_name;
use crate::state::{AppState, UiState};
use crate::ui::update_ui_from_state;
use crate::MainWindow;

/// Session operations orchestration
/// Handles sign-in and logout with the matching UI updates
pub struct SessionOperations<'a> {
    app_state: &'a Rc<RefCell<AppState>>,
    ui_state: &'a Rc<RefCell<UiState>>,
    window: &'a MainWindow,
}

impl<'a> SessionOperations<'a> {
    pub fn new(
        app_state: &'a Rc<RefCell<AppState>>,
        ui_state: &'a Rc<RefCell<UiState>>,
        window: &'a MainWindow,
    ) -> Self {
        Self {
            app_state,
            ui_state,
            window,
        }
    }

    /// Validate the name and mount a fresh dashboard
    pub fn sign_in(&self, name: &str) {
        match validate_user_name(name) {
            Ok(user) => {
                self.app_state.borrow_mut().sign_in(&user);
                self.ui_state.borrow_mut().clear_login_error();
            }
            Err(e) => {
                tracing::debug!(error = %e, "Sign-in rejected");
                self.ui_state.borrow_mut().set_login_error(e.message);
            }
        }

        update_ui_from_state(self.window, self.app_state, self.ui_state);
    }

    /// Sign out and follow the redirect
    pub fn logout(&self, origin: NavOrigin) {
        let route = self.app_state.borrow_mut().logout(origin);
        tracing::info!(%route, "Redirected after logout");

        self.ui_state.borrow_mut().clear_login_error();

        update_ui_from_state(self.window, self.app_state, self.ui_state);
    }
}
