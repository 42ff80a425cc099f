use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use fraudshield_core::NavOrigin;

use crate::operations::SessionOperations;
use crate::state::{AppState, UiState};
use crate::MainWindow;

/// Register sign-in and logout handlers
pub fn register_session_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    register_logout(window, app_state, ui_state);
    register_sign_in(window, app_state, ui_state);
}

/// Register logout handler (header button and mobile menu entry)
fn register_logout(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_logout_clicked(move |from_mobile_menu| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        let origin = if from_mobile_menu {
            NavOrigin::Mobile
        } else {
            NavOrigin::Desktop
        };

        SessionOperations::new(&app_state, &ui_state, &main_window).logout(origin);
    });
}

/// Register login view sign-in handler
fn register_sign_in(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_sign_in(move |name| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        SessionOperations::new(&app_state, &ui_state, &main_window).sign_in(&name);
    });
}
