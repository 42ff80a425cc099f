use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AppState, UiState};
use crate::ui::update_ui_from_state;
use crate::MainWindow;

/// Register window-level handlers
pub fn register_ui_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    register_viewport_resized(window, app_state, ui_state);
}

/// Register viewport resize handler; crossing the breakpoint swaps the navigation
fn register_viewport_resized(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_viewport_resized(move |width| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        if !ui_state.borrow_mut().resize(width) {
            return;
        }

        update_ui_from_state(&main_window, &app_state, &ui_state);
    });
}
