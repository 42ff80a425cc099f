use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use fraudshield_core::{NavOrigin, TabId};

use crate::state::{AppState, UiState};
use crate::ui::update_ui_from_state;
use crate::MainWindow;

/// Register tab and menu navigation handlers
pub fn register_nav_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    register_desktop_tab(window, app_state, ui_state);
    register_mobile_tab(window, app_state, ui_state);
    register_menu_toggle(window, app_state, ui_state);
}

/// Register desktop navigation tab handler
fn register_desktop_tab(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_desktop_tab_clicked(move |kind| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        if let Some(shell) = app_state.borrow_mut().shell.as_mut() {
            shell.select_tab(TabId::from(kind), NavOrigin::Desktop);
        }

        update_ui_from_state(&main_window, &app_state, &ui_state);
    });
}

/// Register mobile menu tab handler (also dismisses the menu)
fn register_mobile_tab(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_mobile_tab_clicked(move |kind| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        if let Some(shell) = app_state.borrow_mut().shell.as_mut() {
            shell.select_tab(TabId::from(kind), NavOrigin::Mobile);
        }

        update_ui_from_state(&main_window, &app_state, &ui_state);
    });
}

/// Register mobile menu open/close handler
fn register_menu_toggle(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_menu_toggle_clicked(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        if let Some(shell) = app_state.borrow_mut().shell.as_mut() {
            shell.toggle_mobile_menu();
        }

        update_ui_from_state(&main_window, &app_state, &ui_state);
    });
}
