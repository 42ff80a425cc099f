use slint::{SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AppState, UiState};
use crate::ui::types::{MobileMenu, RouteKind, TabButtonData};
use crate::MainWindow;

/// Update the UI from the current application state
/// Re-resolves the shell view for the current viewport and pushes it into the window
pub fn update_ui_from_state(
    main_window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let app = app_state.borrow();
    let ui = ui_state.borrow();

    main_window.set_window_title(SharedString::from(app.get_window_title()));
    main_window.set_brand(SharedString::from(app.config.brand.as_str()));
    main_window.set_route(RouteKind::from(app.route()));
    main_window.set_login_error(SharedString::from(
        ui.login_error.as_deref().unwrap_or_default(),
    ));

    match app.view(ui.viewport_width) {
        Some(view) => {
            let desktop_tabs = Rc::new(VecModel::from(
                view.desktop_tabs
                    .iter()
                    .map(TabButtonData::from)
                    .collect::<Vec<_>>(),
            ));
            let mobile_menu = MobileMenu::from(view.mobile_menu.as_slice());
            let mobile_tabs = Rc::new(VecModel::from(mobile_menu.tabs));

            main_window.set_desktop_tabs(desktop_tabs.into());
            main_window.set_show_mobile_menu(view.is_mobile_menu_visible());
            main_window.set_mobile_tabs(mobile_tabs.into());
            main_window.set_show_mobile_logout(mobile_menu.show_logout);
            main_window.set_show_menu_toggle(view.menu_toggle.is_some());
            if let Some(icon) = view.menu_toggle {
                main_window.set_menu_icon(icon.into());
            }
            main_window.set_show_logout_label(view.show_logout_label);
            main_window.set_content(view.content.into());
        }
        None => {
            // Clear dashboard UI
            let empty_tabs = Rc::new(VecModel::<TabButtonData>::default());
            let empty_mobile_tabs = Rc::new(VecModel::<TabButtonData>::default());
            main_window.set_desktop_tabs(empty_tabs.into());
            main_window.set_show_mobile_menu(false);
            main_window.set_mobile_tabs(empty_mobile_tabs.into());
            main_window.set_show_mobile_logout(false);
            main_window.set_show_menu_toggle(false);
        }
    }
}
