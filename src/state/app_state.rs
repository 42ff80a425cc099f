use fraudshield_core::*;

/// Application state management - session and dashboard state
/// The shell only exists while a user is signed in; signing out unmounts it.
#[derive(Debug)]
pub struct AppState {
    /// Effective configuration
    pub config: ShellConfig,
    /// Auth collaborator the shell signs out through
    pub session: SessionStore,
    /// Mounted dashboard shell, `None` on the login view
    pub shell: Option<ShellState>,
}

impl AppState {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            session: SessionStore::new(),
            shell: None,
        }
    }

    /// Start a session and mount a fresh shell
    pub fn sign_in(&mut self, user: &str) {
        self.session.sign_in(user);
        self.shell = Some(ShellState::new());
    }

    /// Log out through the shell and unmount it; the session is gone either way
    pub fn logout(&mut self, origin: NavOrigin) -> Route {
        if let Some(shell) = self.shell.as_mut() {
            shell.logout(&self.session, &self.config.login_route, origin);
        }

        if let Some(url) = self.session.take_redirect() {
            match Route::from_callback_url(&url) {
                Ok(Route::Login) => {}
                Ok(route) => tracing::warn!(%route, "Sign-out redirect is not the login view"),
                Err(e) => tracing::warn!(error = %e, "Unrecognised sign-out redirect"),
            }
        }

        self.shell = None;
        self.route()
    }

    /// Route currently shown
    pub fn route(&self) -> Route {
        if self.shell.is_some() {
            Route::Dashboard
        } else {
            Route::Login
        }
    }

    /// Resolve the shell view for the given viewport width
    pub fn view(&self, width: f32) -> Option<ShellView> {
        self.shell
            .as_ref()
            .map(|shell| ShellView::resolve(shell, width, &self.config))
    }

    /// Get window title with the signed-in user
    pub fn get_window_title(&self) -> String {
        match self.session.current_user() {
            Some(user) if self.shell.is_some() => format!("{} - {}", self.config.brand, user),
            _ => format!("{} - Sign in", self.config.brand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_login() {
        let state = AppState::new(ShellConfig::default());
        assert_eq!(state.route(), Route::Login);
        assert!(state.view(1280.0).is_none());
        assert_eq!(state.get_window_title(), "FraudShield - Sign in");
    }

    #[test]
    fn test_sign_in_mounts_fresh_shell() {
        let mut state = AppState::new(ShellConfig::default());
        state.sign_in("priya");

        assert_eq!(state.route(), Route::Dashboard);
        assert_eq!(state.get_window_title(), "FraudShield - priya");
        let view = state.view(1280.0).unwrap();
        assert_eq!(view.content, ContentView::PaymentSection);
    }

    #[test]
    fn test_logout_unmounts_shell_and_redirects_to_login() {
        let mut state = AppState::new(ShellConfig::default());
        state.sign_in("priya");
        if let Some(shell) = state.shell.as_mut() {
            shell.select_tab(TabId::History, NavOrigin::Desktop);
        }

        let route = state.logout(NavOrigin::Desktop);
        assert_eq!(route, Route::Login);
        assert!(state.shell.is_none());
        assert_eq!(state.session.sign_out_count(), 1);

        state.sign_in("priya");
        let shell = state.shell.as_ref().unwrap();
        assert_eq!(shell.active_tab(), TabId::Payment);
        assert!(!shell.is_mobile_menu_open());
    }

    #[test]
    fn test_logout_unmounts_even_with_dashboard_redirect() {
        let config = ShellConfig {
            login_route: "/".to_string(),
            ..ShellConfig::default()
        };
        let mut state = AppState::new(config);
        state.sign_in("priya");

        let route = state.logout(NavOrigin::Mobile);
        assert_eq!(route, Route::Login);
        assert!(state.shell.is_none());
        assert!(!state.session.is_signed_in());
    }
}
