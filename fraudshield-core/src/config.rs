//! Shell configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ShellError};
use crate::layout::Breakpoint;
use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Brand shown in the header
    pub brand: String,
    /// Width in logical pixels at which the desktop navigation appears
    pub breakpoint_px: u32,
    /// Redirect target handed to the auth provider on logout
    pub login_route: String,
    /// Initial window size
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: "FraudShield".to_string(),
            breakpoint_px: Breakpoint::MD.px(),
            login_route: Route::Login.path().to_string(),
            window_width: 1024,
            window_height: 720,
        }
    }
}

impl ShellConfig {
    /// Load and validate a config from a JSON file. Missing fields take defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ShellConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.breakpoint_px == 0 {
            return Err(ShellError::InvalidConfig(
                "breakpoint_px must be greater than zero".to_string(),
            ));
        }

        match Route::from_callback_url(&self.login_route) {
            Ok(Route::Login) => Ok(()),
            Ok(route) => Err(ShellError::InvalidConfig(format!(
                "login_route '{}' points at {:?}, expected the login view",
                self.login_route, route
            ))),
            Err(_) => Err(ShellError::InvalidConfig(format!(
                "login_route '{}' is not a known route",
                self.login_route
            ))),
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.breakpoint_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.brand, "FraudShield");
        assert_eq!(config.breakpoint_px, 768);
        assert_eq!(config.login_route, "/login");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ShellConfig = serde_json::from_str(r#"{"brand":"Acme Bank"}"#).unwrap();
        assert_eq!(config.brand, "Acme Bank");
        assert_eq!(config.breakpoint_px, 768);
        assert_eq!(config.login_route, "/login");
    }

    #[test]
    fn test_zero_breakpoint_rejected() {
        let config = ShellConfig {
            breakpoint_px: 0,
            ..ShellConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ShellError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_login_route_rejected() {
        let config = ShellConfig {
            login_route: "/nowhere".to_string(),
            ..ShellConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ShellError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_dashboard_login_route_rejected() {
        for login_route in ["/", "/dashboard"] {
            let config = ShellConfig {
                login_route: login_route.to_string(),
                ..ShellConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ShellError::InvalidConfig(_))),
                "login_route {} should be rejected",
                login_route
            );
        }
    }

    #[test]
    fn test_login_route_with_query_accepted() {
        let config = ShellConfig {
            login_route: "/login?reason=signed-out".to_string(),
            ..ShellConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let result = ShellConfig::load("/definitely/not/here/fraudshield.json");
        assert!(matches!(result, Err(ShellError::Io(_))));
    }
}
