//! Top-level routes a redirect can land on

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
        }
    }

    /// Resolve a callback URL path. Query strings and trailing slashes are ignored.
    pub fn from_callback_url(url: &str) -> Result<Self, ShellError> {
        let path = url.split(['?', '#']).next().unwrap_or_default().trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" | "/dashboard" => Ok(Route::Dashboard),
            "/login" => Ok(Route::Login),
            _ => Err(ShellError::UnknownRoute(url.to_string())),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_callback_url(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_callback_url("/login").unwrap(), Route::Login);
        assert_eq!(Route::from_callback_url("/login/").unwrap(), Route::Login);
        assert_eq!(
            Route::from_callback_url("/login?error=expired").unwrap(),
            Route::Login
        );
        assert_eq!(Route::from_callback_url("/").unwrap(), Route::Dashboard);
        assert_eq!(
            Route::from_callback_url("/dashboard").unwrap(),
            Route::Dashboard
        );
    }

    #[test]
    fn test_unknown_path() {
        assert!(matches!(
            Route::from_callback_url("/settings"),
            Err(ShellError::UnknownRoute(_))
        ));
        assert!(Route::from_callback_url("login").is_err());
    }

    #[test]
    fn test_path_round_trips() {
        for route in [Route::Login, Route::Dashboard] {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }
}
