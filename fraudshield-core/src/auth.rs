//! Sign-out collaborator
//!
//! The shell only ever asks the auth provider to end the session. It does
//! not wait for or interpret the outcome.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutOptions {
    /// Where to send the user once the session is gone
    pub callback_url: String,
}

impl SignOutOptions {
    pub fn new(callback_url: impl Into<String>) -> Self {
        Self {
            callback_url: callback_url.into(),
        }
    }
}

/// Capability to terminate the authenticated session
pub trait SignOut {
    fn sign_out(&self, options: SignOutOptions);
}

#[derive(Debug, Default)]
struct SessionInner {
    user: Option<String>,
    redirect: Option<String>,
    sign_out_count: u64,
}

/// In-memory session used by the desktop app
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<SessionInner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `user`, replacing any existing one
    pub fn sign_in(&self, user: impl Into<String>) {
        let user = user.into();
        tracing::info!(user = %user, "Session started");
        let mut inner = self.inner.lock();
        inner.user = Some(user);
        inner.redirect = None;
    }

    pub fn current_user(&self) -> Option<String> {
        self.inner.lock().user.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.lock().user.is_some()
    }

    /// Number of sign-out requests received
    pub fn sign_out_count(&self) -> u64 {
        self.inner.lock().sign_out_count
    }

    /// Take the pending post-sign-out redirect, if any
    pub fn take_redirect(&self) -> Option<String> {
        self.inner.lock().redirect.take()
    }
}

impl SignOut for SessionStore {
    fn sign_out(&self, options: SignOutOptions) {
        let mut inner = self.inner.lock();
        inner.sign_out_count += 1;
        match inner.user.take() {
            Some(user) => tracing::info!(
                user = %user,
                callback_url = %options.callback_url,
                "Session ended"
            ),
            None => tracing::debug!(
                callback_url = %options.callback_url,
                "Sign-out requested with no active session"
            ),
        }
        inner.redirect = Some(options.callback_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_then_out() {
        let store = SessionStore::new();
        assert!(!store.is_signed_in());

        store.sign_in("alice");
        assert_eq!(store.current_user().as_deref(), Some("alice"));

        store.sign_out(SignOutOptions::new("/login"));
        assert!(!store.is_signed_in());
        assert_eq!(store.sign_out_count(), 1);
        assert_eq!(store.take_redirect().as_deref(), Some("/login"));
        assert_eq!(store.take_redirect(), None);
    }

    #[test]
    fn test_sign_out_without_session_still_redirects() {
        let store = SessionStore::new();
        store.sign_out(SignOutOptions::new("/login"));
        assert_eq!(store.sign_out_count(), 1);
        assert_eq!(store.take_redirect().as_deref(), Some("/login"));
    }

    #[test]
    fn test_sign_in_clears_stale_redirect() {
        let store = SessionStore::new();
        store.sign_out(SignOutOptions::new("/login"));
        store.sign_in("bob");
        assert_eq!(store.take_redirect(), None);
    }

    #[test]
    fn test_options_serialize_as_callback_url() {
        let json = serde_json::to_string(&SignOutOptions::new("/login")).unwrap();
        assert_eq!(json, r#"{"callbackUrl":"/login"}"#);
    }
}
