// Public modules
pub mod auth;
pub mod config;
pub mod error;
pub mod layout;
pub mod route;
pub mod shell;
pub mod tabs;
pub mod view;

// Re-export commonly used types for convenience
pub use auth::{SessionStore, SignOut, SignOutOptions};
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use layout::{Breakpoint, Layout};
pub use route::Route;
pub use shell::{ContentView, NavOrigin, ShellState};
pub use tabs::{Icon, TabId, TabSpec, TABS};
pub use view::{MenuEntry, ShellView, TabButton, TabStyle};

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
