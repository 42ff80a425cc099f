pub mod nav_handlers;
pub mod session_handlers;
pub mod ui_handlers;

pub use nav_handlers::register_nav_handlers;
pub use session_handlers::register_session_handlers;
pub use ui_handlers::register_ui_handlers;
