pub mod types;
pub mod updates;

pub use updates::update_ui_from_state;
