pub mod session_ops;
pub mod validation;

pub use session_ops::SessionOperations;
pub use validation::{validate_user_name, ValidationError};
