/// UI flow state management
/// This struct contains only window-specific state (viewport, inline errors)
#[derive(Debug)]
pub struct UiState {
    /// Current logical window width
    pub viewport_width: f32,
    /// Validation message shown on the login view
    pub login_error: Option<String>,
}

impl UiState {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            login_error: None,
        }
    }

    /// Seed from the size the platform actually gave the window
    pub fn from_window_size(size: slint::PhysicalSize, scale_factor: f32) -> Self {
        Self::new(size.to_logical(scale_factor).width)
    }

    /// Record a new viewport width, returning whether it changed
    pub fn resize(&mut self, width: f32) -> bool {
        if (self.viewport_width - width).abs() < f32::EPSILON {
            return false;
        }
        self.viewport_width = width;
        true
    }

    pub fn set_login_error(&mut self, message: impl Into<String>) {
        self.login_error = Some(message.into());
    }

    pub fn clear_login_error(&mut self) {
        self.login_error = None;
    }
}
