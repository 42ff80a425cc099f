//! Responsive layout resolution

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint(u32);

impl Breakpoint {
    /// Medium screens and up get the desktop navigation
    pub const MD: Breakpoint = Breakpoint(768);

    pub fn new(px: u32) -> Self {
        Self(px)
    }

    pub fn px(&self) -> u32 {
        self.0
    }

    pub fn layout_for(&self, width: f32) -> Layout {
        if width >= self.0 as f32 {
            Layout::Desktop
        } else {
            Layout::Compact
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::MD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Inline navigation, labelled logout
    Desktop,
    /// Menu toggle, icon-only logout
    Compact,
}

impl Layout {
    pub fn is_compact(&self) -> bool {
        matches!(self, Layout::Compact)
    }
}
