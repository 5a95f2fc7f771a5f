//! Startup settings
//!
//! Fixed for the whole session; the only user-facing knob is the FPS
//! overlay.

use serde::{Deserialize, Serialize};

use crate::sim::Layout;
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Show FPS counter
    pub show_fps: bool,
    /// Round geometry
    pub layout: Layout,
    /// Colors
    pub theme: Theme,
}

impl Settings {
    /// Default geometry and colors with the given FPS overlay choice
    pub fn with_fps(show_fps: bool) -> Self {
        Self {
            show_fps,
            ..Self::default()
        }
    }
}
