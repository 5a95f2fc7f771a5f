//! In-memory renderer that records draw requests

use std::path::{Path, PathBuf};

use glam::IVec2;

use super::{Color, FontSize, Rect, Renderer, TextPosition};

/// One recorded draw request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        color: Color,
        rect: Rect,
        filled: bool,
    },
    Circle {
        color: Color,
        center: IVec2,
        radius: i32,
    },
    Text {
        text: String,
        color: Color,
        position: TextPosition,
        size: FontSize,
    },
    Texture {
        path: PathBuf,
        source: Option<Rect>,
        dest: Rect,
    },
}

/// Keeps the commands of the most recent frame.
///
/// `clear` starts a new frame, `present` counts it.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// All text drawn in the current frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Filled rectangles drawn in `color`
    pub fn filled_rects(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect {
                    color: c,
                    rect,
                    filled: true,
                } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_rect(&mut self, color: Color, rect: Rect, filled: bool) {
        self.commands.push(DrawCommand::Rect {
            color,
            rect,
            filled,
        });
    }

    fn draw_circle(&mut self, color: Color, center: IVec2, radius: i32) {
        self.commands.push(DrawCommand::Circle {
            color,
            center,
            radius,
        });
    }

    fn draw_text(&mut self, text: &str, color: Color, position: TextPosition, size: FontSize) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color,
            position,
            size,
        });
    }

    fn draw_texture(&mut self, path: &Path, source: Option<Rect>, dest: Rect) {
        self.commands.push(DrawCommand::Texture {
            path: path.to_path_buf(),
            source,
            dest,
        });
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!(
            "Frame {} presented ({} commands)",
            self.frames,
            self.commands.len()
        );
    }
}
