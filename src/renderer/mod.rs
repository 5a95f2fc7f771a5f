//! Rendering collaborator seam
//!
//! The simulation never draws pixels itself. A [`Renderer`] receives draw
//! requests for one frame; window, font and texture management belong to the
//! implementation. [`DrawList`] records the requests for headless runs.

pub mod draw_list;
pub mod scene;

pub use draw_list::{DrawCommand, DrawList};
pub use scene::draw_frame;

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

pub use crate::sim::Rect;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Subtract `amount` from every color channel, keeping alpha
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: self.a,
        }
    }
}

/// Where a text is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPosition {
    /// Top-left corner of the text box
    At(IVec2),
    /// Centered on the screen
    Centered,
}

/// The two loaded font sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Regular,
    Large,
}

impl FontSize {
    pub fn points(&self) -> u8 {
        match self {
            FontSize::Regular => 24,
            FontSize::Large => 36,
        }
    }
}

/// Drawing primitives consumed by the game. Nothing is read back.
pub trait Renderer {
    /// Fill the whole frame with `color`
    fn clear(&mut self, color: Color);

    /// Draw a rectangle, filled or as a one-pixel outline
    fn draw_rect(&mut self, color: Color, rect: Rect, filled: bool);

    /// Fill every pixel `(px, py)` with `px² + py² <= radius²` relative to `center`
    fn draw_circle(&mut self, color: Color, center: IVec2, radius: i32);

    fn draw_text(&mut self, text: &str, color: Color, position: TextPosition, size: FontSize);

    /// Copy an image (optionally cropped to `source`) into `dest`
    fn draw_texture(&mut self, path: &Path, source: Option<Rect>, dest: Rect);

    /// Show the finished frame
    fn present(&mut self);
}
