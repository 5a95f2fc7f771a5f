//! Start menu widgets

use glam::IVec2;

use crate::renderer::{FontSize, Rect, Renderer, TextPosition};
use crate::theme::Theme;

pub const BUTTON_WIDTH: i32 = 240;
pub const BUTTON_HEIGHT: i32 = 60;
const BUTTON_GAP: i32 = 30;
const LABEL_PADDING: IVec2 = IVec2::new(24, 12);

/// A clickable, labelled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn contains(&self, point: IVec2) -> bool {
        self.rect.contains(point)
    }

    /// Green face with a fading grey bevel, label on top
    pub fn render(&self, renderer: &mut dyn Renderer, theme: &Theme) {
        renderer.draw_rect(theme.button, self.rect, true);
        for (inset, color) in theme.button_shadows.iter().enumerate() {
            renderer.draw_rect(*color, self.rect.inset(inset as i32), false);
        }
        renderer.draw_text(
            &self.label,
            theme.text,
            TextPosition::At(self.rect.pos + LABEL_PADDING),
            FontSize::Regular,
        );
    }
}

/// What a click on the start menu asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Highscores,
}

/// The two stacked buttons of the start screen
#[derive(Debug, Clone, PartialEq)]
pub struct StartMenu {
    play: Button,
    highscores: Button,
}

impl StartMenu {
    /// Buttons horizontally centered, stacked just below mid-screen
    pub fn for_screen(width: i32, height: i32) -> Self {
        let x = (width - BUTTON_WIDTH) / 2;
        let y = height / 2;
        Self {
            play: Button::new(Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT), "Play"),
            highscores: Button::new(
                Rect::new(x, y + BUTTON_HEIGHT + BUTTON_GAP, BUTTON_WIDTH, BUTTON_HEIGHT),
                "Highscores",
            ),
        }
    }

    pub fn play_button(&self) -> &Button {
        &self.play
    }

    pub fn highscores_button(&self) -> &Button {
        &self.highscores
    }

    pub fn hit(&self, point: IVec2) -> Option<MenuAction> {
        if self.play.contains(point) {
            Some(MenuAction::Play)
        } else if self.highscores.contains(point) {
            Some(MenuAction::Highscores)
        } else {
            None
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer, theme: &Theme) {
        self.play.render(renderer, theme);
        self.highscores.render(renderer, theme);
    }
}
