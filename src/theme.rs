//! Color palette
//!
//! Passed to the game at construction and never mutated.

use serde::{Deserialize, Serialize};

use crate::renderer::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Color,
    pub paddle: Color,
    pub ball: Color,
    pub block: Color,
    pub indestructible_block: Color,
    pub text: Color,
    /// Subtracted from the block color per hit already taken
    pub damage_shade: u8,

    pub button: Color,
    /// Outline colors, outermost first
    pub button_shadows: [Color; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(180, 180, 180),
            paddle: Color::rgb(37, 26, 239),
            ball: Color::rgb(15, 15, 15),
            block: Color::rgb(170, 10, 20),
            indestructible_block: Color::rgb(90, 90, 100),
            text: Color::rgb(15, 15, 15),
            damage_shade: 30,
            button: Color::rgb(130, 220, 80),
            button_shadows: [
                Color::rgb(40, 40, 40),
                Color::rgb(70, 70, 70),
                Color::rgb(130, 130, 130),
                Color::rgb(190, 190, 190),
            ],
        }
    }
}

impl Theme {
    /// Block color after `damage` hits
    pub fn block_color(&self, damage: u32) -> Color {
        let shade = u8::try_from(damage.saturating_mul(u32::from(self.damage_shade)))
            .unwrap_or(u8::MAX);
        self.block.darken(shade)
    }
}
