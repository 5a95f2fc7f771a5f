//! Frame composition per round state
//!
//! A pure read of the round; nothing here mutates simulation state.

use std::path::Path;

use glam::IVec2;

use super::{FontSize, Rect, Renderer, TextPosition};
use crate::sim::{GameState, RoundState};
use crate::theme::Theme;
use crate::ui::StartMenu;

pub const LOGO_PATH: &str = "assets/images/logo.png";
const LOGO_SIZE: IVec2 = IVec2::new(400, 120);

/// Overlay data supplied by the driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hud {
    pub show_fps: bool,
    pub fps: u32,
}

/// Draw and present one frame for the current round state
pub fn draw_frame(
    renderer: &mut dyn Renderer,
    state: &GameState,
    theme: &Theme,
    menu: &StartMenu,
    hud: Hud,
) {
    renderer.clear(theme.background);

    match state.phase {
        RoundState::Start => draw_start(renderer, state, theme, menu),
        RoundState::Playing => draw_playfield(renderer, state, theme),
        RoundState::Paused => {
            draw_playfield(renderer, state, theme);
            draw_banner(renderer, theme, "The game is paused!");
        }
        RoundState::Lost => {
            draw_playfield(renderer, state, theme);
            let msg = format!(
                "Game over with {} points! Press ENTER to quit",
                state.score.score()
            );
            draw_banner(renderer, theme, &msg);
        }
        RoundState::Won => {
            draw_playfield(renderer, state, theme);
            let msg = format!(
                "You won with {} points! Press ENTER to quit",
                state.score.score()
            );
            draw_banner(renderer, theme, &msg);
        }
        RoundState::Highscore => draw_highscores(renderer, state, theme),
    }

    if hud.show_fps {
        let pos = IVec2::new(state.layout.screen_width - 100, state.layout.screen_height - 50);
        renderer.draw_text(
            &format!("FPS: {}", hud.fps),
            theme.text,
            TextPosition::At(pos),
            FontSize::Regular,
        );
    }

    renderer.present();
}

fn draw_start(renderer: &mut dyn Renderer, state: &GameState, theme: &Theme, menu: &StartMenu) {
    let width = state.layout.screen_width;
    let logo = Rect {
        pos: IVec2::new((width - LOGO_SIZE.x) / 2, 60),
        size: LOGO_SIZE,
    };
    renderer.draw_texture(Path::new(LOGO_PATH), None, logo);
    renderer.draw_text(
        "Breakout",
        theme.text,
        TextPosition::At(IVec2::new(width / 2 - 80, logo.bottom() + 30)),
        FontSize::Large,
    );
    menu.render(renderer, theme);
    renderer.draw_text(
        "Press SPACE to play",
        theme.text,
        TextPosition::At(IVec2::new(width / 2 - 120, state.layout.screen_height - 100)),
        FontSize::Regular,
    );
}

fn draw_playfield(renderer: &mut dyn Renderer, state: &GameState, theme: &Theme) {
    for block in &state.blocks {
        let color = if block.is_indestructible() {
            theme.indestructible_block
        } else {
            theme.block_color(block.damage())
        };
        renderer.draw_rect(color, block.rect(), true);
    }

    let paddle = state.paddle.rect();
    renderer.draw_rect(theme.paddle, paddle, true);

    let radius = state.ball.half_extent();
    // A held ball rides on top of the paddle
    let center = if state.ball.started {
        state.ball.center
    } else {
        IVec2::new(paddle.left() + paddle.size.x / 2, paddle.top() - radius - 1)
    };
    renderer.draw_circle(theme.ball, center, radius);

    renderer.draw_text(
        &format!(
            "Score: {}/{}",
            state.score.score(),
            state.score.winning_score()
        ),
        theme.text,
        TextPosition::At(IVec2::new(20, state.layout.screen_height - 50)),
        FontSize::Regular,
    );
}

fn draw_banner(renderer: &mut dyn Renderer, theme: &Theme, text: &str) {
    renderer.draw_text(text, theme.text, TextPosition::Centered, FontSize::Large);
}

fn draw_highscores(renderer: &mut dyn Renderer, state: &GameState, theme: &Theme) {
    renderer.draw_text(
        "Highscores",
        theme.text,
        TextPosition::At(IVec2::new(state.layout.screen_width / 2 - 100, 100)),
        FontSize::Large,
    );
    // Scores are not kept between sessions
    renderer.draw_text(
        "No highscores yet",
        theme.text,
        TextPosition::Centered,
        FontSize::Regular,
    );
}
