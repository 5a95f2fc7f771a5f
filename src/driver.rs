//! Headless run loop
//!
//! Stands in for the window/event layer: an [`Autopilot`] produces one
//! command per frame, the loop ticks and renders at the fixed frame cadence
//! and reports a [`RunSummary`] at the end.

use std::thread;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::{FPS, MS_PER_FRAME};
use crate::game::Game;
use crate::input::Command;
use crate::renderer::Renderer;
use crate::sim::{GameState, RoundState};

/// Keeps the ball over the paddle, aiming at a random spot for each descent
/// so bounces spread across the zones.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    aim: i32,
    descending: bool,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim: 0,
            descending: false,
        }
    }

    pub fn next_command(&mut self, state: &GameState) -> Option<Command> {
        match state.phase {
            RoundState::Start => Some(Command::Begin),
            RoundState::Paused => Some(Command::PauseToggle),
            RoundState::Lost | RoundState::Won | RoundState::Highscore => Some(Command::Confirm),
            RoundState::Playing => self.steer(state),
        }
    }

    fn steer(&mut self, state: &GameState) -> Option<Command> {
        let ball = &state.ball;
        let paddle = &state.paddle;

        let descending = ball.velocity.y > 0;
        if descending && !self.descending {
            let reach = (paddle.width() / 2 - ball.half_extent()).max(0);
            self.aim = self.rng.random_range(-reach..=reach);
        }
        self.descending = descending;

        let target = ball.center.x - self.aim;
        let center = paddle.x() + paddle.width() / 2;
        let slack = state.layout.paddle_step / 2;
        if center < target - slack {
            Some(Command::MoveRight)
        } else if center > target + slack {
            Some(Command::MoveLeft)
        } else {
            None
        }
    }
}

/// Loop limits
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Give up (quit) after this many frames
    pub max_frames: u64,
    /// Sleep to hold the frame cadence
    pub pace: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_frames: u64::from(FPS) * 60 * 5,
            pace: true,
        }
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub ticks: u64,
    pub final_state: RoundState,
    pub score: u32,
    pub winning_score: u32,
    pub blocks_left: usize,
    pub timed_out: bool,
}

/// Drive `game` until the session ends or the frame budget runs out
pub fn run_headless(
    game: &mut Game,
    renderer: &mut dyn Renderer,
    pilot: &mut Autopilot,
    config: &RunConfig,
) -> RunSummary {
    let frame_budget = Duration::from_millis(MS_PER_FRAME);
    let mut current_fps = FPS;
    let mut frames = 0u64;
    let mut final_state = game.phase();

    while game.is_running() && frames < config.max_frames {
        let start = Instant::now();

        if let Some(command) = pilot.next_command(game.state()) {
            game.handle(command);
        }
        final_state = game.phase();
        game.update();
        game.update_current_fps(current_fps);
        game.render(renderer);
        frames += 1;

        let elapsed = start.elapsed();
        current_fps = (1000 / elapsed.as_millis().max(1)) as u32;
        if config.pace && elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }

    let timed_out = game.is_running();
    if timed_out {
        log::info!("Frame budget of {} exhausted, quitting", config.max_frames);
        final_state = game.phase();
        game.handle(Command::Quit);
    }

    let state = game.state();
    RunSummary {
        frames,
        ticks: state.time_ticks,
        final_state,
        score: state.score.score(),
        winning_score: state.score.winning_score(),
        blocks_left: state.blocks.len(),
        timed_out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioManager;
    use crate::renderer::DrawList;
    use crate::settings::Settings;
    use crate::sim::Layout;

    fn unpaced(max_frames: u64) -> RunConfig {
        RunConfig {
            max_frames,
            pace: false,
        }
    }

    #[test]
    fn test_autopilot_begins_and_confirms() {
        let mut pilot = Autopilot::new(1);
        let mut state = GameState::new(Layout::default()).unwrap();
        assert_eq!(pilot.next_command(&state), Some(Command::Begin));
        state.begin();
        state.lose();
        assert_eq!(pilot.next_command(&state), Some(Command::Confirm));
    }

    #[test]
    fn test_autopilot_follows_ball() {
        let mut pilot = Autopilot::new(7);
        let mut state = GameState::new(Layout::default()).unwrap();
        state.begin();
        // Ball far to the right and rising: no aim offset yet
        state.ball.center.x = 800;
        state.ball.velocity = glam::IVec2::new(3, -4);
        assert_eq!(pilot.next_command(&state), Some(Command::MoveRight));
        state.ball.center.x = 10;
        assert_eq!(pilot.next_command(&state), Some(Command::MoveLeft));
    }

    #[test]
    fn test_headless_run_ends_session() {
        let mut game = Game::new(Settings::default(), AudioManager::silent()).unwrap();
        let mut list = DrawList::new();
        let mut pilot = Autopilot::new(42);
        let summary = run_headless(&mut game, &mut list, &mut pilot, &unpaced(200_000));

        assert!(!game.is_running());
        assert_eq!(list.frames(), summary.frames);
        if !summary.timed_out {
            assert!(matches!(
                summary.final_state,
                RoundState::Lost | RoundState::Won
            ));
        }
        if summary.final_state == RoundState::Won {
            assert_eq!(summary.score, summary.winning_score);
        }
    }

    #[test]
    fn test_frame_budget_quits() {
        let mut game = Game::new(Settings::default(), AudioManager::silent()).unwrap();
        let mut list = DrawList::new();
        let mut pilot = Autopilot::new(42);
        let summary = run_headless(&mut game, &mut list, &mut pilot, &unpaced(3));

        assert!(summary.timed_out);
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.final_state, RoundState::Playing);
        assert!(!game.is_running());
    }
}
