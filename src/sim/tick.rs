//! Fixed-step simulation tick
//!
//! One call advances the ball by one velocity step and applies at most one
//! collision outcome.

use glam::IVec2;

use super::collision::{Axis, Collision, resolve};
use super::state::{GameEvent, GameState, RoundState};

/// Advance the round by one tick, returning what happened
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        RoundState::Playing => {}
        RoundState::Start
        | RoundState::Paused
        | RoundState::Highscore
        | RoundState::Lost
        | RoundState::Won => return events,
    }

    if !state.ball.started {
        return events;
    }

    state.time_ticks += 1;
    state.ball.advance();

    let screen = IVec2::new(state.layout.screen_width, state.layout.screen_height);
    let Some(collision) = resolve(&state.ball, &state.paddle, &state.blocks, screen) else {
        return events;
    };

    match collision {
        Collision::FloorExit => {
            log::debug!("Ball left the playfield at {}", state.ball.center);
            state.lose();
            events.push(GameEvent::BallLost);
        }
        Collision::Paddle { zone } => {
            state.ball.velocity = zone.velocity();
            log::debug!("Paddle hit in zone {} -> {}", zone.get(), state.ball.velocity);
            events.push(GameEvent::PaddleHit { zone: zone.get() });
        }
        Collision::Block { index, invert } => {
            match invert {
                Axis::X => state.ball.invert_x(),
                Axis::Y => state.ball.invert_y(),
            }

            let destroyed = state.blocks.get_mut(index).is_some_and(|block| block.hit());
            events.push(GameEvent::BlockHit { destroyed });

            if destroyed {
                state.blocks.remove(index);
                let won = state.score.record_destroyed();
                log::debug!(
                    "Block {index} destroyed, score {}/{}",
                    state.score.score(),
                    state.score.winning_score()
                );
                if won {
                    state.win();
                    events.push(GameEvent::RoundWon);
                }
            }
        }
        Collision::Wall => {
            state.ball.invert_x();
            events.push(GameEvent::WallBounce);
        }
        Collision::Ceiling => {
            state.ball.invert_y();
            events.push(GameEvent::CeilingBounce);
        }
    }

    events
}
