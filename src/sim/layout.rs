//! Round geometry
//!
//! Everything the simulation needs to know about sizes and positions lives
//! here, fixed for the lifetime of a round.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Geometry that would break the simulation's integer arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("screen must be at least 1x1, got {width}x{height}")]
    EmptyScreen { width: i32, height: i32 },
    #[error("paddle width {paddle} must fit the screen width {screen}")]
    PaddleTooWide { paddle: i32, screen: i32 },
    #[error("paddle width {width} leaves zero-width zones for {zones} zones")]
    PaddleTooNarrow { width: i32, zones: usize },
    #[error("paddle x {x} is outside [0, {max}]")]
    PaddleOutOfBounds { x: i32, max: i32 },
    #[error("ball diameter must be positive, got {0}")]
    BallTooSmall(i32),
    #[error("ball velocity components must be non-zero, got ({x}, {y})")]
    StalledBall { x: i32, y: i32 },
    #[error("block grid has no room for a single column")]
    EmptyGrid,
    #[error("winning score must be positive")]
    ZeroWinningScore,
}

/// Immutable round configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub screen_width: i32,
    pub screen_height: i32,

    pub paddle_pos: IVec2,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_step: i32,

    pub ball_diameter: i32,
    pub ball_velocity: IVec2,

    pub block_width: i32,
    pub block_height: i32,
    pub block_margin: i32,
    pub block_rows: u32,
    pub base_strength: u32,
    /// (column, row) cells holding indestructible blocks
    pub indestructible: Vec<(u32, u32)>,

    pub winning_score: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            paddle_pos: IVec2::new(PADDLE_X, PADDLE_Y),
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            ball_diameter: BALL_DIAMETER,
            ball_velocity: IVec2::new(BALL_XDIR, BALL_YDIR),
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_margin: BLOCK_MARGIN,
            block_rows: BLOCK_ROWS,
            base_strength: BASE_BLOCK_STRENGTH,
            indestructible: INDESTRUCTIBLE_CELLS.to_vec(),
            winning_score: WINNING_SCORE,
        }
    }
}

impl Layout {
    /// Check every assumption the simulation makes about this geometry
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.screen_width < 1 || self.screen_height < 1 {
            return Err(LayoutError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.paddle_width > self.screen_width {
            return Err(LayoutError::PaddleTooWide {
                paddle: self.paddle_width,
                screen: self.screen_width,
            });
        }
        if self.paddle_width / NUM_ZONES as i32 == 0 {
            return Err(LayoutError::PaddleTooNarrow {
                width: self.paddle_width,
                zones: NUM_ZONES,
            });
        }
        if !(0..=self.paddle_max_x()).contains(&self.paddle_pos.x) {
            return Err(LayoutError::PaddleOutOfBounds {
                x: self.paddle_pos.x,
                max: self.paddle_max_x(),
            });
        }
        if self.ball_diameter < 1 {
            return Err(LayoutError::BallTooSmall(self.ball_diameter));
        }
        if self.ball_velocity.x == 0 || self.ball_velocity.y == 0 {
            return Err(LayoutError::StalledBall {
                x: self.ball_velocity.x,
                y: self.ball_velocity.y,
            });
        }
        if self.block_columns() == 0 || self.block_rows == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        if self.winning_score == 0 {
            return Err(LayoutError::ZeroWinningScore);
        }
        Ok(())
    }

    /// Rightmost legal paddle x
    #[inline]
    pub fn paddle_max_x(&self) -> i32 {
        self.screen_width - self.paddle_width
    }

    /// Number of block columns that fit the screen width
    pub fn block_columns(&self) -> u32 {
        let pitch = self.block_width + self.block_margin;
        if pitch <= 0 {
            return 0;
        }
        ((self.screen_width - self.block_margin) / pitch).max(0) as u32
    }

    /// Top-left corner of the block at (column, row)
    pub fn block_origin(&self, column: u32, row: u32) -> IVec2 {
        let (c, r) = (column as i32, row as i32);
        IVec2::new(
            c * self.block_width + (c + 1) * self.block_margin,
            r * self.block_height + (r + 1) * self.block_margin,
        )
    }

    /// Hit points for blocks in the given row (top rows are tougher)
    pub fn row_strength(&self, row: u32) -> u32 {
        self.base_strength.saturating_sub(row / 2).max(1)
    }

    pub fn is_indestructible(&self, column: u32, row: u32) -> bool {
        self.indestructible.contains(&(column, row))
    }

    /// Ball spawn point: over the paddle center, halfway down the screen
    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(
            self.paddle_pos.x + self.paddle_width / 2,
            self.screen_height / 2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = Layout::default();
        assert_eq!(layout.validate(), Ok(()));
        assert_eq!(layout.block_columns(), 10);
    }

    #[test]
    fn test_grid_fits_screen() {
        let layout = Layout::default();
        let last = layout.block_origin(layout.block_columns() - 1, 0);
        assert!(last.x + layout.block_width <= layout.screen_width);
        assert_eq!(layout.block_origin(0, 0), IVec2::new(10, 10));
        assert_eq!(layout.block_origin(1, 2), IVec2::new(100, 70));
    }

    #[test]
    fn test_row_strength_decreases() {
        let layout = Layout::default();
        let strengths: Vec<u32> = (0..6).map(|r| layout.row_strength(r)).collect();
        assert_eq!(strengths, vec![4, 4, 3, 3, 2, 2]);
        assert_eq!(layout.row_strength(40), 1);
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let narrow = Layout {
            paddle_width: 9,
            ..Default::default()
        };
        assert!(matches!(
            narrow.validate(),
            Err(LayoutError::PaddleTooNarrow { .. })
        ));

        let stalled = Layout {
            ball_velocity: IVec2::new(0, 3),
            ..Default::default()
        };
        assert_eq!(
            stalled.validate(),
            Err(LayoutError::StalledBall { x: 0, y: 3 })
        );

        let off_screen = Layout {
            paddle_pos: IVec2::new(800, PADDLE_Y),
            ..Default::default()
        };
        assert_eq!(
            off_screen.validate(),
            Err(LayoutError::PaddleOutOfBounds { x: 800, max: 760 })
        );

        let no_goal = Layout {
            winning_score: 0,
            ..Default::default()
        };
        assert_eq!(no_goal.validate(), Err(LayoutError::ZeroWinningScore));
    }
}
