//! Round state and core simulation types
//!
//! Everything a round owns lives in [`GameState`]; entities are plain values
//! with no shared base.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::layout::{Layout, LayoutError};
use super::score::ScoreTracker;
use crate::consts::NUM_ZONES;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Start menu, nothing moves yet
    Start,
    /// Active gameplay
    Playing,
    /// Frozen until the next pause toggle
    Paused,
    /// Informational highscore screen reached from the start menu
    Highscore,
    /// Ball fell through the floor
    Lost,
    /// Winning score reached
    Won,
}

impl RoundState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::Start => "start",
            RoundState::Playing => "playing",
            RoundState::Paused => "paused",
            RoundState::Highscore => "highscore",
            RoundState::Lost => "lost",
            RoundState::Won => "won",
        }
    }

    /// Round is over; only acknowledgement or quit remain
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundState::Lost | RoundState::Won | RoundState::Highscore)
    }
}

/// Horizontal paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Integer axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Inclusive overlap on both axes (touching edges count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.left()
            && self.bottom() >= other.top()
            && self.left() <= other.right()
            && self.top() <= other.bottom()
    }

    pub fn contains(&self, point: IVec2) -> bool {
        (self.left()..=self.right()).contains(&point.x)
            && (self.top()..=self.bottom()).contains(&point.y)
    }

    /// Rectangle shrunk by `inset` on every side
    pub fn inset(&self, inset: i32) -> Rect {
        Rect::new(
            self.pos.x + inset,
            self.pos.y + inset,
            self.size.x - 2 * inset,
            self.size.y - 2 * inset,
        )
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    rect: Rect,
    step: i32,
    max_x: i32,
}

impl Paddle {
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            rect: Rect {
                pos: layout.paddle_pos,
                size: IVec2::new(layout.paddle_width, layout.paddle_height),
            },
            step: layout.paddle_step,
            max_x: layout.paddle_max_x(),
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.rect.pos.x
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rect.size.x
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Width of one reflection zone
    #[inline]
    pub fn zone_width(&self) -> i32 {
        self.width() / NUM_ZONES as i32
    }

    /// Shift by one step, clamped to `[0, screen_width - width]`
    pub fn shift(&mut self, dir: Direction) {
        let delta = match dir {
            Direction::Left => -self.step,
            Direction::Right => self.step,
        };
        self.rect.pos.x = (self.rect.pos.x + delta).clamp(0, self.max_x);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub center: IVec2,
    pub diameter: i32,
    /// Displacement per tick
    pub velocity: IVec2,
    /// Held in place until launched
    pub started: bool,
}

impl Ball {
    pub fn new(center: IVec2, diameter: i32, velocity: IVec2) -> Self {
        Self {
            center,
            diameter,
            velocity,
            started: false,
        }
    }

    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(layout.ball_spawn(), layout.ball_diameter, layout.ball_velocity)
    }

    #[inline]
    pub fn half_extent(&self) -> i32 {
        self.diameter / 2
    }

    /// Square bounding box with side `diameter`, starting `diameter / 2`
    /// left of and above the center
    pub fn bbox(&self) -> Rect {
        let h = self.half_extent();
        Rect::new(
            self.center.x - h,
            self.center.y - h,
            self.diameter,
            self.diameter,
        )
    }

    pub fn launch(&mut self) {
        self.started = true;
    }

    /// Move by one tick of velocity; held balls stay put
    pub fn advance(&mut self) {
        if self.started {
            self.center += self.velocity;
        }
    }

    #[inline]
    pub fn invert_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    #[inline]
    pub fn invert_y(&mut self) {
        self.velocity.y = -self.velocity.y;
    }
}

/// A destructible (or not) block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    rect: Rect,
    strength: u32,
    initial_strength: u32,
    indestructible: bool,
}

impl Block {
    pub fn new(rect: Rect, strength: u32) -> Self {
        Self {
            rect,
            strength,
            initial_strength: strength,
            indestructible: false,
        }
    }

    /// A block that is never removed, however often it is hit
    pub fn indestructible(rect: Rect, strength: u32) -> Self {
        Self {
            indestructible: true,
            ..Self::new(rect, strength)
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn strength(&self) -> u32 {
        self.strength
    }

    /// Hits absorbed so far
    pub fn damage(&self) -> u32 {
        self.initial_strength - self.strength
    }

    #[inline]
    pub fn is_indestructible(&self) -> bool {
        self.indestructible
    }

    /// Take one hit. Returns true when the block should leave the grid.
    pub fn hit(&mut self) -> bool {
        self.strength = self.strength.saturating_sub(1);
        self.is_broken()
    }

    pub fn is_broken(&self) -> bool {
        self.strength == 0 && !self.indestructible
    }
}

/// Ordered block collection; iteration order decides collision tie-breaks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockGrid {
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// Lay out the grid column by column
    pub fn from_layout(layout: &Layout) -> Self {
        let columns = layout.block_columns();
        let size = IVec2::new(layout.block_width, layout.block_height);
        let mut blocks = Vec::with_capacity((columns * layout.block_rows) as usize);

        for column in 0..columns {
            for row in 0..layout.block_rows {
                let rect = Rect {
                    pos: layout.block_origin(column, row),
                    size,
                };
                let strength = layout.row_strength(row);
                if layout.is_indestructible(column, row) {
                    blocks.push(Block::indestructible(rect, strength));
                } else {
                    blocks.push(Block::new(rect, strength));
                }
            }
        }

        Self { blocks }
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    /// Index of the first block (in creation order) overlapping `bbox`
    pub fn first_overlap(&self, bbox: &Rect) -> Option<usize> {
        self.blocks.iter().position(|b| bbox.overlaps(&b.rect))
    }

    /// Remove a block, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Block {
        self.blocks.remove(index)
    }
}

impl<'a> IntoIterator for &'a BlockGrid {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Something that happened during a tick, for audio/logging consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PaddleHit { zone: u8 },
    BlockHit { destroyed: bool },
    WallBounce,
    CeilingBounce,
    BallLost,
    RoundWon,
}

/// Complete round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub layout: Layout,
    pub phase: RoundState,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: BlockGrid,
    pub score: ScoreTracker,
    /// Ticks spent in `Playing`
    pub time_ticks: u64,
    /// Session end was requested (confirm or quit)
    finished: bool,
}

impl GameState {
    /// Set up a fresh round. The layout is validated first.
    pub fn new(layout: Layout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self {
            phase: RoundState::Start,
            paddle: Paddle::from_layout(&layout),
            ball: Ball::from_layout(&layout),
            blocks: BlockGrid::from_layout(&layout),
            score: ScoreTracker::new(layout.winning_score),
            time_ticks: 0,
            finished: false,
            layout,
        })
    }

    /// False once the session end was requested
    pub fn is_running(&self) -> bool {
        !self.finished
    }

    fn enter(&mut self, next: RoundState) {
        log::info!("Round state: {} -> {}", self.phase.as_str(), next.as_str());
        self.phase = next;
    }

    /// Start the round (from the menu) or launch a held ball
    pub fn begin(&mut self) {
        match self.phase {
            RoundState::Start => {
                self.enter(RoundState::Playing);
                self.ball.launch();
            }
            RoundState::Playing if !self.ball.started => self.ball.launch(),
            RoundState::Playing
            | RoundState::Paused
            | RoundState::Highscore
            | RoundState::Lost
            | RoundState::Won => {}
        }
    }

    pub fn show_highscores(&mut self) {
        if self.phase == RoundState::Start {
            self.enter(RoundState::Highscore);
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            RoundState::Playing => self.enter(RoundState::Paused),
            RoundState::Paused => self.enter(RoundState::Playing),
            RoundState::Start | RoundState::Highscore | RoundState::Lost | RoundState::Won => {}
        }
    }

    pub fn move_paddle(&mut self, dir: Direction) {
        if self.phase == RoundState::Playing {
            self.paddle.shift(dir);
        }
    }

    /// Acknowledge a finished round
    pub fn confirm(&mut self) {
        if self.phase.is_terminal() {
            log::info!("Round acknowledged in state {}", self.phase.as_str());
            self.finished = true;
        }
    }

    pub fn quit(&mut self) {
        log::info!("Quit requested in state {}", self.phase.as_str());
        self.finished = true;
    }

    pub(crate) fn lose(&mut self) {
        self.enter(RoundState::Lost);
    }

    pub(crate) fn win(&mut self) {
        self.enter(RoundState::Won);
    }
}
