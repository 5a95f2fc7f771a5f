//! Breakout - a block-breaking arcade round
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, round state)
//! - `renderer`: Rendering collaborator seam and the draw-list recorder
//! - `audio`: Fire-and-forget sound dispatch
//! - `game`: Orchestrator tying the simulation to input, rendering and audio
//! - `driver`: Headless run loop with an autopilot input source

pub mod audio;
pub mod driver;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod theme;
pub mod ui;

pub use game::Game;
pub use input::Command;
pub use settings::Settings;
pub use theme::Theme;

/// Game configuration constants
pub mod consts {
    /// Frame cadence of the driver loop
    pub const FPS: u32 = 60;
    pub const MS_PER_FRAME: u64 = 1000 / FPS as u64;

    /// Window dimensions
    pub const SCREEN_WIDTH: i32 = 910;
    pub const SCREEN_HEIGHT: i32 = 720;

    /// Paddle defaults
    pub const PADDLE_X: i32 = 40;
    pub const PADDLE_Y: i32 = 650;
    pub const PADDLE_WIDTH: i32 = 150;
    pub const PADDLE_HEIGHT: i32 = 20;
    /// Horizontal distance covered by one move command
    pub const PADDLE_STEP: i32 = 10;
    /// Number of paddle slices, one per reflection table row
    pub const NUM_ZONES: usize = 10;

    /// Ball defaults
    pub const BALL_DIAMETER: i32 = 30;
    pub const BALL_XDIR: i32 = 2;
    pub const BALL_YDIR: i32 = 3;

    /// Block grid defaults
    pub const BLOCK_WIDTH: i32 = 80;
    pub const BLOCK_HEIGHT: i32 = 20;
    pub const BLOCK_MARGIN: i32 = 10;
    pub const BLOCK_ROWS: u32 = 6;
    /// Strength of the top row; every second row below loses one point
    pub const BASE_BLOCK_STRENGTH: u32 = 4;
    /// (column, row) cells holding indestructible blocks
    pub const INDESTRUCTIBLE_CELLS: [(u32, u32); 2] = [(2, 5), (7, 5)];

    /// Destroyed blocks needed to win the round
    pub const WINNING_SCORE: u32 = 15;
}
