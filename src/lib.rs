//! Platformer - a side-scrolling level runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sprites, collisions, movement resolution)
//! - `game`: The per-level frame loop
//! - `platform`: Rendering/input surfaces (terminal, headless)
//! - `renderer`: Character-cell canvas and sprite drawing
//! - `accounts`: Player accounts and per-level leaderboards
//! - `menu`: Text menus (login, level select, high scores)
//! - `persistence`: Whole-file JSON save/load

pub mod accounts;
pub mod error;
pub mod game;
pub mod menu;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use accounts::{AccountId, AccountRegistry, Score};
pub use error::{GameError, Result};
pub use game::{LevelOutcome, play_level};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame cadence of the level loop
    pub const FRAME_RATE: u32 = 60;

    /// Window dimensions (world units)
    pub const WINDOW_WIDTH: f32 = 1200.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;

    /// Player spawn (top-left corner). The player never moves on screen.
    pub const PLAYER_START_X: f32 = 600.0;
    pub const PLAYER_START_Y: f32 = 400.0;

    /// Horizontal acceleration per frame while a move key is held
    pub const MOVE_ACCEL: f32 = 0.35;
    /// Horizontal damping, applied every frame regardless of input
    pub const MOVE_DAMPING: f32 = 0.95;
    /// Horizontal speeds below this snap to zero
    pub const MOVE_SNAP: f32 = 0.25;

    /// Upward impulse when jumping from rest
    pub const JUMP_IMPULSE: f32 = 15.0;
    /// Downward pull per frame
    pub const GRAVITY: f32 = 0.251;
    /// Vertical damping (weaker than horizontal)
    pub const FALL_DAMPING: f32 = 0.99;

    /// Score counter at level start, decremented once per frame
    pub const START_SCORE: u32 = 10_000;

    /// Player animation
    pub const ANIM_FRAMES: u8 = 4;
    pub const ANIM_HOLD_FRAMES: u8 = 6;
}

/// Milliseconds since the Unix epoch (0 if the clock is before it)
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
