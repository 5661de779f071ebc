//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - No wall-clock time, no randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod level;
pub mod resolver;
pub mod sprite;
pub mod tick;

pub use collision::{goal_reached, player_blocked};
pub use geometry::Rect;
pub use level::{Level, LevelNumber, validate_catalogue};
pub use resolver::{horizontal_velocity, resolve_horizontal, resolve_vertical, vertical_velocity};
pub use sprite::{Animation, Facing, PlatformKind, Sprite, SpriteKind};
pub use tick::{FrameInput, TickResult, tick};
