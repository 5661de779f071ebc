//! Axis-separated movement resolution
//!
//! Each axis is resolved on its own: compute the candidate velocity, move
//! the world speculatively, and undo the whole move if the player ends up
//! inside a platform. The player never moves on screen; the world scrolls
//! the opposite way instead.
//!
//! Positive world x-velocity scrolls the world right (player walks left).
//! Positive world y-velocity scrolls the world down (player rises).

use glam::Vec2;

use super::collision::player_blocked;
use super::level::Level;
use super::tick::FrameInput;
use crate::consts::*;

/// Candidate horizontal velocity before collision testing
pub fn horizontal_velocity(vx: f32, input: &FrameInput) -> f32 {
    let mut acc = 0.0;
    if input.right {
        acc -= MOVE_ACCEL;
    }
    if input.left {
        acc += MOVE_ACCEL;
    }

    let vx = (vx + acc) * MOVE_DAMPING;
    if vx.abs() < MOVE_SNAP { 0.0 } else { vx }
}

/// Candidate vertical velocity before collision testing.
///
/// A jump only starts from rest (`vy == 0`), which after a blocked move
/// means standing on something.
pub fn vertical_velocity(vy: f32, input: &FrameInput) -> f32 {
    let mut acc = 0.0;
    if input.jump && vy == 0.0 {
        acc = JUMP_IMPULSE;
    }
    acc -= GRAVITY;

    (vy + acc) * FALL_DAMPING
}

/// Apply `delta` to the world, roll back on overlap.
/// Returns `false` when the move was undone.
fn try_shift(level: &mut Level, delta: Vec2) -> bool {
    level.shift_world(delta, false);
    if player_blocked(&level.player, &level.platforms) {
        level.shift_world(delta, true);
        return false;
    }
    true
}

/// Resolve the horizontal axis. Returns the committed x-velocity.
pub fn resolve_horizontal(level: &mut Level, input: &FrameInput) -> f32 {
    let vx = horizontal_velocity(level.velocity.x, input);
    if vx == 0.0 {
        return 0.0;
    }
    if try_shift(level, Vec2::new(vx, 0.0)) { vx } else { 0.0 }
}

/// Resolve the vertical axis. Returns the committed y-velocity.
pub fn resolve_vertical(level: &mut Level, input: &FrameInput) -> f32 {
    let vy = vertical_velocity(level.velocity.y, input);
    if try_shift(level, Vec2::new(0.0, vy)) { vy } else { 0.0 }
}
