//! Fixed-step simulation tick
//!
//! One call advances a level by exactly one frame.

use super::collision::goal_reached;
use super::level::Level;
use super::resolver::{resolve_horizontal, resolve_vertical};

/// Input state for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Move left key held
    pub left: bool,
    /// Move right key held
    pub right: bool,
    /// Jump key held
    pub jump: bool,
    /// Escape/cancel observed this frame
    pub quit: bool,
}

/// What a tick found after moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    /// Player touched the goal
    Reached,
}

/// Advance the level by one frame: horizontal axis, then vertical axis,
/// then the player's animation, then the goal test.
pub fn tick(level: &mut Level, input: &FrameInput) -> TickResult {
    let vx = resolve_horizontal(level, input);
    level.velocity.x = vx;

    let vy = resolve_vertical(level, input);
    level.velocity.y = vy;

    if let Some(anim) = level.player.animation_mut() {
        anim.advance(vx);
    }

    if goal_reached(&level.player, &level.goal) {
        TickResult::Reached
    } else {
        TickResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::LevelNumber;
    use crate::sim::sprite::{PlatformKind, Sprite};

    #[test]
    fn test_tick_lands_on_floor() {
        let mut level = Level::new(LevelNumber::L0).unwrap();
        let input = FrameInput::default();

        // Falls 40 units onto the ledge at y=500
        for _ in 0..120 {
            tick(&mut level, &input);
        }
        assert_eq!(level.velocity.y, 0.0);
        let ledge = level
            .platforms
            .iter()
            .find(|p| p.pos().x == 600.0 && p.pos().y < 600.0)
            .map(|p| p.bounds())
            .unwrap();
        let feet = level.player.bounds().bottom();
        assert!(feet <= ledge.y);
        assert!(ledge.y - feet < 0.5);
    }

    #[test]
    fn test_tick_reports_goal() {
        let mut level = Level::from_parts(
            LevelNumber::L0,
            Sprite::player(600.0, 400.0),
            vec![Sprite::platform(500.0, 460.0, PlatformKind::Large)],
            Sprite::goal(641.0, 400.0),
            Vec::new(),
        );
        let input = FrameInput {
            right: true,
            ..Default::default()
        };
        let mut reached = false;
        for _ in 0..10 {
            if tick(&mut level, &input) == TickResult::Reached {
                reached = true;
                break;
            }
        }
        assert!(reached);
    }

    #[test]
    fn test_determinism() {
        let mut a = Level::new(LevelNumber::L0).unwrap();
        let mut b = Level::new(LevelNumber::L0).unwrap();

        let inputs = [
            FrameInput {
                right: true,
                ..Default::default()
            },
            FrameInput {
                right: true,
                jump: true,
                ..Default::default()
            },
            FrameInput::default(),
            FrameInput {
                left: true,
                ..Default::default()
            },
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.goal.pos(), b.goal.pos());
        assert_eq!(a.player, b.player);
    }

    #[test]
    fn test_walking_animates_player() {
        let mut level = Level::new(LevelNumber::L0).unwrap();
        let walk = FrameInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut level, &walk);
        }
        match level.player.kind {
            crate::sim::SpriteKind::Player(anim) => {
                assert_eq!(anim.facing, crate::sim::Facing::Left);
            }
            _ => panic!("player sprite lost its kind"),
        }
    }
}
