//! Collision detection
//!
//! Frame-discrete: only the end-of-move rectangles are compared, nothing is
//! swept along the path travelled during the frame.

use super::sprite::Sprite;

/// Whether the player's rectangle overlaps any platform
pub fn player_blocked(player: &Sprite, platforms: &[Sprite]) -> bool {
    let bounds = player.bounds();
    platforms.iter().any(|p| bounds.overlaps(&p.bounds()))
}

/// Whether the player touches the goal
pub fn goal_reached(player: &Sprite, goal: &Sprite) -> bool {
    player.bounds().overlaps(&goal.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprite::PlatformKind;

    #[test]
    fn test_player_blocked_by_any_platform() {
        let player = Sprite::player(100.0, 100.0);
        let platforms = vec![
            Sprite::platform(0.0, 0.0, PlatformKind::Tiny),
            Sprite::platform(90.0, 150.0, PlatformKind::Small),
        ];
        assert!(player_blocked(&player, &platforms));
    }

    #[test]
    fn test_player_resting_on_platform_not_blocked() {
        // Player bottom edge at y=160, platform top at y=160
        let player = Sprite::player(100.0, 100.0);
        let platforms = vec![Sprite::platform(50.0, 160.0, PlatformKind::Large)];
        assert!(!player_blocked(&player, &platforms));
    }

    #[test]
    fn test_no_platforms_never_blocked() {
        let player = Sprite::player(0.0, 0.0);
        assert!(!player_blocked(&player, &[]));
    }

    #[test]
    fn test_goal_reached() {
        let player = Sprite::player(100.0, 100.0);
        assert!(goal_reached(&player, &Sprite::goal(120.0, 50.0)));
        assert!(!goal_reached(&player, &Sprite::goal(140.0, 100.0)));
    }
}
