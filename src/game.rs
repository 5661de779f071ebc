//! Level loop
//!
//! Drives one level on a [`Surface`] until it ends, one simulation tick per
//! frame, and reports how it ended.

use crate::consts::START_SCORE;
use crate::platform::Surface;
use crate::sim::{Level, TickResult, tick};

/// How a level session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// Goal reached with this much time left on the counter
    Succeeded { score: u32 },
    /// Escape/cancel pressed
    QuitRequested,
    /// Score counter ran out
    TimedOut,
    /// Window/terminal closed from outside
    WindowClosed,
}

impl LevelOutcome {
    /// The score, for successful runs only
    pub fn score(&self) -> Option<u32> {
        match self {
            LevelOutcome::Succeeded { score } => Some(*score),
            _ => None,
        }
    }
}

/// Play `level` to completion starting from the default score counter
pub fn play_level<S: Surface>(level: Level, surface: &mut S, frame_rate: u32) -> LevelOutcome {
    play_level_with_score(level, surface, frame_rate, START_SCORE)
}

/// Play `level` with an explicit starting score counter.
///
/// Per frame: closed check, input, quit check, tick, render, goal check,
/// countdown, present. The countdown times out on the frame the counter
/// reaches zero.
pub fn play_level_with_score<S: Surface>(
    mut level: Level,
    surface: &mut S,
    frame_rate: u32,
    start_score: u32,
) -> LevelOutcome {
    log::info!("Level {} started", level.number.index());

    let mut score = start_score;
    let outcome = loop {
        if surface.close_requested() {
            break LevelOutcome::WindowClosed;
        }
        if score == 0 {
            break LevelOutcome::TimedOut;
        }

        let input = surface.poll_input();
        if input.quit {
            break LevelOutcome::QuitRequested;
        }

        surface.clear();
        let result = tick(&mut level, &input);

        for sprite in level.draw_order() {
            surface.draw(sprite);
        }
        surface.draw_hud(&format!("Level {}  Score: {score}", level.number.index()));

        if result == TickResult::Reached {
            break LevelOutcome::Succeeded { score };
        }

        score -= 1;
        if score == 0 {
            break LevelOutcome::TimedOut;
        }

        surface.present(frame_rate);
    };

    log::info!("Level {} finished: {:?}", level.number.index(), outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessSurface;
    use crate::renderer::{self, Canvas};
    use crate::sim::{FrameInput, LevelNumber, PlatformKind, Sprite};

    fn unreachable_goal_level() -> Level {
        Level::from_parts(
            LevelNumber::L0,
            Sprite::player(600.0, 400.0),
            vec![Sprite::platform(500.0, 460.0, PlatformKind::Large)],
            Sprite::goal(-5000.0, -5000.0),
            Vec::new(),
        )
    }

    #[test]
    fn test_quit_sentinel() {
        let mut surface = HeadlessSurface::new(vec![
            FrameInput::default(),
            FrameInput {
                quit: true,
                ..Default::default()
            },
        ]);
        let outcome = play_level(unreachable_goal_level(), &mut surface, 60);
        assert_eq!(outcome, LevelOutcome::QuitRequested);
        assert_eq!(surface.frames_presented(), 1);
        assert_eq!(outcome.score(), None);
    }

    #[test]
    fn test_window_closed_sentinel() {
        let mut surface = HeadlessSurface::new(Vec::new()).close_after(5);
        let outcome = play_level(unreachable_goal_level(), &mut surface, 60);
        assert_eq!(outcome, LevelOutcome::WindowClosed);
        assert_eq!(surface.frames_presented(), 5);
    }

    #[test]
    fn test_timeout_on_the_frame_counter_hits_zero() {
        let mut surface = HeadlessSurface::new(Vec::new());
        let outcome = play_level_with_score(unreachable_goal_level(), &mut surface, 60, 30);
        assert_eq!(outcome, LevelOutcome::TimedOut);
        // 30 frames simulated, the last one is not presented
        assert_eq!(surface.frames_presented(), 29);
        assert_eq!(surface.last_hud(), "Level 0  Score: 1");
    }

    #[test]
    fn test_standing_still_times_out_after_full_counter() {
        let level = Level::new(LevelNumber::L0).unwrap();
        let mut surface = HeadlessSurface::new(Vec::new());
        let outcome = play_level(level, &mut surface, 60);
        assert_eq!(outcome, LevelOutcome::TimedOut);
        assert_eq!(surface.frames_presented(), START_SCORE as u64 - 1);
    }

    #[test]
    fn test_quit_before_first_frame() {
        let mut surface = HeadlessSurface::holding(FrameInput {
            quit: true,
            ..Default::default()
        });
        let outcome = play_level(Level::new(LevelNumber::L1).unwrap(), &mut surface, 60);
        assert_eq!(outcome, LevelOutcome::QuitRequested);
        assert_eq!(surface.frames_presented(), 0);
        assert_eq!(surface.sprites_drawn(), 0);
    }

    #[test]
    fn test_success_reports_remaining_counter() {
        let level = Level::from_parts(
            LevelNumber::L0,
            Sprite::player(600.0, 400.0),
            vec![Sprite::platform(500.0, 460.0, PlatformKind::Large)],
            Sprite::goal(641.0, 400.0),
            Vec::new(),
        );
        let mut surface = HeadlessSurface::holding(FrameInput {
            right: true,
            ..Default::default()
        });
        let outcome = play_level(level, &mut surface, 60);
        let score = outcome.score().unwrap();
        assert!(score < START_SCORE);
        assert_eq!(score as u64, START_SCORE as u64 - surface.frames_presented());
    }

    #[test]
    fn test_frame_matches_level_render() {
        let mut surface = HeadlessSurface::new(Vec::new()).close_after(1);
        play_level(Level::new(LevelNumber::L0).unwrap(), &mut surface, 60);

        let mut level = Level::new(LevelNumber::L0).unwrap();
        tick(&mut level, &FrameInput::default());
        let mut canvas = Canvas::new(120, 40);
        renderer::draw_level(&mut canvas, &level);
        renderer::draw_hud(&mut canvas, &format!("Level 0  Score: {START_SCORE}"));

        assert_eq!(surface.screen(), canvas.to_lines());
    }

    #[test]
    fn test_every_sprite_drawn_each_frame() {
        let level = unreachable_goal_level();
        let per_frame = 1 + level.npcs().count() as u64;
        let mut surface = HeadlessSurface::new(Vec::new()).close_after(3);
        play_level(level, &mut surface, 60);
        assert_eq!(surface.sprites_drawn(), per_frame * 3);
    }
}
