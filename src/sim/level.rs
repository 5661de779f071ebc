//! Level catalogue and per-session level state
//!
//! Level geometry is hardcoded. A `Level` is built fresh for every play
//! session and discarded when the session ends.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sprite::{PlatformKind, Sprite};
use crate::consts::{PLAYER_START_X, PLAYER_START_Y};
use crate::error::{GameError, Result};

/// Level identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LevelNumber {
    L0,
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
    L7,
    L8,
    L9,
}

impl LevelNumber {
    pub const ALL: [LevelNumber; 10] = [
        LevelNumber::L0,
        LevelNumber::L1,
        LevelNumber::L2,
        LevelNumber::L3,
        LevelNumber::L4,
        LevelNumber::L5,
        LevelNumber::L6,
        LevelNumber::L7,
        LevelNumber::L8,
        LevelNumber::L9,
    ];

    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Whether this level has geometry to play
    pub fn has_layout(&self) -> bool {
        layout(*self).is_some()
    }

    /// Levels that can be played, in catalogue order
    pub fn playable() -> impl Iterator<Item = LevelNumber> {
        Self::ALL.into_iter().filter(|l| l.has_layout())
    }
}

impl TryFrom<u8> for LevelNumber {
    type Error = GameError;

    fn try_from(n: u8) -> Result<Self> {
        Self::ALL
            .get(n as usize)
            .copied()
            .ok_or(GameError::UnknownLevel(n))
    }
}

impl From<LevelNumber> for u8 {
    fn from(level: LevelNumber) -> u8 {
        level.index()
    }
}

/// Static description of a level's geometry
struct Layout {
    platforms: Vec<(f32, f32, PlatformKind)>,
    goal: (f32, f32),
    texts: Vec<(f32, f32, &'static str)>,
}

/// A row of identical platforms starting at `x`, spaced by their own length
fn row(x: f32, y: f32, count: usize, kind: PlatformKind) -> Vec<(f32, f32, PlatformKind)> {
    let step = kind.size().x;
    (0..count).map(|i| (x + step * i as f32, y, kind)).collect()
}

/// A column of identical platforms starting at `y`, spaced by their own length
fn column(x: f32, y: f32, count: usize, kind: PlatformKind) -> Vec<(f32, f32, PlatformKind)> {
    let step = kind.size().y;
    (0..count).map(|i| (x, y + step * i as f32, kind)).collect()
}

fn layout(level: LevelNumber) -> Option<Layout> {
    use PlatformKind::*;

    match level {
        LevelNumber::L0 => {
            let mut platforms = column(0.0, 100.0, 3, Large90);
            platforms.extend(row(0.0, 700.0, 16, Large));
            platforms.extend(column(3195.0, -500.0, 6, Large90));
            platforms.extend([
                (600.0, 500.0, Large),
                (800.0, 500.0, Large),
                (1200.0, 300.0, Large),
                (1400.0, 300.0, Large),
                (1800.0, 100.0, Large),
                (2000.0, 100.0, Large),
                (2400.0, -100.0, Large),
                (2600.0, -100.0, Large),
            ]);
            Some(Layout {
                platforms,
                goal: (2600.0, -200.0),
                texts: vec![(540.0, 250.0, "Level 0"), (480.0, 280.0, "Reach the target")],
            })
        }
        LevelNumber::L1 => {
            let mut platforms = column(0.0, 100.0, 3, Large90);
            platforms.extend(row(0.0, 700.0, 12, Large));
            platforms.extend(column(2395.0, -500.0, 6, Large90));
            platforms.extend([
                (800.0, 550.0, Medium),
                (1100.0, 400.0, Medium),
                (1400.0, 250.0, Medium),
                (1700.0, 100.0, Medium),
            ]);
            Some(Layout {
                platforms,
                goal: (1750.0, 40.0),
                texts: vec![(540.0, 250.0, "Level 1"), (490.0, 280.0, "Climb the steps")],
            })
        }
        LevelNumber::L2 => {
            let mut platforms = column(0.0, 100.0, 3, Large90);
            platforms.extend(row(0.0, 700.0, 15, Large));
            platforms.extend(column(2995.0, -500.0, 6, Large90));
            platforms.extend([
                (900.0, 560.0, Tiny),
                (1100.0, 420.0, Small),
                (1300.0, 550.0, Medium90),
                (1500.0, 450.0, Small),
                (1750.0, 320.0, Tiny),
                (1950.0, 200.0, Small),
                (2250.0, 80.0, Large),
            ]);
            Some(Layout {
                platforms,
                goal: (2400.0, 20.0),
                texts: vec![(540.0, 250.0, "Level 2"), (500.0, 280.0, "Mind the gaps")],
            })
        }
        _ => None,
    }
}

/// Live state of one level being played
#[derive(Debug, Clone)]
pub struct Level {
    pub number: LevelNumber,
    pub player: Sprite,
    pub platforms: Vec<Sprite>,
    pub goal: Sprite,
    pub texts: Vec<Sprite>,
    /// Committed world velocity (the world scrolls, the player stays put)
    pub velocity: Vec2,
}

impl Level {
    /// Build a fresh level. Fails for levels without a layout.
    pub fn new(number: LevelNumber) -> Result<Self> {
        let layout = layout(number).ok_or(GameError::MissingLayout(number))?;

        Ok(Self::from_parts(
            number,
            Sprite::player(PLAYER_START_X, PLAYER_START_Y),
            layout
                .platforms
                .into_iter()
                .map(|(x, y, kind)| Sprite::platform(x, y, kind))
                .collect(),
            Sprite::goal(layout.goal.0, layout.goal.1),
            layout
                .texts
                .into_iter()
                .map(|(x, y, label)| Sprite::text(x, y, label))
                .collect(),
        ))
    }

    /// Assemble a level from explicit sprites
    pub fn from_parts(
        number: LevelNumber,
        player: Sprite,
        platforms: Vec<Sprite>,
        goal: Sprite,
        texts: Vec<Sprite>,
    ) -> Self {
        Self {
            number,
            player,
            platforms,
            goal,
            texts,
            velocity: Vec2::ZERO,
        }
    }

    /// Every sprite except the player (platforms, goal, labels)
    pub fn npcs(&self) -> impl Iterator<Item = &Sprite> {
        self.platforms
            .iter()
            .chain(std::iter::once(&self.goal))
            .chain(self.texts.iter())
    }

    /// Every sprite in paint order: world first, player last
    pub fn draw_order(&self) -> impl Iterator<Item = &Sprite> {
        self.npcs().chain(std::iter::once(&self.player))
    }

    pub fn npcs_mut(&mut self) -> impl Iterator<Item = &mut Sprite> {
        self.platforms
            .iter_mut()
            .chain(std::iter::once(&mut self.goal))
            .chain(self.texts.iter_mut())
    }

    /// Shift the whole world by `delta` (or back, when `reverse`)
    pub fn shift_world(&mut self, delta: Vec2, reverse: bool) {
        for sprite in self.npcs_mut() {
            sprite.update(delta, reverse);
        }
    }
}

/// Check that every playable level builds. Run once at startup.
pub fn validate_catalogue() -> Result<usize> {
    let mut count = 0;
    for number in LevelNumber::playable() {
        let level = Level::new(number)?;
        if level.platforms.is_empty() {
            return Err(GameError::MissingLayout(number));
        }
        count += 1;
    }
    Ok(count)
}
