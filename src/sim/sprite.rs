//! Sprites: positioned, sized entities
//!
//! Every drawable thing in a level (player, platforms, goal, labels) is a
//! `Sprite` tagged with its `SpriteKind`. Size is fixed at construction;
//! position only changes through [`Sprite::update`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{ANIM_FRAMES, ANIM_HOLD_FRAMES};

/// Platform size/orientation variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    Tiny,
    Tiny90,
    Small,
    Small90,
    Medium,
    Medium90,
    Large,
    Large90,
}

impl PlatformKind {
    /// Slab thickness shared by every variant
    pub const THICKNESS: f32 = 20.0;

    /// Width and height of this variant
    pub fn size(&self) -> Vec2 {
        let (length, rotated) = match self {
            PlatformKind::Tiny => (50.0, false),
            PlatformKind::Tiny90 => (50.0, true),
            PlatformKind::Small => (100.0, false),
            PlatformKind::Small90 => (100.0, true),
            PlatformKind::Medium => (150.0, false),
            PlatformKind::Medium90 => (150.0, true),
            PlatformKind::Large => (200.0, false),
            PlatformKind::Large90 => (200.0, true),
        };
        if rotated {
            Vec2::new(Self::THICKNESS, length)
        } else {
            Vec2::new(length, Self::THICKNESS)
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(
            self,
            PlatformKind::Tiny90
                | PlatformKind::Small90
                | PlatformKind::Medium90
                | PlatformKind::Large90
        )
    }
}

/// Which way the player faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Player animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Animation {
    /// Current frame index (0..ANIM_FRAMES)
    pub frame: u8,
    pub facing: Facing,
    /// Frames the current animation frame has been shown
    pub hold: u8,
}

impl Animation {
    /// Advance one frame given the committed horizontal world velocity.
    ///
    /// The world scrolls opposite to the player, so a negative world
    /// velocity means the player is walking right.
    pub fn advance(&mut self, world_vx: f32) {
        if world_vx == 0.0 {
            self.frame = 0;
            self.hold = 0;
            return;
        }

        self.facing = if world_vx < 0.0 {
            Facing::Right
        } else {
            Facing::Left
        };

        self.hold += 1;
        if self.hold >= ANIM_HOLD_FRAMES {
            self.hold = 0;
            self.frame = (self.frame + 1) % ANIM_FRAMES;
        }
    }
}

/// Sprite variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpriteKind {
    Platform(PlatformKind),
    Player(Animation),
    Goal,
    Text(String),
}

/// A positioned, fixed-size entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Top-left corner
    pos: Vec2,
    size: Vec2,
    pub kind: SpriteKind,
}

impl Sprite {
    pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 60.0);
    pub const GOAL_SIZE: Vec2 = Vec2::new(60.0, 60.0);
    /// Width of one character of label text
    pub const TEXT_CHAR_WIDTH: f32 = 10.0;
    pub const TEXT_HEIGHT: f32 = 20.0;

    pub fn platform(x: f32, y: f32, kind: PlatformKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: kind.size(),
            kind: SpriteKind::Platform(kind),
        }
    }

    pub fn player(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Self::PLAYER_SIZE,
            kind: SpriteKind::Player(Animation::default()),
        }
    }

    pub fn goal(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Self::GOAL_SIZE,
            kind: SpriteKind::Goal,
        }
    }

    pub fn text(x: f32, y: f32, label: impl Into<String>) -> Self {
        let label = label.into();
        let width = label.chars().count() as f32 * Self::TEXT_CHAR_WIDTH;
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, Self::TEXT_HEIGHT),
            kind: SpriteKind::Text(label),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Move by `delta`, or by `-delta` when `reverse` is set
    pub fn update(&mut self, delta: Vec2, reverse: bool) {
        if reverse {
            self.pos -= delta;
        } else {
            self.pos += delta;
        }
    }

    /// Player animation state, if this is the player
    pub fn animation_mut(&mut self) -> Option<&mut Animation> {
        match &mut self.kind {
            SpriteKind::Player(anim) => Some(anim),
            _ => None,
        }
    }
}
