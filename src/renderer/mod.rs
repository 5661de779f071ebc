//! Character-cell rendering
//!
//! Every sprite kind is drawn by the single [`draw_sprite`] function.

pub mod canvas;

pub use canvas::Canvas;

use crate::sim::{Facing, Level, PlatformKind, Sprite, SpriteKind};

const PLAYER_RIGHT: [char; 4] = ['>', '}', '>', ')'];
const PLAYER_LEFT: [char; 4] = ['<', '{', '<', '('];

fn platform_glyph(kind: PlatformKind) -> char {
    if kind.is_vertical() { '|' } else { '=' }
}

/// Draw one sprite onto the canvas
pub fn draw_sprite(canvas: &mut Canvas, sprite: &Sprite) {
    let bounds = sprite.bounds();
    match &sprite.kind {
        SpriteKind::Platform(kind) => canvas.fill_rect(&bounds, platform_glyph(*kind)),
        SpriteKind::Goal => canvas.fill_rect(&bounds, '*'),
        SpriteKind::Player(anim) => {
            let frames = match anim.facing {
                Facing::Right => &PLAYER_RIGHT,
                Facing::Left => &PLAYER_LEFT,
            };
            let glyph = frames[anim.frame as usize % frames.len()];
            canvas.fill_rect(&bounds, glyph);
        }
        SpriteKind::Text(label) => {
            let (col, row) = canvas.cell_of(bounds.x, bounds.y);
            canvas.put_str(col, row, label);
        }
    }
}

/// Draw a whole level: world first, player on top
pub fn draw_level(canvas: &mut Canvas, level: &Level) {
    for sprite in level.draw_order() {
        draw_sprite(canvas, sprite);
    }
}

/// Overlay a status line on the top row
pub fn draw_hud(canvas: &mut Canvas, text: &str) {
    canvas.put_str(0, 0, text);
}
