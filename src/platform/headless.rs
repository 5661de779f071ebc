//! Scripted surface for tests and replays
//!
//! Feeds a fixed sequence of inputs, draws into an off-screen canvas and
//! never sleeps.

use crate::renderer::{self, Canvas};
use crate::sim::{FrameInput, Sprite};

use super::Surface;

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    script: Vec<FrameInput>,
    /// Input used once the script runs out
    idle: FrameInput,
    close_after: Option<u64>,
    frames_polled: u64,
    frames_presented: u64,
    sprites_drawn: u64,
    canvas: Canvas,
    last_hud: String,
}

impl HeadlessSurface {
    pub fn new(script: Vec<FrameInput>) -> Self {
        Self {
            script,
            idle: FrameInput::default(),
            close_after: None,
            frames_polled: 0,
            frames_presented: 0,
            sprites_drawn: 0,
            canvas: Canvas::new(120, 40),
            last_hud: String::new(),
        }
    }

    /// Surface that holds the same input on every frame
    pub fn holding(input: FrameInput) -> Self {
        let mut surface = Self::new(Vec::new());
        surface.idle = input;
        surface
    }

    /// Report the window as closed once `frames` frames were presented
    pub fn close_after(mut self, frames: u64) -> Self {
        self.close_after = Some(frames);
        self
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn sprites_drawn(&self) -> u64 {
        self.sprites_drawn
    }

    pub fn last_hud(&self) -> &str {
        &self.last_hud
    }

    /// Text of the last drawn frame
    pub fn screen(&self) -> Vec<String> {
        self.canvas.to_lines()
    }
}

impl Surface for HeadlessSurface {
    fn poll_input(&mut self) -> FrameInput {
        let input = self
            .script
            .get(self.frames_polled as usize)
            .copied()
            .unwrap_or(self.idle);
        self.frames_polled += 1;
        input
    }

    fn close_requested(&self) -> bool {
        self.close_after
            .is_some_and(|limit| self.frames_presented >= limit)
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw(&mut self, sprite: &Sprite) {
        renderer::draw_sprite(&mut self.canvas, sprite);
        self.sprites_drawn += 1;
    }

    fn draw_hud(&mut self, text: &str) {
        renderer::draw_hud(&mut self.canvas, text);
        self.last_hud = text.to_string();
    }

    fn present(&mut self, _frame_rate: u32) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_then_idle() {
        let jump = FrameInput {
            jump: true,
            ..Default::default()
        };
        let mut surface = HeadlessSurface::new(vec![jump]);
        assert_eq!(surface.poll_input(), jump);
        assert_eq!(surface.poll_input(), FrameInput::default());
    }

    #[test]
    fn test_close_after() {
        let mut surface = HeadlessSurface::new(Vec::new()).close_after(2);
        assert!(!surface.close_requested());
        surface.present(60);
        surface.present(60);
        assert!(surface.close_requested());
        assert_eq!(surface.frames_presented(), 2);
    }
}
