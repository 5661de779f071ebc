//! Platform abstraction layer
//!
//! The level loop talks to the outside world only through [`Surface`]:
//! - Input state for the frame
//! - Window-closed detection
//! - Drawing sprites and the HUD
//! - Frame pacing

pub mod headless;
pub mod terminal;

pub use headless::HeadlessSurface;
pub use terminal::TerminalSurface;

use crate::sim::{FrameInput, Sprite};

/// Rendering and input services consumed by the level loop
pub trait Surface {
    /// Input held/observed this frame
    fn poll_input(&mut self) -> FrameInput;

    /// Whether the hosting window/terminal has been closed
    fn close_requested(&self) -> bool;

    fn clear(&mut self);

    fn draw(&mut self, sprite: &Sprite);

    fn draw_hud(&mut self, text: &str);

    /// Show the frame and wait for the next tick at `frame_rate` Hz
    fn present(&mut self, frame_rate: u32);
}
