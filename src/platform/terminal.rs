//! Terminal surface (crossterm)
//!
//! Terminals deliver key presses, not key state. A press keeps its key held
//! for `key_hold_frames` frames; terminals that report key releases clear it
//! immediately.

use std::io::{self, Stdout, Write, stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};

use crate::renderer::{self, Canvas};
use crate::sim::{FrameInput, Sprite};

use super::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeldKey {
    Left = 0,
    Right = 1,
    Jump = 2,
}

fn map_key(code: KeyCode) -> Option<HeldKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(HeldKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(HeldKey::Right),
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(HeldKey::Jump)
        }
        _ => None,
    }
}

fn is_quit(code: KeyCode) -> bool {
    matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

/// Full-screen terminal surface. Restores the terminal on drop.
pub struct TerminalSurface {
    out: Stdout,
    canvas: Canvas,
    /// Frames each key stays held
    held: [u32; 3],
    hold_frames: u32,
    quit: bool,
    closed: bool,
    enhanced_keys: bool,
    last_present: Instant,
}

impl TerminalSurface {
    pub fn new(hold_frames: u32) -> io::Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )?;

        let enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::debug!("Terminal surface ready (key release events: {enhanced_keys})");

        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            canvas: Canvas::new(cols, rows),
            held: [0; 3],
            hold_frames: hold_frames.max(1),
            quit: false,
            closed: false,
            enhanced_keys,
            last_present: Instant::now(),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_interrupt(&key) {
            self.closed = true;
            return;
        }
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if is_quit(key.code) {
                    self.quit = true;
                } else if let Some(k) = map_key(key.code) {
                    self.held[k as usize] = self.hold_frames;
                }
            }
            KeyEventKind::Release => {
                if let Some(k) = map_key(key.code) {
                    self.held[k as usize] = 0;
                }
            }
        }
    }

    fn drain_events(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(cols, rows) => self.canvas = Canvas::new(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    fn flush_canvas(&mut self) -> io::Result<()> {
        for (row, line) in self.canvas.to_lines().iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}

impl Surface for TerminalSurface {
    fn poll_input(&mut self) -> FrameInput {
        self.quit = false;
        if let Err(e) = self.drain_events() {
            log::warn!("Input error, treating terminal as closed: {e}");
            self.closed = true;
        }
        FrameInput {
            left: self.held[HeldKey::Left as usize] > 0,
            right: self.held[HeldKey::Right as usize] > 0,
            jump: self.held[HeldKey::Jump as usize] > 0,
            quit: self.quit,
        }
    }

    fn close_requested(&self) -> bool {
        self.closed
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw(&mut self, sprite: &Sprite) {
        renderer::draw_sprite(&mut self.canvas, sprite);
    }

    fn draw_hud(&mut self, text: &str) {
        renderer::draw_hud(&mut self.canvas, text);
    }

    fn present(&mut self, frame_rate: u32) {
        if let Err(e) = self.flush_canvas() {
            log::warn!("Render error, treating terminal as closed: {e}");
            self.closed = true;
        }

        for frames in &mut self.held {
            *frames = frames.saturating_sub(1);
        }

        let budget = Duration::from_secs(1) / frame_rate.max(1);
        if let Some(wait) = budget.checked_sub(self.last_present.elapsed()) {
            thread::sleep(wait);
        }
        self.last_present = Instant::now();
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::Left), Some(HeldKey::Left));
        assert_eq!(map_key(KeyCode::Char('d')), Some(HeldKey::Right));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(HeldKey::Jump));
        assert_eq!(map_key(KeyCode::Up), Some(HeldKey::Jump));
        assert_eq!(map_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_and_interrupt_keys() {
        assert!(is_quit(KeyCode::Esc));
        assert!(is_quit(KeyCode::Char('q')));
        assert!(!is_quit(KeyCode::Left));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&ctrl_c));
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_interrupt(&plain_c));
    }
}
