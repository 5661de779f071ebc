//! Character-cell canvas
//!
//! World coordinates (the 1200x800 window) are scaled onto a grid of
//! terminal cells. Anything outside the window is clipped.

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::Rect;

/// A fixed-size grid of characters
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![' '; cols as usize * rows as usize],
        }
    }

    /// World units per cell horizontally
    fn cell_w(&self) -> f32 {
        WINDOW_WIDTH / self.cols as f32
    }

    /// World units per cell vertically
    fn cell_h(&self) -> f32 {
        WINDOW_HEIGHT / self.rows as f32
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    pub fn get(&self, col: u16, row: u16) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    fn set(&mut self, col: i64, row: i64, ch: char) {
        if col >= 0 && row >= 0 && col < self.cols as i64 && row < self.rows as i64 {
            self.cells[row as usize * self.cols as usize + col as usize] = ch;
        }
    }

    /// Cell containing a world point
    pub fn cell_of(&self, x: f32, y: f32) -> (i64, i64) {
        (
            (x / self.cell_w()).floor() as i64,
            (y / self.cell_h()).floor() as i64,
        )
    }

    /// Fill every cell a world rectangle touches. Thin rectangles still
    /// cover at least one cell in each direction.
    pub fn fill_rect(&mut self, rect: &Rect, ch: char) {
        let (c0, r0) = self.cell_of(rect.x, rect.y);
        let c1 = ((rect.right() / self.cell_w()).ceil() as i64).max(c0 + 1);
        let r1 = ((rect.bottom() / self.cell_h()).ceil() as i64).max(r0 + 1);

        let c0 = c0.max(0);
        let r0 = r0.max(0);
        let c1 = c1.min(self.cols as i64);
        let r1 = r1.min(self.rows as i64);

        for row in r0..r1 {
            for col in c0..c1 {
                self.set(col, row, ch);
            }
        }
    }

    /// Write text starting at a cell, clipped to the grid
    pub fn put_str(&mut self, col: i64, row: i64, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set(col + i as i64, row, ch);
        }
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().collect())
            .collect()
    }
}
