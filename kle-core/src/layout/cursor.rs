//! Parser cursor. Every transition returns a new cursor.

use crate::types::{Modifier, PositionedKey, KEY_UNIT};

/// Grid-unit position and pending key properties while walking a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub rotation_origin_x: f64,
    pub rotation_origin_y: f64,
    pub pending_width: f64,
    pub pending_height: f64,
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            rotation_origin_x: 0.0,
            rotation_origin_y: 0.0,
            pending_width: 1.0,
            pending_height: 1.0,
            row: 0,
            col: 0,
        }
    }

    /// Folds a modifier in. Offsets accumulate, sizes wait for the next
    /// label and rotation sticks until overwritten.
    pub fn apply(self, modifier: &Modifier) -> Self {
        Self {
            x: self.x + modifier.x.unwrap_or(0.0),
            y: self.y + modifier.y.unwrap_or(0.0),
            pending_width: modifier.w.unwrap_or(self.pending_width),
            pending_height: modifier.h.unwrap_or(self.pending_height),
            rotation: modifier.r.unwrap_or(self.rotation),
            rotation_origin_x: modifier.rx.unwrap_or(self.rotation_origin_x),
            rotation_origin_y: modifier.ry.unwrap_or(self.rotation_origin_y),
            ..self
        }
    }

    /// Key for a label at the current position.
    pub fn key(&self, name: String, label: &str) -> PositionedKey {
        PositionedKey {
            name,
            label: label.to_string(),
            x: (self.x + self.pending_width / 2.0) * KEY_UNIT,
            y: -(self.y + self.pending_height / 2.0) * KEY_UNIT,
            width: self.pending_width * KEY_UNIT,
            height: self.pending_height * KEY_UNIT,
            rotation: self.rotation,
            rotation_origin_x: self.rotation_origin_x * KEY_UNIT,
            rotation_origin_y: self.rotation_origin_y * KEY_UNIT,
            row: self.row,
            col: self.col,
        }
    }

    /// Moves past an emitted key and drops the one-shot size.
    pub fn advance(self) -> Self {
        Self {
            x: self.x + self.pending_width,
            col: self.col + 1,
            pending_width: 1.0,
            pending_height: 1.0,
            ..self
        }
    }

    /// Starts the next row one grid unit down, whatever the key heights were.
    pub fn next_row(self) -> Self {
        Self {
            x: 0.0,
            y: self.y + 1.0,
            row: self.row + 1,
            col: 0,
            ..self
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
