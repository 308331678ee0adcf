use serde::{Deserialize, Serialize};

/// Millimetres per layout grid unit (standard keycap pitch, 0.75 in).
pub const KEY_UNIT: f64 = 19.05;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A key with absolute geometry in millimetres.
///
/// `x`/`y` is the geometric centre of the footprint. The y axis grows
/// upward, so row 0 sits highest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedKey {
    pub name: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, as written in the layout.
    pub rotation: f64,
    pub rotation_origin_x: f64,
    pub rotation_origin_y: f64,
    pub row: usize,
    pub col: usize,
}

impl PositionedKey {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Returns the same key moved by `(-dx, -dy)`.
    pub fn shifted_back(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x - dx,
            y: self.y - dy,
            ..self.clone()
        }
    }
}
