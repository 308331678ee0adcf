//! Raw keyboard-layout-editor layout as read from JSON.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::errors::KleError;

/// One row of the layout, in input order.
pub type Row = Vec<Cell>;

/// A cell is either a key label or a modifier for the next key.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Label(String),
    Modifier(Modifier),
}

impl Cell {
    pub fn label(text: impl Into<String>) -> Self {
        Cell::Label(text.into())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCell {
            Label(String),
            Modifier(Map<String, Value>),
        }

        match RawCell::deserialize(deserializer) {
            Ok(RawCell::Label(text)) => Ok(Cell::Label(text)),
            Ok(RawCell::Modifier(fields)) => Ok(Cell::Modifier(Modifier::from_fields(&fields))),
            Err(_) => Err(de::Error::custom(
                "layout cell must be a label string or a modifier object",
            )),
        }
    }
}

/// Property record that alters the geometry of the next label.
///
/// Only `x`, `y`, `w`, `h`, `r`, `rx` and `ry` affect the compiled output.
/// The remaining fields are kept so callers can inspect the richer
/// community format without a second parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modifier {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub w2: Option<f64>,
    pub h2: Option<f64>,
    pub r: Option<f64>,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub a: Option<f64>,
    pub n: Option<bool>,
    pub l: Option<bool>,
    pub d: Option<bool>,
    pub g: Option<bool>,
    pub sm: Option<String>,
    pub sb: Option<String>,
    pub st: Option<String>,
}

impl Modifier {
    /// Builds a modifier from a JSON object.
    ///
    /// Unknown keys and values of the wrong type are dropped rather than
    /// rejected, so newer editor output still compiles.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let mut modifier = Modifier::default();

        for (key, value) in fields {
            let accepted = match key.as_str() {
                "x" => set_number(&mut modifier.x, value),
                "y" => set_number(&mut modifier.y, value),
                "w" => set_number(&mut modifier.w, value),
                "h" => set_number(&mut modifier.h, value),
                "x2" => set_number(&mut modifier.x2, value),
                "y2" => set_number(&mut modifier.y2, value),
                "w2" => set_number(&mut modifier.w2, value),
                "h2" => set_number(&mut modifier.h2, value),
                "r" => set_number(&mut modifier.r, value),
                "rx" => set_number(&mut modifier.rx, value),
                "ry" => set_number(&mut modifier.ry, value),
                "a" => set_number(&mut modifier.a, value),
                "n" => set_bool(&mut modifier.n, value),
                "l" => set_bool(&mut modifier.l, value),
                "d" => set_bool(&mut modifier.d, value),
                "g" => set_bool(&mut modifier.g, value),
                "sm" => set_string(&mut modifier.sm, value),
                "sb" => set_string(&mut modifier.sb, value),
                "st" => set_string(&mut modifier.st, value),
                _ => false,
            };

            if !accepted {
                log::debug!("Ignoring modifier field {:?} = {}", key, value);
            }
        }

        modifier
    }
}

fn set_number(slot: &mut Option<f64>, value: &Value) -> bool {
    *slot = value.as_f64();
    slot.is_some()
}

fn set_bool(slot: &mut Option<bool>, value: &Value) -> bool {
    *slot = value.as_bool();
    slot.is_some()
}

fn set_string(slot: &mut Option<String>, value: &Value) -> bool {
    *slot = value.as_str().map(str::to_string);
    slot.is_some()
}

/// An ordered sequence of rows, exactly as the editor exports them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawLayout {
    pub rows: Vec<Row>,
}

impl RawLayout {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parses editor JSON. A row that is not an array, or a cell that is
    /// neither a string nor an object, is rejected.
    pub fn from_json(input: &str) -> Result<Self, KleError> {
        Ok(serde_json::from_str(input)?)
    }
}
