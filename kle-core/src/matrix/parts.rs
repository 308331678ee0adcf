//! Part descriptors and placement options for components the matrix inserts.

use serde::{Deserialize, Serialize};

use crate::types::Point;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSide {
    Top,
    #[default]
    Bottom,
}

/// Catalogue data for a two-terminal diode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiodePart {
    pub part_number: &'static str,
    pub supplier_part: &'static str,
    pub footprint: &'static str,
    /// Footprint pad carrying the cathode.
    pub cathode_pad: &'static str,
    /// Footprint pad carrying the anode.
    pub anode_pad: &'static str,
}

impl DiodePart {
    pub const CATHODE: &'static str = "C";
    pub const ANODE: &'static str = "A";
}

/// 1N4148WS switching diode in SOD-323.
pub const DIODE_1N4148WS: DiodePart = DiodePart {
    part_number: "A_1N4148WS",
    supplier_part: "C57759",
    footprint: "SOD-323",
    cathode_pad: "pin1",
    anode_pad: "pin2",
};

/// Where per-key diodes go, relative to the key centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiodeConfig {
    pub offset: Point,
    pub side: BoardSide,
}

impl Default for DiodeConfig {
    fn default() -> Self {
        Self {
            offset: Point::new(0.5, -13.5),
            side: BoardSide::Bottom,
        }
    }
}

/// Board position of an inserted component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub position: Point,
    /// Degrees.
    pub rotation: f64,
    pub side: BoardSide,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentKind {
    Diode { part: DiodePart },
    Controller { part: String },
}
