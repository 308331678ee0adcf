use serde::{Deserialize, Serialize};

use crate::matrix::{DiodeConfig, PinMap, WiringMode};
use crate::types::Point;

/// Options for compiling one key matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub name: String,
    /// Pin per row index.
    pub rows: PinMap,
    /// Pin per column index.
    pub cols: PinMap,
    /// Insert a diode between every switch and its row line.
    pub diodes: bool,
    pub pcb_offset: Point,
    pub sch_offset: Point,
    pub diode: DiodeConfig,
}

impl MatrixConfig {
    pub fn wiring_mode(&self) -> WiringMode {
        if self.diodes {
            WiringMode::DiodePerKey
        } else {
            WiringMode::Direct
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            name: "KB".to_string(),
            rows: PinMap::new(),
            cols: PinMap::new(),
            diodes: false,
            pcb_offset: Point::ORIGIN,
            sch_offset: Point::ORIGIN,
            diode: DiodeConfig::default(),
        }
    }
}
