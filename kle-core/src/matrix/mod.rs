//! Row/column scan matrix: pin maps, per-key wiring and the render seam.

pub mod netlist;
pub mod parts;
pub mod pins;
pub mod sink;
pub mod wiring;

pub use netlist::{Netlist, NetlistComponent, NetlistGroup};
pub use parts::{BoardSide, ComponentKind, DiodeConfig, DiodePart, Placement, DIODE_1N4148WS};
pub use pins::PinMap;
pub use sink::{PlacedKey, RenderSink};
pub use wiring::{
    diode_name, resolve_wiring, DiodeInstance, Endpoint, KeyWiring, RowConnection, SwitchPin,
    Trace, WiringMode,
};
