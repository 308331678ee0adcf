use serde::Serialize;

use super::parts::{ComponentKind, Placement};
use super::wiring::Endpoint;
use crate::types::Point;

/// Placement request for one key switch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedKey {
    pub name: String,
    pub position: Point,
    /// Degrees.
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
}

/// Receiver for compiled placements and connections.
///
/// Implementors turn these requests into footprints, traces and nets.
pub trait RenderSink {
    /// Called once before any key of a matrix group is placed.
    fn begin_group(&mut self, _name: &str, _pcb_origin: Point, _sch_origin: Point) {}

    fn place(&mut self, key: &PlacedKey);

    fn connect(&mut self, from: &Endpoint, to: &Endpoint);

    /// Places an extra component and wires its pins. `connections` pairs a
    /// pin label of the component with the endpoint it joins.
    fn place_component(
        &mut self,
        kind: &ComponentKind,
        name: &str,
        placement: &Placement,
        connections: &[(String, Endpoint)],
    );
}
