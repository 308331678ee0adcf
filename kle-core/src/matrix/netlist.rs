use std::collections::BTreeMap;

use serde::Serialize;

use super::parts::{ComponentKind, Placement};
use super::sink::{PlacedKey, RenderSink};
use super::wiring::{Endpoint, Trace};
use crate::types::Point;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetlistGroup {
    pub name: String,
    pub pcb_origin: Point,
    pub sch_origin: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetlistComponent {
    pub name: String,
    pub kind: ComponentKind,
    pub placement: Placement,
    pub connections: BTreeMap<String, Endpoint>,
}

/// In-memory sink that records everything it is asked to render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Netlist {
    pub groups: Vec<NetlistGroup>,
    pub keys: Vec<PlacedKey>,
    pub traces: Vec<Trace>,
    pub components: Vec<NetlistComponent>,
}

impl Netlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self, name: &str) -> Option<&PlacedKey> {
        self.keys.iter().find(|key| key.name == name)
    }

    pub fn component(&self, name: &str) -> Option<&NetlistComponent> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Members of every named net, as `.COMPONENT .pin` strings, sorted.
    ///
    /// Port-to-port links such as a diode anode on a switch pin are not
    /// nets and do not appear here.
    pub fn nets(&self) -> BTreeMap<String, Vec<String>> {
        let mut nets: BTreeMap<String, Vec<String>> = BTreeMap::new();

        let trace_members = self.traces.iter().filter_map(|trace| match (&trace.from, &trace.to) {
            (port, Endpoint::Net(net)) | (Endpoint::Net(net), port) => {
                Some((net.clone(), port.to_string()))
            }
            _ => None,
        });
        let component_members = self.components.iter().flat_map(|component| {
            component.connections.iter().filter_map(move |(pin, endpoint)| match endpoint {
                Endpoint::Net(net) => Some((
                    net.clone(),
                    Endpoint::port(component.name.as_str(), pin.as_str()).to_string(),
                )),
                Endpoint::Port { .. } => None,
            })
        });

        for (net, member) in trace_members.chain(component_members) {
            nets.entry(net).or_default().push(member);
        }
        for members in nets.values_mut() {
            members.sort();
        }
        nets
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl RenderSink for Netlist {
    fn begin_group(&mut self, name: &str, pcb_origin: Point, sch_origin: Point) {
        self.groups.push(NetlistGroup {
            name: name.to_string(),
            pcb_origin,
            sch_origin,
        });
    }

    fn place(&mut self, key: &PlacedKey) {
        self.keys.push(key.clone());
    }

    fn connect(&mut self, from: &Endpoint, to: &Endpoint) {
        self.traces.push(Trace {
            from: from.clone(),
            to: to.clone(),
        });
    }

    fn place_component(
        &mut self,
        kind: &ComponentKind,
        name: &str,
        placement: &Placement,
        connections: &[(String, Endpoint)],
    ) {
        self.components.push(NetlistComponent {
            name: name.to_string(),
            kind: kind.clone(),
            placement: *placement,
            connections: connections.iter().cloned().collect(),
        });
    }
}
