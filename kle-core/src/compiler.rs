//! Full pipeline: parse, centre, wire, render.

use serde::Serialize;

use crate::config::MatrixConfig;
use crate::layout::{normalize, parse_layout};
use crate::matrix::{
    resolve_wiring, ComponentKind, DiodeConfig, DiodePart, KeyWiring, PlacedKey, Placement,
    RenderSink, RowConnection, DIODE_1N4148WS,
};
use crate::types::{Point, PositionedKey, RawLayout, Result};

/// Centred keys plus their wiring, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledMatrix {
    pub name: String,
    pub keys: Vec<PositionedKey>,
    /// Same order as `keys`.
    pub wiring: Vec<KeyWiring>,
    pub pcb_offset: Point,
    pub sch_offset: Point,
    pub diode: DiodeConfig,
}

pub fn compile_matrix(layout: &RawLayout, config: &MatrixConfig) -> Result<CompiledMatrix> {
    let keys = normalize(&parse_layout(layout))?;
    let wiring = resolve_wiring(&keys, &config.rows, &config.cols, config.wiring_mode());

    log::info!(
        "Compiled matrix {}: {} keys, {} row pins, {} column pins, {:?}",
        config.name,
        keys.len(),
        config.rows.assigned(),
        config.cols.assigned(),
        config.wiring_mode()
    );

    Ok(CompiledMatrix {
        name: config.name.clone(),
        keys,
        wiring,
        pcb_offset: config.pcb_offset,
        sch_offset: config.sch_offset,
        diode: config.diode,
    })
}

impl CompiledMatrix {
    /// Board position of a key centre, group offset applied.
    pub fn key_position(&self, key: &PositionedKey) -> Point {
        key.center().offset(self.pcb_offset.x, self.pcb_offset.y)
    }

    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.begin_group(&self.name, self.pcb_offset, self.sch_offset);

        for (key, wiring) in self.keys.iter().zip(&self.wiring) {
            let position = self.key_position(key);
            sink.place(&PlacedKey {
                name: key.name.clone(),
                position,
                rotation: key.rotation,
                width: key.width,
                height: key.height,
            });

            match &wiring.row {
                Some(RowConnection::Direct(trace)) => sink.connect(&trace.from, &trace.to),
                Some(RowConnection::Diode(diode)) => {
                    let placement = Placement {
                        position: position.offset(self.diode.offset.x, self.diode.offset.y),
                        rotation: 0.0,
                        side: self.diode.side,
                    };
                    let connections = [
                        (DiodePart::ANODE.to_string(), diode.anode.clone()),
                        (DiodePart::CATHODE.to_string(), diode.cathode.clone()),
                    ];
                    sink.place_component(
                        &ComponentKind::Diode {
                            part: DIODE_1N4148WS,
                        },
                        &diode.name,
                        &placement,
                        &connections,
                    );
                }
                None => {}
            }

            if let Some(trace) = &wiring.column {
                sink.connect(&trace.from, &trace.to);
            }
        }
    }
}
