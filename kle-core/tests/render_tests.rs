mod common;

use common::*;
use kle_core::matrix::{BoardSide, ComponentKind, DiodeConfig, Netlist, PinMap, DIODE_1N4148WS};
use kle_core::{compile_matrix, Bounds, MatrixConfig, Point};

fn config(diodes: bool) -> MatrixConfig {
    MatrixConfig {
        rows: PinMap::from(vec!["net.ROW0", "net.ROW1"]),
        cols: PinMap::from(vec!["net.COL0", "net.COL1"]),
        diodes,
        ..Default::default()
    }
}

#[test]
fn test_default_config() {
    let config = MatrixConfig::default();

    assert_eq!(config.name, "KB");
    assert_eq!(config.pcb_offset, Point::ORIGIN);
    assert!(!config.diodes);
    assert_eq!(config.diode.side, BoardSide::Bottom);
}

#[test]
fn test_compiled_keys_are_centred() {
    let compiled = compile_matrix(&layout(SAMPLE_LAYOUT), &MatrixConfig::default()).unwrap();
    let bounds = Bounds::of(&compiled.keys).unwrap();

    assert_close(bounds.min_x + bounds.max_x, 0.0);
    assert_close(bounds.min_y + bounds.max_y, 0.0);
    assert_eq!(compiled.wiring.len(), compiled.keys.len());
}

#[test]
fn test_empty_layout_fails_to_compile() {
    assert!(compile_matrix(&layout("[]"), &MatrixConfig::default()).is_err());
}

#[test]
fn test_direct_render_emits_traces() {
    let compiled = compile_matrix(&layout(r#"[["Esc","1"],["Tab","Q"]]"#), &config(false)).unwrap();
    let mut netlist = Netlist::new();
    compiled.render(&mut netlist);

    assert_eq!(netlist.groups.len(), 1);
    assert_eq!(netlist.groups[0].name, "KB");
    assert_eq!(netlist.keys.len(), 4);
    assert_eq!(netlist.traces.len(), 8);
    assert!(netlist.components.is_empty());

    let nets = netlist.nets();
    assert_eq!(nets["net.ROW0"], vec![".K1 .pin1", ".K_N1 .pin1"]);
    assert_eq!(nets["net.COL1"], vec![".K_N1 .pin2", ".K_Q .pin2"]);
}

#[test]
fn test_diode_render_places_one_diode_per_wired_key() {
    let compiled = compile_matrix(
        &layout(r#"[["Esc","1"],["Tab","Q"],["Z"]]"#),
        &config(true),
    )
    .unwrap();
    let mut netlist = Netlist::new();
    compiled.render(&mut netlist);

    // Z is on row 2, which has no pin.
    assert_eq!(netlist.components.len(), 4);
    assert!(netlist.component("K_Z_DIO").is_none());
    assert_eq!(netlist.traces.len(), 5);

    let diode = netlist.component("K_Q_DIO").unwrap();
    assert_eq!(diode.kind, ComponentKind::Diode { part: DIODE_1N4148WS });
    assert_eq!(diode.connections["A"].to_string(), ".K_Q .pin1");
    assert_eq!(diode.connections["C"].to_string(), "net.ROW1");
    assert_eq!(diode.placement.side, BoardSide::Bottom);

    let key = netlist.key("K_Q").unwrap();
    assert_close(diode.placement.position.x, key.position.x + 0.5);
    assert_close(diode.placement.position.y, key.position.y - 13.5);

    let nets = netlist.nets();
    assert_eq!(nets["net.ROW1"], vec![".K2_DIO .C", ".K_Q_DIO .C"]);
}

#[test]
fn test_group_offsets() {
    let layout = layout(r#"[["A", "B"]]"#);
    let plain = compile_matrix(&layout, &MatrixConfig::default()).unwrap();
    let shifted = compile_matrix(
        &layout,
        &MatrixConfig {
            pcb_offset: Point::new(10.0, -5.0),
            sch_offset: Point::new(3.0, 4.0),
            ..Default::default()
        },
    )
    .unwrap();

    let mut a = Netlist::new();
    let mut b = Netlist::new();
    plain.render(&mut a);
    shifted.render(&mut b);

    for (before, after) in a.keys.iter().zip(&b.keys) {
        assert_close(after.position.x - before.position.x, 10.0);
        assert_close(after.position.y - before.position.y, -5.0);
    }
    assert_eq!(b.groups[0].pcb_origin, Point::new(10.0, -5.0));
    assert_eq!(b.groups[0].sch_origin, Point::new(3.0, 4.0));
    assert_eq!(a.groups[0].sch_origin, Point::ORIGIN);
}

#[test]
fn test_diode_config_overrides_placement() {
    let config = MatrixConfig {
        diode: DiodeConfig {
            offset: Point::new(-2.0, 8.0),
            side: BoardSide::Top,
        },
        pcb_offset: Point::new(1.0, 1.0),
        ..config(true)
    };
    let compiled = compile_matrix(&layout(r#"[["A", "B"]]"#), &config).unwrap();
    let mut netlist = Netlist::new();
    compiled.render(&mut netlist);

    for name in ["K_A", "K_B"] {
        let key = netlist.key(name).unwrap();
        let diode = netlist.component(&format!("{}_DIO", name)).unwrap();

        assert_eq!(diode.placement.side, BoardSide::Top);
        assert_close(diode.placement.position.x, key.position.x - 2.0);
        assert_close(diode.placement.position.y, key.position.y + 8.0);
    }
}

#[test]
fn test_netlist_serializes() {
    let compiled = compile_matrix(&layout(r#"[["A"]]"#), &config(true)).unwrap();
    let mut netlist = Netlist::new();
    compiled.render(&mut netlist);

    let json: serde_json::Value = serde_json::from_str(&netlist.to_json().unwrap()).unwrap();
    assert_eq!(json["keys"][0]["name"], "K_A");
    assert_eq!(json["components"][0]["kind"]["type"], "diode");
    assert_eq!(json["components"][0]["kind"]["part"]["supplier_part"], "C57759");
    assert_eq!(json["components"][0]["connections"]["C"], "net.ROW0");
    assert_eq!(json["traces"][0]["to"], "net.COL0");
}
