mod common;

use common::*;
use kle_core::matrix::{
    diode_name, resolve_wiring, DiodeInstance, Endpoint, PinMap, RowConnection, Trace, WiringMode,
};
use pretty_assertions::assert_eq;

fn pins(names: &[&str]) -> PinMap {
    PinMap::from(names.to_vec())
}

#[test]
fn test_direct_mode_links_both_switch_pins() {
    let keys = keys(r#"[["A"]]"#);
    let wiring = resolve_wiring(&keys, &pins(&["R0"]), &pins(&["C0"]), WiringMode::Direct);

    assert_eq!(wiring.len(), 1);
    assert_eq!(
        wiring[0].row,
        Some(RowConnection::Direct(Trace {
            from: Endpoint::port("K_A", "pin1"),
            to: Endpoint::net("R0"),
        }))
    );
    assert_eq!(
        wiring[0].column,
        Some(Trace {
            from: Endpoint::port("K_A", "pin2"),
            to: Endpoint::net("C0"),
        })
    );
}

#[test]
fn test_diode_mode_inserts_diode_toward_row() {
    let keys = keys(r#"[["A"]]"#);
    let wiring = resolve_wiring(&keys, &pins(&["R0"]), &pins(&["C0"]), WiringMode::DiodePerKey);

    assert_eq!(
        wiring[0].row,
        Some(RowConnection::Diode(DiodeInstance {
            name: "K_A_DIO".to_string(),
            anode: Endpoint::port("K_A", "pin1"),
            cathode: Endpoint::net("R0"),
        }))
    );
}

#[test]
fn test_two_by_two_with_diodes_and_out_of_range_row() {
    let keys = keys(r#"[["Esc", "1"], ["Tab", "Q"], ["Shift", "Z"]]"#);
    let rows = pins(&["R0", "R1"]);
    let cols = pins(&["C0", "C1"]);
    let wiring = resolve_wiring(&keys, &rows, &cols, WiringMode::DiodePerKey);

    for (key, wired) in keys.iter().zip(&wiring) {
        assert_eq!(wired.key, key.name);

        let column = wired.column.as_ref().expect("every column has a pin");
        assert_eq!(column.to, Endpoint::net(format!("C{}", key.col)));

        if key.row < 2 {
            match &wired.row {
                Some(RowConnection::Diode(diode)) => {
                    assert_eq!(diode.name, diode_name(&key.name));
                    assert_eq!(diode.cathode, Endpoint::net(format!("R{}", key.row)));
                }
                other => panic!("expected diode for {}, got {:?}", key.name, other),
            }
        } else {
            assert_eq!(wired.row, None, "{} is beyond the row pins", key.name);
        }
    }
}

#[test]
fn test_missing_column_pin_omits_only_that_side() {
    let keys = keys(r#"[["A", "B", "C"]]"#);
    let wiring = resolve_wiring(&keys, &pins(&["R0"]), &pins(&["C0"]), WiringMode::Direct);

    assert!(wiring[0].column.is_some());
    assert!(wiring[1].column.is_none());
    assert!(wiring[2].column.is_none());
    assert!(wiring.iter().all(|w| w.row.is_some()));
}

#[test]
fn test_gaps_in_pin_maps_are_skipped() {
    let keys = keys(r#"[["A", "B", "C"]]"#);
    let cols: PinMap = serde_json::from_str(r#"["C0", null, "C2"]"#).unwrap();
    let wiring = resolve_wiring(&keys, &PinMap::new(), &cols, WiringMode::Direct);

    let connected: Vec<bool> = wiring.iter().map(|w| w.column.is_some()).collect();
    assert_eq!(connected, vec![true, false, true]);
    assert!(wiring.iter().all(|w| w.row.is_none()));
}

#[test]
fn test_endpoint_display() {
    assert_eq!(Endpoint::port("K_A", "pin1").to_string(), ".K_A .pin1");
    assert_eq!(Endpoint::net("net.ROW1").to_string(), "net.ROW1");
}
