#![allow(dead_code)]

use kle_core::{parse_layout, PositionedKey, RawLayout};

pub const EPSILON: f64 = 1e-9;

/// Parses layout JSON, panicking on malformed input.
pub fn layout(json: &str) -> RawLayout {
    RawLayout::from_json(json).expect("layout JSON should parse")
}

/// Parses layout JSON straight to keys.
pub fn keys(json: &str) -> Vec<PositionedKey> {
    parse_layout(&layout(json))
}

pub fn names(keys: &[PositionedKey]) -> Vec<&str> {
    keys.iter().map(|k| k.name.as_str()).collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} to be within {} of {}",
        actual,
        EPSILON,
        expected
    );
}

/// A small 60%-style block used across tests.
pub const SAMPLE_LAYOUT: &str = r##"[
    ["Esc", "!\n1", "@\n2", "#\n3", {"w": 2}, "Backspace"],
    [{"w": 1.5}, "Tab", "Q", "W", "E", {"w": 1.5}, "|\n\\"],
    [{"w": 1.75}, "Caps Lock", "A", "S", "D", {"w": 2.25}, "Enter"],
    [{"w": 2.25}, "Shift", "Z", "X", "C", {"w": 2.75}, "Shift"]
]"##;
