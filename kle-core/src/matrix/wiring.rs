use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::pins::PinMap;
use crate::types::PositionedKey;

/// Switch terminals. `Pin1` faces the row, `Pin2` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchPin {
    Pin1,
    Pin2,
}

impl SwitchPin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchPin::Pin1 => "pin1",
            SwitchPin::Pin2 => "pin2",
        }
    }
}

/// One side of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    /// A named pin on a placed component, rendered as `.K_A .pin1`.
    Port { component: String, pin: String },
    /// A net or pin selector taken verbatim from the pin maps.
    Net(String),
}

impl Endpoint {
    pub fn port(component: impl Into<String>, pin: impl Into<String>) -> Self {
        Endpoint::Port {
            component: component.into(),
            pin: pin.into(),
        }
    }

    pub fn switch(key: &str, pin: SwitchPin) -> Self {
        Endpoint::port(key, pin.as_str())
    }

    pub fn net(name: impl Into<String>) -> Self {
        Endpoint::Net(name.into())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Port { component, pin } => write!(f, ".{} .{}", component, pin),
            Endpoint::Net(name) => f.write_str(name),
        }
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub from: Endpoint,
    pub to: Endpoint,
}

/// Diode isolating one key from its row line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiodeInstance {
    pub name: String,
    pub anode: Endpoint,
    pub cathode: Endpoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowConnection {
    Direct(Trace),
    Diode(DiodeInstance),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiringMode {
    #[default]
    Direct,
    DiodePerKey,
}

/// Matrix connections for a single key. Either side may be absent when the
/// pin maps are shorter than the key grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyWiring {
    pub key: String,
    pub row: Option<RowConnection>,
    pub column: Option<Trace>,
}

/// Name of the diode that belongs to `key`.
pub fn diode_name(key: &str) -> String {
    format!("{}_DIO", key)
}

pub fn resolve_wiring(
    keys: &[PositionedKey],
    rows: &PinMap,
    cols: &PinMap,
    mode: WiringMode,
) -> Vec<KeyWiring> {
    keys.iter()
        .map(|key| resolve_key(key, rows, cols, mode))
        .collect()
}

fn resolve_key(key: &PositionedKey, rows: &PinMap, cols: &PinMap, mode: WiringMode) -> KeyWiring {
    let column = cols.get(key.col).map(|pin| Trace {
        from: Endpoint::switch(&key.name, SwitchPin::Pin2),
        to: Endpoint::net(pin),
    });
    if column.is_none() {
        log::debug!("{}: no column pin for col {}", key.name, key.col);
    }

    let row = rows.get(key.row).map(|pin| {
        let switch_side = Endpoint::switch(&key.name, SwitchPin::Pin1);
        match mode {
            WiringMode::Direct => RowConnection::Direct(Trace {
                from: switch_side,
                to: Endpoint::net(pin),
            }),
            WiringMode::DiodePerKey => RowConnection::Diode(DiodeInstance {
                name: diode_name(&key.name),
                anode: switch_side,
                cathode: Endpoint::net(pin),
            }),
        }
    });
    if row.is_none() {
        log::debug!("{}: no row pin for row {}", key.name, key.row);
    }

    KeyWiring {
        key: key.name.clone(),
        row,
        column,
    }
}
