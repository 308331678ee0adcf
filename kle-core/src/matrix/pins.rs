use serde::{Deserialize, Deserializer, Serialize};

/// Row or column index to net/pin name.
///
/// Slots may be unset (`null` in JSON, `""` in TOML). Looking up an unset
/// slot or an index past the end yields `None`, which callers treat as
/// "leave this key unconnected".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PinMap {
    pins: Vec<Option<String>>,
}

impl PinMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.pins.get(index)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Number of slots that actually name a pin.
    pub fn assigned(&self) -> usize {
        self.pins.iter().filter(|pin| pin.is_some()).count()
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for PinMap {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Self {
            pins: iter
                .into_iter()
                .map(|pin| pin.map(Into::<String>::into).filter(|p| !p.is_empty()))
                .collect(),
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for PinMap {
    fn from(pins: Vec<S>) -> Self {
        pins.into_iter().map(Some).collect()
    }
}

impl<'de> Deserialize<'de> for PinMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pins = Vec::<Option<String>>::deserialize(deserializer)?;
        Ok(pins.into_iter().collect())
    }
}
