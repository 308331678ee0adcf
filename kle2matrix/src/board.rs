//! Board description loaded from TOML: the key matrix plus an optional
//! controller whose pins terminate the row and column nets.

use std::collections::BTreeMap;
use std::path::Path;

use kle_core::matrix::{BoardSide, ComponentKind, Endpoint, Placement, RenderSink};
use kle_core::{MatrixConfig, Point};
use serde::Deserialize;

use crate::error::ConvertError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub matrix: MatrixConfig,
    pub controller: Option<ControllerConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub name: String,
    pub part: String,
    pub position: Point,
    /// Degrees.
    pub rotation: f64,
    pub side: BoardSide,
    /// Controller pin to net.
    pub connections: BTreeMap<String, String>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            name: "U1".to_string(),
            part: "PICO".to_string(),
            position: Point::ORIGIN,
            rotation: 0.0,
            side: BoardSide::Top,
            connections: BTreeMap::new(),
        }
    }
}

impl ControllerConfig {
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        let connections: Vec<(String, Endpoint)> = self
            .connections
            .iter()
            .map(|(pin, net)| (pin.clone(), Endpoint::net(net.as_str())))
            .collect();

        sink.place_component(
            &ComponentKind::Controller {
                part: self.part.clone(),
            },
            &self.name,
            &Placement {
                position: self.position,
                rotation: self.rotation,
                side: self.side,
            },
            &connections,
        );
    }
}

impl BoardConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConvertError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = crate::read_source(path)?;
        let config = Self::from_toml(&content)?;
        log::debug!(
            "Loaded board config {} (matrix {}, controller {})",
            path.display(),
            config.matrix.name,
            config.controller.as_ref().map_or("none", |c| c.name.as_str())
        );
        Ok(config)
    }
}
