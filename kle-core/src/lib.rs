pub mod types;
pub mod designator;
pub mod layout;
pub mod matrix;
pub mod config;
pub mod compiler;

pub use types::*;

// Re-export commonly used types
pub use designator::DesignatorAssigner;
pub use layout::{normalize, parse_layout, Bounds, LayoutParser};
pub use matrix::{Endpoint, KeyWiring, Netlist, PinMap, RenderSink, WiringMode};
pub use config::MatrixConfig;
pub use compiler::{compile_matrix, CompiledMatrix};
