//! Layout compilation: parsing the editor grid and centring the result.

pub mod bounds;
pub mod cursor;
pub mod parser;

pub use bounds::{normalize, Bounds};
pub use cursor::Cursor;
pub use parser::{parse_layout, LayoutParser};
