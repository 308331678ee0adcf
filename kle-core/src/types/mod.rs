pub mod raw;
pub mod key;
pub mod errors;

pub use raw::*;
pub use key::*;
pub use errors::*;
