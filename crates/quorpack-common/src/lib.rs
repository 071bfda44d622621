pub mod coordinate;
pub mod error;
pub mod moves;

pub use coordinate::*;
pub use error::*;
pub use moves::*;
