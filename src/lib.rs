pub mod error;
pub mod math;
pub mod operations;

pub use error::{GeometryError, PlanarError, Result};
pub use math::{Coords2, Vector2D};
