use super::{Point2, Vector2, Vector2D};

/// Anything that exposes a pair of planar coordinates.
///
/// Used by [`Vector2D::from_xy`] to copy coordinates out of foreign types.
pub trait Coords2 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coords2 for Vector2D {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Coords2 for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Coords2 for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl Coords2 for Vector2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Coords2 for Point2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}
