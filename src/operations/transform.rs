//! Transformations that map vectors to new vectors.
//!
//! Every function is pure and returns a fresh [`Vector2D`]; the operand comes
//! first, the parameter second.

use crate::error::{GeometryError, Result};
use crate::math::{Vector2D, TOLERANCE};

/// Rotates `v` counterclockwise about the origin by `alpha` radians.
#[must_use]
pub fn rotate(v: Vector2D, alpha: f64) -> Vector2D {
    let (sin, cos) = alpha.sin_cos();
    Vector2D::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Rotates `v` by exactly 90 degrees.
///
/// Clockwise gives `(y, -x)`, counterclockwise gives `(-y, x)`.
#[must_use]
pub fn rotate90(v: Vector2D, clockwise: bool) -> Vector2D {
    if clockwise {
        Vector2D::new(v.y, -v.x)
    } else {
        Vector2D::new(-v.y, v.x)
    }
}

/// Component-wise sum.
#[must_use]
pub fn add(v1: Vector2D, v2: Vector2D) -> Vector2D {
    Vector2D::new(v1.x + v2.x, v1.y + v2.y)
}

/// Component-wise sum over `vectors`, in order. Empty input yields the origin.
#[must_use]
pub fn sum<I: IntoIterator<Item = Vector2D>>(vectors: I) -> Vector2D {
    vectors.into_iter().fold(Vector2D::ZERO, add)
}

/// Component-wise product.
#[must_use]
pub fn mult(v1: Vector2D, v2: Vector2D) -> Vector2D {
    Vector2D::new(v1.x * v2.x, v1.y * v2.y)
}

/// Component-wise difference `v1 - v2`.
#[must_use]
pub fn sub(v1: Vector2D, v2: Vector2D) -> Vector2D {
    add(v1, v2.inverse())
}

/// Multiplies both components by `s`.
#[must_use]
pub fn scale(v: Vector2D, s: f64) -> Vector2D {
    Vector2D::new(v.x * s, v.y * s)
}

/// Rescales `v` to `length`, keeping its direction.
///
/// The zero vector has no direction; the result is then NaN (or infinite)
/// per IEEE-754. Use [`try_resize`] to reject it instead.
#[must_use]
pub fn resize(v: Vector2D, length: f64) -> Vector2D {
    scale(v, length / v.norm())
}

/// Rescales `v` to `length`, keeping its direction.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` is shorter than
/// [`TOLERANCE`].
pub fn try_resize(v: Vector2D, length: f64) -> Result<Vector2D> {
    let norm = v.norm();
    if norm < TOLERANCE {
        tracing::debug!(x = v.x, y = v.y, length, "cannot resize zero-length vector");
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(scale(v, length / norm))
}
