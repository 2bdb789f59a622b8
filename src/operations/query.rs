//! Queries that reduce vectors to scalars or predicates.

use crate::error::{GeometryError, Result};
use crate::math::{Vector2D, TOLERANCE};

/// Dot product.
#[must_use]
pub fn dot(v1: Vector2D, v2: Vector2D) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// 2D cross product (determinant of `[v1 v2]`).
///
/// Positive when `v2` lies counterclockwise of `v1`.
#[must_use]
pub fn det(v1: Vector2D, v2: Vector2D) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Signed angle that rotates `v1` onto `v2`, in `(-π, π]`.
#[must_use]
pub fn angle_to(v1: Vector2D, v2: Vector2D) -> f64 {
    det(v1, v2).atan2(dot(v1, v2))
}

/// Unsigned angle between `v1` and `v2`, in `[0, π]`.
///
/// NaN if either vector has zero length. See [`try_angle_between`].
#[must_use]
pub fn angle_between(v1: Vector2D, v2: Vector2D) -> f64 {
    (dot(v1, v2) / (v1.norm() * v2.norm())).acos()
}

/// Unsigned angle between `v1` and `v2`, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` so nearly parallel vectors do not
/// produce NaN from rounding.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if either vector is shorter than
/// [`TOLERANCE`].
pub fn try_angle_between(v1: Vector2D, v2: Vector2D) -> Result<f64> {
    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 < TOLERANCE || n2 < TOLERANCE {
        tracing::debug!(n1, n2, "angle undefined for zero-length vector");
        return Err(GeometryError::ZeroVector.into());
    }
    Ok((dot(v1, v2) / (n1 * n2)).clamp(-1.0, 1.0).acos())
}

/// Returns `true` if `v` lies strictly inside the axis-aligned square of
/// half-width `epsilon` centred on `center`.
///
/// Each axis is bounded independently; this is not a circular radius test.
#[must_use]
pub fn proximity(v: Vector2D, center: Vector2D, epsilon: f64) -> bool {
    v.x > center.x - epsilon
        && v.x < center.x + epsilon
        && v.y > center.y - epsilon
        && v.y < center.y + epsilon
}
