//! Partially applied forms of [`transform`](super::transform) and
//! [`query`](super::query), for use with [`Vector2D::pipe`],
//! [`Vector2D::split`] and [`Vector2D::fan_out`].
//!
//! Each factory fixes the parameter and returns a closure over the operand,
//! so `curried::sub(b)(a)` is `a - b`.

use crate::math::Vector2D;

use super::{query, transform};

#[must_use]
pub fn rotate(alpha: f64) -> impl Fn(Vector2D) -> Vector2D {
    move |v| transform::rotate(v, alpha)
}

#[must_use]
pub fn rotate90(clockwise: bool) -> impl Fn(Vector2D) -> Vector2D {
    move |v| transform::rotate90(v, clockwise)
}

#[must_use]
pub fn add(v2: Vector2D) -> impl Fn(Vector2D) -> Vector2D {
    move |v1| transform::add(v1, v2)
}

#[must_use]
pub fn mult(v2: Vector2D) -> impl Fn(Vector2D) -> Vector2D {
    move |v1| transform::mult(v1, v2)
}

#[must_use]
pub fn sub(v2: Vector2D) -> impl Fn(Vector2D) -> Vector2D {
    move |v1| transform::sub(v1, v2)
}

#[must_use]
pub fn scale(s: f64) -> impl Fn(Vector2D) -> Vector2D {
    move |v| transform::scale(v, s)
}

#[must_use]
pub fn resize(length: f64) -> impl Fn(Vector2D) -> Vector2D {
    move |v| transform::resize(v, length)
}

#[must_use]
pub fn dot(v2: Vector2D) -> impl Fn(Vector2D) -> f64 {
    move |v1| query::dot(v1, v2)
}

#[must_use]
pub fn det(v2: Vector2D) -> impl Fn(Vector2D) -> f64 {
    move |v1| query::det(v1, v2)
}

/// Signed angle from the operand to `v2`.
#[must_use]
pub fn angle_to(v2: Vector2D) -> impl Fn(Vector2D) -> f64 {
    move |v1| query::angle_to(v1, v2)
}

#[must_use]
pub fn angle_between(v2: Vector2D) -> impl Fn(Vector2D) -> f64 {
    move |v1| query::angle_between(v1, v2)
}

/// Two-stage proximity test: `proximity(epsilon)(center)(v)`.
///
/// ```
/// use planar::operations::curried;
/// use planar::Vector2D;
///
/// let near_origin = curried::proximity(0.5)(Vector2D::ZERO);
/// assert!(near_origin(Vector2D::new(0.4, 0.4)));
/// assert!(!near_origin(Vector2D::new(0.6, 0.0)));
/// ```
#[must_use]
pub fn proximity(epsilon: f64) -> impl Fn(Vector2D) -> Box<dyn Fn(Vector2D) -> bool> {
    move |center: Vector2D| -> Box<dyn Fn(Vector2D) -> bool> {
        Box::new(move |v: Vector2D| query::proximity(v, center, epsilon))
    }
}
