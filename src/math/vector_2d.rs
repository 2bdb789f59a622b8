use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use crate::operations::compose::{Chain, FanOut};
use crate::operations::transform;

use super::Coords2;

/// An immutable 2D vector.
///
/// Every operation returns a new value; nothing takes `&mut self`, so the
/// coordinates of a vector never change once it is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Copies the coordinates of anything exposing `x` and `y`.
    #[must_use]
    pub fn from_xy<C: Coords2 + ?Sized>(source: &C) -> Self {
        Self::new(source.x(), source.y())
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Additive inverse `(-x, -y)`.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Direction angle from the positive x axis, in `(-π, π]`.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Applies `fns` left to right, each one consuming the previous result.
    ///
    /// With no functions the receiver is returned unchanged.
    ///
    /// ```
    /// use planar::operations::curried;
    /// use planar::Vector2D;
    ///
    /// let v = Vector2D::new(1.0, 0.0).pipe(&[&curried::rotate90(true), &curried::scale(2.0)]);
    /// assert_eq!(v, Vector2D::new(0.0, -2.0));
    /// ```
    #[must_use]
    pub fn pipe(self, fns: &[&dyn Fn(Self) -> Self]) -> Self {
        fns.iter().fold(self, |v, f| f(v))
    }

    /// Like [`pipe`](Self::pipe), but over a tuple of functions whose result
    /// types may change along the way, so a chain can end in a scalar.
    ///
    /// ```
    /// use planar::operations::curried;
    /// use planar::Vector2D;
    ///
    /// let d = Vector2D::new(1.0, 0.0)
    ///     .chain((curried::rotate90(false), curried::dot(Vector2D::new(0.0, 1.0))));
    /// assert_eq!(d, 1.0);
    /// ```
    #[must_use]
    pub fn chain<F: Chain<Self>>(self, fns: F) -> F::Output {
        fns.chain(self)
    }

    /// Applies each of `fns` to the receiver independently and collects the
    /// results in input order.
    #[must_use]
    pub fn split<T>(self, fns: &[&dyn Fn(Self) -> T]) -> Vec<T> {
        fns.iter().map(|f| f(self)).collect()
    }

    /// Like [`split`](Self::split), but over a tuple of functions that may
    /// each return a different type.
    ///
    /// ```
    /// use planar::Vector2D;
    ///
    /// let (len, inv) = Vector2D::new(3.0, 4.0).fan_out((Vector2D::norm, Vector2D::inverse));
    /// assert_eq!(len, 5.0);
    /// assert_eq!(inv, Vector2D::new(-3.0, -4.0));
    /// ```
    #[must_use]
    pub fn fan_out<F: FanOut<Self>>(self, fns: F) -> F::Output {
        fns.fan_out(self)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector2D { x: ")?;
        write_coordinate(f, self.x)?;
        f.write_str(", y: ")?;
        write_coordinate(f, self.y)?;
        f.write_str(" }")
    }
}

/// Writes a coordinate the way a number is usually printed in logs: no
/// negative zero, and exponent notation outside `[1e-6, 1e21)`.
fn write_coordinate(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    // -0.0 + 0.0 is +0.0
    let value = value + 0.0;
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{value}")
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        transform::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        transform::sub(self, rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        transform::scale(self, rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        transform::scale(rhs, self)
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        transform::sum(iter)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<super::Vector2> for Vector2D {
    fn from(v: super::Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<super::Point2> for Vector2D {
    fn from(p: super::Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2D> for super::Vector2 {
    fn from(v: Vector2D) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}
