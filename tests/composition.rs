use std::f64::consts::FRAC_PI_2;

use approx::assert_abs_diff_eq;
use planar::operations::{curried, query, transform};
use planar::{GeometryError, PlanarError, Vector2D};

const TOL: f64 = 1e-9;

fn grid() -> impl Iterator<Item = Vector2D> {
    (-3..=3).flat_map(|i| {
        (-3..=3).map(move |j| Vector2D::new(f64::from(i) * 1.7, f64::from(j) * 0.9))
    })
}

#[test]
fn rotations_compose_to_identity() {
    for v in grid() {
        let back = v.pipe(&[&curried::rotate(0.7), &curried::rotate(-0.7)]);
        assert_abs_diff_eq!(back.x, v.x, epsilon = TOL);
        assert_abs_diff_eq!(back.y, v.y, epsilon = TOL);

        let back = v.pipe(&[&curried::rotate90(false), &curried::rotate90(true)]);
        assert_eq!(back, v);
    }
}

#[test]
fn four_quarter_turns_return_home() {
    let v = Vector2D::new(2.0, -5.0);
    let turn = curried::rotate90(false);
    assert_eq!(v.pipe(&[&turn, &turn, &turn, &turn]), v);
}

#[test]
fn add_then_sub_is_identity() {
    let offset = Vector2D::new(0.25, -1.5);
    for v in grid() {
        let back = v.pipe(&[&curried::add(offset), &curried::sub(offset)]);
        assert_abs_diff_eq!(back.x, v.x, epsilon = TOL);
        assert_abs_diff_eq!(back.y, v.y, epsilon = TOL);
    }
}

#[test]
fn sum_matches_fold_of_add() {
    let vectors: Vec<Vector2D> = grid().collect();
    let folded = vectors.iter().copied().fold(Vector2D::ZERO, transform::add);
    assert_eq!(transform::sum(vectors.iter().copied()), folded);
    assert_eq!(vectors.into_iter().sum::<Vector2D>(), folded);
}

#[test]
fn resize_keeps_direction_and_sets_length() {
    for v in grid().filter(|v| v.norm() > 0.0) {
        let r = transform::resize(v, 4.0);
        assert_abs_diff_eq!(r.norm(), 4.0, epsilon = TOL);
        assert_abs_diff_eq!(query::det(v, r), 0.0, epsilon = 1e-6);
        assert!(query::dot(v, r) > 0.0);
    }
}

#[test]
fn checked_operations_reject_only_zero_vector() {
    let zero = Vector2D::ZERO;
    let unit = Vector2D::new(1.0, 0.0);
    assert!(matches!(
        transform::try_resize(zero, 1.0),
        Err(PlanarError::Geometry(GeometryError::ZeroVector))
    ));
    assert!(matches!(
        query::try_angle_between(unit, zero),
        Err(PlanarError::Geometry(GeometryError::ZeroVector))
    ));
    assert!(transform::try_resize(unit, 1.0).is_ok());
    assert!(query::try_angle_between(unit, unit).is_ok());
}

#[test]
fn angle_to_recovers_rotation() {
    let v = Vector2D::new(1.0, 2.0);
    for alpha in [-2.0, -0.5, 0.3, 1.0, 3.0] {
        let rotated = transform::rotate(v, alpha);
        assert_abs_diff_eq!(query::angle_to(v, rotated), alpha, epsilon = TOL);
        assert_abs_diff_eq!(query::angle_between(v, rotated), f64::abs(alpha), epsilon = 1e-7);
    }
}

#[test]
fn pipe_then_fan_out() {
    let v = Vector2D::new(1.0, 0.0).pipe(&[&curried::rotate90(true), &curried::scale(2.0)]);
    assert_eq!(v, Vector2D::new(0.0, -2.0));

    let (norm, inverse, angle) = v.fan_out((
        Vector2D::norm,
        Vector2D::inverse,
        curried::angle_to(Vector2D::new(1.0, 0.0)),
    ));
    assert_abs_diff_eq!(norm, 2.0, epsilon = TOL);
    assert_eq!(inverse, Vector2D::new(0.0, 2.0));
    assert_abs_diff_eq!(angle, FRAC_PI_2, epsilon = TOL);
}
