//! Walks a vector through a few pipelines and logs each step.
//!
//! Run with `RUST_LOG=debug cargo run --example pipeline` to also see the
//! events emitted when a checked operation rejects a zero-length vector.

use planar::operations::{curried, query, transform};
use planar::Vector2D;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let start = Vector2D::new(1.0, 0.0);
    let turned = start.pipe(&[&curried::rotate90(true), &curried::scale(2.0)]);
    tracing::info!(%start, %turned, "rotated clockwise and doubled");

    let (norm, inverse) = Vector2D::new(3.0, 4.0).fan_out((Vector2D::norm, Vector2D::inverse));
    tracing::info!(norm, %inverse, "fan out");

    let angle = query::angle_to(start, Vector2D::new(0.0, 1.0));
    tracing::info!(angle, "angle from x axis to y axis");

    let near = curried::proximity(0.5)(Vector2D::ZERO);
    for probe in [Vector2D::new(0.4, 0.4), Vector2D::new(0.6, 0.0)] {
        tracing::info!(%probe, near = near(probe), "proximity to origin");
    }

    match transform::try_resize(Vector2D::ZERO, 1.0) {
        Ok(v) => tracing::info!(%v, "resized"),
        Err(e) => tracing::warn!(error = %e, "resize rejected"),
    }
}
