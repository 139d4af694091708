//! Geometric utility functions for 2D vectors stored as `Array1<f32>`.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;

/// Builds a 2D vector.
pub fn vec2(x: f32, y: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y])
}

/// Euclidean length of a vector.
pub fn length(v: &Array1<f32>) -> f32 {
    v.dot(v).sqrt()
}

/// Calculates the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - First point
/// * `b` - Second point
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Returns the unit vector pointing in the direction of `v`.
///
/// # Panics
///
/// Panics if `v` has zero length.
pub fn normalize(v: &Array1<f32>) -> Array1<f32> {
    let len = length(v);
    assert!(len > 0.0, "cannot normalize a zero-length vector");
    v / len
}

/// Reflects `v` about the line perpendicular to `normal`.
///
/// `normal` does not need to be unit length.
pub fn reflect(v: &Array1<f32>, normal: &Array1<f32>) -> Array1<f32> {
    let n = normalize(normal);
    v - &(&n * (2.0 * v.dot(&n)))
}

/// Unit vector rotated `degrees` counter-clockwise from the positive x-axis.
///
/// Quarter turns are exact so a straight-up or straight-down shot has no stray
/// horizontal component.
pub fn unit_vector(degrees: u16) -> Array1<f32> {
    match degrees % 360 {
        0 => vec2(1.0, 0.0),
        90 => vec2(0.0, 1.0),
        180 => vec2(-1.0, 0.0),
        270 => vec2(0.0, -1.0),
        d => {
            let rad = f32::from(d).to_radians();
            vec2(rad.cos(), rad.sin())
        }
    }
}
