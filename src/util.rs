//! Small matrix helpers that nalgebra does not spell the way this crate needs them.

use crate::{Matrix3, Matrix4, Vector3};
use nalgebra::Vector4;

#[cfg(any(test, feature = "approx"))]
use std::f64::consts::{PI, TAU};

/// Returns the entries of `m` in row-major order.
///
/// Index `3 * row + col` holds `m[(row, col)]`, so `[0..3]` is the first row, `[3..6]` the
/// second, and `[6..9]` the third. nalgebra stores column-major, which is why this exists.
#[must_use]
pub fn row_major(m: &Matrix3) -> [f64; 9] {
    [
        m[(0, 0)],
        m[(0, 1)],
        m[(0, 2)],
        m[(1, 0)],
        m[(1, 1)],
        m[(1, 2)],
        m[(2, 0)],
        m[(2, 1)],
        m[(2, 2)],
    ]
}

/// Returns the main diagonal of a 3×3 matrix.
#[must_use]
pub fn diagonal(m: &Matrix3) -> Vector3 {
    m.diagonal()
}

/// Returns the main diagonal of a 4×4 matrix.
#[must_use]
pub fn diagonal4(m: &Matrix4) -> Vector4<f64> {
    m.diagonal()
}

/// Wraps an angle in radians into [-π, π).
#[cfg(any(test, feature = "approx"))]
pub(crate) fn to_signed_range(radians: f64) -> f64 {
    let bounded = radians.rem_euclid(TAU);
    if bounded < PI {
        bounded
    } else {
        bounded - TAU
    }
}

/// Smallest absolute difference between two angles in radians, accounting for wrap-around.
#[cfg(any(test, feature = "approx"))]
pub(crate) fn angular_distance(a: f64, b: f64) -> f64 {
    to_signed_range(a - b).abs()
}
