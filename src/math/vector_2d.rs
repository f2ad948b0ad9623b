use std::f64::consts::PI;

use super::{Point2, Vector2, POINT_EPSILON};

/// Returns the unit vector of `v`.
///
/// A zero-length input yields the zero vector rather than an error; callers
/// that care about zero length must check it themselves.
#[must_use]
pub fn unit(v: Vector2) -> Vector2 {
    let len = v.x.hypot(v.y);
    if len > 0.0 {
        Vector2::new(v.x / len, v.y / len)
    } else {
        Vector2::zeros()
    }
}

/// 2D dot product.
#[must_use]
pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Maps an angle in radians into `(-π, π]`.
#[must_use]
pub fn normalize_angle(mut angle: f64) -> f64 {
    while angle <= -PI {
        angle += 2.0 * PI;
    }
    while angle > PI {
        angle -= 2.0 * PI;
    }
    angle
}

/// Returns `true` if both coordinates of `a` and `b` differ by less than [`POINT_EPSILON`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < POINT_EPSILON && (a.y - b.y).abs() < POINT_EPSILON
}
