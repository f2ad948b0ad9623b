use super::{Point2, INTERSECTION_EPSILON};

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when `c` lies left of the directed line `a → b`, negative when
/// right, zero when collinear.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Returns `true` if `p` lies inside the bounding box of segment `a → b`,
/// expanded by [`INTERSECTION_EPSILON`].
///
/// Only meaningful when `p` is already known to be collinear with the segment.
#[must_use]
pub fn within_segment_bounds(a: &Point2, b: &Point2, p: &Point2) -> bool {
    let eps = INTERSECTION_EPSILON;
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

/// Tolerance on [`orientation`] values measured against segment `a → b`.
///
/// An orientation is twice a triangle area, so dividing it by the segment
/// length gives the point-to-line distance. Comparing against
/// `INTERSECTION_EPSILON * |b - a|` keeps the collinearity test in length
/// units at any coordinate scale.
#[must_use]
pub fn orientation_tolerance(a: &Point2, b: &Point2) -> f64 {
    INTERSECTION_EPSILON * (b - a).norm()
}

/// Closed segment-segment intersection test in 2D.
///
/// Reports proper crossings as well as touching or overlapping collinear
/// configurations (an endpoint lying on the other segment).
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let eps_a = orientation_tolerance(a0, a1);
    let eps_b = orientation_tolerance(b0, b1);
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    let straddles = |p: f64, q: f64, eps: f64| (p > eps && q < -eps) || (p < -eps && q > eps);
    if straddles(o1, o2, eps_a) && straddles(o3, o4, eps_b) {
        return true;
    }

    (o1.abs() <= eps_a && within_segment_bounds(a0, a1, b0))
        || (o2.abs() <= eps_a && within_segment_bounds(a0, a1, b1))
        || (o3.abs() <= eps_b && within_segment_bounds(b0, b1, a0))
        || (o4.abs() <= eps_b && within_segment_bounds(b0, b1, a1))
}
