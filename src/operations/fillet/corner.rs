use std::f64::consts::PI;

use tracing::trace;

use crate::math::arc_2d::{arc_point_at, quarter_turn_segments};
use crate::math::vector_2d::{dot, normalize_angle, unit};
use crate::math::{Point2, ANGLE_EPSILON};

/// Tessellated circular arc replacing one polyline corner.
#[derive(Debug, Clone, PartialEq)]
pub struct FilletArc {
    /// Distance from the corner to each tangent point.
    pub tangent_distance: f64,
    /// Radius actually used, possibly reduced to fit the adjacent edges.
    pub radius: f64,
    /// Arc center.
    pub center: Point2,
    /// Signed angular span from the first to the second tangent point, in `(-π, π]`.
    pub sweep: f64,
    /// First tangent point, interior arc samples, second tangent point.
    pub points: Vec<Point2>,
}

impl FilletArc {
    /// Tangent point on the incoming edge.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    /// Tangent point on the outgoing edge.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Number of chords approximating the arc.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }
}

/// Result of filleting a single corner.
#[derive(Debug, Clone, PartialEq)]
pub enum CornerFillet {
    /// No fillet was possible; the original corner point is kept.
    Sharp(Point2),
    /// The corner was replaced by an arc.
    Arc(FilletArc),
}

impl CornerFillet {
    /// Output points in path order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Self::Sharp(p) => std::slice::from_ref(p),
            Self::Arc(arc) => &arc.points,
        }
    }

    /// Consumes the result, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        match self {
            Self::Sharp(p) => vec![p],
            Self::Arc(arc) => arc.points,
        }
    }

    /// Returns `true` if the corner was left unchanged.
    #[must_use]
    pub fn is_sharp(&self) -> bool {
        matches!(self, Self::Sharp(_))
    }
}

/// Rounds the corner `corner` between `prev` and `next` with a circular arc.
///
/// # Algorithm
///
/// 1. Edge directions from the corner toward both neighbours and their lengths
/// 2. Interior angle `α` from the clamped arccosine of their dot product
/// 3. Tangent distance `t = r / tan(α/2)`, clamped to the shorter edge with the
///    radius reduced to match
/// 4. Center offset along the bisector by `r / sin(α/2)`
/// 5. Arc sampled at `segments_per_quarter_turn` chords per 90°
///
/// Every degenerate input (zero-length edge, straight or folded corner, zero
/// radius) yields [`CornerFillet::Sharp`]. This operation never fails.
#[derive(Debug, Clone)]
pub struct FilletCorner {
    prev: Point2,
    corner: Point2,
    next: Point2,
    radius: f64,
    segments_per_quarter_turn: u32,
}

impl FilletCorner {
    /// Default tessellation density in chords per 90° of arc.
    pub const DEFAULT_SEGMENTS_PER_QUARTER_TURN: u32 = 12;

    /// Creates a new corner fillet operation.
    #[must_use]
    pub fn new(prev: Point2, corner: Point2, next: Point2, radius: f64) -> Self {
        Self {
            prev,
            corner,
            next,
            radius,
            segments_per_quarter_turn: Self::DEFAULT_SEGMENTS_PER_QUARTER_TURN,
        }
    }

    /// Sets the tessellation density. Zero is treated as one.
    #[must_use]
    pub fn with_segments_per_quarter_turn(mut self, segments: u32) -> Self {
        self.segments_per_quarter_turn = segments.max(1);
        self
    }

    /// Executes the fillet.
    #[must_use]
    pub fn execute(&self) -> CornerFillet {
        let p = self.corner;
        let v1 = self.prev - p;
        let v2 = self.next - p;
        let l1 = v1.x.hypot(v1.y);
        let l2 = v2.x.hypot(v2.y);
        if l1 == 0.0 || l2 == 0.0 {
            trace!(corner = %p, "zero-length edge, corner kept");
            return CornerFillet::Sharp(p);
        }

        let s1 = unit(v1);
        let s2 = unit(v2);
        let alpha = dot(&s1, &s2).clamp(-1.0, 1.0).acos();
        if alpha < ANGLE_EPSILON || (PI - alpha).abs() < ANGLE_EPSILON {
            trace!(corner = %p, alpha, "straight or folded corner, kept");
            return CornerFillet::Sharp(p);
        }

        let half_tan = (alpha / 2.0).tan();
        let mut radius = self.radius.max(0.0);
        let mut t = radius / half_tan;
        let t_max = l1.min(l2);
        if t > t_max {
            t = t_max;
            radius = t * half_tan;
            trace!(corner = %p, requested = self.radius, radius, "radius reduced to fit edges");
        }
        if radius <= 0.0 {
            return CornerFillet::Sharp(p);
        }

        let t1 = p + s1 * t;
        let t2 = p + s2 * t;

        let bisector = s1 + s2;
        if bisector.x.hypot(bisector.y) == 0.0 {
            return CornerFillet::Sharp(p);
        }
        let h = radius / (alpha / 2.0).sin();
        let center = p + unit(bisector) * h;

        let start_angle = (t1.y - center.y).atan2(t1.x - center.x);
        let end_angle = (t2.y - center.y).atan2(t2.x - center.x);
        let sweep = normalize_angle(end_angle - start_angle);

        let segments = quarter_turn_segments(sweep, self.segments_per_quarter_turn);
        let mut points = Vec::with_capacity(segments as usize + 1);
        points.push(t1);
        for k in 1..segments {
            let param = f64::from(k) / f64::from(segments);
            points.push(arc_point_at(&center, radius, start_angle, sweep, param));
        }
        points.push(t2);

        CornerFillet::Arc(FilletArc {
            tangent_distance: t,
            radius,
            center,
            sweep,
            points,
        })
    }
}

/// Fillets a single corner and returns the output points.
///
/// Shorthand for [`FilletCorner`]; a degenerate corner yields `[corner]`.
#[must_use]
pub fn fillet_corner(
    prev: Point2,
    corner: Point2,
    next: Point2,
    radius: f64,
    segments_per_quarter_turn: u32,
) -> Vec<Point2> {
    FilletCorner::new(prev, corner, next, radius)
        .with_segments_per_quarter_turn(segments_per_quarter_turn)
        .execute()
        .into_points()
}
