use tracing::trace;

use super::corner::FilletCorner;
use crate::geometry::RadiusAssignment;
use crate::math::vector_2d::points_coincide;
use crate::math::Point2;

/// Fillets every interior vertex of an open polyline.
///
/// Each interior vertex `i` is rounded with `radii.radius_at(i, default_radius)`.
/// Results are stitched into one sequence, dropping any point that coincides
/// with the point emitted just before it. The first and last input points are
/// preserved exactly. Inputs with fewer than 3 points are returned unchanged.
#[derive(Debug)]
pub struct FilletPolyline<'a> {
    points: &'a [Point2],
    radii: &'a RadiusAssignment,
    default_radius: f64,
    segments_per_quarter_turn: u32,
}

impl<'a> FilletPolyline<'a> {
    /// Creates a new polyline fillet operation.
    #[must_use]
    pub fn new(
        points: &'a [Point2],
        radii: &'a RadiusAssignment,
        default_radius: f64,
        segments_per_quarter_turn: u32,
    ) -> Self {
        Self {
            points,
            radii,
            default_radius,
            segments_per_quarter_turn,
        }
    }

    /// Executes the operation, returning the filleted point sequence.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let n = self.points.len();
        if n < 3 {
            return self.points.to_vec();
        }

        let mut out: Vec<Point2> = Vec::with_capacity(n * 4);
        out.push(self.points[0]);

        for (i, window) in self.points.windows(3).enumerate() {
            let index = i + 1;
            let radius = self.radii.radius_at(index, self.default_radius);
            let fillet = FilletCorner::new(window[0], window[1], window[2], radius)
                .with_segments_per_quarter_turn(self.segments_per_quarter_turn)
                .execute();
            for q in fillet.points() {
                push_distinct(&mut out, *q);
            }
        }

        let last = self.points[n - 1];
        let tail = out.len() - 1;
        if points_coincide(&out[tail], &last) {
            // The arc already ends on the last point; store the exact input value.
            if tail > 0 {
                out[tail] = last;
            }
        } else {
            out.push(last);
        }

        trace!(input = n, output = out.len(), "polyline filleted");
        out
    }
}

fn push_distinct(out: &mut Vec<Point2>, q: Point2) {
    if out.last().is_some_and(|last| points_coincide(last, &q)) {
        return;
    }
    out.push(q);
}

/// Fillets a whole polyline. Shorthand for [`FilletPolyline`].
#[must_use]
pub fn fillet_polyline(
    points: &[Point2],
    radii: &RadiusAssignment,
    default_radius: f64,
    segments_per_quarter_turn: u32,
) -> Vec<Point2> {
    FilletPolyline::new(points, radii, default_radius, segments_per_quarter_turn).execute()
}
