use crate::math::intersect_2d::segments_intersect;
use crate::math::Point2;

/// A pair of non-adjacent segments of an open polyline that intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPair {
    /// Index of the first segment (from point `first` to `first + 1`).
    pub first: usize,
    /// Index of the second segment (always `>= first + 2`).
    pub second: usize,
}

/// Finds the first intersection between non-adjacent segments of an open polyline.
///
/// Segment `i` runs from `points[i]` to `points[i + 1]`. Every pair `(i, j)`
/// with `j >= i + 2` is tested, so adjacent segments sharing a vertex are
/// exempt. Both proper crossings and collinear touching or overlap count.
/// The scan is exhaustive O(n²) and stops at the first hit.
#[derive(Debug)]
pub struct SelfIntersection<'a> {
    points: &'a [Point2],
}

impl<'a> SelfIntersection<'a> {
    /// Creates a new self-intersection query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning the first intersecting pair found.
    #[must_use]
    pub fn execute(&self) -> Option<SegmentPair> {
        let n = self.points.len();
        if n < 4 {
            return None;
        }
        let seg_count = n - 1;

        for i in 0..seg_count {
            let (a0, a1) = (&self.points[i], &self.points[i + 1]);
            for j in (i + 2)..seg_count {
                let (b0, b1) = (&self.points[j], &self.points[j + 1]);
                if segments_intersect(a0, a1, b0, b1) {
                    return Some(SegmentPair {
                        first: i,
                        second: j,
                    });
                }
            }
        }

        None
    }
}

/// Returns `true` if any two non-adjacent segments of the open polyline intersect.
#[must_use]
pub fn has_self_intersection(points: &[Point2]) -> bool {
    SelfIntersection::new(points).execute().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RadiusAssignment;
    use crate::operations::fillet::fillet_polyline;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn triangle_path_never_intersects() {
        assert!(!has_self_intersection(&pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)])));
        assert!(!has_self_intersection(&pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)])));
    }

    #[test]
    fn bowtie_intersects() {
        let bowtie = pts(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        assert_eq!(
            SelfIntersection::new(&bowtie).execute(),
            Some(SegmentPair {
                first: 0,
                second: 2
            })
        );
    }

    #[test]
    fn open_square_is_valid() {
        let square = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert!(!has_self_intersection(&square));
    }

    #[test]
    fn closing_on_start_touches_first_segment() {
        let closed = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        assert!(has_self_intersection(&closed));
    }

    #[test]
    fn fold_back_overlap_intersects() {
        let path = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 0.0), (5.0, 5.0)]);
        assert!(has_self_intersection(&path));
    }

    #[test]
    fn endpoint_landing_on_earlier_segment_intersects() {
        let path = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (5.0, 0.0)]);
        assert!(has_self_intersection(&path));
    }

    #[test]
    fn straight_collinear_run_is_valid() {
        let path = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
        assert!(!has_self_intersection(&path));
    }

    #[test]
    fn repeated_runs_are_idempotent() {
        let paths = [
            pts(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]),
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
        ];
        for path in &paths {
            let first = SelfIntersection::new(path).execute();
            let second = SelfIntersection::new(path).execute();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn filleted_serpentine_depends_on_radius() {
        let serpentine = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 2.0), (0.0, 2.0), (0.0, 4.0)]);
        let radii = RadiusAssignment::new();

        let gentle = fillet_polyline(&serpentine, &radii, 0.5, 12);
        assert!(!has_self_intersection(&gentle));

        let tight = fillet_polyline(&serpentine, &radii, 5.0, 12);
        assert!(has_self_intersection(&tight));
    }

    #[test]
    fn filleted_square_stays_valid() {
        let square = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let out = fillet_polyline(&square, &RadiusAssignment::new(), 3.0, 4);
        assert!(!has_self_intersection(&out));
    }

    #[test]
    fn result_does_not_depend_on_coordinate_scale() {
        let base = [(0.0, 0.0), (10.0, 10.0), (12.0, 5.0), (8.0, 2.0)];
        let radii = RadiusAssignment::new();
        for scale in [1.0, 1e-6] {
            let path: Vec<Point2> = base
                .iter()
                .map(|&(x, y)| Point2::new(x * scale, y * scale))
                .collect();
            assert!(!has_self_intersection(&path), "scale {scale}");

            let gentle = fillet_polyline(&path, &radii, 1.0 * scale, 12);
            assert_eq!(SelfIntersection::new(&gentle).execute(), None, "scale {scale}");

            let tight = fillet_polyline(&path, &radii, 3.0 * scale, 12);
            assert_eq!(
                SelfIntersection::new(&tight).execute(),
                Some(SegmentPair {
                    first: 14,
                    second: 19
                }),
                "scale {scale}"
            );
        }
    }
}
