pub mod arc_2d;
pub mod intersect_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Per-coordinate tolerance for treating two points as the same vertex.
pub const POINT_EPSILON: f64 = 1e-9;

/// Angular tolerance (radians) below which a corner counts as straight or folded back.
pub const ANGLE_EPSILON: f64 = 1e-6;

/// Length tolerance in segment tests: point-to-line distance and bounding-box slack.
pub const INTERSECTION_EPSILON: f64 = 1e-9;
