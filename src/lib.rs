pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;

pub use error::{ConfigError, FilletError, Result, SessionError};
pub use geometry::RadiusAssignment;
pub use math::Point2;
pub use operations::fillet::{
    fillet_corner, fillet_polyline, CornerFillet, FilletArc, FilletCorner, FilletPolyline,
};
pub use operations::query::{has_self_intersection, SegmentPair, SelfIntersection};
pub use session::{
    DigitizeSession, FeatureSink, FilletConfig, Preview, RadiusStep, SessionState,
};
