mod self_intersection;

pub use self_intersection::{has_self_intersection, SegmentPair, SelfIntersection};
