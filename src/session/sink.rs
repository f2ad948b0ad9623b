use crate::math::Point2;

/// Receives finished features from a digitizing session.
///
/// The host implements this to build a storable geometry record and append
/// it to its data layer. The core knows nothing about the storage format.
pub trait FeatureSink {
    /// Stores one finished polyline.
    fn append_feature(&mut self, points: &[Point2]);
}

impl FeatureSink for Vec<Vec<Point2>> {
    fn append_feature(&mut self, points: &[Point2]) {
        self.push(points.to_vec());
    }
}
