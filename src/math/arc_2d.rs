use std::f64::consts::FRAC_PI_2;

use super::Point2;

/// Slack allowed on the raw segment count before rounding up. A 90° fillet at
/// 4 chords per quarter turn computes a raw count of 4.000000000000001 and
/// must still get 4 chords.
const SEGMENT_COUNT_SLACK: f64 = 1e-9;

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
///
/// The arc starts at `start_angle` around `center` and turns through the
/// signed `sweep` (positive = counter-clockwise).
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Number of chords used for an arc of `sweep` radians at
/// `segments_per_quarter_turn` chords per 90°. Always at least 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quarter_turn_segments(sweep: f64, segments_per_quarter_turn: u32) -> u32 {
    let density = f64::from(segments_per_quarter_turn.max(1));
    let raw = sweep.abs() / FRAC_PI_2 * density;
    let count = (raw - SEGMENT_COUNT_SLACK).ceil();
    if count.is_finite() && count >= 1.0 {
        count.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}
