pub mod config;
pub mod history;
pub mod sink;

pub use config::{FilletConfig, RadiusStep};
pub use history::{EditHistory, Snapshot};
pub use sink::FeatureSink;

use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};
use crate::geometry::RadiusAssignment;
use crate::math::Point2;
use crate::operations::fillet::fillet_polyline;
use crate::operations::query::SelfIntersection;

/// Coarse state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No waypoints placed.
    Idle,
    /// At least one waypoint placed.
    Building,
}

/// Filleted preview of the path under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// Filleted points, committed waypoints followed by the cursor.
    pub points: Vec<Point2>,
    /// `false` if the path intersects itself.
    pub valid: bool,
}

/// One digitizing operation, from the first click to finish or reset.
///
/// Holds the waypoints placed so far, explicit per-corner radii, the radius
/// staged for the next corner, and the undo/redo history. On finish the
/// filleted polyline goes to a [`FeatureSink`].
#[derive(Debug, Clone)]
pub struct DigitizeSession {
    config: FilletConfig,
    default_radius: f64,
    waypoints: Vec<Point2>,
    radii: RadiusAssignment,
    pending_radius: Option<f64>,
    history: EditHistory,
}

impl Default for DigitizeSession {
    fn default() -> Self {
        Self::with_valid_config(FilletConfig::default())
    }
}

impl DigitizeSession {
    /// Creates an idle session.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if `config` fails validation.
    pub fn new(config: FilletConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: FilletConfig) -> Self {
        Self {
            config,
            default_radius: config.default_radius,
            waypoints: Vec::new(),
            radii: RadiusAssignment::new(),
            pending_radius: None,
            history: EditHistory::new(config.history_depth),
        }
    }

    // --- Queries ---

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.waypoints.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Building
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &FilletConfig {
        &self.config
    }

    /// Committed waypoints in path order.
    #[must_use]
    pub fn waypoints(&self) -> &[Point2] {
        &self.waypoints
    }

    /// Explicit per-vertex radii.
    #[must_use]
    pub fn radii(&self) -> &RadiusAssignment {
        &self.radii
    }

    /// Radius staged for the most recent waypoint, if any.
    #[must_use]
    pub fn pending_radius(&self) -> Option<f64> {
        self.pending_radius
    }

    /// Session-wide radius used by every corner without an override.
    #[must_use]
    pub fn default_radius(&self) -> f64 {
        self.default_radius
    }

    /// Radius the next corner will get: the pending override, else the default.
    #[must_use]
    pub fn active_radius(&self) -> f64 {
        self.pending_radius.unwrap_or(self.default_radius)
    }

    /// Returns `true` if an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || !self.waypoints.is_empty()
    }

    /// Returns `true` if a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Waypoints ---

    /// Appends a waypoint.
    ///
    /// A pending radius is first committed to the current last waypoint, which
    /// becomes an interior corner once `point` is added.
    pub fn add_waypoint(&mut self, point: Point2) {
        self.history.record(self.snapshot());
        if let (Some(radius), Some(last)) = (self.pending_radius.take(), self.last_index()) {
            self.radii.set(last, radius);
        }
        self.waypoints.push(point);
        debug!(index = self.waypoints.len() - 1, %point, "waypoint added");
    }

    // --- Radius adjustments ---

    /// Stages `radius` (clamped to `>= 0`) for the most recent waypoint.
    ///
    /// Returns `false` and does nothing when no waypoint exists.
    pub fn set_pending_radius(&mut self, radius: f64) -> bool {
        if self.waypoints.is_empty() {
            return false;
        }
        self.history.record(self.snapshot());
        let radius = radius.max(0.0);
        self.pending_radius = Some(radius);
        debug!(radius, "pending corner radius set");
        true
    }

    /// Raises the pending radius by one step, seeding it from the default first.
    pub fn increment_pending_radius(&mut self, step: RadiusStep) -> bool {
        let delta = self.config.step_amount(step);
        self.set_pending_radius(self.active_radius() + delta)
    }

    /// Lowers the pending radius by one step, seeding it from the default first.
    pub fn decrement_pending_radius(&mut self, step: RadiusStep) -> bool {
        let delta = self.config.step_amount(step);
        self.set_pending_radius(self.active_radius() - delta)
    }

    /// Sets the session-wide default radius, clamped to `>= 0`.
    pub fn set_default_radius(&mut self, radius: f64) {
        self.default_radius = radius.max(0.0);
        debug!(radius = self.default_radius, "default radius set");
    }

    /// Raises the default radius by one step.
    pub fn increment_default_radius(&mut self, step: RadiusStep) {
        self.set_default_radius(self.default_radius + self.config.step_amount(step));
    }

    /// Lowers the default radius by one step.
    pub fn decrement_default_radius(&mut self, step: RadiusStep) {
        self.set_default_radius(self.default_radius - self.config.step_amount(step));
    }

    // --- History ---

    /// Reverts the latest recorded action.
    ///
    /// With an exhausted undo stack but waypoints still present, removes the
    /// last waypoint instead; its corner override returns to the pending slot.
    /// Returns `false` if nothing changed.
    pub fn undo(&mut self) -> bool {
        if let Some(previous) = self.history.undo(self.snapshot()) {
            self.restore(previous);
            debug!(waypoints = self.waypoints.len(), "undo");
            return true;
        }
        if self.waypoints.is_empty() {
            return false;
        }

        self.history.push_redo(self.snapshot());
        self.waypoints.pop();
        self.pending_radius = self.last_index().and_then(|last| self.radii.remove(last));
        self.radii.truncate(self.waypoints.len());
        debug!(waypoints = self.waypoints.len(), "undo removed last waypoint");
        true
    }

    /// Re-applies the latest undone action. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.snapshot()) {
            Some(next) => {
                self.restore(next);
                debug!(waypoints = self.waypoints.len(), "redo");
                true
            }
            None => false,
        }
    }

    /// Discards all waypoints, radii, the pending override and history.
    ///
    /// The default radius is kept.
    pub fn reset(&mut self) {
        self.waypoints.clear();
        self.radii.clear();
        self.pending_radius = None;
        self.history.clear();
        debug!("session reset");
    }

    // --- Fillet evaluation ---

    /// Filleted path over the committed waypoints plus `cursor`.
    ///
    /// The pending radius applies to the last committed waypoint. With no
    /// waypoints the preview is empty and valid.
    #[must_use]
    pub fn preview(&self, cursor: Point2) -> Preview {
        if self.waypoints.is_empty() {
            return Preview {
                points: Vec::new(),
                valid: true,
            };
        }
        let points = self.build_path(cursor);
        let valid = SelfIntersection::new(&points).execute().is_none();
        Preview { points, valid }
    }

    /// Completes the shape with `final_point` and hands it to `sink`.
    ///
    /// Returns `Ok(None)` without side effects when no waypoint exists. On
    /// success the session returns to [`SessionState::Idle`] and the committed
    /// points are returned.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SelfIntersecting` if the filleted path crosses
    /// itself. The session is left unchanged so the radius can be reduced.
    pub fn finish(
        &mut self,
        final_point: Point2,
        sink: &mut impl FeatureSink,
    ) -> Result<Option<Vec<Point2>>> {
        if self.waypoints.is_empty() {
            debug!("finish ignored, no waypoints");
            return Ok(None);
        }

        let points = self.build_path(final_point);
        if let Some(pair) = SelfIntersection::new(&points).execute() {
            warn!(
                first_segment = pair.first,
                second_segment = pair.second,
                "finish rejected, filleted path intersects itself"
            );
            return Err(SessionError::SelfIntersecting {
                first_segment: pair.first,
                second_segment: pair.second,
            }
            .into());
        }

        sink.append_feature(&points);
        info!(
            waypoints = self.waypoints.len() + 1,
            points = points.len(),
            "feature committed"
        );
        self.reset();
        Ok(Some(points))
    }

    /// Radii used for evaluation: explicit overrides plus the pending radius
    /// on the last committed waypoint.
    fn effective_radii(&self) -> RadiusAssignment {
        let mut radii = self.radii.clone();
        if let (Some(radius), Some(last)) = (self.pending_radius, self.last_index()) {
            radii.set(last, radius);
        }
        radii
    }

    fn build_path(&self, tail: Point2) -> Vec<Point2> {
        let mut path = Vec::with_capacity(self.waypoints.len() + 1);
        path.extend_from_slice(&self.waypoints);
        path.push(tail);
        fillet_polyline(
            &path,
            &self.effective_radii(),
            self.default_radius,
            self.config.segments_per_quarter_turn,
        )
    }

    fn last_index(&self) -> Option<usize> {
        self.waypoints.len().checked_sub(1)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            waypoints: self.waypoints.clone(),
            radii: self.radii.clone(),
            pending_radius: self.pending_radius,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.waypoints = snapshot.waypoints;
        self.radii = snapshot.radii;
        self.pending_radius = snapshot.pending_radius;
    }
}
