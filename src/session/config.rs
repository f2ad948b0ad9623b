use crate::error::ConfigError;
use crate::operations::fillet::FilletCorner;

/// Parameters controlling a digitizing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilletConfig {
    /// Initial session-wide fillet radius.
    pub default_radius: f64,
    /// Number of chords per 90° of arc.
    pub segments_per_quarter_turn: u32,
    /// Radius change for a fine adjustment.
    pub radius_step: f64,
    /// Multiplier applied to `radius_step` for a coarse adjustment.
    pub coarse_step_factor: f64,
    /// Maximum number of undo (and redo) snapshots kept.
    pub history_depth: usize,
}

impl Default for FilletConfig {
    fn default() -> Self {
        Self {
            default_radius: 30.0,
            segments_per_quarter_turn: FilletCorner::DEFAULT_SEGMENTS_PER_QUARTER_TURN,
            radius_step: 1.0,
            coarse_step_factor: 10.0,
            history_depth: 256,
        }
    }
}

/// Size of a single radius adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusStep {
    /// One `radius_step`.
    Fine,
    /// `radius_step * coarse_step_factor`.
    Coarse,
}

impl FilletConfig {
    /// Returns the radius delta for `step`.
    #[must_use]
    pub fn step_amount(&self, step: RadiusStep) -> f64 {
        match step {
            RadiusStep::Fine => self.radius_step,
            RadiusStep::Coarse => self.radius_step * self.coarse_step_factor,
        }
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |parameter: &'static str, value: f64| {
            Err(ConfigError::InvalidParameter { parameter, value })
        };
        if !self.default_radius.is_finite() || self.default_radius < 0.0 {
            return invalid("default_radius", self.default_radius);
        }
        if self.segments_per_quarter_turn == 0 {
            return invalid("segments_per_quarter_turn", 0.0);
        }
        if !self.radius_step.is_finite() || self.radius_step < 0.0 {
            return invalid("radius_step", self.radius_step);
        }
        if !self.coarse_step_factor.is_finite() || self.coarse_step_factor < 1.0 {
            return invalid("coarse_step_factor", self.coarse_step_factor);
        }
        if self.history_depth == 0 {
            return invalid("history_depth", 0.0);
        }
        Ok(())
    }
}
