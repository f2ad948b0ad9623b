use std::collections::BTreeMap;

/// Sparse per-vertex fillet radii.
///
/// Maps a vertex index of the waypoint sequence to an explicit radius. A
/// missing key means "use the default radius", never zero. Stored radii are
/// always non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadiusAssignment {
    overrides: BTreeMap<usize, f64>,
}

impl RadiusAssignment {
    /// Creates an empty assignment (every vertex uses the default).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit radius for `index`, clamped to `>= 0`.
    pub fn set(&mut self, index: usize, radius: f64) {
        self.overrides.insert(index, radius.max(0.0));
    }

    /// Removes and returns the explicit radius for `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<f64> {
        self.overrides.remove(&index)
    }

    /// Returns the explicit radius for `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.overrides.get(&index).copied()
    }

    /// Radius to use at `index`: the override if present, otherwise `default`.
    ///
    /// This is the only radius lookup; preview and commit both go through it.
    #[must_use]
    pub fn radius_at(&self, index: usize, default: f64) -> f64 {
        self.get(index).unwrap_or(default)
    }

    /// Drops every override at or beyond `len`.
    pub fn truncate(&mut self, len: usize) {
        let _ = self.overrides.split_off(&len);
    }

    /// Number of explicit overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns `true` if no vertex has an explicit radius.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Removes all overrides.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    /// Iterates `(index, radius)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.overrides.iter().map(|(&i, &r)| (i, r))
    }
}

impl FromIterator<(usize, f64)> for RadiusAssignment {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        let mut radii = Self::new();
        for (index, radius) in iter {
            radii.set(index, radius);
        }
        radii
    }
}
