use std::collections::VecDeque;

use crate::geometry::RadiusAssignment;
use crate::math::Point2;

/// Session state captured for undo/redo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Committed waypoints.
    pub waypoints: Vec<Point2>,
    /// Explicit per-vertex radii.
    pub radii: RadiusAssignment,
    /// Radius staged for the most recent waypoint.
    pub pending_radius: Option<f64>,
}

/// Linear undo/redo stacks of full-state snapshots.
///
/// Recording a new snapshot clears the redo stack. Each stack keeps at most
/// `max_depth` entries; the oldest is dropped first.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Creates an empty history holding at most `max_depth` snapshots per stack.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Records a pre-action snapshot and clears the redo stack.
    pub fn record(&mut self, snapshot: Snapshot) {
        push_bounded(&mut self.undo_stack, snapshot, self.max_depth);
        self.redo_stack.clear();
    }

    /// Pops the latest undo entry and pushes `current` onto the redo stack.
    ///
    /// Returns `None` (leaving both stacks untouched) if there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop_back()?;
        push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(previous)
    }

    /// Pops the latest redo entry and pushes `current` onto the undo stack.
    ///
    /// Returns `None` (leaving both stacks untouched) if there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop_back()?;
        push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    /// Pushes `current` onto the redo stack without touching the undo stack.
    pub fn push_redo(&mut self, current: Snapshot) {
        push_bounded(&mut self.redo_stack, current, self.max_depth);
    }

    /// Returns `true` if an undo entry is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns `true` if a redo entry is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, max_depth: usize) {
    if stack.len() >= max_depth {
        stack.pop_front();
    }
    stack.push_back(snapshot);
}
