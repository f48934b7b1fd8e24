//! Linear, branch-truncating transformation history.
//!
//! Each snapshot is the full transformation list applied so far, not a diff
//! log. Undo moves the cursor back and recomputes the dataset by replaying
//! the snapshot at the new cursor against the original; appending while the
//! cursor is not at the tip truncates everything after it.

use dataprep_model::{Dataset, Transformation};

use crate::engine::apply;

#[derive(Debug, Clone)]
pub struct TransformationHistory {
    snapshots: Vec<Vec<Transformation>>,
    cursor: usize,
}

impl TransformationHistory {
    pub fn new() -> Self {
        Self {
            snapshots: vec![Vec::new()],
            cursor: 0,
        }
    }

    /// The transformation list at the cursor.
    pub fn current(&self) -> &[Transformation] {
        &self.snapshots[self.cursor]
    }

    /// Number of transformations currently applied.
    pub fn applied_count(&self) -> usize {
        self.snapshots[self.cursor].len()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Appends a transformation, truncating any redoable snapshots first.
    pub fn push(&mut self, transformation: Transformation) {
        self.snapshots.truncate(self.cursor + 1);
        let mut next = self.snapshots[self.cursor].clone();
        next.push(transformation);
        self.snapshots.push(next);
        self.cursor += 1;
    }

    /// Moves the cursor back one snapshot; false when already at the origin.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor forward one snapshot; false when already at the tip.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Discards every snapshot.
    pub fn reset(&mut self) {
        self.snapshots = vec![Vec::new()];
        self.cursor = 0;
    }
}

impl Default for TransformationHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Replays a transformation list against the original dataset.
///
/// Deterministic by construction: the recorded transformations carry their
/// scope (including explicit selections), so re-running the fold reproduces
/// the exact state that existed after each step's first application.
pub fn replay(original: &Dataset, transformations: &[Transformation]) -> Dataset {
    let mut current = original.clone();
    for transformation in transformations {
        if let Some(outcome) = apply(&current, transformation) {
            current = outcome.dataset;
        }
    }
    current
}
