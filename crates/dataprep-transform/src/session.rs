//! Session-scoped transformation state.
//!
//! The session owns the original dataset (deep-copied at construction), the
//! current working dataset, and the history. Every successful operation
//! returns a structurally independent dataset, so callers can display
//! "original" and "current" side by side at any time.

use dataprep_model::{
    Dataset, FilterCondition, Scope, SplitPosition, Transformation, TransformationKind,
};
use tracing::info;

use crate::engine::apply;
use crate::history::{TransformationHistory, replay};

pub struct TransformSession {
    original: Dataset,
    current: Dataset,
    history: TransformationHistory,
}

impl TransformSession {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            original: dataset.clone(),
            current: dataset,
            history: TransformationHistory::new(),
        }
    }

    pub fn original(&self) -> &Dataset {
        &self.original
    }

    pub fn current(&self) -> &Dataset {
        &self.current
    }

    pub fn history(&self) -> &TransformationHistory {
        &self.history
    }

    /// Transformations currently applied, in application order.
    pub fn transformations(&self) -> &[Transformation] {
        self.history.current()
    }

    /// Splits a column on a delimiter, extracting one token into a new
    /// column. Returns the recorded transformation, or `None` when the
    /// inputs violate the caller contract (nothing is applied or logged).
    pub fn split(
        &mut self,
        column: &str,
        delimiter: &str,
        position: SplitPosition,
        new_column: &str,
        keep_original: bool,
        scope: Scope,
    ) -> Option<&Transformation> {
        self.record(Transformation::new(
            TransformationKind::Split {
                column: column.to_string(),
                delimiter: delimiter.to_string(),
                position,
                new_column: new_column.to_string(),
                keep_original,
            },
            scope,
        ))
        .map(|(transformation, _)| transformation)
    }

    /// Merges two columns into a target (defaulting to the first source).
    pub fn merge(
        &mut self,
        column_a: &str,
        column_b: &str,
        separator: &str,
        target_column: Option<&str>,
        keep_originals: bool,
        scope: Scope,
    ) -> Option<&Transformation> {
        self.record(Transformation::new(
            TransformationKind::Merge {
                column_a: column_a.to_string(),
                column_b: column_b.to_string(),
                separator: separator.to_string(),
                target_column: target_column.unwrap_or(column_a).to_string(),
                keep_originals,
            },
            scope,
        ))
        .map(|(transformation, _)| transformation)
    }

    /// Sets a column to a fixed value on matching rows; returns the number
    /// of rows updated. Under [`Scope::All`] the filter chain decides; under
    /// [`Scope::Filtered`] the explicit selection decides and the chain is
    /// recorded for provenance only.
    pub fn conditional_update(
        &mut self,
        target_column: &str,
        new_value: &str,
        filter_chain: Vec<FilterCondition>,
        scope: Scope,
    ) -> Option<usize> {
        self.record(Transformation::new(
            TransformationKind::ConditionalUpdate {
                target_column: target_column.to_string(),
                new_value: new_value.to_string(),
                filter_chain,
            },
            scope,
        ))
        .map(|(_, updated_rows)| updated_rows)
    }

    /// Replays an already-recorded transformation (e.g. from a preset).
    pub fn apply_recorded(&mut self, transformation: Transformation) -> Option<&Transformation> {
        self.record(transformation).map(|(t, _)| t)
    }

    /// Steps back one transformation and rebuilds state by replay.
    pub fn undo(&mut self) -> &Dataset {
        if self.history.undo() {
            self.current = replay(&self.original, self.history.current());
            info!(applied = self.history.applied_count(), "undo");
        }
        &self.current
    }

    /// Steps forward one transformation and rebuilds state by replay.
    pub fn redo(&mut self) -> &Dataset {
        if self.history.redo() {
            self.current = replay(&self.original, self.history.current());
            info!(applied = self.history.applied_count(), "redo");
        }
        &self.current
    }

    /// Discards all transformations and restores the original dataset.
    pub fn reset(&mut self) -> &Dataset {
        self.history.reset();
        self.current = self.original.clone();
        &self.current
    }

    fn record(&mut self, transformation: Transformation) -> Option<(&Transformation, usize)> {
        let outcome = apply(&self.current, &transformation)?;
        self.current = outcome.dataset;
        info!(
            op = transformation.kind.display_name(),
            rows = outcome.updated_rows,
            "{}",
            transformation.description
        );
        let updated_rows = outcome.updated_rows;
        self.history.push(transformation);
        self.history.current().last().map(|t| (t, updated_rows))
    }
}
