//! Session-scoped cleanup state: a dataset, a working copy, and the log of
//! applied actions.
//!
//! Unlike transformations, cleanup actions do not keep an undo cursor.
//! Removing an action resets the working copy to the pre-cleanup original
//! and leaves the remaining log entries recorded but unapplied; callers
//! decide when to re-run them via [`CleanupSession::reapply_remaining`].

use dataprep_model::{CellValue, CleanupAction, CleanupKind, Dataset};
use tracing::{debug, info};

use crate::format::{capitalize_words, format_currency, format_date, format_grouped, parse_numeric};
use crate::standardize::standardize;

pub struct CleanupSession {
    original: Dataset,
    current: Dataset,
    actions: Vec<CleanupAction>,
    next_id: u64,
}

impl CleanupSession {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            original: dataset.clone(),
            current: dataset,
            actions: Vec::new(),
            next_id: 1,
        }
    }

    pub fn original(&self) -> &Dataset {
        &self.original
    }

    pub fn current(&self) -> &Dataset {
        &self.current
    }

    /// Applied actions, oldest first.
    pub fn actions(&self) -> &[CleanupAction] {
        &self.actions
    }

    /// Runs a cleanup over every row of `column` and logs it. Returns the
    /// recorded action, or `None` when the column does not exist (nothing
    /// is applied or logged). Cells the operation cannot interpret are left
    /// untouched.
    pub fn apply(&mut self, kind: CleanupKind, column: &str) -> Option<&CleanupAction> {
        if !self.current.has_column(column) {
            debug!(column, "cleanup skipped, unknown column");
            return None;
        }
        let changed = run_action(&mut self.current, &kind, column);
        let action = CleanupAction::new(self.next_id, kind, column);
        self.next_id += 1;
        info!(id = action.id, cells = changed, "{}", action.description);
        self.actions.push(action);
        self.actions.last()
    }

    /// Replays an already-recorded action (e.g. from a preset), reassigning
    /// its id to keep the log sequence local to this session.
    pub fn apply_recorded(&mut self, action: CleanupAction) -> Option<&CleanupAction> {
        self.apply(action.kind, &action.column)
    }

    /// Removes the action at `index` from the log and resets the working
    /// copy to the pre-cleanup original. Remaining actions stay in the log
    /// but are NOT re-applied; see [`CleanupSession::reapply_remaining`].
    pub fn remove(&mut self, index: usize) -> Option<CleanupAction> {
        if index >= self.actions.len() {
            return None;
        }
        let removed = self.actions.remove(index);
        self.current = self.original.clone();
        info!(id = removed.id, "removed cleanup action, dataset reset");
        Some(removed)
    }

    /// Re-runs every logged action against a fresh copy of the original.
    pub fn reapply_remaining(&mut self) {
        self.current = self.original.clone();
        for action in &self.actions {
            if self.current.has_column(&action.column) {
                run_action(&mut self.current, &action.kind, &action.column);
            }
        }
        info!(actions = self.actions.len(), "re-applied cleanup log");
    }

    /// Drops the whole log and restores the original dataset.
    pub fn reset(&mut self) -> &Dataset {
        self.actions.clear();
        self.current = self.original.clone();
        &self.current
    }
}

/// Applies one cleanup to every row of a column, returning how many cells
/// changed. Cells that fail to parse keep their previous value.
fn run_action(dataset: &mut Dataset, kind: &CleanupKind, column: &str) -> usize {
    let mut changed = 0;
    for row in &mut dataset.rows {
        let Some(cell) = row.get(column) else {
            continue;
        };
        if cell.is_missing() {
            continue;
        }
        let raw = cell.render();
        if let Some(formatted) = clean_cell(kind, &raw)
            && formatted != raw
        {
            row.insert(column.to_string(), CellValue::Text(formatted));
            changed += 1;
        }
    }
    changed
}

fn clean_cell(kind: &CleanupKind, raw: &str) -> Option<String> {
    match kind {
        CleanupKind::FormatDate => format_date(raw),
        CleanupKind::FormatNumber => parse_numeric(raw).map(format_grouped),
        CleanupKind::FormatCurrency => parse_numeric(raw).map(format_currency),
        CleanupKind::Standardize { table } => standardize(*table, raw),
        CleanupKind::Capitalize => Some(capitalize_words(raw)),
        CleanupKind::Uppercase => Some(raw.to_uppercase()),
        CleanupKind::Lowercase => Some(raw.to_lowercase()),
    }
}
