//! The pure apply kernel.
//!
//! Applying a recorded [`Transformation`] is a pure function from a dataset
//! to a new, structurally independent dataset. Input-state violations
//! (unknown column, empty delimiter or target name, filtered scope with an
//! empty selection) are caller-contract problems: the kernel returns `None`
//! and the input stays untouched. Replay for undo/redo runs through this
//! same kernel, so re-applying transformation *i* reproduces the exact state
//! that existed when it was first applied.

use dataprep_model::{
    CellValue, Dataset, Scope, SplitPosition, Transformation, TransformationKind,
};
use tracing::debug;

use crate::predicate::evaluate;

/// Result of applying one transformation.
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    pub dataset: Dataset,
    /// Rows written: in-scope rows for split/merge, matched rows for
    /// conditional update.
    pub updated_rows: usize,
}

/// Applies a recorded transformation; `None` means no-op.
pub fn apply(dataset: &Dataset, transformation: &Transformation) -> Option<ApplyOutcome> {
    if transformation.scope.is_empty_selection() {
        return None;
    }
    match &transformation.kind {
        TransformationKind::Split {
            column,
            delimiter,
            position,
            new_column,
            keep_original,
        } => apply_split(
            dataset,
            column,
            delimiter,
            *position,
            new_column,
            *keep_original,
            &transformation.scope,
        ),
        TransformationKind::Merge {
            column_a,
            column_b,
            separator,
            target_column,
            keep_originals,
        } => apply_merge(
            dataset,
            column_a,
            column_b,
            separator,
            target_column,
            *keep_originals,
            &transformation.scope,
        ),
        TransformationKind::ConditionalUpdate {
            target_column,
            new_value,
            filter_chain,
        } => apply_conditional_update(
            dataset,
            target_column,
            new_value,
            filter_chain,
            &transformation.scope,
        ),
    }
}

fn apply_split(
    dataset: &Dataset,
    column: &str,
    delimiter: &str,
    position: SplitPosition,
    new_column: &str,
    keep_original: bool,
    scope: &Scope,
) -> Option<ApplyOutcome> {
    if !dataset.has_column(column) || delimiter.is_empty() || new_column.trim().is_empty() {
        return None;
    }

    let mut next = dataset.clone();
    let adding_new = !next.has_column(new_column);
    if adding_new {
        next.columns.push(new_column.to_string());
    }

    let mut updated_rows = 0;
    for (index, row) in next.rows.iter_mut().enumerate() {
        if !scope.contains(index) {
            // Out-of-scope rows still get the new column, explicitly empty,
            // to keep every row carrying every header column.
            if adding_new {
                row.insert(new_column.to_string(), CellValue::Text(String::new()));
            }
            continue;
        }

        let raw = row.get(column).map(CellValue::render).unwrap_or_default();
        let tokens: Vec<&str> = raw.split(delimiter).collect();
        let extracted_index = match position {
            SplitPosition::First => Some(0),
            SplitPosition::Last => Some(tokens.len() - 1),
            SplitPosition::Second => (tokens.len() >= 2).then_some(1),
        };

        match extracted_index {
            Some(extracted) => {
                row.insert(
                    new_column.to_string(),
                    CellValue::Text(tokens[extracted].to_string()),
                );
                if !keep_original {
                    let remainder: Vec<&str> = tokens
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != extracted)
                        .map(|(_, token)| *token)
                        .collect();
                    row.insert(
                        column.to_string(),
                        CellValue::Text(remainder.join(delimiter)),
                    );
                }
            }
            // `second` needs at least two tokens; the field stays unset.
            None => {
                row.insert(new_column.to_string(), CellValue::Missing);
            }
        }
        updated_rows += 1;
    }

    debug!(column, new_column, rows = updated_rows, "applied split");
    Some(ApplyOutcome {
        dataset: next,
        updated_rows,
    })
}

fn apply_merge(
    dataset: &Dataset,
    column_a: &str,
    column_b: &str,
    separator: &str,
    target_column: &str,
    keep_originals: bool,
    scope: &Scope,
) -> Option<ApplyOutcome> {
    if !dataset.has_column(column_a)
        || !dataset.has_column(column_b)
        || target_column.trim().is_empty()
    {
        return None;
    }

    let mut next = dataset.clone();
    let adding_new = !next.has_column(target_column);
    if adding_new {
        next.columns.push(target_column.to_string());
    }

    let mut updated_rows = 0;
    for (index, row) in next.rows.iter_mut().enumerate() {
        if !scope.contains(index) {
            if adding_new {
                row.insert(target_column.to_string(), CellValue::Text(String::new()));
            }
            continue;
        }
        let left = row.get(column_a).map(CellValue::render).unwrap_or_default();
        let right = row.get(column_b).map(CellValue::render).unwrap_or_default();
        row.insert(
            target_column.to_string(),
            CellValue::Text(format!("{left}{separator}{right}")),
        );
        updated_rows += 1;
    }

    // Dropping the sources is a structural change that touches every row,
    // including ones outside the scope.
    if !keep_originals && target_column != column_a && target_column != column_b {
        next.drop_column(column_a);
        next.drop_column(column_b);
        debug!(
            column_a,
            column_b, "merge removed source columns across all rows"
        );
    }

    debug!(target_column, rows = updated_rows, "applied merge");
    Some(ApplyOutcome {
        dataset: next,
        updated_rows,
    })
}

fn apply_conditional_update(
    dataset: &Dataset,
    target_column: &str,
    new_value: &str,
    filter_chain: &[dataprep_model::FilterCondition],
    scope: &Scope,
) -> Option<ApplyOutcome> {
    if !dataset.has_column(target_column) {
        return None;
    }

    let mut next = dataset.clone();
    let mut updated_rows = 0;
    for (index, row) in next.rows.iter_mut().enumerate() {
        // Under a filtered scope the recorded chain is provenance only; the
        // explicit selection decides.
        let matches = match scope {
            Scope::All => evaluate(row, filter_chain),
            Scope::Filtered(selected) => selected.contains(&index),
        };
        if matches {
            row.insert(
                target_column.to_string(),
                CellValue::Text(new_value.to_string()),
            );
            updated_rows += 1;
        }
    }

    debug!(target_column, rows = updated_rows, "applied conditional update");
    Some(ApplyOutcome {
        dataset: next,
        updated_rows,
    })
}
