//! Filter-chain evaluation against a single row.

use dataprep_model::{CellValue, FilterCondition, FilterOperator, LogicOperator, Row};

/// Evaluates a filter chain with a strict left-to-right fold.
///
/// The logic operator stored on condition *i-1* combines condition *i* with
/// the accumulated result; there is no AND-before-OR precedence, so
/// `a OR b AND c` evaluates as `(a OR b) AND c`. An empty chain matches
/// everything — callers must treat "no conditions" and "all rows match" as
/// the same case.
pub fn evaluate(row: &Row, chain: &[FilterCondition]) -> bool {
    let Some((first, rest)) = chain.split_first() else {
        return true;
    };
    let mut result = matches_condition(row, first);
    let mut logic = first.logic;
    for condition in rest {
        let current = matches_condition(row, condition);
        result = match logic.unwrap_or(LogicOperator::And) {
            LogicOperator::And => result && current,
            LogicOperator::Or => result || current,
        };
        logic = condition.logic;
    }
    result
}

fn matches_condition(row: &Row, condition: &FilterCondition) -> bool {
    let cell = row
        .get(&condition.column)
        .map(CellValue::render)
        .unwrap_or_default();
    match condition.operator {
        FilterOperator::Equals => cell == condition.value,
        FilterOperator::Contains => cell
            .to_lowercase()
            .contains(&condition.value.to_lowercase()),
        FilterOperator::StartsWith => cell
            .to_lowercase()
            .starts_with(&condition.value.to_lowercase()),
        FilterOperator::EndsWith => cell
            .to_lowercase()
            .ends_with(&condition.value.to_lowercase()),
        FilterOperator::GreaterThan => {
            compare_numeric(&cell, &condition.value).is_some_and(|ordering| ordering.is_gt())
        }
        FilterOperator::LessThan => {
            compare_numeric(&cell, &condition.value).is_some_and(|ordering| ordering.is_lt())
        }
    }
}

// Fails open: None (and therefore false) when either side does not parse.
fn compare_numeric(left: &str, right: &str) -> Option<std::cmp::Ordering> {
    let left = parse_number(left)?;
    let right = parse_number(right)?;
    left.partial_cmp(&right)
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
