//! Row-filter conditions used for transformation scoping and ad-hoc filtering.
//!
//! A filter chain is an ordered list of conditions combined by a strict
//! left-to-right fold: the logic operator stored on condition *i-1* governs
//! how condition *i* combines with the accumulated result. There is no
//! AND-before-OR precedence. The evaluator lives in the transform crate.

use serde::{Deserialize, Serialize};

/// Comparison operator for a single condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    /// Case-sensitive string equality.
    Equals,
    /// Case-insensitive substring match.
    Contains,
    /// Case-insensitive prefix match.
    StartsWith,
    /// Case-insensitive suffix match.
    EndsWith,
    /// Numeric comparison; false when either side fails to parse.
    GreaterThan,
    /// Numeric comparison; false when either side fails to parse.
    LessThan,
}

/// How a condition combines with the next one in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicOperator {
    And,
    Or,
}

/// One link of a filter chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub column: String,
    pub operator: FilterOperator,
    pub value: String,
    /// Combines the *next* condition with the accumulated result.
    /// Irrelevant on the last condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<LogicOperator>,
}

impl FilterCondition {
    pub fn new(column: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
            logic: None,
        }
    }

    /// Sets the operator combining the following condition.
    pub fn then(mut self, logic: LogicOperator) -> Self {
        self.logic = Some(logic);
        self
    }
}
