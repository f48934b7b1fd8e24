//! The opaque bundle handed to the persistence collaborator.

use serde::{Deserialize, Serialize};

use crate::cleanup::CleanupAction;
use crate::mapping::ColumnMapping;
use crate::transformation::Transformation;

/// Everything a later session needs to replay this preparation run.
///
/// The core does not define how presets are stored; this is the shape the
/// storage collaborator receives and returns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preset {
    pub mapping: ColumnMapping,
    pub transformations: Vec<Transformation>,
    pub cleanup_actions: Vec<CleanupAction>,
    /// Free-form entry-setup metadata owned by the caller.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterCondition, FilterOperator};
    use crate::transformation::{Scope, Transformation, TransformationKind};

    #[test]
    fn preset_round_trips_through_json() {
        let mut mapping = ColumnMapping::new();
        mapping.set("price", Some("Price (EGP)")).unwrap();

        let preset = Preset {
            mapping,
            transformations: vec![Transformation::new(
                TransformationKind::ConditionalUpdate {
                    target_column: "Status".into(),
                    new_value: "Sold".into(),
                    filter_chain: vec![FilterCondition::new(
                        "Price",
                        FilterOperator::GreaterThan,
                        "1000000",
                    )],
                },
                Scope::All,
            )],
            cleanup_actions: Vec::new(),
            metadata: serde_json::json!({ "source": "inventory.csv" }),
        };

        let json = serde_json::to_string(&preset).expect("serialize preset");
        let round: Preset = serde_json::from_str(&json).expect("deserialize preset");
        assert_eq!(round, preset);
    }
}
