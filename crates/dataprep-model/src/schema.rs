//! The canonical import schema.
//!
//! The field catalog is a fixed, ordered list. Order matters: the column
//! mapper walks it top to bottom and the first field whose pattern set
//! matches claims the column, so more specific fields must come first.

use serde::{Deserialize, Serialize};

/// How strongly a field is needed for a usable import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Mandatory,
    Important,
    Optional,
}

/// A canonical schema field with its column-name detection patterns.
///
/// `patterns` are regexes applied to a normalized (lowercased,
/// punctuation-stripped) column name.
#[derive(Debug, Clone, Copy)]
pub struct SchemaField {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub importance: Importance,
    pub patterns: &'static [&'static str],
}

/// Status values accepted by the validator after standardization.
pub const CANONICAL_STATUSES: [&str; 4] = ["Available", "Reserved", "Sold", "On Hold"];

const FIELDS: &[SchemaField] = &[
    SchemaField {
        id: "unit_code",
        label: "Unit Code",
        required: true,
        importance: Importance::Mandatory,
        patterns: &[
            r"^unit ?code$",
            r"^unit ?(no|num|number|id)$",
            r"^unit$",
            r"^code$",
        ],
    },
    SchemaField {
        id: "price",
        label: "Price",
        required: true,
        importance: Importance::Mandatory,
        patterns: &[r"^price\b", r"\bprice$", r"^total ?price", r"^amount$", r"^cost$"],
    },
    SchemaField {
        id: "property_type",
        label: "Property Type",
        required: false,
        importance: Importance::Important,
        patterns: &[r"^property ?type$", r"^unit ?type$", r"^type$", r"^category$"],
    },
    SchemaField {
        id: "area",
        label: "Area",
        required: false,
        importance: Importance::Important,
        patterns: &[r"^area\b", r"^size$", r"^sqm$", r"^built ?up ?area$", r"^bua$"],
    },
    SchemaField {
        id: "status",
        label: "Status",
        required: false,
        importance: Importance::Important,
        patterns: &[r"^status$", r"^availability$", r"^sales ?status$"],
    },
    SchemaField {
        id: "finishing",
        label: "Finishing",
        required: false,
        importance: Importance::Optional,
        patterns: &[r"^finishing$", r"^finish(ing)? ?(type|status|level)?$"],
    },
    SchemaField {
        id: "floor",
        label: "Floor",
        required: false,
        importance: Importance::Optional,
        patterns: &[r"^floor( ?(no|num|number))?$", r"^level$"],
    },
    SchemaField {
        id: "building",
        label: "Building",
        required: false,
        importance: Importance::Optional,
        patterns: &[r"^building( ?(no|num|number|name))?$", r"^block$", r"^tower$"],
    },
    SchemaField {
        id: "phase",
        label: "Phase",
        required: false,
        importance: Importance::Optional,
        patterns: &[r"^phase$", r"^stage$", r"^zone$"],
    },
    SchemaField {
        id: "bedrooms",
        label: "Bedrooms",
        required: false,
        importance: Importance::Optional,
        patterns: &[r"^bed(room)?s?$", r"^no ?(of )?bed(room)?s?$", r"^br$"],
    },
    SchemaField {
        id: "bathrooms",
        label: "Bathrooms",
        required: false,
        importance: Importance::Optional,
        patterns: &[r"^bath(room)?s?$", r"^no ?(of )?bath(room)?s?$", r"^wc$"],
    },
    SchemaField {
        id: "delivery_date",
        label: "Delivery Date",
        required: false,
        importance: Importance::Optional,
        patterns: &[r"^delivery( ?date)?$", r"^hand ?over( ?date)?$", r"^completion ?date$"],
    },
];

/// The ordered field catalog.
pub fn schema_fields() -> &'static [SchemaField] {
    FIELDS
}

/// Looks up a field by id.
pub fn schema_field(id: &str) -> Option<&'static SchemaField> {
    FIELDS.iter().find(|field| field.id == id)
}
