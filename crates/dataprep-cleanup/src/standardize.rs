//! Fixed alias tables for enum-like columns.
//!
//! Matching is case-insensitive: the cell is lowercased and the first table
//! entry whose alias equals the cell or is contained in it wins. Entry order
//! matters where one alias is a substring of another ("semi finished" must
//! precede "finished").

use dataprep_model::StandardTable;

const PROPERTY_TYPE_ALIASES: &[(&str, &str)] = &[
    ("townhouse", "Townhouse"),
    ("town house", "Townhouse"),
    ("penthouse", "Penthouse"),
    ("duplex", "Duplex"),
    ("studio", "Studio"),
    ("chalet", "Chalet"),
    ("twin house", "Twin House"),
    ("twin", "Twin House"),
    ("villa", "Villa"),
    ("apartment", "Apartment"),
    ("apt", "Apartment"),
    ("flat", "Apartment"),
    ("office", "Office"),
    ("retail", "Retail"),
    ("shop", "Retail"),
];

const FINISHING_ALIASES: &[(&str, &str)] = &[
    ("semi finished", "Semi-Finished"),
    ("semi-finished", "Semi-Finished"),
    ("semi", "Semi-Finished"),
    ("fully finished", "Fully Finished"),
    ("finished", "Fully Finished"),
    ("furnished", "Furnished"),
    ("core & shell", "Core & Shell"),
    ("core and shell", "Core & Shell"),
    ("core", "Core & Shell"),
    ("shell", "Core & Shell"),
];

const STATUS_ALIASES: &[(&str, &str)] = &[
    ("available", "Available"),
    ("avail", "Available"),
    ("free", "Available"),
    ("sold out", "Sold"),
    ("sold", "Sold"),
    ("reserved", "Reserved"),
    ("booked", "Reserved"),
    ("on hold", "On Hold"),
    ("hold", "On Hold"),
    ("blocked", "On Hold"),
];

fn aliases(table: StandardTable) -> &'static [(&'static str, &'static str)] {
    match table {
        StandardTable::PropertyType => PROPERTY_TYPE_ALIASES,
        StandardTable::Finishing => FINISHING_ALIASES,
        StandardTable::Status => STATUS_ALIASES,
    }
}

/// Maps a raw cell to its canonical label, or `None` when no alias matches.
pub fn standardize(table: StandardTable, raw: &str) -> Option<String> {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    aliases(table)
        .iter()
        .find(|(alias, _)| needle == *alias || needle.contains(alias))
        .map(|(_, canonical)| (*canonical).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_aliases_resolve() {
        assert_eq!(
            standardize(StandardTable::PropertyType, "apt").as_deref(),
            Some("Apartment")
        );
        assert_eq!(
            standardize(StandardTable::PropertyType, "FLAT").as_deref(),
            Some("Apartment")
        );
        assert_eq!(
            standardize(StandardTable::PropertyType, "Town House").as_deref(),
            Some("Townhouse")
        );
        assert_eq!(standardize(StandardTable::PropertyType, "warehouse"), None);
    }

    #[test]
    fn finishing_prefers_the_more_specific_alias() {
        // "semi finished" contains "finished" too; the semi entry must win.
        assert_eq!(
            standardize(StandardTable::Finishing, "Semi Finished").as_deref(),
            Some("Semi-Finished")
        );
        assert_eq!(
            standardize(StandardTable::Finishing, "fully finished").as_deref(),
            Some("Fully Finished")
        );
        assert_eq!(
            standardize(StandardTable::Finishing, "Core & Shell").as_deref(),
            Some("Core & Shell")
        );
    }

    #[test]
    fn status_aliases_cover_the_canonical_set() {
        assert_eq!(
            standardize(StandardTable::Status, "AVAILABLE").as_deref(),
            Some("Available")
        );
        assert_eq!(
            standardize(StandardTable::Status, "booked").as_deref(),
            Some("Reserved")
        );
        assert_eq!(
            standardize(StandardTable::Status, "on hold").as_deref(),
            Some("On Hold")
        );
        assert_eq!(
            standardize(StandardTable::Status, "sold out").as_deref(),
            Some("Sold")
        );
        assert_eq!(standardize(StandardTable::Status, ""), None);
    }
}
