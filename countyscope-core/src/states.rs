//! Recognised state and territory prefixes for county codes.
//!
//! A county code starts with a two-digit state prefix. Only prefixes present
//! in a [`StateTable`] produce scores; everything else (outlying territories,
//! malformed identifiers) is filtered out before scoring.
//!
//! # Examples
//! ```
//! use countyscope_core::StateTable;
//!
//! let table = StateTable::default();
//! assert_eq!(table.abbreviation("06"), Some("CA"));
//! assert_eq!(table.abbreviation("78"), None);
//! ```

use std::collections::BTreeMap;

const US_STATE_PREFIXES: [(&str, &str); 52] = [
    ("01", "AL"),
    ("02", "AK"),
    ("04", "AZ"),
    ("05", "AR"),
    ("06", "CA"),
    ("08", "CO"),
    ("09", "CT"),
    ("10", "DE"),
    ("11", "DC"),
    ("12", "FL"),
    ("13", "GA"),
    ("15", "HI"),
    ("16", "ID"),
    ("17", "IL"),
    ("18", "IN"),
    ("19", "IA"),
    ("20", "KS"),
    ("21", "KY"),
    ("22", "LA"),
    ("23", "ME"),
    ("24", "MD"),
    ("25", "MA"),
    ("26", "MI"),
    ("27", "MN"),
    ("28", "MS"),
    ("29", "MO"),
    ("30", "MT"),
    ("31", "NE"),
    ("32", "NV"),
    ("33", "NH"),
    ("34", "NJ"),
    ("35", "NM"),
    ("36", "NY"),
    ("37", "NC"),
    ("38", "ND"),
    ("39", "OH"),
    ("40", "OK"),
    ("41", "OR"),
    ("42", "PA"),
    ("44", "RI"),
    ("45", "SC"),
    ("46", "SD"),
    ("47", "TN"),
    ("48", "TX"),
    ("49", "UT"),
    ("50", "VT"),
    ("51", "VA"),
    ("53", "WA"),
    ("54", "WV"),
    ("55", "WI"),
    ("56", "WY"),
    ("72", "PR"),
];

/// Read-only mapping from two-digit state prefix to postal abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTable {
    prefixes: BTreeMap<String, String>,
}

impl StateTable {
    /// Build a table from explicit `(prefix, abbreviation)` pairs.
    pub fn from_entries<I, P, A>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: Into<String>,
    {
        Self {
            prefixes: entries
                .into_iter()
                .map(|(prefix, abbreviation)| (prefix.into(), abbreviation.into()))
                .collect(),
        }
    }

    /// Return the abbreviation for `prefix`, if recognised.
    #[must_use]
    pub fn abbreviation(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Report whether `prefix` is a recognised state prefix.
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    /// Number of recognised prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Report whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for StateTable {
    /// The 50 states plus the District of Columbia and Puerto Rico.
    fn default() -> Self {
        Self::from_entries(US_STATE_PREFIXES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_table_covers_states_dc_and_puerto_rico() {
        let table = StateTable::default();
        assert_eq!(table.len(), 52);
        assert_eq!(table.abbreviation("11"), Some("DC"));
        assert_eq!(table.abbreviation("72"), Some("PR"));
    }

    #[rstest]
    #[case("03")]
    #[case("07")]
    #[case("60")]
    #[case("78")]
    #[case("")]
    fn unassigned_prefixes_are_not_recognised(#[case] prefix: &str) {
        assert!(!StateTable::default().contains(prefix));
    }

    #[rstest]
    fn custom_tables_only_know_their_entries() {
        let table = StateTable::from_entries([("99", "ZZ")]);
        assert_eq!(table.abbreviation("99"), Some("ZZ"));
        assert!(!table.contains("01"));
    }
}
