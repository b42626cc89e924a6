//! Union of the county codes present in either input snapshot.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use countyscope_core::{CountyCode, Demographics, EstablishmentCounts, StateTable};

/// Valid county codes for one industry plus a count of rejected keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountyUniverse {
    codes: BTreeSet<CountyCode>,
    dropped: usize,
}

impl CountyUniverse {
    /// Iterate over the valid codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &CountyCode> {
        self.codes.iter()
    }

    /// Number of valid codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Report whether no valid codes survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Distinct keys rejected for length or state prefix.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Merge the keys of both snapshots and keep valid county codes.
///
/// Keys that are not five characters long or whose prefix is not in `states`
/// are dropped without error; raw snapshots routinely contain territory and
/// summary rows.
///
/// # Examples
/// ```
/// use countyscope_core::{CountyRecord, Demographics, EstablishmentCounts, StateTable};
/// use countyscope_scorer::union_county_codes;
///
/// let establishments = EstablishmentCounts::from([("01001".to_owned(), 4), ("99999".to_owned(), 1)]);
/// let demographics = Demographics::from([("01003".to_owned(), CountyRecord::default())]);
/// let universe = union_county_codes(&establishments, &demographics, &StateTable::default());
/// assert_eq!(universe.len(), 2);
/// assert_eq!(universe.dropped(), 1);
/// ```
#[must_use]
pub fn union_county_codes(
    establishments: &EstablishmentCounts,
    demographics: &Demographics,
    states: &StateTable,
) -> CountyUniverse {
    let raw: BTreeSet<&str> = establishments
        .keys()
        .chain(demographics.keys())
        .map(String::as_str)
        .collect();
    let mut universe = CountyUniverse::default();
    for key in raw {
        match CountyCode::parse(key, states) {
            Ok(code) => {
                universe.codes.insert(code);
            }
            Err(_) => universe.dropped = universe.dropped.saturating_add(1),
        }
    }
    universe
}
