//! County identifiers, demographic inputs and score outputs.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::StateTable;

const COUNTY_CODE_LEN: usize = 5;
const STATE_PREFIX_LEN: usize = 2;

/// Establishment counts for one industry, keyed by raw county code.
///
/// A code that is absent means the county has no establishments in the
/// industry, not that the count is unknown.
pub type EstablishmentCounts = BTreeMap<String, u64>;

/// Establishment counts for every industry, keyed by industry identifier.
pub type EstablishmentDataset = BTreeMap<String, EstablishmentCounts>;

/// Demographic records keyed by raw county code.
pub type Demographics = BTreeMap<String, CountyRecord>;

/// A validated five-character county code.
///
/// The first two characters are a state prefix known to the [`StateTable`]
/// used for validation; the remaining three identify the county.
///
/// # Examples
/// ```
/// use countyscope_core::{CountyCode, StateTable};
///
/// # fn main() -> Result<(), countyscope_core::CountyCodeError> {
/// let code = CountyCode::parse("06037", &StateTable::default())?;
/// assert_eq!(code.state_prefix(), "06");
/// assert!(CountyCode::parse("0603", &StateTable::default()).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CountyCode(String);

/// Errors returned by [`CountyCode::parse`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountyCodeError {
    /// The code is not exactly five characters long.
    #[error("county code {code:?} has {length} characters, expected 5")]
    WrongLength {
        /// Rejected code.
        code: String,
        /// Number of characters found.
        length: usize,
    },
    /// The state prefix is not in the state table.
    #[error("county code {code:?} has an unrecognised state prefix")]
    UnknownState {
        /// Rejected code.
        code: String,
    },
}

impl CountyCode {
    /// Validate `raw` against `states` and wrap it.
    ///
    /// # Errors
    /// Returns [`CountyCodeError::WrongLength`] unless `raw` has exactly five
    /// characters, and [`CountyCodeError::UnknownState`] when its prefix is
    /// not a recognised state.
    pub fn parse(raw: &str, states: &StateTable) -> Result<Self, CountyCodeError> {
        let length = raw.chars().count();
        if length != COUNTY_CODE_LEN {
            return Err(CountyCodeError::WrongLength {
                code: raw.to_owned(),
                length,
            });
        }
        match raw.get(..STATE_PREFIX_LEN) {
            Some(prefix) if states.contains(prefix) => Ok(Self(raw.to_owned())),
            _ => Err(CountyCodeError::UnknownState {
                code: raw.to_owned(),
            }),
        }
    }

    /// Two-digit state prefix.
    #[must_use]
    pub fn state_prefix(&self) -> &str {
        self.0.get(..STATE_PREFIX_LEN).unwrap_or_default()
    }

    /// Borrow the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CountyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Demographic indicators for a single county.
///
/// Snapshots carry more fields than scoring needs (age and income
/// distributions, state averages); those are ignored. Missing numeric fields
/// read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountyRecord {
    /// Resident population.
    pub population: u64,
    /// Median household income; `0` means unknown.
    pub median_income: f64,
    /// Population growth rate, which may be negative.
    pub population_growth: f64,
    /// Display name, e.g. "Autauga County".
    pub name: String,
    /// Postal state abbreviation, when the snapshot provides one.
    pub state: Option<String>,
}

impl CountyRecord {
    /// State abbreviation, treating an empty string as absent.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref().filter(|state| !state.is_empty())
    }
}

/// Opportunity score for one county within one industry.
///
/// The serialised form has exactly six fields, which is the contract read by
/// the visualisation frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyScore {
    /// County code.
    pub code: CountyCode,
    /// County display name.
    pub name: String,
    /// Postal state abbreviation.
    pub state: String,
    /// Rescaled score in `0..=100`.
    pub score: u8,
    /// Establishments in the industry; zero when the county had none.
    pub establishment_count: u64,
    /// Rounded residents per establishment, before income and growth weighting.
    pub population_per_biz: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn states() -> StateTable {
        StateTable::default()
    }

    #[rstest]
    #[case("01001")]
    #[case("72127")]
    #[case("56ABC")]
    fn accepts_five_character_codes_with_known_prefix(states: StateTable, #[case] raw: &str) {
        let code = CountyCode::parse(raw, &states).expect("valid code");
        assert_eq!(code.as_str(), raw);
    }

    #[rstest]
    #[case("1001", 4)]
    #[case("010010", 6)]
    #[case("", 0)]
    fn rejects_codes_with_wrong_length(
        states: StateTable,
        #[case] raw: &str,
        #[case] expected: usize,
    ) {
        match CountyCode::parse(raw, &states) {
            Err(CountyCodeError::WrongLength { length, .. }) => assert_eq!(length, expected),
            other => panic!("expected WrongLength, found {other:?}"),
        }
    }

    #[rstest]
    #[case("78010")]
    #[case("00001")]
    #[case("é0001")]
    fn rejects_unknown_state_prefixes(states: StateTable, #[case] raw: &str) {
        assert!(matches!(
            CountyCode::parse(raw, &states),
            Err(CountyCodeError::UnknownState { .. })
        ));
    }

    #[rstest]
    fn record_defaults_missing_fields() {
        let record: CountyRecord =
            serde_json::from_str(r#"{"population": 1200, "medianAge": 41.5}"#).expect("decode");
        assert_eq!(record.population, 1200);
        assert_eq!(record.median_income, 0.0);
        assert_eq!(record.state(), None);
    }

    #[rstest]
    fn empty_state_reads_as_absent() {
        let record = CountyRecord {
            state: Some(String::new()),
            ..CountyRecord::default()
        };
        assert_eq!(record.state(), None);
    }

    #[rstest]
    fn score_serialises_exactly_six_fields(states: StateTable) {
        let score = CountyScore {
            code: CountyCode::parse("06037", &states).expect("valid code"),
            name: "Los Angeles County".into(),
            state: "CA".into(),
            score: 50,
            establishment_count: 500,
            population_per_biz: 20_000,
        };
        let value = serde_json::to_value(&score).expect("serialise score");
        let object = value.as_object().expect("score is an object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "code",
                "establishmentCount",
                "name",
                "populationPerBiz",
                "score",
                "state"
            ]
        );
        assert_eq!(object.get("code"), Some(&serde_json::json!("06037")));
    }
}
