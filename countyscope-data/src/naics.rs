//! Aggregation of per-NAICS establishment rows into industry counts.

use std::collections::BTreeMap;

use camino::Utf8Path;
use countyscope_core::{EstablishmentDataset, IndustryDefinition};
use log::info;
use serde::{Deserialize, Serialize};

use crate::{DataError, snapshot::read_json};

/// One county-level establishment count for one NAICS code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentRow {
    /// Five-character county code.
    pub county: String,
    /// NAICS code as published, possibly with range suffixes such as `72----`.
    pub naics: String,
    /// Establishment count.
    #[serde(default)]
    pub establishments: u64,
}

/// Maps cleaned NAICS codes to the industries that include them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NaicsIndex {
    industries: BTreeMap<String, Vec<String>>,
}

impl NaicsIndex {
    /// Index every NAICS code of every catalog entry, preserving catalog order.
    #[must_use]
    pub fn from_catalog(catalog: &[IndustryDefinition]) -> Self {
        let mut industries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for industry in catalog {
            for code in &industry.naics_codes {
                industries
                    .entry(code.clone())
                    .or_default()
                    .push(industry.id.clone());
            }
        }
        info!(
            "NAICS index maps {} codes to {} industries",
            industries.len(),
            catalog.len()
        );
        Self { industries }
    }

    /// Industries fed by `code`; empty when the code is not in the catalog.
    #[must_use]
    pub fn industries_for(&self, code: &str) -> &[String] {
        self.industries.get(code).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct NAICS codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.industries.len()
    }

    /// Whether the catalog listed no NAICS codes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }
}

/// Strip whitespace, then trailing `/`, then trailing `-` from a NAICS code.
///
/// # Examples
/// ```
/// use countyscope_data::clean_naics_code;
///
/// assert_eq!(clean_naics_code(" 4451// "), "4451");
/// assert_eq!(clean_naics_code("72----"), "72");
/// assert_eq!(clean_naics_code("44-/"), "44");
/// ```
#[must_use]
pub fn clean_naics_code(raw: &str) -> &str {
    raw.trim().trim_end_matches('/').trim_end_matches('-')
}

/// Sum establishment rows into per-industry county counts.
///
/// A row contributes to every industry listing its cleaned NAICS code; rows
/// with unknown codes are skipped. Counts for the same industry and county
/// accumulate.
#[must_use]
pub fn aggregate_establishments<'a, I>(rows: I, index: &NaicsIndex) -> EstablishmentDataset
where
    I: IntoIterator<Item = &'a EstablishmentRow>,
{
    let mut dataset = EstablishmentDataset::new();
    let mut total = 0_usize;
    let mut matched = 0_usize;
    for row in rows {
        total = total.saturating_add(1);
        let industries = index.industries_for(clean_naics_code(&row.naics));
        if industries.is_empty() {
            continue;
        }
        matched = matched.saturating_add(1);
        for industry in industries {
            let count = dataset
                .entry(industry.clone())
                .or_default()
                .entry(row.county.clone())
                .or_default();
            *count = count.saturating_add(row.establishments);
        }
    }
    info!("matched {matched} of {total} establishment rows to catalog NAICS codes");
    dataset
}

/// Load establishment rows from a JSON array.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or decoded.
pub fn load_establishment_rows(path: &Utf8Path) -> Result<Vec<EstablishmentRow>, DataError> {
    read_json(path)
}
