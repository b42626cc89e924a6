//! Industry catalog entries.

use serde::{Deserialize, Serialize};

/// One industry category and the NAICS codes that make it up.
///
/// Catalog files carry presentation fields (labels, colours, icons) that the
/// engine ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryDefinition {
    /// Stable identifier, also used as the output file stem.
    pub id: String,
    /// NAICS classification codes aggregated into this industry.
    #[serde(default)]
    pub naics_codes: Vec<String>,
}

impl IndustryDefinition {
    /// Construct a definition from an identifier and its NAICS codes.
    pub fn new<I, S>(id: impl Into<String>, naics_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            naics_codes: naics_codes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered list of industries; scoring runs once per entry.
pub type IndustryCatalog = Vec<IndustryDefinition>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_catalog_entries_and_ignores_presentation_fields() {
        let catalog: IndustryCatalog = serde_json::from_str(
            r##"[{"id": "restaurants", "name": "Restaurants", "color": "#f00", "naicsCodes": ["7225"]}]"##,
        )
        .expect("decode catalog");
        assert_eq!(catalog, vec![IndustryDefinition::new("restaurants", ["7225"])]);
    }

    #[rstest]
    fn naics_codes_default_to_empty() {
        let definition: IndustryDefinition =
            serde_json::from_str(r#"{"id": "misc"}"#).expect("decode definition");
        assert!(definition.naics_codes.is_empty());
    }
}
