use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single entry of the directory.
///
/// `iso_alpha2` is the natural key. The remaining fields are plain attributes;
/// no invariants are enforced on them beyond their types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub short_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub iso_alpha2: String,
    pub iso_alpha3: String,
    pub iso_numeric: String,
    pub population: i64,
    pub area: f64,
}

/// The abbreviated form of a country returned by list and write operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPreview {
    pub name: String,
    pub uri: String,
}

impl CountryPreview {
    /// Builds the preview pointing at the canonical resource URI of `country`,
    /// e.g. `http://example.org/api/country/FR`.
    pub fn new(country: &Country, scheme: &str, host: &str) -> Self {
        Self {
            name: country.short_name.clone(),
            uri: format!("{}://{}/api/country/{}", scheme, host, country.iso_alpha2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn france() -> Country {
        Country {
            short_name: "France".to_string(),
            full_name: Some("French Republic".to_string()),
            iso_alpha2: "FR".to_string(),
            iso_alpha3: "FRA".to_string(),
            iso_numeric: "250".to_string(),
            population: 67_000_000,
            area: 551_695.0,
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(france()).unwrap();
        assert_eq!(value["shortName"], "France");
        assert_eq!(value["fullName"], "French Republic");
        assert_eq!(value["isoAlpha2"], "FR");
        assert_eq!(value["isoAlpha3"], "FRA");
        assert_eq!(value["isoNumeric"], "250");
        assert_eq!(value["population"], 67_000_000);
        assert_eq!(value["area"], 551_695.0);
    }

    #[test]
    fn full_name_may_be_omitted() {
        let country: Country = serde_json::from_value(json!({
            "shortName": "Monaco",
            "isoAlpha2": "MC",
            "isoAlpha3": "MCO",
            "isoNumeric": "492",
            "population": 39000,
            "area": 2.02
        }))
        .unwrap();
        assert_eq!(country.full_name, None);
        assert_eq!(country.short_name, "Monaco");
    }

    #[test]
    fn preview_points_at_canonical_uri() {
        let preview = CountryPreview::new(&france(), "https", "countries.example");
        assert_eq!(preview.name, "France");
        assert_eq!(preview.uri, "https://countries.example/api/country/FR");
    }
}
