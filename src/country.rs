//! Country records as returned by the API and their normalized shapes.

use std::collections::HashMap;

use serde::Deserialize;

/// Placeholder shown for absent optional fields.
pub const NOT_AVAILABLE: &str = "not available";

/// Translation key preferred for display names.
pub const DEFAULT_TRANSLATION: &str = "por";

/// Raw country object from the REST Countries v3.1 API.
///
/// Only the consumed fields are modelled; everything optional defaults so a
/// field-filtered response (e.g. `/all?fields=...`) still decodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCountry {
    pub name: RawName,
    pub translations: HashMap<String, RawTranslation>,
    pub flags: RawFlags,
    pub capital: Option<Vec<String>>,
    pub region: Option<String>,
    pub population: u64,
    pub languages: Option<serde_json::Map<String, serde_json::Value>>,
    pub borders: Option<Vec<String>>,
    pub cca3: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawName {
    pub common: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTranslation {
    pub common: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFlags {
    pub svg: String,
}

/// Entry of the listing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub name: String,
    pub flag_url: String,
    pub code: String,
    pub population: u64,
}

/// Everything the detail screen shows about one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetail {
    pub name: String,
    pub flag_url: String,
    pub capital: String,
    pub continent: String,
    pub population: String,
    pub languages: String,
    pub borders: Vec<String>,
}

/// Neighbor shown under a country's detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderCountry {
    pub name: String,
    pub flag_url: String,
    pub code: String,
}

impl RawCountry {
    /// Localized name under `translation`, or the common name when that
    /// translation is missing or blank.
    pub fn display_name(&self, translation: &str) -> String {
        self.translations
            .get(translation)
            .map(|t| t.common.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name.common)
            .to_string()
    }

    fn capital(&self) -> String {
        self.capital
            .as_ref()
            .and_then(|capitals| capitals.first())
            .filter(|capital| !capital.is_empty())
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    fn continent(&self) -> String {
        self.region
            .as_ref()
            .filter(|region| !region.is_empty())
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Language names in document order, comma-joined.
    fn languages(&self) -> String {
        let joined = self
            .languages
            .iter()
            .flat_map(|languages| languages.values())
            .filter_map(|value| value.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            joined
        }
    }
}

impl CountrySummary {
    pub fn from_raw(raw: &RawCountry, translation: &str) -> Self {
        Self {
            name: raw.display_name(translation),
            flag_url: raw.flags.svg.clone(),
            code: raw.cca3.clone(),
            population: raw.population,
        }
    }
}

impl CountryDetail {
    pub fn from_raw(raw: &RawCountry, translation: &str) -> Self {
        Self {
            name: raw.display_name(translation),
            flag_url: raw.flags.svg.clone(),
            capital: raw.capital(),
            continent: raw.continent(),
            population: group_thousands(raw.population),
            languages: raw.languages(),
            borders: raw.borders.clone().unwrap_or_default(),
        }
    }
}

impl BorderCountry {
    pub fn from_raw(raw: &RawCountry, translation: &str) -> Self {
        Self {
            name: raw.display_name(translation),
            flag_url: raw.flags.svg.clone(),
            code: raw.cca3.clone(),
        }
    }
}

/// Format a count with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
