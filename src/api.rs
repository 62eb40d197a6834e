//! REST Countries API client
//!
//! Three endpoints of the v3.1 API are used:
//! - `GET /v3.1/all` for the listing
//! - `GET /v3.1/alpha/{code}` for a single country
//! - `GET /v3.1/alpha?codes=a,b,c` for a batch of bordering countries
//!
//! Flag images are plain SVG downloads from the URLs those records carry.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::country::RawCountry;
use crate::error::FetchError;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// Fields requested for the listing; `/all` rejects unfiltered requests.
const LISTING_FIELDS: &str = "name,translations,flags,cca3,population";

/// Anything that can answer the three country queries and serve flag images.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn all(&self) -> Result<Vec<RawCountry>, FetchError>;
    async fn by_code(&self, code: &str) -> Result<Vec<RawCountry>, FetchError>;
    async fn by_codes(&self, codes: &[String]) -> Result<Vec<RawCountry>, FetchError>;
    /// Raw SVG bytes of a flag.
    async fn flag_svg(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Validate a user-supplied country code and upper-case it.
///
/// The API accepts 2-letter, 3-letter and numeric codes; anything else is
/// rejected before it reaches a URL.
pub fn normalize_code(code: &str) -> Result<String, FetchError> {
    let code = code.trim();
    if (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(FetchError::InvalidCode(code.to_string()))
    }
}

/// HTTP client for the public REST Countries service.
#[derive(Debug, Clone)]
pub struct RestCountries {
    client: reqwest::Client,
    base_url: String,
}

impl RestCountries {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn all_url(&self) -> String {
        format!("{}/v3.1/all?fields={}", self.base_url, LISTING_FIELDS)
    }

    fn alpha_url(&self, code: &str) -> String {
        format!("{}/v3.1/alpha/{}", self.base_url, code)
    }

    fn codes_url(&self, codes: &[String]) -> String {
        format!("{}/v3.1/alpha?codes={}", self.base_url, codes.join(","))
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(%url, error = %e, "Request failed");
            FetchError::Request {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, ?status, "Server returned error");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(body.to_vec())
    }

    async fn get(&self, url: String) -> Result<Vec<RawCountry>, FetchError> {
        debug!(%url, "Requesting countries");
        let body = self.get_bytes(&url).await?;

        let countries: Vec<RawCountry> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
                url: url.clone(),
                message: e.to_string(),
            })?;

        info!(%url, count = countries.len(), "Countries fetched");
        Ok(countries)
    }
}

#[async_trait]
impl CountrySource for RestCountries {
    async fn all(&self) -> Result<Vec<RawCountry>, FetchError> {
        self.get(self.all_url()).await
    }

    async fn by_code(&self, code: &str) -> Result<Vec<RawCountry>, FetchError> {
        let code = normalize_code(code)?;
        self.get(self.alpha_url(&code)).await
    }

    async fn by_codes(&self, codes: &[String]) -> Result<Vec<RawCountry>, FetchError> {
        let codes = codes
            .iter()
            .map(|code| normalize_code(code))
            .collect::<Result<Vec<_>, _>>()?;
        self.get(self.codes_url(&codes)).await
    }

    async fn flag_svg(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let bytes = self.get_bytes(url).await?;
        debug!(%url, bytes = bytes.len(), "Flag fetched");
        Ok(bytes)
    }
}

/// In-memory source that records every request it receives.
#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        All,
        ByCode(String),
        ByCodes(Vec<String>),
        Flag(String),
    }

    #[derive(Default)]
    pub struct FakeSource {
        countries: Vec<RawCountry>,
        failing: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeSource {
        pub fn new(countries: Vec<RawCountry>) -> Self {
            Self {
                countries,
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> Result<(), FetchError> {
            self.calls.lock().unwrap().push(call);
            if self.failing {
                return Err(FetchError::Request {
                    url: "fake://countries".into(),
                    message: "connection refused".into(),
                });
            }
            Ok(())
        }
    }

    /// Minimal record with a Portuguese translation and the given borders.
    pub fn raw(code: &str, name: &str, population: u64, borders: &[&str]) -> RawCountry {
        serde_json::from_value(serde_json::json!({
            "name": {"common": name},
            "translations": {"por": {"common": format!("{name} (pt)")}},
            "flags": {"svg": format!("https://flagcdn.com/{}.svg", code.to_lowercase())},
            "capital": [format!("{name} City")],
            "region": "Testland",
            "population": population,
            "languages": {"eng": "English"},
            "borders": borders,
            "cca3": code,
        }))
        .unwrap()
    }

    #[async_trait]
    impl CountrySource for FakeSource {
        async fn all(&self) -> Result<Vec<RawCountry>, FetchError> {
            self.record(Call::All)?;
            Ok(self.countries.clone())
        }

        async fn by_code(&self, code: &str) -> Result<Vec<RawCountry>, FetchError> {
            self.record(Call::ByCode(code.to_string()))?;
            Ok(self
                .countries
                .iter()
                .filter(|c| c.cca3 == code)
                .cloned()
                .collect())
        }

        async fn by_codes(&self, codes: &[String]) -> Result<Vec<RawCountry>, FetchError> {
            self.record(Call::ByCodes(codes.to_vec()))?;
            Ok(self
                .countries
                .iter()
                .filter(|c| codes.contains(&c.cca3))
                .cloned()
                .collect())
        }

        async fn flag_svg(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.record(Call::Flag(url.to_string()))?;
            Ok(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>".to_vec())
        }
    }
}
