//! Two-stage loader for the detail screen
//!
//! Stage one fetches the country itself. Stage two fetches every bordering
//! country in one batched request, and only runs when stage one declared
//! at least one border.

use tracing::{debug, info};

use crate::api::CountrySource;
use crate::country::{BorderCountry, CountryDetail};
use crate::error::FetchError;

/// A country together with its resolved neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    pub detail: CountryDetail,
    pub borders: Vec<BorderCountry>,
}

/// Stage one: fetch and normalize a single country.
pub async fn fetch_detail(
    source: &dyn CountrySource,
    code: &str,
    translation: &str,
) -> Result<CountryDetail, FetchError> {
    let countries = source.by_code(code).await?;
    let raw = countries
        .first()
        .ok_or_else(|| FetchError::NotFound(code.to_string()))?;
    let detail = CountryDetail::from_raw(raw, translation);
    info!(code, name = %detail.name, borders = detail.borders.len(), "Country detail loaded");
    Ok(detail)
}

/// Border codes stage two has to fetch, or `None` when there is nothing to ask for.
pub fn border_request(detail: &CountryDetail) -> Option<&[String]> {
    if detail.borders.is_empty() {
        None
    } else {
        Some(&detail.borders)
    }
}

/// Stage two: fetch and normalize all bordering countries in one request.
pub async fn fetch_borders(
    source: &dyn CountrySource,
    codes: &[String],
    translation: &str,
) -> Result<Vec<BorderCountry>, FetchError> {
    let countries = source.by_codes(codes).await?;
    let borders: Vec<BorderCountry> = countries
        .iter()
        .map(|raw| BorderCountry::from_raw(raw, translation))
        .collect();
    debug!(requested = codes.len(), received = borders.len(), "Border countries loaded");
    Ok(borders)
}

/// Run both stages, skipping the second when there are no borders.
pub async fn load(
    source: &dyn CountrySource,
    code: &str,
    translation: &str,
) -> Result<DetailPage, FetchError> {
    let detail = fetch_detail(source, code, translation).await?;
    let borders = match border_request(&detail) {
        Some(codes) => fetch_borders(source, codes, translation).await?,
        None => {
            debug!(code, "No declared borders, skipping border request");
            Vec::new()
        }
    };
    Ok(DetailPage { detail, borders })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{raw, Call, FakeSource};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn island_never_requests_borders() {
        let source = FakeSource::new(vec![raw("ISL", "Iceland", 366_425, &[])]);

        let page = load(&source, "ISL", "por").await.unwrap();

        assert!(page.borders.is_empty());
        assert_eq!(source.calls(), vec![Call::ByCode("ISL".into())]);
    }

    #[tokio::test]
    async fn single_border_is_one_batched_request() {
        let source = FakeSource::new(vec![
            raw("AAA", "Alpha", 10, &["XYZ"]),
            raw("XYZ", "Xyzzy", 20, &["AAA"]),
        ]);

        let page = load(&source, "AAA", "por").await.unwrap();

        assert_eq!(
            source.calls(),
            vec![
                Call::ByCode("AAA".into()),
                Call::ByCodes(vec!["XYZ".into()]),
            ]
        );
        assert_eq!(
            page.borders,
            vec![BorderCountry {
                name: "Xyzzy (pt)".into(),
                flag_url: "https://flagcdn.com/xyz.svg".into(),
                code: "XYZ".into(),
            }]
        );
    }

    #[tokio::test]
    async fn all_borders_go_in_the_same_request() {
        let source = FakeSource::new(vec![
            raw("PRY", "Paraguay", 7_132_530, &["ARG", "BOL", "BRA"]),
            raw("ARG", "Argentina", 45_376_763, &[]),
            raw("BOL", "Bolivia", 11_673_029, &[]),
            raw("BRA", "Brazil", 212_559_409, &[]),
        ]);

        let page = load(&source, "PRY", "por").await.unwrap();

        assert_eq!(page.detail.population, "7,132,530");
        assert_eq!(page.borders.len(), 3);
        assert_eq!(
            source.calls()[1],
            Call::ByCodes(vec!["ARG".into(), "BOL".into(), "BRA".into()])
        );
    }

    #[tokio::test]
    async fn empty_result_is_not_found() {
        let source = FakeSource::new(Vec::new());

        let err = load(&source, "XXX", "por").await.unwrap_err();

        assert_eq!(err, FetchError::NotFound("XXX".into()));
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn failed_first_stage_skips_second() {
        let source = FakeSource::failing();

        let err = load(&source, "BRA", "por").await.unwrap_err();

        assert!(matches!(err, FetchError::Request { .. }));
        assert_eq!(source.calls(), vec![Call::ByCode("BRA".into())]);
    }

    #[test]
    fn gate_follows_declared_borders() {
        let mut detail = CountryDetail::from_raw(&raw("AAA", "Alpha", 1, &[]), "por");
        assert_eq!(border_request(&detail), None);

        detail.borders = vec!["XYZ".into()];
        assert_eq!(border_request(&detail), Some(&["XYZ".to_string()][..]));
    }
}
