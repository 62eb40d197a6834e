//! Search filter and ordering for the listing grid

use tracing::info;

use crate::api::CountrySource;
use crate::country::CountrySummary;
use crate::error::FetchError;

/// Fetch every country once and normalize it for the grid.
pub async fn fetch_countries(
    source: &dyn CountrySource,
    translation: &str,
) -> Result<Vec<CountrySummary>, FetchError> {
    let countries: Vec<CountrySummary> = source
        .all()
        .await?
        .iter()
        .map(|raw| CountrySummary::from_raw(raw, translation))
        .collect();
    info!(count = countries.len(), "Country listing loaded");
    Ok(countries)
}

/// Case-insensitive substring match of `query` against `name`.
pub fn matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Countries matching `query`, most populous first.
///
/// The sort is stable, so countries with equal population keep API order.
pub fn visible_countries<'a>(
    countries: &'a [CountrySummary],
    query: &str,
) -> Vec<&'a CountrySummary> {
    let mut visible: Vec<&CountrySummary> = countries
        .iter()
        .filter(|country| matches(&country.name, query))
        .collect();
    visible.sort_by(|a, b| b.population.cmp(&a.population));
    visible
}
