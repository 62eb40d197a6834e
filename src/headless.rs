//! Command-line mode: run the loaders without a window and print the result

use std::process::ExitCode;

use clap::Subcommand;
use tracing::error;

use crate::api::{CountrySource, RestCountries};
use crate::config::Config;
use crate::country::{group_thousands, CountrySummary};
use crate::detail::{self, DetailPage};
use crate::error::FetchError;
use crate::listing;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print countries matching a search, most populous first
    List {
        /// Case-insensitive substring of the country name
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Print a country's details and its bordering countries
    Show {
        /// Country code, e.g. BRA or BR
        code: String,
    },
}

pub fn run(command: Command, config: &Config) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create tokio runtime");
            return ExitCode::FAILURE;
        }
    };
    let source = RestCountries::new(&config.api_base_url);

    let result = runtime.block_on(execute(&source, command, &config.translation));
    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn execute(
    source: &dyn CountrySource,
    command: Command,
    translation: &str,
) -> Result<String, FetchError> {
    match command {
        Command::List { search } => {
            let countries = listing::fetch_countries(source, translation).await?;
            Ok(format_listing(&listing::visible_countries(&countries, &search)))
        }
        Command::Show { code } => {
            let page = detail::load(source, &code, translation).await?;
            Ok(format_detail(&page))
        }
    }
}

fn format_listing(countries: &[&CountrySummary]) -> String {
    let width = countries
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);
    countries
        .iter()
        .map(|c| {
            format!(
                "{:<width$}  {}  {:>13}\n",
                c.name,
                c.code,
                group_thousands(c.population),
            )
        })
        .collect()
}

fn format_detail(page: &DetailPage) -> String {
    let d = &page.detail;
    let mut out = format!(
        "{}\n  Capital:    {}\n  Continent:  {}\n  Population: {}\n  Languages:  {}\n  Flag:       {}\n",
        d.name, d.capital, d.continent, d.population, d.languages, d.flag_url
    );
    out.push_str("Bordering countries:\n");
    if page.borders.is_empty() {
        out.push_str("  none\n");
    }
    for border in &page.borders {
        out.push_str(&format!("  {}  {}\n", border.code, border.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{raw, Call, FakeSource};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn list_filters_and_orders() {
        let source = FakeSource::new(vec![
            raw("PRT", "Portugal", 10_305_564, &["ESP"]),
            raw("BRA", "Brazil", 212_559_409, &[]),
            raw("ESP", "Spain", 47_351_567, &["PRT"]),
        ]);

        let output = execute(&source, Command::List { search: "R".into() }, "por")
            .await
            .unwrap();

        assert_eq!(
            output,
            "Brazil (pt)    BRA    212,559,409\nPortugal (pt)  PRT     10,305,564\n"
        );
    }

    #[tokio::test]
    async fn show_prints_detail_and_borders() {
        let source = FakeSource::new(vec![
            raw("PRT", "Portugal", 10_305_564, &["ESP"]),
            raw("ESP", "Spain", 47_351_567, &["PRT"]),
        ]);

        let output = execute(&source, Command::Show { code: "PRT".into() }, "por")
            .await
            .unwrap();

        assert_eq!(
            output,
            "Portugal (pt)\n  Capital:    Portugal City\n  Continent:  Testland\n  \
             Population: 10,305,564\n  Languages:  English\n  \
             Flag:       https://flagcdn.com/prt.svg\nBordering countries:\n  ESP  Spain (pt)\n"
        );
        assert_eq!(
            source.calls(),
            vec![Call::ByCode("PRT".into()), Call::ByCodes(vec!["ESP".into()])]
        );
    }

    #[tokio::test]
    async fn show_without_borders_says_none() {
        let source = FakeSource::new(vec![raw("ISL", "Iceland", 366_425, &[])]);

        let output = execute(&source, Command::Show { code: "ISL".into() }, "por")
            .await
            .unwrap();

        assert!(output.ends_with("Bordering countries:\n  none\n"));
    }

    #[tokio::test]
    async fn failures_propagate() {
        let source = FakeSource::failing();
        let result = execute(&source, Command::List { search: String::new() }, "por").await;
        assert!(result.is_err());
    }
}
