//! Business logic for state transitions

use std::sync::Arc;

use iced::Task;
use tracing::{debug, error, info, warn};

use crate::api::CountrySource;
use crate::detail;
use crate::listing;
use crate::model::{App, Borders, DetailState, Message, Screen};

/// Request the full listing.
pub fn load_countries(source: Arc<dyn CountrySource>, translation: String) -> Task<Message> {
    Task::perform(
        async move { listing::fetch_countries(source.as_ref(), &translation).await },
        Message::CountriesLoaded,
    )
}

fn load_detail(
    source: Arc<dyn CountrySource>,
    request: u64,
    code: String,
    translation: String,
) -> Task<Message> {
    Task::perform(
        async move {
            let result = detail::fetch_detail(source.as_ref(), &code, &translation).await;
            (code, result)
        },
        move |(code, result)| Message::DetailLoaded {
            request,
            code,
            result,
        },
    )
}

fn load_borders(
    source: Arc<dyn CountrySource>,
    request: u64,
    code: String,
    borders: Vec<String>,
    translation: String,
) -> Task<Message> {
    Task::perform(
        async move {
            let result = detail::fetch_borders(source.as_ref(), &borders, &translation).await;
            (code, result)
        },
        move |(code, result)| Message::BordersLoaded {
            request,
            code,
            result,
        },
    )
}

/// One download per flag URL; independent of the country requests.
fn load_flags(source: &Arc<dyn CountrySource>, urls: Vec<String>) -> Task<Message> {
    Task::batch(urls.into_iter().map(|url| {
        let source = source.clone();
        Task::perform(
            async move {
                let result = source.flag_svg(&url).await;
                (url, result)
            },
            |(url, result)| Message::FlagLoaded { url, result },
        )
    }))
}

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::CountriesLoaded(Ok(countries)) => {
            info!(count = countries.len(), "Listing ready");
            let urls = app
                .flags
                .request(countries.iter().map(|c| c.flag_url.as_str()));
            app.countries = Some(countries);
            load_flags(&app.source, urls)
        }
        Message::CountriesLoaded(Err(e)) => {
            error!(error = %e, "Failed to fetch countries");
            Task::none()
        }
        Message::SearchChanged(query) => {
            app.search = query;
            Task::none()
        }
        Message::CountrySelected(code) => {
            let request = app.next_request;
            app.next_request += 1;
            debug!(%code, request, "Opening country detail");
            app.screen = Screen::Detail(DetailState::loading(request, code.clone()));
            load_detail(app.source.clone(), request, code, app.translation.clone())
        }
        Message::DetailLoaded {
            request,
            code,
            result,
        } => {
            let state = match app.screen.detail_mut(request) {
                Some(state) if state.detail.is_none() => state,
                _ => {
                    debug!(%code, request, "Discarding stale detail response");
                    return Task::none();
                }
            };
            match result {
                Ok(country) => {
                    // Second stage only when the country declares neighbors.
                    let borders = match detail::border_request(&country) {
                        Some(borders) => load_borders(
                            app.source.clone(),
                            request,
                            code,
                            borders.to_vec(),
                            app.translation.clone(),
                        ),
                        None => {
                            state.borders = Borders::Loaded(Vec::new());
                            Task::none()
                        }
                    };
                    let urls = app.flags.request([country.flag_url.as_str()]);
                    state.detail = Some(country);
                    Task::batch([borders, load_flags(&app.source, urls)])
                }
                Err(e) => {
                    error!(%code, error = %e, "Failed to fetch country");
                    Task::none()
                }
            }
        }
        Message::BordersLoaded {
            request,
            code,
            result,
        } => {
            let Some(state) = app.screen.detail_mut(request) else {
                debug!(%code, request, "Discarding stale border response");
                return Task::none();
            };
            match result {
                Ok(borders) => {
                    let urls = app
                        .flags
                        .request(borders.iter().map(|b| b.flag_url.as_str()));
                    state.borders = Borders::Loaded(borders);
                    load_flags(&app.source, urls)
                }
                Err(e) => {
                    error!(%code, error = %e, "Failed to fetch border countries");
                    Task::none()
                }
            }
        }
        Message::FlagLoaded { url, result } => {
            match result {
                Ok(bytes) => app.flags.insert(url, bytes),
                Err(e) => warn!(%url, error = %e, "Failed to fetch flag"),
            }
            Task::none()
        }
        Message::Back => {
            app.screen = Screen::Listing;
            Task::none()
        }
        Message::OpenFlag(url) => {
            if let Err(e) = open::that_detached(&url) {
                warn!(%url, error = %e, "Failed to open flag in browser");
            }
            Task::none()
        }
    }
}
