//! Domain model for the application state

use std::sync::Arc;

use crate::api::CountrySource;
use crate::country::{BorderCountry, CountryDetail, CountrySummary};
use crate::error::FetchError;
use crate::flags::FlagCache;

#[derive(Debug, Clone)]
pub enum Message {
    CountriesLoaded(Result<Vec<CountrySummary>, FetchError>),
    SearchChanged(String),
    CountrySelected(String),
    /// Stage one of the detail screen opened as navigation `request`.
    DetailLoaded {
        request: u64,
        code: String,
        result: Result<CountryDetail, FetchError>,
    },
    BordersLoaded {
        request: u64,
        code: String,
        result: Result<Vec<BorderCountry>, FetchError>,
    },
    FlagLoaded {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
    Back,
    OpenFlag(String),
}

/// Bordering countries of the country on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Borders {
    /// Waiting for the detail, or for the batched border request.
    Pending,
    Loaded(Vec<BorderCountry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    /// Navigation this screen belongs to; responses carrying another id are stale.
    pub request: u64,
    pub code: String,
    /// `None` until the first stage resolves; stays `None` if it fails.
    pub detail: Option<CountryDetail>,
    pub borders: Borders,
}

impl DetailState {
    pub fn loading(request: u64, code: String) -> Self {
        Self {
            request,
            code,
            detail: None,
            borders: Borders::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Listing,
    Detail(DetailState),
}

impl Screen {
    /// The detail state opened by navigation `request`, if still on screen.
    pub fn detail_mut(&mut self, request: u64) -> Option<&mut DetailState> {
        match self {
            Screen::Detail(state) if state.request == request => Some(state),
            _ => None,
        }
    }
}

/// Application state.
pub struct App {
    pub screen: Screen,
    /// `None` while the listing request is outstanding (or failed).
    pub countries: Option<Vec<CountrySummary>>,
    pub search: String,
    pub flags: FlagCache,
    pub source: Arc<dyn CountrySource>,
    pub translation: String,
    /// Id handed to the next detail navigation.
    pub next_request: u64,
}

impl App {
    pub fn new(source: Arc<dyn CountrySource>, translation: String) -> Self {
        Self {
            screen: Screen::Listing,
            countries: None,
            search: String::new(),
            flags: FlagCache::default(),
            source,
            translation,
            next_request: 0,
        }
    }
}
