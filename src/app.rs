//! Iced application adapter (thin UI layer)

use std::sync::Arc;

use iced::{Element, Task};
use tracing::info;

use crate::api::{CountrySource, RestCountries};
use crate::config::Config;
use crate::model::{App, Message, Screen};
use crate::update;
use crate::view;

pub fn new(config: &Config) -> (App, Task<Message>) {
    let source: Arc<dyn CountrySource> = Arc::new(RestCountries::new(&config.api_base_url));
    let app = App::new(source.clone(), config.translation.clone());

    info!(
        api = %config.api_base_url,
        translation = %config.translation,
        "App created, fetching listing"
    );

    let load = update::load_countries(source, config.translation.clone());
    (app, load)
}

pub fn title(app: &App) -> String {
    match &app.screen {
        Screen::Detail(state) => match &state.detail {
            Some(detail) => format!("{} - Countries of the World", detail.name),
            None => String::from("Countries of the World"),
        },
        Screen::Listing => String::from("Countries of the World"),
    }
}

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    update::update(app, message)
}

pub fn view(app: &App) -> Element<'_, Message> {
    match &app.screen {
        Screen::Listing => view::listing_view(app),
        Screen::Detail(state) => view::detail_view(state, &app.flags),
    }
}
