//! UI rendering logic

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use crate::country::{BorderCountry, CountryDetail, CountrySummary};
use crate::flags::{flag_image, FlagCache};
use crate::listing;
use crate::model::{App, Borders, DetailState, Message};
use crate::styles::{
    card_button_style, header_style, page_style, transparent_button_style, MUTED, TEXT,
};

/// Cards per grid row.
const GRID_COLUMNS: usize = 5;
const CARD_HEIGHT: f32 = 132.0;
const CARD_FLAG: (f32, f32) = (96.0, 64.0);

/// Helper to create text in the page's foreground color.
fn light_text<'a>(content: impl text::IntoFragment<'a>, size: u32) -> text::Text<'a> {
    text(content)
        .size(size)
        .style(|_theme| iced::widget::text::Style { color: Some(TEXT) })
}

fn muted_text<'a>(content: impl text::IntoFragment<'a>, size: u32) -> text::Text<'a> {
    text(content)
        .size(size)
        .style(|_theme| iced::widget::text::Style { color: Some(MUTED) })
}

fn loading<'a>() -> Element<'a, Message> {
    container(muted_text("Loading...", 16))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([80.0, 0.0])
        .into()
}

/// Header bar shared by both screens.
fn header<'a>() -> Element<'a, Message> {
    container(
        row![light_text("🌍", 22), light_text("Countries of the World", 20)]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([16.0, 32.0])
    .style(header_style)
    .into()
}

/// Lay out cards `GRID_COLUMNS` per row, padding the last row with blanks
/// so every card keeps the same width.
fn grid<'a>(cards: Vec<Element<'a, Message>>) -> Column<'a, Message> {
    let mut rows = column![].spacing(16);
    let mut current = row![].spacing(16);
    let mut count = 0;

    for card in cards {
        current = current.push(container(card).width(Length::Fill));
        count += 1;
        if count == GRID_COLUMNS {
            rows = rows.push(current);
            current = row![].spacing(16);
            count = 0;
        }
    }

    if count > 0 {
        while count < GRID_COLUMNS {
            current = current.push(Space::new().width(Length::Fill).height(Length::Fixed(1.0)));
            count += 1;
        }
        rows = rows.push(current);
    }

    rows
}

fn country_card<'a>(flags: &FlagCache, country: &'a CountrySummary) -> Element<'a, Message> {
    button(
        column![
            flag_image(flags, &country.flag_url, CARD_FLAG.0, CARD_FLAG.1),
            light_text(&country.name, 15),
            muted_text(crate::country::group_thousands(country.population), 12),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(CARD_HEIGHT))
    .padding([10.0, 8.0])
    .style(card_button_style)
    .on_press(Message::CountrySelected(country.code.clone()))
    .into()
}

fn border_card<'a>(flags: &FlagCache, border: &'a BorderCountry) -> Element<'a, Message> {
    button(
        column![
            flag_image(flags, &border.flag_url, CARD_FLAG.0, CARD_FLAG.1),
            light_text(&border.name, 15),
            muted_text(&border.code, 12),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(CARD_HEIGHT))
    .padding([10.0, 8.0])
    .style(card_button_style)
    .on_press(Message::CountrySelected(border.code.clone()))
    .into()
}

/// Listing screen: search box and the filtered, population-ordered grid.
pub fn listing_view(app: &App) -> Element<'_, Message> {
    let search = text_input("Search country...", &app.search)
        .on_input(Message::SearchChanged)
        .padding(8.0)
        .size(15.0)
        .width(Length::Fixed(320.0));

    let body: Element<'_, Message> = match &app.countries {
        Some(countries) => {
            let visible = listing::visible_countries(countries, &app.search);
            if visible.is_empty() {
                container(muted_text("No country matches the search", 15))
                    .padding([40.0, 0.0])
                    .into()
            } else {
                let cards = visible
                    .into_iter()
                    .map(|country| country_card(&app.flags, country))
                    .collect();
                grid(cards).into()
            }
        }
        None => loading(),
    };

    container(
        column![
            header(),
            scrollable(
                column![search, body]
                    .spacing(32)
                    .padding([32.0, 48.0])
                    .width(Length::Fill),
            )
            .height(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(page_style)
    .into()
}

fn field<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    row![
        container(light_text(label, 17)).width(Length::Fixed(150.0)),
        light_text(value, 17),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn detail_body<'a>(flags: &FlagCache, detail: &'a CountryDetail) -> Element<'a, Message> {
    let facts = column![
        field("🏙️ Capital", &detail.capital),
        field("🗺️ Continent", &detail.continent),
        field("👥 Population", &detail.population),
        field("🗣️ Languages", &detail.languages),
    ]
    .spacing(10);

    let open_flag = button(light_text("Open flag ↗", 15))
        .style(transparent_button_style)
        .padding([4.0, 0.0])
        .on_press(Message::OpenFlag(detail.flag_url.clone()));

    column![
        container(light_text(&detail.name, 34)).center_x(Length::Fill),
        row![
            facts,
            Space::new().width(Length::Fill),
            flag_image(flags, &detail.flag_url, 240.0, 160.0),
        ]
        .align_y(Alignment::Center),
        open_flag,
    ]
    .spacing(28)
    .into()
}

fn borders_section<'a>(flags: &FlagCache, borders: &'a Borders) -> Element<'a, Message> {
    let content: Element<'_, Message> = match borders {
        Borders::Pending => muted_text("Loading...", 15).into(),
        Borders::Loaded(borders) if borders.is_empty() => {
            muted_text("No bordering countries", 15).into()
        }
        Borders::Loaded(borders) => {
            let cards = borders
                .iter()
                .map(|border| border_card(flags, border))
                .collect();
            grid(cards).into()
        }
    };

    column![light_text("Bordering countries", 22), content]
        .spacing(20)
        .into()
}

/// Detail screen for one country and its neighbors.
pub fn detail_view<'a>(state: &'a DetailState, flags: &FlagCache) -> Element<'a, Message> {
    let back = button(light_text("← Back", 15))
        .style(transparent_button_style)
        .padding([4.0, 0.0])
        .on_press(Message::Back);

    let body: Element<'_, Message> = match &state.detail {
        Some(detail) => column![
            detail_body(flags, detail),
            borders_section(flags, &state.borders),
        ]
        .spacing(48)
        .into(),
        None => loading(),
    };

    container(
        column![
            header(),
            scrollable(
                column![back, body]
                    .spacing(24)
                    .padding([32.0, 48.0])
                    .width(Length::Fill),
            )
            .height(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(page_style)
    .into()
}
