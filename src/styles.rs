//! Widget styles (zinc dark palette)

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

pub const TEXT: Color = Color::from_rgb(0.894, 0.894, 0.906);
pub const MUTED: Color = Color::from_rgb(0.631, 0.631, 0.667);

const ZINC_600: Color = Color::from_rgb(0.322, 0.322, 0.357);
const ZINC_700: Color = Color::from_rgb(0.247, 0.247, 0.275);
const ZINC_800: Color = Color::from_rgb(0.153, 0.153, 0.165);

pub fn page_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ZINC_800)),
        text_color: Some(TEXT),
        ..Default::default()
    }
}

pub fn header_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ZINC_700)),
        text_color: Some(TEXT),
        border: Border {
            color: ZINC_600,
            width: 2.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Country card in the listing and border grids; lifts on hover.
pub fn card_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ZINC_600,
        button::Status::Active | button::Status::Disabled => ZINC_700,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT,
        border: Border {
            color: ZINC_600,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn transparent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::WHITE,
        button::Status::Active | button::Status::Disabled => TEXT,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
