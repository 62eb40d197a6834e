//! Flag images for the country cards.
//!
//! Each flag URL is downloaded at most once; the SVG bytes are kept as iced
//! handles for the lifetime of the app.

use std::collections::{HashMap, HashSet};

use iced::widget::svg;
use iced::Length;

#[derive(Default)]
pub struct FlagCache {
    handles: HashMap<String, svg::Handle>,
    requested: HashSet<String>,
}

impl FlagCache {
    pub fn get(&self, url: &str) -> Option<&svg::Handle> {
        self.handles.get(url)
    }

    /// Mark `urls` as requested and return the ones not asked for before.
    ///
    /// A failed download stays marked, so it is not retried.
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        urls.into_iter()
            .filter(|url| !url.is_empty())
            .filter(|url| self.requested.insert(url.to_string()))
            .map(str::to_string)
            .collect()
    }

    pub fn insert(&mut self, url: String, bytes: Vec<u8>) {
        self.handles.insert(url, svg::Handle::from_memory(bytes));
    }
}

/// Flag widget of a fixed size; an empty box until the image arrives.
pub fn flag_image<'a, Message: 'a>(
    flags: &FlagCache,
    url: &str,
    width: f32,
    height: f32,
) -> iced::Element<'a, Message> {
    match flags.get(url) {
        Some(handle) => svg(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into(),
        None => iced::widget::Space::new()
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into(),
    }
}
