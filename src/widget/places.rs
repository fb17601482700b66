//! Titled place-list widget

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, container, icon, text};

use crate::catalog::Place;

/// Build a titled list of places.
///
/// Shows `fallback` when `places` is empty; otherwise each place becomes a
/// press-able row emitting `on_press(place id)`.
pub fn places_list<'a, Msg: Clone + 'static>(
    title: String,
    fallback: String,
    places: &'a [Place],
    on_press: fn(String) -> Msg,
) -> Element<'a, Msg> {
    let mut content = column![text::title3(title)].spacing(8);

    if places.is_empty() {
        content = content.push(text::body(fallback));
    } else {
        for place in places {
            let item = row![
                icon::Icon::from(icon::from_name("mark-location-symbolic").size(16)),
                text::body(&place.name),
            ]
            .spacing(8)
            .align_y(Alignment::Center);

            content = content.push(
                button::custom(item)
                    .class(cosmic::theme::Button::Text)
                    .on_press(on_press(place.id.clone()))
                    .width(Length::Fill),
            );
        }
    }

    container(content).width(Length::Fill).into()
}
