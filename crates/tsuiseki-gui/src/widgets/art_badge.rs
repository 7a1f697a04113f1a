use iced::widget::{center, container, image, text};
use iced::{Element, Length};

use tsuiseki_core::format::initials;

use crate::artwork::{ArtState, ArtworkCache};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Square artwork thumbnail, or an initials badge while the image is
/// missing or still loading.
pub fn art_badge<'a, Message: 'a>(
    cs: &ColorScheme,
    cache: &ArtworkCache,
    image_path: Option<&str>,
    show_name: &str,
    accent: Option<iced::Color>,
    size: f32,
) -> Element<'a, Message> {
    if let Some(path) = image_path {
        if let Some(ArtState::Loaded(local)) = cache.states.get(path) {
            return container(
                image(local.clone())
                    .content_fit(iced::ContentFit::Cover)
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size)),
            )
            .style(theme::initials_badge(cs, accent))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .clip(true)
            .into();
        }
    }

    container(center(
        text(initials(show_name))
            .size(size * 0.35)
            .font(style::FONT_HEADING),
    ))
    .style(theme::initials_badge(cs, accent))
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .into()
}
