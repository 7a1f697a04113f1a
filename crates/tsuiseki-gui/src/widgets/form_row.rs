use iced::widget::{row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::ColorScheme;

/// A consistent label:control row used in modals and settings.
///
/// Renders as: `[ label (fixed width) | control (fill) ]`.
pub fn form_row<'a, Message: 'a>(
    cs: &ColorScheme,
    label: &str,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    row![
        text(label.to_string())
            .size(style::INPUT_FONT_SIZE)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .width(Length::Fixed(style::INPUT_LABEL_WIDTH)),
        control,
    ]
    .align_y(Alignment::Center)
    .spacing(style::SPACE_SM)
    .into()
}
