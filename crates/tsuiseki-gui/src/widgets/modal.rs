//! Modal overlay: content centered over a semi-transparent backdrop.
//!
//! Clicking the backdrop publishes `on_blur`.

use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

/// Backdrop color shared by all modals.
const MODAL_BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.65,
};

/// Wrap `base` with a modal overlay showing `content` over a backdrop.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        center(opaque(content)).style(|_theme| container::Style {
            background: Some(MODAL_BACKDROP.into()),
            ..Default::default()
        }),
    )
    .on_press(on_blur);

    stack![base.into(), opaque(backdrop)].into()
}
