use std::time::Duration;

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// Kind of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Default auto-dismiss delay in seconds.
pub const DEFAULT_DISMISS_SECS: i64 = 5;

/// The stack of active toasts, newest last.
///
/// Pushing returns the delay after which the caller should schedule an
/// auto-dismiss, or `None` when the toast is persistent. The id counter
/// never resets, so a timer firing for an already-dismissed toast is a
/// no-op in `dismiss`.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Add a toast. A non-positive `duration_secs` makes it persistent
    /// until manually dismissed.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration_secs: i64,
    ) -> (u64, Option<Duration>) {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });

        let delay = if duration_secs > 0 {
            Some(Duration::from_secs(duration_secs as u64))
        } else {
            None
        };
        (id, delay)
    }

    /// Remove the toast with the given id, if still present.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Render the toast overlay — a column of toasts anchored top-right.
pub fn toast_overlay<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    toasts: &'a [Toast],
    on_dismiss: impl Fn(u64) -> Message + 'a,
) -> Element<'a, Message> {
    if toasts.is_empty() {
        return iced::widget::Space::new().width(0).height(0).into();
    }

    let mut toast_column = column![]
        .spacing(style::SPACE_SM)
        .width(Length::Fixed(style::TOAST_WIDTH));

    for toast in toasts {
        let (icon, accent) = match toast.kind {
            ToastKind::Success => (lucide_icons::iced::icon_circle_check(), cs.success),
            ToastKind::Error => (lucide_icons::iced::icon_circle_x(), cs.error),
            ToastKind::Info => (lucide_icons::iced::icon_info(), cs.primary),
        };

        let dismiss_msg = on_dismiss(toast.id);

        let toast_card = container(
            row![
                icon.size(style::TEXT_LG).color(accent),
                text(toast.message.as_str())
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL)
                    .width(Length::Fill),
                button(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .on_press(dismiss_msg)
                .padding(style::SPACE_XXS)
                .style(theme::icon_button(cs)),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
        )
        .style(theme::card(cs))
        .padding([style::SPACE_SM, style::SPACE_MD])
        .width(Length::Fill);

        toast_column = toast_column.push(toast_card);
    }

    container(toast_column)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .padding([style::SPACE_MD, style::SPACE_XL])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_stack_in_push_order() {
        let mut toasts = Toasts::default();
        toasts.push("first", ToastKind::Info, 5);
        toasts.push("second", ToastKind::Error, 5);

        let messages: Vec<&str> = toasts.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn push_returns_delay_for_positive_duration() {
        let mut toasts = Toasts::default();
        let (_, delay) = toasts.push("saved", ToastKind::Success, 5);
        assert_eq!(delay, Some(Duration::from_secs(5)));
    }

    #[test]
    fn non_positive_duration_is_persistent() {
        let mut toasts = Toasts::default();
        let (_, delay) = toasts.push("stays", ToastKind::Error, 0);
        assert_eq!(delay, None);
        let (_, delay) = toasts.push("also stays", ToastKind::Error, -1);
        assert_eq!(delay, None);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut toasts = Toasts::default();
        let (first, _) = toasts.push("first", ToastKind::Info, 5);
        let (second, _) = toasts.push("second", ToastKind::Info, 5);

        toasts.dismiss(first);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].id, second);

        // A stale timer for the removed toast is harmless.
        toasts.dismiss(first);
        assert_eq!(toasts.items().len(), 1);
    }

    #[test]
    fn ids_are_unique_across_dismissals() {
        let mut toasts = Toasts::default();
        let (a, _) = toasts.push("a", ToastKind::Info, 5);
        toasts.dismiss(a);
        let (b, _) = toasts.push("b", ToastKind::Info, 5);
        assert_ne!(a, b);
    }
}
