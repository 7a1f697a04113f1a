use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length, Task};

use tsuiseki_api::DashboardClient;
use tsuiseki_core::format::relative_time_str;
use tsuiseki_core::models::NotificationLog;

use crate::app;
use crate::screen::{Action, ModalKind};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

/// Page size for the log fetch.
const LOG_LIMIT: u32 = 200;

/// Notification-history screen.
pub struct Logs {
    pub logs: Vec<NotificationLog>,
    pub total: Option<u64>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<(Vec<NotificationLog>, Option<u64>), String>),
    AskClear,
    ConfirmClear,
    ClearDone(Result<(), String>),
}

impl Logs {
    pub fn new() -> Self {
        Self {
            logs: Vec::new(),
            total: None,
            loading: false,
            error: None,
        }
    }

    pub fn update(&mut self, msg: Message, client: &DashboardClient) -> Action {
        match msg {
            Message::Refresh => self.load(client),
            Message::Loaded(Ok((logs, total))) => {
                self.loading = false;
                self.error = None;
                self.logs = logs;
                self.total = total;
                Action::None
            }
            Message::Loaded(Err(e)) => {
                self.loading = false;
                self.error = Some(e.clone());
                Action::ShowToast(format!("Logs load failed: {e}"), ToastKind::Error)
            }
            Message::AskClear => Action::ShowModal(ModalKind::ConfirmClearLogs),
            Message::ConfirmClear => {
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move {
                        client
                            .clear_notification_logs()
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Logs(Message::ClearDone(r)),
                ))
            }
            Message::ClearDone(Ok(())) => {
                self.logs.clear();
                self.total = Some(0);
                Action::ShowToast("Notification log cleared".into(), ToastKind::Success)
            }
            Message::ClearDone(Err(e)) => {
                Action::ShowToast(format!("Clear failed: {e}"), ToastKind::Error)
            }
        }
    }

    pub fn load(&mut self, client: &DashboardClient) -> Action {
        self.loading = true;
        let client = client.clone();
        Action::RunTask(Task::perform(
            async move {
                client
                    .notification_logs(LOG_LIMIT, 0)
                    .await
                    .map(|page| (page.logs, page.total))
                    .map_err(|e| e.to_string())
            },
            |r| app::Message::Logs(Message::Loaded(r)),
        ))
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let subtitle = match self.total {
            Some(total) => format!("{total} entries"),
            None => String::new(),
        };

        let header = row![
            text("Notification log")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(subtitle)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
            Space::new().width(Length::Fill),
            button(text("Refresh").size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::Refresh)
                .style(theme::ghost_button(cs)),
            button(text("Clear").size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::AskClear)
                .style(theme::danger_button(cs)),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

        let body: Element<'a, Message> = if let Some(e) = &self.error {
            column![
                text(format!("Could not load logs: {e}"))
                    .size(style::TEXT_SM)
                    .color(cs.error),
                button(text("Retry").size(style::TEXT_SM))
                    .padding([style::SPACE_XS, style::SPACE_XL])
                    .on_press(Message::Refresh)
                    .style(theme::ghost_button(cs)),
            ]
            .spacing(style::SPACE_MD)
            .into()
        } else if self.logs.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_clock()
                    .size(48)
                    .color(cs.outline)
                    .into(),
                "No notifications yet",
                "Delivery history appears here once notifications fire.",
            )
        } else {
            let mut list = column![].spacing(style::SPACE_XS);
            for log in &self.logs {
                list = list.push(log_row(cs, log));
            }
            widgets::styled_scrollable(container(list).width(Length::Fill), cs)
                .height(Length::Fill)
                .into()
        };

        container(column![header, body].spacing(style::SPACE_LG))
            .padding(style::SPACE_XL)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Badge color per log type.
fn type_color(cs: &ColorScheme, log_type: &str) -> Color {
    match log_type {
        "new" => cs.success,
        "replacement" => cs.warning,
        "test" => cs.primary,
        _ => cs.outline,
    }
}

fn log_row<'a>(cs: &ColorScheme, log: &'a NotificationLog) -> Element<'a, Message> {
    let color = type_color(cs, &log.log_type);

    let mut info = column![text(log.message.as_str())
        .size(style::TEXT_XS)
        .line_height(style::LINE_HEIGHT_NORMAL)]
    .spacing(style::SPACE_XXS);
    if let Some(torrent) = &log.torrent_name {
        info = info.push(
            text(torrent.as_str())
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .wrapping(iced::widget::text::Wrapping::None),
        );
    }

    container(
        row![
            container(text(log.log_type.as_str()).size(style::TEXT_XS).color(color))
                .padding([style::SPACE_XXS, style::SPACE_SM])
                .style(theme::tinted_badge(color))
                .width(Length::Fixed(100.0)),
            info.width(Length::Fill).clip(true),
            text(relative_time_str(&log.timestamp))
                .size(style::TEXT_XS)
                .color(cs.outline),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .style(theme::card(cs))
    .padding([style::SPACE_SM, style::SPACE_MD])
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_asks_for_confirmation_first() {
        let mut logs = Logs::new();
        let client = DashboardClient::new("http://localhost:5000/api").unwrap();

        let action = logs.update(Message::AskClear, &client);
        assert!(matches!(action, Action::ShowModal(ModalKind::ConfirmClearLogs)));
    }

    #[test]
    fn clear_done_empties_the_list() {
        let mut logs = Logs::new();
        let client = DashboardClient::new("http://localhost:5000/api").unwrap();
        logs.logs = vec![NotificationLog {
            id: 1,
            message: "Sent".into(),
            log_type: "new".into(),
            torrent_name: None,
            timestamp: "2024-03-15 10:00:00".into(),
        }];

        logs.update(Message::ClearDone(Ok(())), &client);
        assert!(logs.logs.is_empty());
        assert_eq!(logs.total, Some(0));
    }
}
