use iced::widget::{button, column, container, row, text, text_input, toggler};
use iced::{Alignment, Element, Length, Task};

use tsuiseki_api::DashboardClient;
use tsuiseki_core::models::{NotificationSettings, ReplacementSettings, ServerSettings};

use crate::app;
use crate::screen::{Action, ModalKind};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

/// Settings screen: general server settings, replacement policy, and
/// notification delivery, each saved independently.
pub struct Settings {
    // General
    pub download_directory: String,
    pub transmission_host: String,
    pub transmission_port: String,
    pub suggestions: Vec<String>,
    pub selected_suggestion: Option<usize>,
    // Replacement policy
    pub replacement_enabled: bool,
    pub grace_input: String,
    // Notifications
    pub notifications_enabled: bool,
    pub service_url: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    GeneralLoaded(Result<ServerSettings, String>),
    ReplacementLoaded(Result<ReplacementSettings, String>),
    NotificationsLoaded(Result<NotificationSettings, String>),
    // General
    DirectoryChanged(String),
    SuggestionsLoaded(Result<Vec<String>, String>),
    SuggestionPicked(usize),
    HostChanged(String),
    PortChanged(String),
    SaveGeneral,
    GeneralSaved(Result<(), String>),
    // Replacement policy
    ReplacementToggled(bool),
    GraceChanged(String),
    SaveReplacement,
    ReplacementSaved(Result<(), String>),
    // Notifications
    NotificationsToggled(bool),
    ServiceUrlChanged(String),
    SaveNotifications,
    NotificationsSaved(Result<(), String>),
    SendTest,
    TestSent(Result<(), String>),
    // Artwork maintenance
    AskCleanup,
    ConfirmCleanup,
    CleanupDone(Result<u64, String>),
}

impl Settings {
    pub fn new() -> Self {
        Self {
            download_directory: String::new(),
            transmission_host: String::new(),
            transmission_port: String::new(),
            suggestions: Vec::new(),
            selected_suggestion: None,
            replacement_enabled: false,
            grace_input: String::new(),
            notifications_enabled: false,
            service_url: String::new(),
            error: None,
        }
    }

    pub fn update(&mut self, msg: Message, client: &DashboardClient) -> Action {
        match msg {
            Message::Refresh => self.load(client),
            Message::GeneralLoaded(Ok(settings)) => {
                self.error = None;
                self.download_directory = settings.download_directory.unwrap_or_default();
                self.transmission_host = settings.transmission_host.unwrap_or_default();
                self.transmission_port = settings.transmission_port.unwrap_or_default();
                Action::None
            }
            Message::GeneralLoaded(Err(e)) => {
                self.error = Some(e.clone());
                Action::ShowToast(format!("Settings load failed: {e}"), ToastKind::Error)
            }
            Message::ReplacementLoaded(Ok(settings)) => {
                self.replacement_enabled = settings.enabled.unwrap_or(false);
                self.grace_input = settings
                    .grace_period_hours
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                Action::None
            }
            Message::ReplacementLoaded(Err(e)) => Action::ShowToast(
                format!("Replacement settings load failed: {e}"),
                ToastKind::Error,
            ),
            Message::NotificationsLoaded(Ok(settings)) => {
                self.notifications_enabled = settings.enabled.unwrap_or(false);
                self.service_url = settings.service_url.unwrap_or_default();
                Action::None
            }
            Message::NotificationsLoaded(Err(e)) => Action::ShowToast(
                format!("Notification settings load failed: {e}"),
                ToastKind::Error,
            ),
            // ── General ──────────────────────────────────────────
            Message::DirectoryChanged(value) => {
                self.download_directory = value;
                self.selected_suggestion = None;
                let client = client.clone();
                let path = self.download_directory.clone();
                Action::RunTask(Task::perform(
                    async move {
                        client
                            .path_suggestions(&path)
                            .await
                            .map(|r| r.suggestions)
                            .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Settings(Message::SuggestionsLoaded(r)),
                ))
            }
            Message::SuggestionsLoaded(Ok(suggestions)) => {
                self.suggestions = suggestions;
                self.selected_suggestion = None;
                Action::None
            }
            // Autocomplete is advisory; a failed lookup is not worth a toast.
            Message::SuggestionsLoaded(Err(_)) => {
                self.suggestions.clear();
                Action::None
            }
            Message::SuggestionPicked(index) => {
                if let Some(path) = self.suggestions.get(index) {
                    self.download_directory = path.clone();
                    self.selected_suggestion = Some(index);
                    self.suggestions.clear();
                }
                Action::None
            }
            Message::HostChanged(value) => {
                self.transmission_host = value;
                Action::None
            }
            Message::PortChanged(value) => {
                self.transmission_port = value;
                Action::None
            }
            Message::SaveGeneral => {
                let settings = ServerSettings {
                    download_directory: Some(self.download_directory.trim().to_string()),
                    transmission_host: Some(self.transmission_host.trim().to_string()),
                    transmission_port: Some(self.transmission_port.trim().to_string()),
                    setup_complete: Some("1".into()),
                };
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move { client.save_settings(&settings).await.map_err(|e| e.to_string()) },
                    |r| app::Message::Settings(Message::GeneralSaved(r)),
                ))
            }
            Message::GeneralSaved(Ok(())) => {
                Action::ShowToast("Settings saved".into(), ToastKind::Success)
            }
            Message::GeneralSaved(Err(e)) => {
                Action::ShowToast(format!("Save failed: {e}"), ToastKind::Error)
            }
            // ── Replacement policy ───────────────────────────────
            Message::ReplacementToggled(enabled) => {
                self.replacement_enabled = enabled;
                Action::None
            }
            Message::GraceChanged(value) => {
                self.grace_input = value;
                Action::None
            }
            Message::SaveReplacement => {
                let settings = ReplacementSettings {
                    enabled: Some(self.replacement_enabled),
                    grace_period_hours: self.grace_input.trim().parse().ok(),
                };
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move {
                        client
                            .save_replacement_settings(&settings)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Settings(Message::ReplacementSaved(r)),
                ))
            }
            Message::ReplacementSaved(Ok(())) => {
                Action::ShowToast("Replacement policy saved".into(), ToastKind::Success)
            }
            Message::ReplacementSaved(Err(e)) => {
                Action::ShowToast(format!("Save failed: {e}"), ToastKind::Error)
            }
            // ── Notifications ────────────────────────────────────
            Message::NotificationsToggled(enabled) => {
                self.notifications_enabled = enabled;
                Action::None
            }
            Message::ServiceUrlChanged(value) => {
                self.service_url = value;
                Action::None
            }
            Message::SaveNotifications => {
                let settings = NotificationSettings {
                    enabled: Some(self.notifications_enabled),
                    service_url: Some(self.service_url.trim().to_string()),
                };
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move {
                        client
                            .save_notification_settings(&settings)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Settings(Message::NotificationsSaved(r)),
                ))
            }
            Message::NotificationsSaved(Ok(())) => {
                Action::ShowToast("Notification settings saved".into(), ToastKind::Success)
            }
            Message::NotificationsSaved(Err(e)) => {
                Action::ShowToast(format!("Save failed: {e}"), ToastKind::Error)
            }
            Message::SendTest => {
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move {
                        client
                            .send_test_notification()
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Settings(Message::TestSent(r)),
                ))
            }
            Message::TestSent(Ok(())) => {
                Action::ShowToast("Test notification sent".into(), ToastKind::Success)
            }
            Message::TestSent(Err(e)) => {
                Action::ShowToast(format!("Test notification failed: {e}"), ToastKind::Error)
            }
            // ── Artwork maintenance ──────────────────────────────
            Message::AskCleanup => Action::ShowModal(ModalKind::ConfirmCleanupArtwork),
            Message::ConfirmCleanup => {
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move {
                        client
                            .cleanup_artwork()
                            .await
                            .map(|r| r.count)
                            .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Settings(Message::CleanupDone(r)),
                ))
            }
            Message::CleanupDone(Ok(count)) => Action::ShowToast(
                format!("Removed {count} orphaned artwork files"),
                ToastKind::Success,
            ),
            Message::CleanupDone(Err(e)) => {
                Action::ShowToast(format!("Cleanup failed: {e}"), ToastKind::Error)
            }
        }
    }

    /// Fetch all three settings groups in parallel.
    pub fn load(&mut self, client: &DashboardClient) -> Action {
        let general = {
            let client = client.clone();
            Task::perform(
                async move { client.get_settings().await.map_err(|e| e.to_string()) },
                |r| app::Message::Settings(Message::GeneralLoaded(r)),
            )
        };
        let replacement = {
            let client = client.clone();
            Task::perform(
                async move {
                    client
                        .get_replacement_settings()
                        .await
                        .map_err(|e| e.to_string())
                },
                |r| app::Message::Settings(Message::ReplacementLoaded(r)),
            )
        };
        let notifications = {
            let client = client.clone();
            Task::perform(
                async move {
                    client
                        .notification_settings()
                        .await
                        .map_err(|e| e.to_string())
                },
                |r| app::Message::Settings(Message::NotificationsLoaded(r)),
            )
        };
        Action::RunTask(Task::batch([general, replacement, notifications]))
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let content = column![
            text("Settings")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            self.general_card(cs),
            self.replacement_card(cs),
            self.notifications_card(cs),
            self.maintenance_card(cs),
        ]
        .spacing(style::SPACE_LG)
        .width(Length::Fixed(720.0));

        widgets::styled_scrollable(
            container(content)
                .padding(style::SPACE_XL)
                .width(Length::Fill),
            cs,
        )
        .height(Length::Fill)
        .into()
    }

    fn general_card<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let mut section = column![
            text("General")
                .size(style::TEXT_XS)
                .font(style::FONT_HEADING)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
            row![
                text("Download directory")
                    .size(style::TEXT_BASE)
                    .line_height(style::LINE_HEIGHT_NORMAL)
                    .width(Length::Fill),
                text_input("/mnt/media/anime", &self.download_directory)
                    .on_input(Message::DirectoryChanged)
                    .size(style::INPUT_FONT_SIZE)
                    .padding(style::INPUT_PADDING)
                    .width(Length::Fixed(320.0))
                    .style(theme::text_input_style(cs)),
            ]
            .align_y(Alignment::Center)
            .spacing(style::SPACE_MD),
        ]
        .spacing(style::SPACE_SM);

        if !self.suggestions.is_empty() {
            let mut list = column![].spacing(style::SPACE_XXS);
            for (index, path) in self.suggestions.iter().enumerate() {
                let selected = self.selected_suggestion == Some(index);
                list = list.push(
                    button(
                        text(path.as_str())
                            .size(style::TEXT_XS)
                            .wrapping(iced::widget::text::Wrapping::None),
                    )
                    .padding([style::SPACE_XXS, style::SPACE_SM])
                    .width(Length::Fill)
                    .on_press(Message::SuggestionPicked(index))
                    .style(theme::list_item(selected, cs)),
                );
            }
            section = section.push(
                container(list)
                    .padding(style::SPACE_XS)
                    .width(Length::Fill),
            );
        }

        section = section.push(
            row![
                text("Transmission host")
                    .size(style::TEXT_BASE)
                    .line_height(style::LINE_HEIGHT_NORMAL)
                    .width(Length::Fill),
                text_input("localhost", &self.transmission_host)
                    .on_input(Message::HostChanged)
                    .size(style::INPUT_FONT_SIZE)
                    .padding(style::INPUT_PADDING)
                    .width(Length::Fixed(200.0))
                    .style(theme::text_input_style(cs)),
            ]
            .align_y(Alignment::Center)
            .spacing(style::SPACE_MD),
        );
        section = section.push(
            row![
                text("Transmission port")
                    .size(style::TEXT_BASE)
                    .line_height(style::LINE_HEIGHT_NORMAL)
                    .width(Length::Fill),
                text_input("9091", &self.transmission_port)
                    .on_input(Message::PortChanged)
                    .size(style::INPUT_FONT_SIZE)
                    .padding(style::INPUT_PADDING)
                    .width(Length::Fixed(80.0))
                    .style(theme::text_input_style(cs)),
            ]
            .align_y(Alignment::Center)
            .spacing(style::SPACE_MD),
        );
        section = section.push(
            button(text("Save").size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_XL])
                .on_press(Message::SaveGeneral)
                .style(theme::primary_button(cs)),
        );

        container(section)
            .style(theme::card(cs))
            .padding(style::SPACE_LG)
            .width(Length::Fill)
            .into()
    }

    fn replacement_card<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        container(
            column![
                text("Replacement policy")
                    .size(style::TEXT_XS)
                    .font(style::FONT_HEADING)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                toggler(self.replacement_enabled)
                    .label("Replace episodes when a newer version appears")
                    .text_size(style::TEXT_BASE)
                    .on_toggle(Message::ReplacementToggled)
                    .spacing(style::SPACE_SM)
                    .size(style::TOGGLER_SIZE)
                    .style(theme::toggler_style(cs)),
                row![
                    text("Grace period (hours)")
                        .size(style::TEXT_BASE)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .width(Length::Fill),
                    text_input("24", &self.grace_input)
                        .on_input(Message::GraceChanged)
                        .size(style::INPUT_FONT_SIZE)
                        .padding(style::INPUT_PADDING)
                        .width(Length::Fixed(80.0))
                        .style(theme::text_input_style(cs)),
                ]
                .align_y(Alignment::Center)
                .spacing(style::SPACE_MD),
                button(text("Save").size(style::TEXT_SM))
                    .padding([style::SPACE_XS, style::SPACE_XL])
                    .on_press(Message::SaveReplacement)
                    .style(theme::primary_button(cs)),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .into()
    }

    fn notifications_card<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        container(
            column![
                text("Notifications")
                    .size(style::TEXT_XS)
                    .font(style::FONT_HEADING)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                toggler(self.notifications_enabled)
                    .label("Send a notification for every new download")
                    .text_size(style::TEXT_BASE)
                    .on_toggle(Message::NotificationsToggled)
                    .spacing(style::SPACE_SM)
                    .size(style::TOGGLER_SIZE)
                    .style(theme::toggler_style(cs)),
                row![
                    text("Service URL")
                        .size(style::TEXT_BASE)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .width(Length::Fill),
                    text_input("ntfys://host/topic", &self.service_url)
                        .on_input(Message::ServiceUrlChanged)
                        .size(style::INPUT_FONT_SIZE)
                        .padding(style::INPUT_PADDING)
                        .width(Length::Fixed(320.0))
                        .style(theme::text_input_style(cs)),
                ]
                .align_y(Alignment::Center)
                .spacing(style::SPACE_MD),
                row![
                    button(text("Save").size(style::TEXT_SM))
                        .padding([style::SPACE_XS, style::SPACE_XL])
                        .on_press(Message::SaveNotifications)
                        .style(theme::primary_button(cs)),
                    button(text("Send test").size(style::TEXT_SM))
                        .padding([style::SPACE_XS, style::SPACE_XL])
                        .on_press(Message::SendTest)
                        .style(theme::ghost_button(cs)),
                ]
                .spacing(style::SPACE_SM),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .into()
    }

    fn maintenance_card<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        container(
            column![
                text("Maintenance")
                    .size(style::TEXT_XS)
                    .font(style::FONT_HEADING)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                row![
                    text("Remove artwork files no tracked show references")
                        .size(style::TEXT_BASE)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .width(Length::Fill),
                    button(text("Clean up").size(style::TEXT_SM))
                        .padding([style::SPACE_XS, style::SPACE_XL])
                        .on_press(Message::AskCleanup)
                        .style(theme::danger_button(cs)),
                ]
                .align_y(Alignment::Center)
                .spacing(style::SPACE_MD),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DashboardClient {
        DashboardClient::new("http://localhost:5000/api").unwrap()
    }

    #[test]
    fn picking_a_suggestion_fills_the_input() {
        let mut settings = Settings::new();
        settings.suggestions = vec!["/mnt/a".into(), "/mnt/b".into()];

        settings.update(Message::SuggestionPicked(1), &client());
        assert_eq!(settings.download_directory, "/mnt/b");
        assert_eq!(settings.selected_suggestion, Some(1));
        assert!(settings.suggestions.is_empty());
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        let mut settings = Settings::new();
        settings.suggestions = vec!["/mnt/a".into()];

        settings.update(Message::SuggestionPicked(5), &client());
        assert!(settings.download_directory.is_empty());
        assert_eq!(settings.suggestions.len(), 1);
    }

    #[test]
    fn typing_resets_the_selection() {
        let mut settings = Settings::new();
        settings.selected_suggestion = Some(0);

        settings.update(Message::DirectoryChanged("/mn".into()), &client());
        assert_eq!(settings.selected_suggestion, None);
    }

    #[test]
    fn cleanup_asks_for_confirmation_first() {
        let mut settings = Settings::new();
        let action = settings.update(Message::AskCleanup, &client());
        assert!(matches!(
            action,
            Action::ShowModal(ModalKind::ConfirmCleanupArtwork)
        ));
    }
}
