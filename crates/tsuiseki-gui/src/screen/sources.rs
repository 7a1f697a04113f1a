use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Task};

use tsuiseki_api::types::ProfilePayload;
use tsuiseki_api::DashboardClient;
use tsuiseki_core::models::Profile;

use crate::app;
use crate::screen::{Action, ModalKind};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

/// Create/edit form for a source profile. `id` is `None` for a new
/// profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub id: Option<i64>,
    pub name: String,
    pub base_url: String,
    pub uploader: String,
    pub quality: String,
    pub color: String,
    pub interval_input: String,
}

/// Source-profile management screen.
pub struct Sources {
    pub profiles: Vec<Profile>,
    pub loading: bool,
    pub error: Option<String>,
    pub form: Option<ProfileForm>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Vec<Profile>, String>),
    OpenCreate,
    OpenEdit(i64),
    NameChanged(String),
    BaseUrlChanged(String),
    UploaderChanged(String),
    QualityChanged(String),
    ColorChanged(String),
    IntervalChanged(String),
    Submit,
    SaveDone(Result<(), String>),
    AskDelete(i64, String),
    ConfirmDelete(i64),
    DeleteDone(Result<(), String>),
    CancelModal,
}

impl Sources {
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            loading: false,
            error: None,
            form: None,
        }
    }

    pub fn update(&mut self, msg: Message, client: &DashboardClient) -> Action {
        match msg {
            Message::Refresh => self.load(client),
            Message::Loaded(Ok(profiles)) => {
                self.loading = false;
                self.error = None;
                self.profiles = profiles;
                Action::None
            }
            Message::Loaded(Err(e)) => {
                self.loading = false;
                self.error = Some(e.clone());
                Action::ShowToast(format!("Sources load failed: {e}"), ToastKind::Error)
            }
            Message::OpenCreate => {
                self.form = Some(ProfileForm {
                    interval_input: "10".into(),
                    ..ProfileForm::default()
                });
                Action::ShowModal(ModalKind::ProfileForm)
            }
            Message::OpenEdit(id) => {
                let Some(profile) = self.profiles.iter().find(|p| p.id == id) else {
                    return Action::None;
                };
                self.form = Some(ProfileForm {
                    id: Some(id),
                    name: profile.name.clone(),
                    base_url: profile.base_url.clone(),
                    uploader: profile.uploader.clone().unwrap_or_default(),
                    quality: profile.quality.clone().unwrap_or_default(),
                    color: profile.color.clone().unwrap_or_default(),
                    interval_input: profile
                        .interval
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                });
                Action::ShowModal(ModalKind::ProfileForm)
            }
            Message::NameChanged(v) => self.edit_form(|f| f.name = v),
            Message::BaseUrlChanged(v) => self.edit_form(|f| f.base_url = v),
            Message::UploaderChanged(v) => self.edit_form(|f| f.uploader = v),
            Message::QualityChanged(v) => self.edit_form(|f| f.quality = v),
            Message::ColorChanged(v) => self.edit_form(|f| f.color = v),
            Message::IntervalChanged(v) => self.edit_form(|f| f.interval_input = v),
            Message::Submit => {
                let Some(form) = &self.form else {
                    return Action::None;
                };
                if form.name.trim().is_empty() || form.base_url.trim().is_empty() {
                    return Action::ShowToast(
                        "Name and base URL are required".into(),
                        ToastKind::Error,
                    );
                }
                let payload = ProfilePayload {
                    name: form.name.trim().to_string(),
                    base_url: form.base_url.trim().to_string(),
                    uploader: non_empty(&form.uploader),
                    quality: non_empty(&form.quality),
                    color: non_empty(&form.color),
                    interval: form.interval_input.trim().parse().unwrap_or(10),
                };
                let id = form.id;
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move {
                        match id {
                            Some(id) => client.update_profile(id, &payload).await,
                            None => client.create_profile(&payload).await,
                        }
                        .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Sources(Message::SaveDone(r)),
                ))
            }
            Message::SaveDone(Ok(())) => {
                self.form = None;
                Action::ShowToast("Source saved".into(), ToastKind::Success)
            }
            Message::SaveDone(Err(e)) => {
                Action::ShowToast(format!("Save failed: {e}"), ToastKind::Error)
            }
            Message::AskDelete(id, name) => {
                Action::ShowModal(ModalKind::ConfirmDeleteProfile { id, name })
            }
            Message::ConfirmDelete(id) => {
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move { client.delete_profile(id).await.map_err(|e| e.to_string()) },
                    |r| app::Message::Sources(Message::DeleteDone(r)),
                ))
            }
            Message::DeleteDone(Ok(())) => {
                Action::ShowToast("Source deleted".into(), ToastKind::Success)
            }
            Message::DeleteDone(Err(e)) => {
                Action::ShowToast(format!("Delete failed: {e}"), ToastKind::Error)
            }
            Message::CancelModal => {
                self.form = None;
                Action::DismissModal
            }
        }
    }

    fn edit_form(&mut self, apply: impl FnOnce(&mut ProfileForm)) -> Action {
        if let Some(form) = &mut self.form {
            apply(form);
        }
        Action::None
    }

    pub fn load(&mut self, client: &DashboardClient) -> Action {
        self.loading = true;
        let client = client.clone();
        Action::RunTask(Task::perform(
            async move { client.list_profiles().await.map_err(|e| e.to_string()) },
            |r| app::Message::Sources(Message::Loaded(r)),
        ))
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let header = row![
            text("Sources")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            Space::new().width(Length::Fill),
            button(text("Add source").size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::OpenCreate)
                .style(theme::primary_button(cs)),
        ]
        .align_y(Alignment::Center);

        let body: Element<'a, Message> = if let Some(e) = &self.error {
            column![
                text(format!("Could not load sources: {e}"))
                    .size(style::TEXT_SM)
                    .color(cs.error),
                button(text("Retry").size(style::TEXT_SM))
                    .padding([style::SPACE_XS, style::SPACE_XL])
                    .on_press(Message::Refresh)
                    .style(theme::ghost_button(cs)),
            ]
            .spacing(style::SPACE_MD)
            .into()
        } else if self.profiles.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_globe()
                    .size(48)
                    .color(cs.outline)
                    .into(),
                "No sources configured",
                "Add a feed source to populate the catalog.",
            )
        } else {
            let cards: Vec<Element<'a, Message>> = self
                .profiles
                .iter()
                .map(|profile| profile_card(cs, profile))
                .collect();
            let wrap = iced_aw::Wrap::with_elements(cards)
                .spacing(style::SPACE_SM)
                .line_spacing(style::SPACE_SM);
            widgets::styled_scrollable(container(wrap).width(Length::Fill), cs)
                .height(Length::Fill)
                .into()
        };

        container(column![header, body].spacing(style::SPACE_LG))
            .padding(style::SPACE_XL)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Content for the create/edit modal.
    pub fn modal_view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let Some(form) = &self.form else {
            return Space::new().into();
        };

        let title = if form.id.is_some() {
            "Edit source"
        } else {
            "Add source"
        };

        let input = |placeholder: &'a str, value: &'a str, on_input: fn(String) -> Message| {
            text_input(placeholder, value)
                .on_input(on_input)
                .size(style::INPUT_FONT_SIZE)
                .padding(style::INPUT_PADDING)
                .style(theme::text_input_style(cs))
        };

        let content = column![
            text(title)
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            widgets::form_row(cs, "Name", input("Nyaa", &form.name, Message::NameChanged).into()),
            widgets::form_row(
                cs,
                "Base URL",
                input(
                    "https://example.net/?page=rss",
                    &form.base_url,
                    Message::BaseUrlChanged,
                )
                .into(),
            ),
            widgets::form_row(
                cs,
                "Uploader",
                input("SubsPlease", &form.uploader, Message::UploaderChanged).into(),
            ),
            widgets::form_row(
                cs,
                "Quality",
                input("1080p", &form.quality, Message::QualityChanged).into(),
            ),
            widgets::form_row(
                cs,
                "Color",
                input("#7aa2f7", &form.color, Message::ColorChanged).into(),
            ),
            widgets::form_row(
                cs,
                "Interval (min)",
                input("10", &form.interval_input, Message::IntervalChanged).into(),
            ),
            row![
                button(text("Cancel").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::CancelModal)
                    .style(theme::ghost_button(cs)),
                Space::new().width(Length::Fill),
                button(text("Save").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::Submit)
                    .style(theme::primary_button(cs)),
            ],
        ]
        .spacing(style::SPACE_LG);

        container(content)
            .style(theme::dialog_container(cs))
            .padding(style::SPACE_2XL)
            .width(Length::Fixed(style::MODAL_WIDTH))
            .into()
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn profile_card<'a>(cs: &ColorScheme, profile: &'a Profile) -> Element<'a, Message> {
    let accent = profile
        .color
        .as_deref()
        .and_then(theme::accent_color)
        .unwrap_or(cs.primary);

    let mut meta = Vec::new();
    if let Some(uploader) = &profile.uploader {
        meta.push(uploader.clone());
    }
    if let Some(quality) = &profile.quality {
        meta.push(quality.clone());
    }
    if let Some(interval) = profile.interval {
        meta.push(format!("every {interval}m"));
    }

    let info = column![
        row![
            container(Space::new().width(10).height(10))
                .style(theme::tinted_badge(accent)),
            text(profile.name.as_str())
                .size(style::TEXT_SM)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_NORMAL),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center),
        text(profile.base_url.as_str())
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE)
            .wrapping(iced::widget::text::Wrapping::None),
        text(meta.join(" \u{00B7} "))
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XXS)
    .clip(true);

    let actions = row![
        button(text("Edit").size(style::TEXT_XS))
            .padding([style::SPACE_XXS, style::SPACE_SM])
            .on_press(Message::OpenEdit(profile.id))
            .style(theme::ghost_button(cs)),
        button(text("Delete").size(style::TEXT_XS))
            .padding([style::SPACE_XXS, style::SPACE_SM])
            .on_press(Message::AskDelete(profile.id, profile.name.clone()))
            .style(theme::danger_button(cs)),
    ]
    .spacing(style::SPACE_XS);

    container(column![info, actions].spacing(style::SPACE_SM))
        .style(theme::card(cs))
        .padding(style::SPACE_MD)
        .width(Length::Fixed(300.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DashboardClient {
        DashboardClient::new("http://localhost:5000/api").unwrap()
    }

    fn profile(id: i64, name: &str) -> Profile {
        Profile {
            id,
            name: name.into(),
            base_url: "https://example.net".into(),
            uploader: Some("SubsPlease".into()),
            quality: Some("1080p".into()),
            color: Some("#7aa2f7".into()),
            interval: Some(10),
        }
    }

    #[test]
    fn opening_edit_prefills_the_form() {
        let mut sources = Sources::new();
        sources.profiles = vec![profile(2, "Nyaa")];

        let action = sources.update(Message::OpenEdit(2), &client());
        assert!(matches!(action, Action::ShowModal(ModalKind::ProfileForm)));

        let form = sources.form.as_ref().unwrap();
        assert_eq!(form.id, Some(2));
        assert_eq!(form.name, "Nyaa");
        assert_eq!(form.interval_input, "10");
    }

    #[test]
    fn submit_without_required_fields_is_rejected() {
        let mut sources = Sources::new();
        sources.form = Some(ProfileForm::default());

        let action = sources.update(Message::Submit, &client());
        assert!(matches!(action, Action::ShowToast(_, ToastKind::Error)));
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut sources = Sources::new();
        sources.profiles = vec![profile(7, "Tokyo Tosho")];

        let action = sources.update(Message::AskDelete(7, "Tokyo Tosho".into()), &client());
        assert!(matches!(
            action,
            Action::ShowModal(ModalKind::ConfirmDeleteProfile { id: 7, .. })
        ));
    }
}
