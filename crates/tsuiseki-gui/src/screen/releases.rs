use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task};

use tsuiseki_api::DashboardClient;
use tsuiseki_core::format::relative_time_str;
use tsuiseki_core::models::Release;

use crate::app;
use crate::artwork::ArtworkCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

/// Recent-releases screen: a flat list of everything the backend has
/// seen lately, matched to tracked shows where possible.
pub struct Releases {
    pub releases: Vec<Release>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Vec<Release>, String>),
}

impl Releases {
    pub fn new() -> Self {
        Self {
            releases: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn update(&mut self, msg: Message, client: &DashboardClient) -> Action {
        match msg {
            Message::Refresh => self.load(client),
            Message::Loaded(Ok(releases)) => {
                self.loading = false;
                self.error = None;
                self.releases = releases;
                Action::None
            }
            Message::Loaded(Err(e)) => {
                self.loading = false;
                self.error = Some(e.clone());
                Action::ShowToast(format!("Releases load failed: {e}"), ToastKind::Error)
            }
        }
    }

    pub fn load(&mut self, client: &DashboardClient) -> Action {
        self.loading = true;
        let client = client.clone();
        Action::RunTask(Task::perform(
            async move { client.list_releases().await.map_err(|e| e.to_string()) },
            |r| app::Message::Releases(Message::Loaded(r)),
        ))
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme, art: &ArtworkCache) -> Element<'a, Message> {
        let header = row![
            text("Releases")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            Space::new().width(Length::Fill),
            button(text("Refresh").size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::Refresh)
                .style(theme::ghost_button(cs)),
        ]
        .align_y(Alignment::Center);

        let body: Element<'a, Message> = if let Some(e) = &self.error {
            column![
                text(format!("Could not load releases: {e}"))
                    .size(style::TEXT_SM)
                    .color(cs.error),
                button(text("Retry").size(style::TEXT_SM))
                    .padding([style::SPACE_XS, style::SPACE_XL])
                    .on_press(Message::Refresh)
                    .style(theme::ghost_button(cs)),
            ]
            .spacing(style::SPACE_MD)
            .into()
        } else if self.releases.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_film()
                    .size(48)
                    .color(cs.outline)
                    .into(),
                "No releases yet",
                "New releases show up here as your sources are polled.",
            )
        } else {
            let mut list = column![].spacing(style::SPACE_SM);
            for release in &self.releases {
                list = list.push(release_card(cs, art, release));
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

fn release_card<'a>(
    cs: &ColorScheme,
    art: &ArtworkCache,
    release: &'a Release,
) -> Element<'a, Message> {
    let badge = widgets::art_badge(
        cs,
        art,
        release.image_path.as_deref(),
        release.display_name(),
        None,
        style::ART_THUMB_SIZE,
    );

    let mut meta = Vec::new();
    if let Some(episode) = release.episode() {
        meta.push(format!("Episode {episode}"));
    }
    if let Some(season) = &release.season_name {
        meta.push(season.clone());
    }
    if let Some(subgroup) = &release.subgroup {
        meta.push(format!("[{subgroup}]"));
    }

    let info = column![
        text(release.display_name())
            .size(style::TEXT_SM)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::None),
        text(meta.join(" \u{00B7} "))
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XXS)
    .clip(true);

    container(
        row![
            badge,
            info.width(Length::Fill),
            text(relative_time_str(&release.added_at))
                .size(style::TEXT_XS)
                .color(cs.outline),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .style(theme::card(cs))
    .padding(style::SPACE_MD)
    .width(Length::Fill)
    .into()
}
