use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task};

use tsuiseki_api::DashboardClient;
use tsuiseki_core::format::relative_time_str;
use tsuiseki_core::models::DownloadedEpisode;

use crate::app;
use crate::artwork::ArtworkCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

/// Downloaded-episodes screen, grouped per show.
pub struct Downloads {
    pub episodes: Vec<DownloadedEpisode>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Vec<DownloadedEpisode>, String>),
}

impl Downloads {
    pub fn new() -> Self {
        Self {
            episodes: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn update(&mut self, msg: Message, client: &DashboardClient) -> Action {
        match msg {
            Message::Refresh => self.load(client),
            Message::Loaded(Ok(mut episodes)) => {
                self.loading = false;
                self.error = None;
                episodes.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
                self.episodes = episodes;
                Action::None
            }
            Message::Loaded(Err(e)) => {
                self.loading = false;
                self.error = Some(e.clone());
                Action::ShowToast(format!("Downloads load failed: {e}"), ToastKind::Error)
            }
        }
    }

    pub fn load(&mut self, client: &DashboardClient) -> Action {
        self.loading = true;
        let client = client.clone();
        Action::RunTask(Task::perform(
            async move {
                client
                    .downloaded_episodes()
                    .await
                    .map(|r| r.downloaded)
                    .map_err(|e| e.to_string())
            },
            |r| app::Message::Downloads(Message::Loaded(r)),
        ))
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme, art: &ArtworkCache) -> Element<'a, Message> {
        let header = row![
            text("Downloads")
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
                text(format!("Could not load downloads: {e}"))
                    .size(style::TEXT_SM)
                    .color(cs.error),
                button(text("Retry").size(style::TEXT_SM))
                    .padding([style::SPACE_XS, style::SPACE_XL])
                    .on_press(Message::Refresh)
                    .style(theme::ghost_button(cs)),
            ]
            .spacing(style::SPACE_MD)
            .into()
        } else if self.episodes.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_download()
                    .size(48)
                    .color(cs.outline)
                    .into(),
                "Nothing downloaded yet",
                "Episodes picked up from your sources land here.",
            )
        } else {
            let mut groups = column![].spacing(style::SPACE_LG);
            for group in group_by_show(&self.episodes) {
                groups = groups.push(show_group(cs, art, group));
            }
            widgets::styled_scrollable(container(groups).width(Length::Fill), cs)
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

/// Group episodes per show, preserving the order in which shows first
/// appear. Input is expected newest first, so each group's head is the
/// latest episode.
fn group_by_show(episodes: &[DownloadedEpisode]) -> Vec<Vec<&DownloadedEpisode>> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: std::collections::HashMap<&str, Vec<&DownloadedEpisode>> =
        std::collections::HashMap::new();

    for episode in episodes {
        let key = episode.show_name.as_str();
        if !groups.contains_key(key) {
            order.push(key);
        }
        groups.entry(key).or_default().push(episode);
    }

    order
        .into_iter()
        .map(|key| groups.remove(key).unwrap_or_default())
        .collect()
}

fn show_group<'a>(
    cs: &ColorScheme,
    art: &ArtworkCache,
    episodes: Vec<&'a DownloadedEpisode>,
) -> Element<'a, Message> {
    let head = episodes[0];
    let accent = head.profile_color.as_deref().and_then(theme::accent_color);
    let badge = widgets::art_badge(
        cs,
        art,
        head.image_path.as_deref(),
        &head.show_name,
        accent,
        style::ART_THUMB_SIZE,
    );

    let mut subtitle = head.season_name.clone().unwrap_or_default();
    if let Some(profile) = &head.profile_name {
        if !subtitle.is_empty() {
            subtitle.push_str(" \u{00B7} ");
        }
        subtitle.push_str(profile);
    }

    let header = row![
        badge,
        column![
            text(head.show_name.as_str())
                .size(style::TEXT_SM)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_NORMAL),
            text(subtitle)
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XXS),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center);

    let mut rows = column![].spacing(style::SPACE_XS);
    for episode in &episodes {
        rows = rows.push(episode_row(cs, episode));
    }

    container(column![header, rows].spacing(style::SPACE_SM))
        .style(theme::card(cs))
        .padding(style::SPACE_MD)
        .width(Length::Fill)
        .into()
}

fn episode_row<'a>(cs: &ColorScheme, episode: &'a DownloadedEpisode) -> Element<'a, Message> {
    let mut label = match episode.episode_number.as_deref() {
        Some(number) => format!("Episode {number}"),
        None => episode.torrent_name.clone(),
    };
    if let Some(version) = episode.version.filter(|v| *v > 1) {
        label.push_str(&format!("v{version}"));
    }
    if let Some(subgroup) = &episode.subgroup {
        label.push_str(&format!(" [{subgroup}]"));
    }

    let (status, color) = if episode.is_deleted {
        ("Deleted", cs.error)
    } else if episode.replaced_by.is_some() {
        ("Replaced", cs.warning)
    } else {
        ("Active", cs.success)
    };

    let when = episode
        .published_at
        .as_deref()
        .unwrap_or(&episode.added_at);

    row![
        text(label)
            .size(style::TEXT_XS)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::None),
        Space::new().width(Length::Fill),
        container(text(status).size(style::TEXT_XS).color(color))
            .padding([style::SPACE_XXS, style::SPACE_SM])
            .style(theme::tinted_badge(color)),
        text(relative_time_str(when))
            .size(style::TEXT_XS)
            .color(cs.outline)
            .width(Length::Fixed(90.0)),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: i64, show: &str, added: &str) -> DownloadedEpisode {
        DownloadedEpisode {
            id,
            tracked_show_id: 1,
            show_name: show.into(),
            season_name: None,
            torrent_name: format!("{show} - {id}.mkv"),
            episode_number: Some(id.to_string()),
            version: None,
            subgroup: None,
            published_at: None,
            added_at: added.into(),
            is_deleted: false,
            replaced_by: None,
            image_path: None,
            profile_name: None,
            profile_color: None,
        }
    }

    #[test]
    fn grouping_keeps_first_seen_show_order() {
        let episodes = vec![
            episode(8, "Frieren", "2024-03-15 10:00:00"),
            episode(3, "Dungeon Meshi", "2024-03-14 10:00:00"),
            episode(7, "Frieren", "2024-03-08 10:00:00"),
        ];

        let groups = group_by_show(&episodes);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0].show_name, "Frieren");
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1][0].show_name, "Dungeon Meshi");
    }

    #[test]
    fn loaded_sorts_newest_first() {
        let mut downloads = Downloads::new();
        let client = DashboardClient::new("http://localhost:5000/api").unwrap();

        downloads.update(
            Message::Loaded(Ok(vec![
                episode(1, "Frieren", "2024-03-01 10:00:00"),
                episode(2, "Frieren", "2024-03-15 10:00:00"),
            ])),
            &client,
        );

        assert_eq!(downloads.episodes[0].id, 2);
        assert_eq!(downloads.episodes[1].id, 1);
    }
}
