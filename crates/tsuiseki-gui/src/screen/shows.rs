use std::time::Duration;

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Task};

use tsuiseki_api::types::{TrackPayload, TrackedUpdatePayload};
use tsuiseki_api::DashboardClient;
use tsuiseki_core::models::{CatalogShow, TrackedShow};
use tsuiseki_core::season::split_season;

use crate::app;
use crate::artwork::ArtworkCache;
use crate::screen::{Action, ModalKind};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

/// Search debounce window.
const DEBOUNCE_MS: u64 = 300;

/// Form state for tracking a new show, prefilled from a catalog pick.
#[derive(Debug, Clone)]
pub struct TrackForm {
    pub show_name: String,
    pub season_name: String,
    pub profile_id: i64,
    pub profile_name: String,
    pub max_age_input: String,
}

/// Form state for editing an existing tracked show.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub id: i64,
    pub show_name: String,
    pub season_name: String,
    pub max_age_input: String,
    pub art_path_input: String,
    pub art_url_input: String,
}

/// Tracked-shows screen, including the add-show and edit modals.
pub struct Shows {
    pub tracked: Vec<TrackedShow>,
    pub loading: bool,
    pub error: Option<String>,
    // Add-show modal
    pub search_input: String,
    pub search_results: Vec<CatalogShow>,
    pub searching: bool,
    pub track_form: Option<TrackForm>,
    // Edit modal
    pub edit_form: Option<EditForm>,
    /// Monotonic counter; each keystroke bumps it so stale debounce
    /// timers and stale responses identify themselves.
    search_generation: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Vec<TrackedShow>, String>),
    // Add-show flow
    OpenAddModal,
    SearchInputChanged(String),
    DebounceElapsed(u64),
    SearchResults(u64, Result<Vec<CatalogShow>, String>),
    SourcePicked {
        show_name: String,
        profile_id: i64,
        profile_name: String,
    },
    FormSeasonChanged(String),
    FormMaxAgeChanged(String),
    FormBack,
    SubmitTrack,
    TrackDone(Result<(), String>),
    // Edit flow
    OpenEdit(i64),
    EditSeasonChanged(String),
    EditMaxAgeChanged(String),
    EditArtPathChanged(String),
    EditArtUrlChanged(String),
    SubmitEdit,
    EditDone(Result<(), String>),
    UploadArtFile,
    UploadArtUrl,
    ArtDone(Result<(), String>),
    // Untrack flow
    AskUntrack(i64, String),
    ConfirmUntrack(i64),
    UntrackDone(Result<(), String>),
    CancelModal,
}

impl Shows {
    pub fn new() -> Self {
        Self {
            tracked: Vec::new(),
            loading: false,
            error: None,
            search_input: String::new(),
            search_results: Vec::new(),
            searching: false,
            track_form: None,
            edit_form: None,
            search_generation: 0,
        }
    }

    pub fn update(&mut self, msg: Message, client: &DashboardClient) -> Action {
        match msg {
            Message::Refresh => self.load(client),
            Message::Loaded(Ok(tracked)) => {
                self.loading = false;
                self.error = None;
                self.tracked = tracked;
                Action::None
            }
            Message::Loaded(Err(e)) => {
                self.loading = false;
                self.error = Some(e.clone());
                Action::ShowToast(format!("Shows load failed: {e}"), ToastKind::Error)
            }
            // ── Add-show flow ────────────────────────────────────
            Message::OpenAddModal => {
                self.search_input.clear();
                self.search_results.clear();
                self.searching = false;
                self.track_form = None;
                Action::ShowModal(ModalKind::AddShow)
            }
            Message::SearchInputChanged(value) => {
                self.search_input = value;
                self.search_generation += 1;
                if self.search_input.trim().is_empty() {
                    self.search_results.clear();
                    self.searching = false;
                    return Action::None;
                }
                let generation = self.search_generation;
                Action::RunTask(Task::perform(
                    async move {
                        tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;
                        generation
                    },
                    |generation| app::Message::Shows(Message::DebounceElapsed(generation)),
                ))
            }
            Message::DebounceElapsed(generation) => {
                // Another keystroke arrived while this timer slept.
                if generation != self.search_generation {
                    return Action::None;
                }
                self.searching = true;
                let client = client.clone();
                let query = self.search_input.trim().to_string();
                Action::RunTask(Task::perform(
                    async move { client.search_shows(&query).await.map_err(|e| e.to_string()) },
                    move |r| app::Message::Shows(Message::SearchResults(generation, r)),
                ))
            }
            Message::SearchResults(generation, result) => {
                if generation != self.search_generation {
                    return Action::None;
                }
                self.searching = false;
                match result {
                    Ok(results) => {
                        self.search_results = results;
                        Action::None
                    }
                    Err(e) => Action::ShowToast(format!("Search failed: {e}"), ToastKind::Error),
                }
            }
            Message::SourcePicked {
                show_name,
                profile_id,
                profile_name,
            } => {
                let (base, season) = split_season(&show_name);
                self.track_form = Some(TrackForm {
                    show_name: base,
                    season_name: season,
                    profile_id,
                    profile_name,
                    max_age_input: String::new(),
                });
                Action::None
            }
            Message::FormSeasonChanged(value) => {
                if let Some(form) = &mut self.track_form {
                    form.season_name = value;
                }
                Action::None
            }
            Message::FormMaxAgeChanged(value) => {
                if let Some(form) = &mut self.track_form {
                    form.max_age_input = value;
                }
                Action::None
            }
            Message::FormBack => {
                self.track_form = None;
                Action::None
            }
            Message::SubmitTrack => {
                let Some(form) = &self.track_form else {
                    return Action::None;
                };
                let payload = TrackPayload {
                    show_name: form.show_name.clone(),
                    profile_id: form.profile_id,
                    season_name: form.season_name.clone(),
                    max_age: form.max_age_input.trim().parse().unwrap_or(0),
                };
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move { client.track_show(&payload).await.map_err(|e| e.to_string()) },
                    |r| app::Message::Shows(Message::TrackDone(r)),
                ))
            }
            Message::TrackDone(Ok(())) => {
                self.track_form = None;
                Action::ShowToast("Show tracked".into(), ToastKind::Success)
            }
            Message::TrackDone(Err(e)) => {
                Action::ShowToast(format!("Track failed: {e}"), ToastKind::Error)
            }
            // ── Edit flow ────────────────────────────────────────
            Message::OpenEdit(id) => {
                let Some(show) = self.tracked.iter().find(|s| s.id == id) else {
                    return Action::None;
                };
                self.edit_form = Some(EditForm {
                    id,
                    show_name: show.show_name.clone(),
                    season_name: show.season_name.clone().unwrap_or_default(),
                    max_age_input: show
                        .max_age
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                    art_path_input: String::new(),
                    art_url_input: String::new(),
                });
                Action::ShowModal(ModalKind::EditShow)
            }
            Message::EditSeasonChanged(value) => {
                if let Some(form) = &mut self.edit_form {
                    form.season_name = value;
                }
                Action::None
            }
            Message::EditMaxAgeChanged(value) => {
                if let Some(form) = &mut self.edit_form {
                    form.max_age_input = value;
                }
                Action::None
            }
            Message::EditArtPathChanged(value) => {
                if let Some(form) = &mut self.edit_form {
                    form.art_path_input = value;
                }
                Action::None
            }
            Message::EditArtUrlChanged(value) => {
                if let Some(form) = &mut self.edit_form {
                    form.art_url_input = value;
                }
                Action::None
            }
            Message::SubmitEdit => {
                let Some(form) = &self.edit_form else {
                    return Action::None;
                };
                let id = form.id;
                let season = form.season_name.trim();
                let payload = TrackedUpdatePayload {
                    show_name: form.show_name.clone(),
                    season_name: (!season.is_empty()).then(|| season.to_string()),
                    max_age: form.max_age_input.trim().parse().ok(),
                };
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move {
                        client
                            .update_tracked(id, &payload)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Shows(Message::EditDone(r)),
                ))
            }
            Message::EditDone(Ok(())) => {
                Action::ShowToast("Show updated".into(), ToastKind::Success)
            }
            Message::EditDone(Err(e)) => {
                Action::ShowToast(format!("Update failed: {e}"), ToastKind::Error)
            }
            Message::UploadArtFile => {
                let Some(form) = &self.edit_form else {
                    return Action::None;
                };
                let id = form.id;
                let path = std::path::PathBuf::from(form.art_path_input.trim());
                if path.as_os_str().is_empty() {
                    return Action::None;
                }
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move { client.upload_art(id, &path).await.map_err(|e| e.to_string()) },
                    |r| app::Message::Shows(Message::ArtDone(r)),
                ))
            }
            Message::UploadArtUrl => {
                let Some(form) = &self.edit_form else {
                    return Action::None;
                };
                let id = form.id;
                let url = form.art_url_input.trim().to_string();
                if url.is_empty() {
                    return Action::None;
                }
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move {
                        client
                            .upload_art_url(id, &url)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |r| app::Message::Shows(Message::ArtDone(r)),
                ))
            }
            Message::ArtDone(Ok(())) => {
                Action::ShowToast("Artwork updated".into(), ToastKind::Success)
            }
            Message::ArtDone(Err(e)) => {
                Action::ShowToast(format!("Artwork upload failed: {e}"), ToastKind::Error)
            }
            // ── Untrack flow ─────────────────────────────────────
            Message::AskUntrack(id, name) => {
                Action::ShowModal(ModalKind::ConfirmUntrack { id, name })
            }
            Message::ConfirmUntrack(id) => {
                let client = client.clone();
                Action::RunTask(Task::perform(
                    async move { client.untrack_show(id).await.map_err(|e| e.to_string()) },
                    |r| app::Message::Shows(Message::UntrackDone(r)),
                ))
            }
            Message::UntrackDone(Ok(())) => {
                Action::ShowToast("Show untracked".into(), ToastKind::Success)
            }
            Message::UntrackDone(Err(e)) => {
                Action::ShowToast(format!("Untrack failed: {e}"), ToastKind::Error)
            }
            Message::CancelModal => {
                self.track_form = None;
                self.edit_form = None;
                Action::DismissModal
            }
        }
    }

    /// Fire a task to fetch the tracked shows.
    pub fn load(&mut self, client: &DashboardClient) -> Action {
        self.loading = true;
        let client = client.clone();
        Action::RunTask(Task::perform(
            async move { client.list_tracked().await.map_err(|e| e.to_string()) },
            |r| app::Message::Shows(Message::Loaded(r)),
        ))
    }

    // ── Main view ────────────────────────────────────────────────

    pub fn view<'a>(&'a self, cs: &ColorScheme, art: &ArtworkCache) -> Element<'a, Message> {
        let header = row![
            text("Tracked shows")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            Space::new().width(Length::Fill),
            button(text("Add show").size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::OpenAddModal)
                .style(theme::primary_button(cs)),
        ]
        .align_y(Alignment::Center);

        let body: Element<'a, Message> = if let Some(e) = &self.error {
            column![
                text(format!("Could not load shows: {e}"))
                    .size(style::TEXT_SM)
                    .color(cs.error),
                button(text("Retry").size(style::TEXT_SM))
                    .padding([style::SPACE_XS, style::SPACE_XL])
                    .on_press(Message::Refresh)
                    .style(theme::ghost_button(cs)),
            ]
            .spacing(style::SPACE_MD)
            .into()
        } else if self.tracked.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_library()
                    .size(48)
                    .color(cs.outline)
                    .into(),
                "Nothing tracked yet",
                "Add a show to start watching for new releases.",
            )
        } else {
            let cards: Vec<Element<'a, Message>> = self
                .tracked
                .iter()
                .map(|show| show_card(cs, art, show))
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

    // ── Modal views ──────────────────────────────────────────────

    /// Content for the add-show modal: catalog search, or the track
    /// form once a source badge was picked.
    pub fn add_modal_view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let content: Element<'a, Message> = if let Some(form) = &self.track_form {
            track_form_view(cs, form)
        } else {
            search_view(cs, self)
        };

        container(content)
            .style(theme::dialog_container(cs))
            .padding(style::SPACE_2XL)
            .width(Length::Fixed(style::MODAL_WIDTH))
            .into()
    }

    /// Content for the edit-show modal.
    pub fn edit_modal_view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let Some(form) = &self.edit_form else {
            return Space::new().into();
        };

        let content = column![
            text(form.show_name.clone())
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            widgets::form_row(
                cs,
                "Season",
                text_input("Season 01", &form.season_name)
                    .on_input(Message::EditSeasonChanged)
                    .size(style::INPUT_FONT_SIZE)
                    .padding(style::INPUT_PADDING)
                    .style(theme::text_input_style(cs))
                    .into(),
            ),
            widgets::form_row(
                cs,
                "Max age (days)",
                text_input("0 = unlimited", &form.max_age_input)
                    .on_input(Message::EditMaxAgeChanged)
                    .size(style::INPUT_FONT_SIZE)
                    .padding(style::INPUT_PADDING)
                    .style(theme::text_input_style(cs))
                    .into(),
            ),
            widgets::form_row(
                cs,
                "Artwork file",
                row![
                    text_input("/path/to/image.jpg", &form.art_path_input)
                        .on_input(Message::EditArtPathChanged)
                        .on_submit(Message::UploadArtFile)
                        .size(style::INPUT_FONT_SIZE)
                        .padding(style::INPUT_PADDING)
                        .style(theme::text_input_style(cs)),
                    button(text("Upload").size(style::TEXT_SM))
                        .padding([style::SPACE_XS, style::SPACE_MD])
                        .on_press(Message::UploadArtFile)
                        .style(theme::ghost_button(cs)),
                ]
                .spacing(style::SPACE_SM)
                .into(),
            ),
            widgets::form_row(
                cs,
                "Artwork URL",
                row![
                    text_input("https://…", &form.art_url_input)
                        .on_input(Message::EditArtUrlChanged)
                        .on_submit(Message::UploadArtUrl)
                        .size(style::INPUT_FONT_SIZE)
                        .padding(style::INPUT_PADDING)
                        .style(theme::text_input_style(cs)),
                    button(text("Fetch").size(style::TEXT_SM))
                        .padding([style::SPACE_XS, style::SPACE_MD])
                        .on_press(Message::UploadArtUrl)
                        .style(theme::ghost_button(cs)),
                ]
                .spacing(style::SPACE_SM)
                .into(),
            ),
            row![
                button(text("Close").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::CancelModal)
                    .style(theme::ghost_button(cs)),
                Space::new().width(Length::Fill),
                button(text("Save").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::SubmitEdit)
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

// ── Card + modal pieces ──────────────────────────────────────────

fn show_card<'a>(
    cs: &ColorScheme,
    art: &ArtworkCache,
    show: &'a TrackedShow,
) -> Element<'a, Message> {
    let accent = show.color.as_deref().and_then(theme::accent_color);
    let badge = widgets::art_badge(
        cs,
        art,
        show.image_path.as_deref(),
        &show.show_name,
        accent,
        style::ART_BADGE_SIZE,
    );

    let mut meta = vec![show.profile_name.clone()];
    if let Some(season) = &show.season_name {
        meta.push(season.clone());
    }
    if let Some(max_age) = show.max_age.filter(|v| *v > 0) {
        meta.push(format!("max {max_age}d"));
    }

    let info = column![
        text(show.show_name.as_str())
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

    let actions = row![
        button(text("Edit").size(style::TEXT_XS))
            .padding([style::SPACE_XXS, style::SPACE_SM])
            .on_press(Message::OpenEdit(show.id))
            .style(theme::ghost_button(cs)),
        button(text("Untrack").size(style::TEXT_XS))
            .padding([style::SPACE_XXS, style::SPACE_SM])
            .on_press(Message::AskUntrack(show.id, show.show_name.clone()))
            .style(theme::danger_button(cs)),
    ]
    .spacing(style::SPACE_XS);

    container(
        column![
            row![badge, info.width(Length::Fill)]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
            actions,
        ]
        .spacing(style::SPACE_SM),
    )
    .style(theme::card(cs))
    .padding(style::SPACE_MD)
    .width(Length::Fixed(280.0))
    .into()
}

fn search_view<'a>(cs: &ColorScheme, shows: &'a Shows) -> Element<'a, Message> {
    let mut content = column![
        text("Add a show")
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT),
        text_input("Search the catalog…", &shows.search_input)
            .on_input(Message::SearchInputChanged)
            .size(style::INPUT_FONT_SIZE)
            .padding(style::INPUT_PADDING)
            .style(theme::text_input_style(cs)),
    ]
    .spacing(style::SPACE_LG);

    if shows.searching {
        content = content.push(
            text("Searching…")
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant),
        );
    } else if shows.search_results.is_empty() && !shows.search_input.trim().is_empty() {
        content = content.push(
            text("No matches.")
                .size(style::TEXT_SM)
                .color(cs.outline),
        );
    }

    let mut results = column![].spacing(style::SPACE_SM);
    for show in &shows.search_results {
        let mut badges = row![].spacing(style::SPACE_XS);
        for source in &show.sources {
            let accent = source
                .color
                .as_deref()
                .and_then(theme::accent_color)
                .unwrap_or(cs.primary);
            let label = match (&source.uploader, &source.quality) {
                (Some(up), Some(q)) => format!("{} \u{00B7} {up} {q}", source.profile_name),
                (Some(up), None) => format!("{} \u{00B7} {up}", source.profile_name),
                _ => source.profile_name.clone(),
            };
            badges = badges.push(
                button(
                    container(text(label).size(style::TEXT_XS))
                        .padding([style::SPACE_XXS, style::SPACE_SM])
                        .style(theme::tinted_badge(accent)),
                )
                .padding(0)
                .on_press(Message::SourcePicked {
                    show_name: show.name.clone(),
                    profile_id: source.profile_id,
                    profile_name: source.profile_name.clone(),
                })
                .style(theme::icon_button(cs)),
            );
        }

        results = results.push(
            column![
                text(show.name.as_str())
                    .size(style::TEXT_SM)
                    .font(style::FONT_HEADING)
                    .line_height(style::LINE_HEIGHT_NORMAL),
                badges,
            ]
            .spacing(style::SPACE_XXS),
        );
    }

    content = content.push(
        widgets::styled_scrollable(results, cs).height(Length::Fixed(260.0)),
    );
    content = content.push(
        button(text("Close").size(style::TEXT_SM))
            .padding([style::SPACE_SM, style::SPACE_XL])
            .on_press(Message::CancelModal)
            .style(theme::ghost_button(cs)),
    );

    content.into()
}

fn track_form_view<'a>(cs: &ColorScheme, form: &'a TrackForm) -> Element<'a, Message> {
    column![
        text(form.show_name.clone())
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT),
        text(format!("via {}", form.profile_name))
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
        widgets::form_row(
            cs,
            "Season",
            text_input("Season 01", &form.season_name)
                .on_input(Message::FormSeasonChanged)
                .size(style::INPUT_FONT_SIZE)
                .padding(style::INPUT_PADDING)
                .style(theme::text_input_style(cs))
                .into(),
        ),
        widgets::form_row(
            cs,
            "Max age (days)",
            text_input("0 = unlimited", &form.max_age_input)
                .on_input(Message::FormMaxAgeChanged)
                .size(style::INPUT_FONT_SIZE)
                .padding(style::INPUT_PADDING)
                .style(theme::text_input_style(cs))
                .into(),
        ),
        row![
            button(text("Back").size(style::TEXT_SM))
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press(Message::FormBack)
                .style(theme::ghost_button(cs)),
            Space::new().width(Length::Fill),
            button(text("Track").size(style::TEXT_SM))
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press(Message::SubmitTrack)
                .style(theme::primary_button(cs)),
        ],
    ]
    .spacing(style::SPACE_LG)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DashboardClient {
        DashboardClient::new("http://localhost:5000/api").unwrap()
    }

    fn catalog(name: &str) -> CatalogShow {
        CatalogShow {
            name: name.into(),
            sources: Vec::new(),
        }
    }

    #[test]
    fn stale_search_results_are_discarded() {
        let mut shows = Shows::new();
        let client = client();

        shows.update(Message::SearchInputChanged("fri".into()), &client);
        let stale = shows.search_generation;
        shows.update(Message::SearchInputChanged("frieren".into()), &client);

        shows.update(
            Message::SearchResults(stale, Ok(vec![catalog("wrong")])),
            &client,
        );
        assert!(shows.search_results.is_empty());

        shows.update(
            Message::SearchResults(shows.search_generation, Ok(vec![catalog("Frieren")])),
            &client,
        );
        assert_eq!(shows.search_results.len(), 1);
    }

    #[test]
    fn stale_debounce_timer_is_ignored() {
        let mut shows = Shows::new();
        let client = client();

        shows.update(Message::SearchInputChanged("f".into()), &client);
        let stale = shows.search_generation;
        shows.update(Message::SearchInputChanged("fr".into()), &client);

        let action = shows.update(Message::DebounceElapsed(stale), &client);
        assert!(matches!(action, Action::None));
        assert!(!shows.searching);
    }

    #[test]
    fn clearing_the_query_clears_results() {
        let mut shows = Shows::new();
        let client = client();

        shows.update(Message::SearchInputChanged("fri".into()), &client);
        shows.update(
            Message::SearchResults(shows.search_generation, Ok(vec![catalog("Frieren")])),
            &client,
        );
        assert_eq!(shows.search_results.len(), 1);

        shows.update(Message::SearchInputChanged("  ".into()), &client);
        assert!(shows.search_results.is_empty());
    }

    #[test]
    fn picking_a_source_splits_the_season_suffix() {
        let mut shows = Shows::new();
        let client = client();

        shows.update(
            Message::SourcePicked {
                show_name: "Frieren Season 2".into(),
                profile_id: 3,
                profile_name: "Nyaa".into(),
            },
            &client,
        );

        let form = shows.track_form.as_ref().unwrap();
        assert_eq!(form.show_name, "Frieren");
        assert_eq!(form.season_name, "Season 02");
        assert_eq!(form.profile_id, 3);
    }
}
