use iced::widget::{button, column, container, row, stack, text};
use iced::{Element, Length, Task, Theme};

use tsuiseki_api::DashboardClient;
use tsuiseki_core::config::AppConfig;

use crate::artwork::{self, ArtState, ArtworkCache};
use crate::screen::{
    downloads, logs, releases, schedule, settings, shows, sources, Action, ModalKind, Page,
};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::{self, ToastKind, Toasts};

/// Application state: the active page, per-screen state, and app-level
/// chrome (toasts, modal, status bar).
pub struct Tsuiseki {
    page: Page,
    config: AppConfig,
    client: DashboardClient,
    colors: ColorScheme,
    // Screens
    schedule: schedule::Schedule,
    shows: shows::Shows,
    sources: sources::Sources,
    downloads: downloads::Downloads,
    releases: releases::Releases,
    logs: logs::Logs,
    settings: settings::Settings,
    // Artwork
    art_cache: ArtworkCache,
    // App-level chrome
    modal_state: Option<ModalKind>,
    status_message: String,
    toasts: Toasts,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    DismissModal,
    ToastDismissed(u64),
    ArtworkLoaded {
        image_path: String,
        result: Result<std::path::PathBuf, String>,
    },
    Schedule(schedule::Message),
    Shows(shows::Message),
    Sources(sources::Message),
    Downloads(downloads::Message),
    Releases(releases::Message),
    Logs(logs::Message),
    Settings(settings::Message),
}

impl Tsuiseki {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let (client, client_error) = match DashboardClient::new(&config.server.base_url) {
            Ok(client) => (client, None),
            Err(e) => {
                let fallback = AppConfig::default().server.base_url;
                let client = DashboardClient::new(&fallback)
                    .expect("built-in default base URL is valid");
                (client, Some(e.to_string()))
            }
        };

        let mut app = Self {
            page: Page::default(),
            config,
            client,
            colors: ColorScheme::dark(),
            schedule: schedule::Schedule::new(),
            shows: shows::Shows::new(),
            sources: sources::Sources::new(),
            downloads: downloads::Downloads::new(),
            releases: releases::Releases::new(),
            logs: logs::Logs::new(),
            settings: settings::Settings::new(),
            art_cache: ArtworkCache::default(),
            modal_state: None,
            status_message: "Ready".into(),
            toasts: Toasts::default(),
        };

        let load = app.schedule.load(&app.client);
        let mut task = app.handle_action(load);
        if let Some(e) = client_error {
            let toast = app.handle_action(Action::ShowToast(
                format!("Invalid server URL in config: {e}"),
                ToastKind::Error,
            ));
            task = Task::batch([task, toast]);
        }
        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("Tsuiseki")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
                let action = match page {
                    Page::Schedule => self.schedule.load(&self.client),
                    Page::Shows => self.shows.load(&self.client),
                    Page::Sources => self.sources.load(&self.client),
                    Page::Downloads => self.downloads.load(&self.client),
                    Page::Releases => self.releases.load(&self.client),
                    Page::Logs => self.logs.load(&self.client),
                    Page::Settings => self.settings.load(&self.client),
                };
                self.handle_action(action)
            }
            Message::DismissModal => {
                self.modal_state = None;
                Task::none()
            }
            Message::ToastDismissed(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::ArtworkLoaded { image_path, result } => {
                let state = match result {
                    Ok(path) => ArtState::Loaded(path),
                    Err(_) => ArtState::Failed,
                };
                self.art_cache.states.insert(image_path, state);
                Task::none()
            }
            Message::Schedule(msg) => {
                let action = self.schedule.update(msg, &self.client);
                let task = self.handle_action(action);
                let paths: Vec<String> = self
                    .schedule
                    .entries
                    .iter()
                    .filter_map(|e| e.image_path.clone())
                    .collect();
                Task::batch([task, self.batch_request_artwork(paths)])
            }
            Message::Shows(msg) => {
                // A finished mutation closes its modal and reloads the list.
                let follow_up = match &msg {
                    shows::Message::TrackDone(Ok(()))
                    | shows::Message::EditDone(Ok(()))
                    | shows::Message::UntrackDone(Ok(())) => {
                        self.modal_state = None;
                        let load = self.shows.load(&self.client);
                        self.handle_action(load)
                    }
                    shows::Message::ArtDone(Ok(())) => {
                        let load = self.shows.load(&self.client);
                        self.handle_action(load)
                    }
                    shows::Message::ConfirmUntrack(_) => {
                        self.modal_state = None;
                        Task::none()
                    }
                    _ => Task::none(),
                };

                let action = self.shows.update(msg, &self.client);
                let task = self.handle_action(action);
                let paths: Vec<String> = self
                    .shows
                    .tracked
                    .iter()
                    .filter_map(|s| s.image_path.clone())
                    .collect();
                Task::batch([follow_up, task, self.batch_request_artwork(paths)])
            }
            Message::Sources(msg) => {
                let follow_up = match &msg {
                    sources::Message::SaveDone(Ok(())) | sources::Message::DeleteDone(Ok(())) => {
                        self.modal_state = None;
                        let load = self.sources.load(&self.client);
                        self.handle_action(load)
                    }
                    sources::Message::ConfirmDelete(_) => {
                        self.modal_state = None;
                        Task::none()
                    }
                    _ => Task::none(),
                };

                let action = self.sources.update(msg, &self.client);
                Task::batch([follow_up, self.handle_action(action)])
            }
            Message::Downloads(msg) => {
                let action = self.downloads.update(msg, &self.client);
                let task = self.handle_action(action);
                let paths: Vec<String> = self
                    .downloads
                    .episodes
                    .iter()
                    .filter_map(|e| e.image_path.clone())
                    .collect();
                Task::batch([task, self.batch_request_artwork(paths)])
            }
            Message::Releases(msg) => {
                let action = self.releases.update(msg, &self.client);
                let task = self.handle_action(action);
                let paths: Vec<String> = self
                    .releases
                    .releases
                    .iter()
                    .filter_map(|r| r.image_path.clone())
                    .collect();
                Task::batch([task, self.batch_request_artwork(paths)])
            }
            Message::Logs(msg) => {
                if matches!(msg, logs::Message::ConfirmClear) {
                    self.modal_state = None;
                }
                let action = self.logs.update(msg, &self.client);
                self.handle_action(action)
            }
            Message::Settings(msg) => {
                if matches!(msg, settings::Message::ConfirmCleanup) {
                    self.modal_state = None;
                }
                let action = self.settings.update(msg, &self.client);
                self.handle_action(action)
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::SetStatus(msg) => {
                self.status_message = msg;
                Task::none()
            }
            Action::ShowModal(kind) => {
                self.modal_state = Some(kind);
                Task::none()
            }
            Action::DismissModal => {
                self.modal_state = None;
                Task::none()
            }
            Action::RunTask(task) => task,
            Action::ShowToast(message, kind) => {
                let duration = self.config.ui.toast_duration_secs as i64;
                let (id, delay) = self.toasts.push(message, kind, duration);
                match delay {
                    Some(delay) => Task::perform(
                        async move { tokio::time::sleep(delay).await },
                        move |_| Message::ToastDismissed(id),
                    ),
                    None => Task::none(),
                }
            }
        }
    }

    /// Batch-request artwork downloads for any paths not yet cached.
    fn batch_request_artwork(&mut self, paths: Vec<String>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = paths
            .into_iter()
            .filter_map(|path| self.request_artwork(path))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    fn request_artwork(&mut self, image_path: String) -> Option<Task<Message>> {
        if self.art_cache.states.contains_key(&image_path) {
            return None;
        }
        // Check disk cache first.
        let local = artwork::art_path(&image_path);
        if local.exists() {
            self.art_cache
                .states
                .insert(image_path, ArtState::Loaded(local));
            return None;
        }
        self.art_cache
            .states
            .insert(image_path.clone(), ArtState::Loading);
        let url = artwork::art_url(&self.config.server.base_url, &image_path);
        Some(Task::perform(
            artwork::fetch_artwork(url, image_path.clone()),
            move |result| Message::ArtworkLoaded {
                image_path: image_path.clone(),
                result,
            },
        ))
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.colors;
        let nav = self.nav_rail(cs);

        let page_content: Element<'_, Message> = match self.page {
            Page::Schedule => self
                .schedule
                .view(cs, &self.art_cache)
                .map(Message::Schedule),
            Page::Shows => self.shows.view(cs, &self.art_cache).map(Message::Shows),
            Page::Sources => self.sources.view(cs).map(Message::Sources),
            Page::Downloads => self
                .downloads
                .view(cs, &self.art_cache)
                .map(Message::Downloads),
            Page::Releases => self
                .releases
                .view(cs, &self.art_cache)
                .map(Message::Releases),
            Page::Logs => self.logs.view(cs).map(Message::Logs),
            Page::Settings => self.settings.view(cs).map(Message::Settings),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        let main: Element<'_, Message> =
            column![row![nav, page_content].height(Length::Fill), status_bar].into();

        let main: Element<'_, Message> = if self.toasts.items().is_empty() {
            main
        } else {
            let overlay = container(toast::toast_overlay(
                cs,
                self.toasts.items(),
                Message::ToastDismissed,
            ))
            .align_x(iced::alignment::Horizontal::Right)
            .align_y(iced::alignment::Vertical::Top)
            .padding(style::SPACE_LG)
            .width(Length::Fill)
            .height(Length::Fill);
            stack![main, overlay].into()
        };

        if let Some(modal_kind) = &self.modal_state {
            let modal_content = self.build_modal_content(cs, modal_kind);
            let dismiss_msg = match modal_kind {
                ModalKind::AddShow | ModalKind::EditShow => {
                    Message::Shows(shows::Message::CancelModal)
                }
                ModalKind::ProfileForm => Message::Sources(sources::Message::CancelModal),
                _ => Message::DismissModal,
            };
            crate::widgets::modal(main, modal_content, dismiss_msg)
        } else {
            main
        }
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.colors)
    }

    fn build_modal_content<'a>(
        &'a self,
        cs: &ColorScheme,
        kind: &'a ModalKind,
    ) -> Element<'a, Message> {
        match kind {
            ModalKind::AddShow => self.shows.add_modal_view(cs).map(Message::Shows),
            ModalKind::EditShow => self.shows.edit_modal_view(cs).map(Message::Shows),
            ModalKind::ProfileForm => self.sources.modal_view(cs).map(Message::Sources),
            ModalKind::ConfirmDeleteProfile { id, name } => confirm_dialog(
                cs,
                "Delete source?",
                name,
                "Tracked shows bound to it will stop updating.",
                "Delete",
                Message::Sources(sources::Message::ConfirmDelete(*id)),
            ),
            ModalKind::ConfirmUntrack { id, name } => confirm_dialog(
                cs,
                "Untrack show?",
                name,
                "Its download history stays on the server.",
                "Untrack",
                Message::Shows(shows::Message::ConfirmUntrack(*id)),
            ),
            ModalKind::ConfirmClearLogs => confirm_dialog(
                cs,
                "Clear notification log?",
                "All entries will be removed.",
                "This action cannot be undone.",
                "Clear",
                Message::Logs(logs::Message::ConfirmClear),
            ),
            ModalKind::ConfirmCleanupArtwork => confirm_dialog(
                cs,
                "Clean up artwork?",
                "Files no tracked show references will be deleted.",
                "This action cannot be undone.",
                "Clean up",
                Message::Settings(settings::Message::ConfirmCleanup),
            ),
        }
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>, label: &'static str, page: Page| {
            let active = self.page == page;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::NAV_LABEL_SIZE)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(iced::Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::NavigateTo(page))
            .style(theme::nav_rail_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let rail = column![
            column![
                nav_item(icons::icon_calendar(), "Schedule", Page::Schedule),
                nav_item(icons::icon_library(), "Shows", Page::Shows),
                nav_item(icons::icon_globe(), "Sources", Page::Sources),
                nav_item(icons::icon_download(), "Downloads", Page::Downloads),
                nav_item(icons::icon_film(), "Releases", Page::Releases),
                nav_item(icons::icon_clock(), "Logs", Page::Logs),
            ]
            .spacing(style::SPACE_XS)
            .align_x(iced::Alignment::Center),
            iced::widget::Space::new().height(Length::Fill),
            container(nav_item(icons::icon_settings(), "Settings", Page::Settings))
                .align_x(iced::Alignment::Center)
                .width(Length::Fill)
                .padding(iced::Padding::new(0.0).bottom(style::SPACE_SM)),
        ]
        .align_x(iced::Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).top(style::SPACE_LG))
            .into()
    }
}

fn confirm_dialog<'a>(
    cs: &ColorScheme,
    title: &'a str,
    subject: &'a str,
    note: &'a str,
    confirm_label: &'a str,
    confirm_msg: Message,
) -> Element<'a, Message> {
    container(
        column![
            text(title)
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(subject)
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
            text(note)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
            row![
                button(text("Cancel").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::DismissModal)
                    .style(theme::ghost_button(cs)),
                button(text(confirm_label).size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(confirm_msg)
                    .style(theme::danger_button(cs)),
            ]
            .spacing(style::SPACE_SM),
        ]
        .spacing(style::SPACE_LG),
    )
    .style(theme::dialog_container(cs))
    .padding(style::SPACE_2XL)
    .into()
}
