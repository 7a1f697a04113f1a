use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task};

use chrono::{Local, Utc};
use tsuiseki_api::DashboardClient;
use tsuiseki_core::format::{display_date, month_name};
use tsuiseki_core::models::ScheduleEntry;
use tsuiseki_core::schedule::{month_grid, upcoming, DayCell, EventKind, MonthGrid, UpcomingRelease};

use crate::app;
use crate::artwork::ArtworkCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Schedule screen: month calendar plus the upcoming-releases panel.
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Vec<ScheduleEntry>, String>),
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn update(&mut self, msg: Message, client: &DashboardClient) -> Action {
        match msg {
            Message::Refresh => self.load(client),
            Message::Loaded(Ok(entries)) => {
                self.loading = false;
                self.error = None;
                self.entries = entries;
                Action::None
            }
            Message::Loaded(Err(e)) => {
                self.loading = false;
                self.error = Some(e.clone());
                Action::ShowToast(format!("Schedule load failed: {e}"), ToastKind::Error)
            }
        }
    }

    /// Fire a task to fetch the schedule from the backend.
    pub fn load(&mut self, client: &DashboardClient) -> Action {
        self.loading = true;
        let client = client.clone();
        Action::RunTask(Task::perform(
            async move { client.get_schedule().await.map_err(|e| e.to_string()) },
            |r| app::Message::Schedule(Message::Loaded(r)),
        ))
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme, art: &ArtworkCache) -> Element<'a, Message> {
        if let Some(e) = &self.error {
            return error_state(cs, e);
        }

        let today = Local::now().date_naive();
        let grid = month_grid(&self.entries, today);
        let up = upcoming(&self.entries, Utc::now());

        let header = row![
            text(format!("{} {}", month_name(grid.month), grid.year))
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

        let calendar = calendar_view(cs, &grid);
        let upcoming_panel = upcoming_panel(cs, art, &up);

        let body = row![
            container(widgets::styled_scrollable(calendar, cs).height(Length::Fill))
                .width(Length::FillPortion(3)),
            container(widgets::styled_scrollable(upcoming_panel, cs).height(Length::Fill))
                .width(Length::FillPortion(1)),
        ]
        .spacing(style::SPACE_LG)
        .height(Length::Fill);

        container(column![header, body].spacing(style::SPACE_LG))
            .padding(style::SPACE_XL)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn calendar_view<'a>(cs: &ColorScheme, grid: &MonthGrid) -> Element<'a, Message> {
    let mut weekday_row = row![].spacing(style::SPACE_XS);
    for name in WEEKDAYS {
        weekday_row = weekday_row.push(
            container(
                text(name)
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .align_x(iced::alignment::Horizontal::Center)
            .width(Length::FillPortion(1)),
        );
    }

    let mut weeks = column![weekday_row].spacing(style::SPACE_XS);

    for chunk in grid.cells.chunks(7) {
        let mut week = row![].spacing(style::SPACE_XS);
        for cell in chunk {
            week = week.push(day_cell_view(cs, cell));
        }
        // The trailing week is usually partial; pad it so columns align.
        for _ in chunk.len()..7 {
            week = week.push(
                container(Space::new())
                    .width(Length::FillPortion(1))
                    .height(Length::Fixed(style::DAY_CELL_MIN_HEIGHT)),
            );
        }
        weeks = weeks.push(week);
    }

    weeks.width(Length::Fill).into()
}

fn day_cell_view<'a>(cs: &ColorScheme, cell: &DayCell) -> Element<'a, Message> {
    let Some(day) = cell.day else {
        return container(Space::new())
            .style(theme::day_cell_empty())
            .width(Length::FillPortion(1))
            .height(Length::Fixed(style::DAY_CELL_MIN_HEIGHT))
            .into();
    };

    let day_number = text(day.to_string())
        .size(style::TEXT_SM)
        .font(style::FONT_HEADING)
        .color(if cell.is_today {
            cs.primary
        } else {
            cs.on_surface_variant
        });

    let mut content = column![day_number].spacing(style::SPACE_XXS);

    for event in &cell.events {
        let accent = event
            .color
            .as_deref()
            .and_then(theme::accent_color)
            .unwrap_or(cs.primary);
        let label = match &event.kind {
            EventKind::Downloaded { episode, .. } => match episode {
                Some(ep) => format!("{} · E{ep}", event.show_name),
                None => event.show_name.clone(),
            },
            EventKind::Predicted { episode } => format!("{} · E{episode}?", event.show_name),
        };
        content = content.push(
            container(
                text(label)
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_TIGHT)
                    .wrapping(iced::widget::text::Wrapping::None),
            )
            .padding([style::SPACE_XXS, style::SPACE_XS])
            .style(theme::event_chip(accent))
            .width(Length::Fill)
            .clip(true),
        );
    }

    container(content)
        .style(theme::day_cell(cs, cell.is_today))
        .padding(style::SPACE_XS)
        .width(Length::FillPortion(1))
        .height(Length::Shrink)
        .into()
}

fn upcoming_panel<'a>(
    cs: &ColorScheme,
    art: &ArtworkCache,
    upcoming: &[UpcomingRelease],
) -> Element<'a, Message> {
    let mut panel = column![text("Upcoming")
        .size(style::TEXT_LG)
        .font(style::FONT_HEADING)
        .line_height(style::LINE_HEIGHT_TIGHT)]
    .spacing(style::SPACE_SM);

    if upcoming.is_empty() {
        return panel
            .push(
                text("No predicted releases.")
                    .size(style::TEXT_SM)
                    .color(cs.outline),
            )
            .into();
    }

    for item in upcoming {
        let accent = item.color.as_deref().and_then(theme::accent_color);
        let badge = widgets::art_badge(
            cs,
            art,
            item.image_path.as_deref(),
            &item.show_name,
            accent,
            style::ART_BADGE_SIZE,
        );

        let mut info = column![
            text(item.show_name.clone())
                .size(style::TEXT_SM)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .wrapping(iced::widget::text::Wrapping::None),
            text(format!("Episode {} · {}", item.episode, display_date(&item.date)))
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XXS)
        .clip(true);

        if item.overdue {
            info = info.push(
                text("Overdue")
                    .size(style::TEXT_XS)
                    .color(cs.error)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }

        panel = panel.push(
            container(
                row![badge, info.width(Length::Fill)]
                    .spacing(style::SPACE_SM)
                    .align_y(Alignment::Center),
            )
            .style(theme::card(cs))
            .padding(style::SPACE_SM)
            .width(Length::Fill),
        );
    }

    panel.into()
}

fn error_state<'a>(cs: &ColorScheme, error: &str) -> Element<'a, Message> {
    let content = column![
        text("Could not load the schedule")
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .color(cs.on_surface_variant),
        text(error.to_string()).size(style::TEXT_SM).color(cs.outline),
        button(text("Retry").size(style::TEXT_SM))
            .padding([style::SPACE_XS, style::SPACE_XL])
            .on_press(Message::Refresh)
            .style(theme::ghost_button(cs)),
    ]
    .spacing(style::SPACE_MD)
    .align_x(Alignment::Center);

    iced::widget::center(content).into()
}
