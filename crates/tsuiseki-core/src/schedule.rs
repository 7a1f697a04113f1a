//! Month-grid and upcoming-list construction from schedule entries.
//!
//! Event placement matches on the UTC calendar day embedded in the
//! backend's date strings, while the "today" highlight uses the
//! viewer's local date. The asymmetry is inherited behavior the rest
//! of the product documents; do not harmonize the two without a
//! backend-side decision.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::{parse_utc, ScheduleEntry};

/// What happened (or is expected to happen) on a given day for a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A release already observed and downloaded.
    Downloaded {
        torrent_name: String,
        episode: Option<String>,
    },
    /// A backend-predicted future release.
    Predicted { episode: String },
}

/// One event chip in a day cell.
#[derive(Debug, Clone)]
pub struct DayEvent {
    pub show_name: String,
    pub color: Option<String>,
    pub kind: EventKind,
}

/// One cell of the month grid. Leading alignment cells have `day: None`.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub day: Option<u32>,
    pub is_today: bool,
    pub events: Vec<DayEvent>,
}

impl DayCell {
    fn empty() -> Self {
        Self {
            day: None,
            is_today: false,
            events: Vec::new(),
        }
    }
}

/// A calendar month laid out as a flat run of cells, starting with the
/// leading empties that align day 1 under its weekday column (0=Sun).
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

/// The next predicted episode for one show.
#[derive(Debug, Clone)]
pub struct UpcomingRelease {
    pub show_name: String,
    pub color: Option<String>,
    pub image_path: Option<String>,
    pub episode: String,
    /// Raw backend date string, kept for display.
    pub date: String,
    pub when: Option<DateTime<Utc>>,
    pub overdue: bool,
}

/// Number of days in a Gregorian month: day 0 of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Build the calendar grid for the month containing `today_local`.
///
/// `today_local` is the viewer's local date: it selects which month is
/// rendered and which cell gets the today highlight. Events inside the
/// grid are placed by UTC-day prefix match against each entry's date
/// strings, so a release at 23:00 UTC stays on its UTC day even for
/// viewers west of Greenwich.
pub fn month_grid(entries: &[ScheduleEntry], today_local: NaiveDate) -> MonthGrid {
    let year = today_local.year();
    let month = today_local.month();

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of the current month is a valid date");
    let first_weekday = first.weekday().num_days_from_sunday();
    let day_count = days_in_month(year, month);

    let mut cells = Vec::with_capacity((first_weekday + day_count) as usize);
    for _ in 0..first_weekday {
        cells.push(DayCell::empty());
    }

    for day in 1..=day_count {
        let date_str = format!("{year:04}-{month:02}-{day:02}");
        let mut events = Vec::new();

        for entry in entries {
            for release in &entry.history {
                if release.release_date.starts_with(&date_str) {
                    events.push(DayEvent {
                        show_name: entry.show_name.clone(),
                        color: entry.color.clone(),
                        kind: EventKind::Downloaded {
                            torrent_name: release.torrent_name.clone(),
                            episode: release.episode.clone(),
                        },
                    });
                }
            }
            for prediction in &entry.predictions {
                if prediction.date.starts_with(&date_str) {
                    events.push(DayEvent {
                        show_name: entry.show_name.clone(),
                        color: entry.color.clone(),
                        kind: EventKind::Predicted {
                            episode: prediction.episode.clone(),
                        },
                    });
                }
            }
        }

        cells.push(DayCell {
            day: Some(day),
            is_today: day == today_local.day(),
            events,
        });
    }

    MonthGrid { year, month, cells }
}

/// Build the ranked upcoming list: the first (nearest) prediction of
/// every show that has one, sorted soonest first.
///
/// `overdue` is a render-only flag set when the predicted instant is
/// strictly before `now`.
pub fn upcoming(entries: &[ScheduleEntry], now: DateTime<Utc>) -> Vec<UpcomingRelease> {
    let mut list: Vec<UpcomingRelease> = entries
        .iter()
        .filter_map(|entry| {
            let next = entry.predictions.first()?;
            let when = parse_utc(&next.date);
            Some(UpcomingRelease {
                show_name: entry.show_name.clone(),
                color: entry.color.clone(),
                image_path: entry.image_path.clone(),
                episode: next.episode.clone(),
                date: next.date.clone(),
                when,
                overdue: when.is_some_and(|d| d < now),
            })
        })
        .collect();

    // Unparseable dates sort after everything else.
    list.sort_by_key(|u| (u.when.is_none(), u.when));
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Prediction, ReleaseEvent};
    use chrono::TimeZone;

    fn entry(name: &str, history: Vec<ReleaseEvent>, predictions: Vec<Prediction>) -> ScheduleEntry {
        ScheduleEntry {
            id: 0,
            show_name: name.into(),
            color: None,
            image_path: None,
            history,
            predictions,
        }
    }

    fn release(date: &str) -> ReleaseEvent {
        ReleaseEvent {
            release_date: date.into(),
            torrent_name: format!("[Sub] x - {date}.mkv"),
            episode: Some("05".into()),
        }
    }

    fn prediction(date: &str) -> Prediction {
        Prediction {
            date: date.into(),
            episode: "06".into(),
        }
    }

    #[test]
    fn cell_count_is_offset_plus_days() {
        // March 2024: 31 days, March 1 is a Friday (offset 5).
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let grid = month_grid(&[], today);
        assert_eq!(grid.cells.len(), 5 + 31);
        assert!(grid.cells[..5].iter().all(|c| c.day.is_none()));
        assert_eq!(grid.cells[5].day, Some(1));
        assert_eq!(grid.cells.last().unwrap().day, Some(31));
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn event_lands_on_its_utc_day() {
        // 23:00 UTC on March 15 is already March 16 in UTC+2 and still
        // March 15 in UTC-8; placement must use the UTC day regardless.
        let entries = vec![entry(
            "Frieren",
            vec![release("2024-03-15T23:00:00")],
            vec![],
        )];
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let grid = month_grid(&entries, today);

        let cell = grid
            .cells
            .iter()
            .find(|c| c.day == Some(15))
            .expect("March 15 cell");
        assert_eq!(cell.events.len(), 1);
        assert!(matches!(cell.events[0].kind, EventKind::Downloaded { .. }));

        let next_day = grid.cells.iter().find(|c| c.day == Some(16)).unwrap();
        assert!(next_day.events.is_empty());
    }

    #[test]
    fn predictions_render_as_predicted_events() {
        let entries = vec![entry("Frieren", vec![], vec![prediction("2024-03-22 12:00:00")])];
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let grid = month_grid(&entries, today);

        let cell = grid.cells.iter().find(|c| c.day == Some(22)).unwrap();
        assert_eq!(cell.events.len(), 1);
        assert_eq!(
            cell.events[0].kind,
            EventKind::Predicted { episode: "06".into() }
        );
    }

    #[test]
    fn today_highlight_follows_the_local_date_parameter() {
        // Viewer in UTC-8, late local evening of March 15: UTC is
        // already March 16. The highlight tracks the local date while
        // events stay on their UTC day.
        let entries = vec![entry(
            "Frieren",
            vec![release("2024-03-16T04:00:00")],
            vec![],
        )];
        let local_today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let grid = month_grid(&entries, local_today);

        let highlighted: Vec<u32> = grid
            .cells
            .iter()
            .filter(|c| c.is_today)
            .filter_map(|c| c.day)
            .collect();
        assert_eq!(highlighted, vec![15]);

        // The event still sits on its UTC day, one cell later.
        let event_cell = grid.cells.iter().find(|c| c.day == Some(16)).unwrap();
        assert_eq!(event_cell.events.len(), 1);
    }

    #[test]
    fn empty_shows_contribute_nothing() {
        let entries = vec![entry("Silent", vec![], vec![])];
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let grid = month_grid(&entries, today);
        assert!(grid.cells.iter().all(|c| c.events.is_empty()));
        assert!(upcoming(&entries, Utc::now()).is_empty());
    }

    #[test]
    fn upcoming_sorts_soonest_first() {
        let entries = vec![
            entry("Later", vec![], vec![prediction("2024-03-01 12:00:00")]),
            entry("Sooner", vec![], vec![prediction("2024-02-20 12:00:00")]),
        ];
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let list = upcoming(&entries, now);
        let names: Vec<&str> = list.iter().map(|u| u.show_name.as_str()).collect();
        assert_eq!(names, vec!["Sooner", "Later"]);
    }

    #[test]
    fn upcoming_takes_only_the_first_prediction_per_show() {
        let entries = vec![entry(
            "Frieren",
            vec![],
            vec![
                prediction("2024-03-01 12:00:00"),
                prediction("2024-03-08 12:00:00"),
            ],
        )];
        let list = upcoming(&entries, Utc::now());
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].date, "2024-03-01 12:00:00");
    }

    #[test]
    fn overdue_is_strictly_before_now() {
        let entries = vec![entry("Frieren", vec![], vec![prediction("2024-03-01 12:00:00")])];

        let after = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 1).unwrap();
        assert!(upcoming(&entries, after)[0].overdue);

        // Exactly equal is not overdue.
        let exact = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert!(!upcoming(&entries, exact)[0].overdue);

        let before = Utc.with_ymd_and_hms(2024, 3, 1, 11, 59, 59).unwrap();
        assert!(!upcoming(&entries, before)[0].overdue);
    }
}
