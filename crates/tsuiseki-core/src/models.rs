use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configured content feed ("source" in the UI, "profile" on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub base_url: String,
    pub uploader: Option<String>,
    pub quality: Option<String>,
    pub color: Option<String>,
    pub interval: Option<u32>,
}

/// A show the user monitors for new releases, bound to one source profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedShow {
    pub id: i64,
    pub show_name: String,
    pub season_name: Option<String>,
    pub max_age: Option<u32>,
    pub image_path: Option<String>,
    pub color: Option<String>,
    pub profile_name: String,
    pub profile_id: i64,
}

/// A past, already-observed release for a tracked show.
///
/// `release_date` is a naive ISO 8601 string the backend reports in UTC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseEvent {
    pub release_date: String,
    pub torrent_name: String,
    pub episode: Option<String>,
}

/// A backend-estimated future release. Opaque to the client beyond
/// its date and episode label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub date: String,
    pub episode: String,
}

/// One tracked show's slice of the schedule: past releases plus
/// predicted future ones. Recomputed by the backend on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub show_name: String,
    pub color: Option<String>,
    pub image_path: Option<String>,
    #[serde(default)]
    pub history: Vec<ReleaseEvent>,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// A downloaded episode as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadedEpisode {
    pub id: i64,
    pub tracked_show_id: i64,
    pub show_name: String,
    pub season_name: Option<String>,
    pub torrent_name: String,
    pub episode_number: Option<String>,
    pub version: Option<u32>,
    pub subgroup: Option<String>,
    pub published_at: Option<String>,
    pub added_at: String,
    #[serde(default)]
    pub is_deleted: bool,
    pub replaced_by: Option<i64>,
    pub image_path: Option<String>,
    pub profile_name: Option<String>,
    pub profile_color: Option<String>,
}

impl DownloadedEpisode {
    /// Preferred timestamp for ordering: published time, falling back
    /// to when the torrent was added.
    pub fn sort_date(&self) -> Option<DateTime<Utc>> {
        parse_utc(self.published_at.as_deref().unwrap_or(&self.added_at))
    }
}

/// A recent release row (the "Releases" tab).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub torrent_name: String,
    pub show_name: Option<String>,
    pub season_name: Option<String>,
    pub episode_number: Option<String>,
    pub extracted_episode: Option<String>,
    pub subgroup: Option<String>,
    pub added_at: String,
    pub image_path: Option<String>,
    pub likely_filename: Option<String>,
}

impl Release {
    /// Display name: show name when known, raw torrent name otherwise.
    pub fn display_name(&self) -> &str {
        self.show_name.as_deref().unwrap_or(&self.torrent_name)
    }

    /// Episode label, preferring the freshly extracted one over the
    /// stored database value.
    pub fn episode(&self) -> Option<&str> {
        self.extracted_episode
            .as_deref()
            .or(self.episode_number.as_deref())
    }
}

/// A notification history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationLog {
    pub id: i64,
    pub message: String,
    #[serde(rename = "type")]
    pub log_type: String,
    pub torrent_name: Option<String>,
    pub timestamp: String,
}

/// A show offered by the add-show catalog search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogShow {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<CatalogSource>,
}

/// One source a catalog show is available from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSource {
    pub profile_id: i64,
    pub profile_name: String,
    pub uploader: Option<String>,
    pub quality: Option<String>,
    pub color: Option<String>,
}

/// General server settings. The backend stores these as a string map;
/// every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    pub download_directory: Option<String>,
    pub transmission_host: Option<String>,
    pub transmission_port: Option<String>,
    pub setup_complete: Option<String>,
}

impl ServerSettings {
    pub fn is_setup_complete(&self) -> bool {
        self.setup_complete.as_deref() == Some("1")
    }
}

/// Replacement-policy settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplacementSettings {
    pub enabled: Option<bool>,
    pub grace_period_hours: Option<u32>,
}

/// Notification delivery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub enabled: Option<bool>,
    pub service_url: Option<String>,
}

/// Parse a backend date string as UTC.
///
/// The backend emits naive ISO 8601 with no offset; the contract is
/// that these are UTC, so parsing appends the missing `Z` semantically.
pub fn parse_utc(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parse_utc_accepts_backend_formats() {
        let dt = parse_utc("2024-03-15 23:00:00").unwrap();
        assert_eq!(dt.hour(), 23);
        assert!(parse_utc("2024-03-15T23:00:00").is_some());
        assert!(parse_utc("2024-03-15").is_some());
        assert!(parse_utc("not a date").is_none());
    }

    #[test]
    fn parse_utc_is_offset_free() {
        // A naive backend string must land on the same UTC instant no
        // matter where the client runs.
        let dt = parse_utc("2024-03-15T23:00:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-15T23:00:00+00:00");
    }

    #[test]
    fn schedule_entry_deserializes_with_missing_lists() {
        let entry: ScheduleEntry =
            serde_json::from_str(r#"{"id": 1, "show_name": "Frieren"}"#).unwrap();
        assert!(entry.history.is_empty());
        assert!(entry.predictions.is_empty());
    }

    #[test]
    fn release_prefers_extracted_episode() {
        let release = Release {
            torrent_name: "[Sub] Frieren - 08.mkv".into(),
            show_name: Some("Frieren".into()),
            season_name: None,
            episode_number: Some("07".into()),
            extracted_episode: Some("08".into()),
            subgroup: None,
            added_at: "2024-03-15 10:00:00".into(),
            image_path: None,
            likely_filename: None,
        };
        assert_eq!(release.episode(), Some("08"));
        assert_eq!(release.display_name(), "Frieren");
    }
}
