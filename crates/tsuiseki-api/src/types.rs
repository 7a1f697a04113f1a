//! Request payloads and response envelopes for the dashboard API.

use serde::{Deserialize, Serialize};

use tsuiseki_core::models::{DownloadedEpisode, NotificationLog};

/// Payload for creating or updating a source profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePayload {
    pub name: String,
    pub base_url: String,
    pub uploader: Option<String>,
    pub quality: Option<String>,
    pub color: Option<String>,
    pub interval: u32,
}

/// Payload for tracking a new show.
#[derive(Debug, Clone, Serialize)]
pub struct TrackPayload {
    pub show_name: String,
    pub profile_id: i64,
    pub season_name: String,
    pub max_age: u32,
}

/// Payload for editing a tracked show.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedUpdatePayload {
    pub show_name: String,
    pub season_name: Option<String>,
    pub max_age: Option<u32>,
}

/// Payload for setting artwork from a remote URL.
#[derive(Debug, Clone, Serialize)]
pub struct ArtUrlPayload {
    pub url: String,
}

/// Response of the artwork cleanup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CleanupResult {
    pub count: u64,
}

/// A page of notification logs.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationLogsPage {
    #[serde(default)]
    pub logs: Vec<NotificationLog>,
    pub total: Option<u64>,
}

/// Envelope of the downloaded-episodes endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadedResponse {
    #[serde(default)]
    pub downloaded: Vec<DownloadedEpisode>,
}

/// Filesystem path completions for the settings form.
#[derive(Debug, Clone, Deserialize)]
pub struct PathSuggestions {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// One replacement activity record (pending or historical).
#[derive(Debug, Clone, Deserialize)]
pub struct ReplacementRecord {
    pub id: i64,
    pub show_name: Option<String>,
    pub original_torrent: String,
    pub replacement_torrent: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

/// An active torrent as reported by the transmission proxy endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveTorrent {
    pub id: i64,
    pub name: String,
    pub percent_done: Option<f64>,
    pub status: Option<String>,
    pub eta: Option<i64>,
}
