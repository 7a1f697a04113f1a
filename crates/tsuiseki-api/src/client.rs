use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use tsuiseki_core::models::{
    CatalogShow, NotificationSettings, Profile, Release, ReplacementSettings, ScheduleEntry,
    ServerSettings, TrackedShow,
};

use crate::error::{error_message, ApiError};
use crate::types::{
    ActiveTorrent, ArtUrlPayload, CleanupResult, DownloadedResponse, NotificationLogsPage,
    PathSuggestions, ProfilePayload, ReplacementRecord, TrackPayload, TrackedUpdatePayload,
};

/// Client for the dashboard REST backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base: String,
    http: Client,
}

impl DashboardClient {
    /// Create a client for a backend base URL (including the `/api`
    /// prefix). A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = base_url.trim_end_matches('/').to_string();
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Check the HTTP status, mapping failures to `ApiError::Api` with
    /// the backend's `{"error": ...}` message when present.
    async fn check_response(resp: Response) -> Result<Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            let message = error_message(&body);
            tracing::warn!(status, %message, "dashboard API error");
            Err(ApiError::Api { status, message })
        }
    }

    /// Send a request and decode its JSON body.
    async fn fetch<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, ApiError> {
        let resp = Self::check_response(req.send().await?).await?;
        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send a request, check the status, and discard the body.
    async fn send(req: RequestBuilder) -> Result<(), ApiError> {
        Self::check_response(req.send().await?).await?;
        Ok(())
    }

    fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> RequestBuilder {
        self.http.post(self.url(path)).json(body)
    }

    fn put_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> RequestBuilder {
        self.http.put(self.url(path)).json(body)
    }

    // ── Settings ─────────────────────────────────────────────────

    pub async fn get_settings(&self) -> Result<ServerSettings, ApiError> {
        Self::fetch(self.http.get(self.url("/settings"))).await
    }

    pub async fn save_settings(&self, settings: &ServerSettings) -> Result<(), ApiError> {
        Self::send(self.post_json("/settings", settings)).await
    }

    /// Delete artwork files not referenced by any tracked show.
    pub async fn cleanup_artwork(&self) -> Result<CleanupResult, ApiError> {
        Self::fetch(self.http.post(self.url("/settings/artwork/cleanup"))).await
    }

    pub async fn get_replacement_settings(&self) -> Result<ReplacementSettings, ApiError> {
        Self::fetch(self.http.get(self.url("/settings/replacements"))).await
    }

    pub async fn save_replacement_settings(
        &self,
        settings: &ReplacementSettings,
    ) -> Result<(), ApiError> {
        Self::send(self.put_json("/settings/replacements", settings)).await
    }

    // ── Replacements ─────────────────────────────────────────────

    pub async fn replacement_history(&self) -> Result<Vec<ReplacementRecord>, ApiError> {
        Self::fetch(self.http.get(self.url("/replacements/history"))).await
    }

    pub async fn pending_replacements(&self) -> Result<Vec<ReplacementRecord>, ApiError> {
        Self::fetch(self.http.get(self.url("/replacements/pending"))).await
    }

    // ── Profiles (sources) ───────────────────────────────────────

    pub async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        Self::fetch(self.http.get(self.url("/profiles"))).await
    }

    pub async fn create_profile(&self, payload: &ProfilePayload) -> Result<(), ApiError> {
        Self::send(self.post_json("/profiles", payload)).await
    }

    pub async fn update_profile(&self, id: i64, payload: &ProfilePayload) -> Result<(), ApiError> {
        Self::send(self.put_json(&format!("/profiles/{id}"), payload)).await
    }

    pub async fn delete_profile(&self, id: i64) -> Result<(), ApiError> {
        Self::send(self.http.delete(self.url(&format!("/profiles/{id}")))).await
    }

    // ── Show catalog + tracking ──────────────────────────────────

    /// Search the cached show catalog. An empty query lists everything.
    pub async fn search_shows(&self, query: &str) -> Result<Vec<CatalogShow>, ApiError> {
        let mut req = self.http.get(self.url("/shows"));
        if !query.is_empty() {
            req = req.query(&[("q", query)]);
        }
        Self::fetch(req).await
    }

    pub async fn list_tracked(&self) -> Result<Vec<TrackedShow>, ApiError> {
        Self::fetch(self.http.get(self.url("/tracked"))).await
    }

    pub async fn track_show(&self, payload: &TrackPayload) -> Result<(), ApiError> {
        Self::send(self.post_json("/tracked", payload)).await
    }

    pub async fn update_tracked(
        &self,
        id: i64,
        payload: &TrackedUpdatePayload,
    ) -> Result<(), ApiError> {
        Self::send(self.put_json(&format!("/tracked/{id}"), payload)).await
    }

    pub async fn untrack_show(&self, id: i64) -> Result<(), ApiError> {
        Self::send(self.http.delete(self.url(&format!("/tracked/{id}")))).await
    }

    /// Upload artwork for a tracked show from a local file.
    pub async fn upload_art(&self, id: i64, path: &std::path::Path) -> Result<(), ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Parse(format!("cannot read {}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("artwork")
            .to_string();
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        Self::send(
            self.http
                .post(self.url(&format!("/tracked/{id}/art")))
                .multipart(form),
        )
        .await
    }

    /// Set artwork for a tracked show from a remote URL.
    pub async fn upload_art_url(&self, id: i64, url: &str) -> Result<(), ApiError> {
        let payload = ArtUrlPayload { url: url.to_string() };
        Self::send(self.post_json(&format!("/tracked/{id}/art/url"), &payload)).await
    }

    // ── Schedule ─────────────────────────────────────────────────

    pub async fn get_schedule(&self) -> Result<Vec<ScheduleEntry>, ApiError> {
        Self::fetch(self.http.get(self.url("/schedule"))).await
    }

    // ── Downloads + releases ─────────────────────────────────────

    pub async fn downloaded_episodes(&self) -> Result<DownloadedResponse, ApiError> {
        Self::fetch(self.http.get(self.url("/downloaded"))).await
    }

    pub async fn list_releases(&self) -> Result<Vec<Release>, ApiError> {
        Self::fetch(self.http.get(self.url("/releases"))).await
    }

    pub async fn active_torrents(&self) -> Result<Vec<ActiveTorrent>, ApiError> {
        Self::fetch(self.http.get(self.url("/transmission/torrents"))).await
    }

    // ── Utilities ────────────────────────────────────────────────

    pub async fn path_suggestions(&self, path: &str) -> Result<PathSuggestions, ApiError> {
        Self::fetch(
            self.http
                .get(self.url("/utils/path-suggestions"))
                .query(&[("path", path)]),
        )
        .await
    }

    // ── Notifications ────────────────────────────────────────────

    pub async fn notification_settings(&self) -> Result<NotificationSettings, ApiError> {
        Self::fetch(self.http.get(self.url("/notifications/settings"))).await
    }

    pub async fn save_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<(), ApiError> {
        Self::send(self.put_json("/notifications/settings", settings)).await
    }

    pub async fn notification_logs(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<NotificationLogsPage, ApiError> {
        Self::fetch(
            self.http
                .get(self.url("/notifications/logs"))
                .query(&[("limit", limit), ("offset", offset)]),
        )
        .await
    }

    pub async fn clear_notification_logs(&self) -> Result<(), ApiError> {
        Self::send(self.http.post(self.url("/notifications/logs/clear"))).await
    }

    pub async fn send_test_notification(&self) -> Result<(), ApiError> {
        Self::send(self.http.post(self.url("/notifications/test"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = DashboardClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.url("/schedule"), "http://localhost:5000/api/schedule");
    }

    #[test]
    fn non_http_base_is_rejected() {
        assert!(matches!(
            DashboardClient::new("localhost:5000"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
