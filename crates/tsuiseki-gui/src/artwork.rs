//! Disk-backed cache for show artwork served by the dashboard backend.
//!
//! `image_path` values are server-relative (e.g. `art/foo.jpg`). Images
//! are fetched once, written to the platform cache directory, and then
//! loaded from disk by the image widget.

use std::collections::HashMap;
use std::path::PathBuf;

/// Loading state for a single artwork file, keyed by its `image_path`.
#[derive(Debug, Clone)]
pub enum ArtState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

#[derive(Debug, Default)]
pub struct ArtworkCache {
    pub states: HashMap<String, ArtState>,
}

/// Local cache path for an artwork file.
pub fn art_path(image_path: &str) -> PathBuf {
    let file_name = image_path.replace(['/', '\\'], "_");
    cache_dir().join(file_name)
}

fn cache_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tsuiseki")
        .map(|dirs| dirs.cache_dir().join("artwork"))
        .unwrap_or_else(|| PathBuf::from(".tsuiseki-cache"))
}

/// Absolute URL for a server-relative artwork path.
///
/// The API base ends in `/api`; artwork is served from the site root.
pub fn art_url(api_base: &str, image_path: &str) -> String {
    let root = api_base
        .trim_end_matches('/')
        .trim_end_matches("/api")
        .trim_end_matches('/');
    format!("{root}/{}", image_path.trim_start_matches('/'))
}

/// Download one artwork file into the cache, returning its local path.
pub async fn fetch_artwork(url: String, image_path: String) -> Result<PathBuf, String> {
    let resp = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("artwork fetch failed: {}", resp.status()));
    }
    let bytes = resp.bytes().await.map_err(|e| e.to_string())?;

    let dest = art_path(&image_path);
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }
    tokio::fs::write(&dest, &bytes)
        .await
        .map_err(|e| e.to_string())?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_url_strips_the_api_suffix() {
        assert_eq!(
            art_url("http://localhost:5000/api", "art/foo.jpg"),
            "http://localhost:5000/art/foo.jpg"
        );
        assert_eq!(
            art_url("http://localhost:5000/api/", "/art/foo.jpg"),
            "http://localhost:5000/art/foo.jpg"
        );
    }

    #[test]
    fn art_path_flattens_directories() {
        let path = art_path("art/foo.jpg");
        assert!(path.ends_with("art_foo.jpg"));
    }
}
