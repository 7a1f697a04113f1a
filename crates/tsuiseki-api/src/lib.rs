//! REST client for the media-tracking dashboard backend.
//!
//! A thin pass-through collaborator: no retries, no timeouts, no
//! caching. Non-2xx responses become [`error::ApiError::Api`] with the
//! backend's `{"error": ...}` message when one is present.

pub mod client;
pub mod error;
pub mod types;

pub use client::DashboardClient;
pub use error::ApiError;
