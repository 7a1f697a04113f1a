use thiserror::Error;

/// Fallback for non-2xx responses whose body carries no error message.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Errors from the dashboard API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Extract the backend's error message from a response body.
///
/// The backend reports failures as `{"error": "..."}`; anything else
/// (empty body, HTML error page, malformed JSON) maps to the generic
/// fallback string.
pub fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_yields_its_message() {
        assert_eq!(error_message(r#"{"error":"not found"}"#), "not found");
    }

    #[test]
    fn unparsable_body_yields_generic_fallback() {
        assert_eq!(error_message(""), GENERIC_SERVER_ERROR);
        assert_eq!(error_message("<html>502</html>"), GENERIC_SERVER_ERROR);
        assert_eq!(error_message(r#"{"detail":"nope"}"#), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn api_error_displays_the_message_verbatim() {
        let err = ApiError::Api {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "not found");
    }
}
