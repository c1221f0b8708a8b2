// crates/citysuggest-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong between a keystroke and a rendered list.
///
/// None of these are fatal to the widget: the controller logs them, hides
/// the suggestion list and waits for the next keystroke.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The request never produced a response (network down, CORS, DNS...).
    #[error("lookup request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("lookup service returned HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array of places.
    #[error("malformed lookup payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SuggestError {
    /// `true` for failures that happen at lookup time, as opposed to
    /// configuration mistakes caught when the widget is attached.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            SuggestError::Transport(_) | SuggestError::Status(_) | SuggestError::Payload(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SuggestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code() {
        let err = SuggestError::Status(500);
        assert_eq!(err.to_string(), "lookup service returned HTTP 500");
        assert!(err.is_lookup_failure());
    }

    #[test]
    fn config_errors_are_not_lookup_failures() {
        assert!(!SuggestError::Config("limit".into()).is_lookup_failure());
    }
}
