//! Centralized error classification for backend polling

use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Maps backend failures onto the log level they are reported at
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Rate limiting - low priority, the next tick retries anyway
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Missing or expired session - needs operator attention
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // Backend and client disagree on the payload shape
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Network(_) => LogLevel::Warn,

            // Other errors
            _ => LogLevel::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_http_errors() {
        let handler = ErrorHandler::new();
        assert_eq!(handler.classify_error(&http(429)), LogLevel::Debug);
        assert_eq!(handler.classify_error(&http(503)), LogLevel::Warn);
        assert_eq!(handler.classify_error(&http(401)), LogLevel::Error);
        assert_eq!(handler.classify_error(&http(403)), LogLevel::Error);
        assert_eq!(handler.classify_error(&http(404)), LogLevel::Warn);
    }

    #[test]
    fn test_classify_decode_error() {
        let decode = serde_json::from_str::<u32>("\"not a number\"").unwrap_err();
        assert_eq!(
            ErrorHandler::new().classify_error(&ApiError::Decode(decode)),
            LogLevel::Error
        );
    }
}
