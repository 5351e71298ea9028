use std::fmt;

/// Custom error type for GitHub export operations
#[derive(Debug)]
pub enum GhError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response (body kept for policy detection)
    Api { status: u16, body: String },
    /// JSON parsing error
    Json(String),
    /// Workbook serialization or write error
    Export(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for GhError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GhError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GhError::Api { status, body } => {
                write!(f, "API error (status {}): {}", status, body)
            }
            GhError::Json(msg) => write!(f, "JSON error: {}", msg),
            GhError::Export(msg) => write!(f, "Export error: {}", msg),
            GhError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GhError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GhError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GhError {
    fn from(err: reqwest::Error) -> Self {
        GhError::Http(err)
    }
}

impl From<serde_json::Error> for GhError {
    fn from(err: serde_json::Error) -> Self {
        GhError::Json(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for GhError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        GhError::Export(err.to_string())
    }
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, GhError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = GhError::Api {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn test_json_error_display() {
        let err = GhError::Json("Invalid JSON".to_string());
        assert!(err.to_string().contains("JSON error"));
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_export_error_display() {
        let err = GhError::Export("disk full".to_string());
        assert!(err.to_string().contains("Export error"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_config_error_display() {
        let err = GhError::Config("missing token".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing token"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GhError = json_err.into();
        match err {
            GhError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected GhError::Json"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify GhError is Send + Sync for async usage
        assert_send_sync::<GhError>();
    }

    #[test]
    fn test_error_source_non_http() {
        use std::error::Error;
        let err = GhError::Api {
            status: 500,
            body: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
