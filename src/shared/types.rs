use std::collections::BTreeMap;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Category id to category label, as served to the web client
pub type CategoryMap = BTreeMap<i32, String>;

/// Error envelope shared by every failing route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// HTTP status code repeated in the body
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=N` query parameter for paginated listings.
///
/// Kept as a raw string so that a non-numeric value falls back to the first
/// page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn test_page_defaults_to_first() {
        assert_eq!(query(None).page(), 1);
        assert_eq!(query(Some("abc")).page(), 1);
        assert_eq!(query(Some("")).page(), 1);
    }

    #[test]
    fn test_page_parses_numbers() {
        assert_eq!(query(Some("3")).page(), 3);
        assert_eq!(query(Some(" 2 ")).page(), 2);
        assert_eq!(query(Some("-1")).page(), -1);
    }
}
