use serde::{Deserialize, Serialize};

/// Envelope every API endpoint answers with
///
/// `success: false` inside a 2xx body is a business-level failure and is
/// handed to the caller as data, with `message` describing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    // No `default` here: it would demand `T: Default`. A missing `data`
    // still reads as `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Take the payload, dropping the envelope
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Paging information for a list response
///
/// Totals may be computed lazily by the server and should be treated as
/// estimates. They are `None` when the server left them out. The result
/// endpoints name the page `current`, which is accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(alias = "current")]
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl PaginationMeta {
    /// Whether a page follows this one; `None` when the total is unknown
    pub fn has_next_page(&self) -> Option<bool> {
        self.total_pages.map(|total| self.page < total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_list_response() {
        let body = json!({
            "success": true,
            "data": [1, 2, 3],
            "pagination": {"page": 1, "pageSize": 3, "totalItems": 7, "totalPages": 3}
        });
        let response: ApiResponse<Vec<u32>> = serde_json::from_value(body).unwrap();

        assert!(response.is_success());
        let pagination = response.pagination.unwrap();
        assert_eq!(pagination.page_size, 3);
        assert_eq!(pagination.total_items, Some(7));
        assert_eq!(pagination.has_next_page(), Some(true));
        assert_eq!(response.into_data(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_business_failure() {
        let body = json!({"success": false, "message": "Test not found"});
        let response: ApiResponse<Vec<u32>> = serde_json::from_value(body).unwrap();

        assert!(!response.is_success());
        assert_eq!(response.data, None);
        assert_eq!(response.message.as_deref(), Some("Test not found"));
        assert_eq!(response.pagination, None);
    }

    #[test]
    fn test_missing_totals_are_unknown() {
        let meta: PaginationMeta =
            serde_json::from_value(json!({"page": 2, "pageSize": 20})).unwrap();
        assert_eq!(meta.total_items, None);
        assert_eq!(meta.total_pages, None);
        assert_eq!(meta.has_next_page(), None);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let meta: PaginationMeta = serde_json::from_value(
            json!({"page": 3, "pageSize": 20, "totalItems": 41, "totalPages": 3}),
        )
        .unwrap();
        assert_eq!(meta.has_next_page(), Some(false));
    }

    #[test]
    fn test_current_names_the_page() {
        let meta: PaginationMeta = serde_json::from_value(
            json!({"current": 4, "pageSize": 10, "totalItems": 95, "totalPages": 10}),
        )
        .unwrap();
        assert_eq!(meta.page, 4);
        assert_eq!(meta.has_next_page(), Some(true));
    }

    /// Payload type without a `Default` impl
    #[derive(Debug, PartialEq, Deserialize)]
    struct Score {
        value: u32,
    }

    #[test]
    fn test_payload_needs_no_default() {
        let full: ApiResponse<Score> =
            serde_json::from_value(json!({"success": true, "data": {"value": 990}})).unwrap();
        assert_eq!(full.into_data(), Some(Score { value: 990 }));

        let empty: ApiResponse<Score> =
            serde_json::from_value(json!({"success": false, "message": "no score"})).unwrap();
        assert_eq!(empty.data, None);
    }
}
