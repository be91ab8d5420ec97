use serde::Serialize;

use super::support::{log_failure, nested_endpoint};
use crate::api::{ApiGateway, ApiResponse};
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::TestResult;
use crate::utils::Result;

/// Query keys accepted by the result endpoints
///
/// These endpoints page with `current` rather than `page`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_asc_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_desc_by: Option<String>,
}

impl ResultFilter {
    pub fn with_defaults(mut self) -> Self {
        self.current.get_or_insert(DEFAULT_PAGE);
        self.page_size.get_or_insert(DEFAULT_PAGE_SIZE);
        self
    }
}

/// Test attempt history
#[derive(Debug, Clone)]
pub struct ResultService {
    gateway: ApiGateway,
}

impl ResultService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn fetch_results(&self, filter: ResultFilter) -> Result<ApiResponse<Vec<TestResult>>> {
        self.gateway
            .get("results", &filter.with_defaults())
            .await
            .map_err(|e| log_failure("fetch_results", None, e))
    }

    /// Results of a single user
    pub async fn fetch_user_results(
        &self,
        user_id: &str,
        filter: ResultFilter,
    ) -> Result<ApiResponse<Vec<TestResult>>> {
        let endpoint = nested_endpoint("users", user_id, "results")
            .map_err(|e| log_failure("fetch_user_results", Some(user_id), e))?;
        self.gateway
            .get(&endpoint, &filter.with_defaults())
            .await
            .map_err(|e| log_failure("fetch_user_results", Some(user_id), e))
    }
}
