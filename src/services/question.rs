use serde::Serialize;

use super::support::{log_failure, nested_endpoint};
use crate::api::{ApiGateway, ApiResponse};
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{Difficulty, Question};
use crate::utils::Result;

/// Query keys accepted by the question endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_num: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_asc_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_desc_by: Option<String>,
}

impl QuestionFilter {
    /// Fill in `page` and `pageSize` when the caller left them out
    pub fn with_defaults(mut self) -> Self {
        self.page.get_or_insert(DEFAULT_PAGE);
        self.page_size.get_or_insert(DEFAULT_PAGE_SIZE);
        self
    }
}

/// Question lookups
#[derive(Debug, Clone)]
pub struct QuestionService {
    gateway: ApiGateway,
}

impl QuestionService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Questions across the whole bank
    pub async fn fetch_questions(&self, filter: QuestionFilter) -> Result<ApiResponse<Vec<Question>>> {
        self.gateway
            .get("questions", &filter.with_defaults())
            .await
            .map_err(|e| log_failure("fetch_questions", None, e))
    }

    /// Questions of one test
    pub async fn fetch_test_questions(
        &self,
        test_id: &str,
        filter: QuestionFilter,
    ) -> Result<ApiResponse<Vec<Question>>> {
        let endpoint = nested_endpoint("tests", test_id, "questions")
            .map_err(|e| log_failure("fetch_test_questions", Some(test_id), e))?;
        self.gateway
            .get(&endpoint, &filter.with_defaults())
            .await
            .map_err(|e| log_failure("fetch_test_questions", Some(test_id), e))
    }
}
