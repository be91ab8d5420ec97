use serde::Serialize;

use super::support::{log_failure, nested_endpoint};
use crate::api::{ApiGateway, ApiResponse};
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{Category, Difficulty, Test};
use crate::utils::Result;

/// Query keys accepted by the category listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CategoryFilter {
    pub fn with_defaults(mut self) -> Self {
        self.page.get_or_insert(DEFAULT_PAGE);
        self.page_size.get_or_insert(DEFAULT_PAGE_SIZE);
        self
    }
}

/// Query keys accepted by the tests-of-a-category listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_asc_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_desc_by: Option<String>,
}

impl TestFilter {
    pub fn with_defaults(mut self) -> Self {
        self.page.get_or_insert(DEFAULT_PAGE);
        self.page_size.get_or_insert(DEFAULT_PAGE_SIZE);
        self
    }
}

/// Categories and the tests filed under them
#[derive(Debug, Clone)]
pub struct CategoryService {
    gateway: ApiGateway,
}

impl CategoryService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn fetch_categories(&self, filter: CategoryFilter) -> Result<ApiResponse<Vec<Category>>> {
        self.gateway
            .get("categories", &filter.with_defaults())
            .await
            .map_err(|e| log_failure("fetch_categories", None, e))
    }

    pub async fn fetch_category_tests(
        &self,
        category_id: &str,
        filter: TestFilter,
    ) -> Result<ApiResponse<Vec<Test>>> {
        let endpoint = nested_endpoint("categories", category_id, "tests")
            .map_err(|e| log_failure("fetch_category_tests", Some(category_id), e))?;
        self.gateway
            .get(&endpoint, &filter.with_defaults())
            .await
            .map_err(|e| log_failure("fetch_category_tests", Some(category_id), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ApiConfig;
    use crate::session::{LogNotifier, SecretString, SessionStore, UserProfile};
    use crate::storage::MemoryStore;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    async fn service_for(server: &MockServer) -> CategoryService {
        let session = SessionStore::new(Arc::new(MemoryStore::new()), Arc::new(LogNotifier));
        session
            .login(UserProfile {
                id: "u1".to_string(),
                email: "u1@example.com".to_string(),
                avatar: None,
                role: "STUDENT".to_string(),
                target: 600,
                token: SecretString::new("tok-cat".to_string()),
            })
            .await
            .unwrap();
        let config = ApiConfig {
            base_url: server.base_url(),
            timeout_ms: 1000,
        };
        CategoryService::new(ApiGateway::new(&config, session).unwrap())
    }

    #[tokio::test]
    async fn test_fetch_categories() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/categories")
                    .query_param("page", "1")
                    .query_param("pageSize", "999")
                    .header("authorization", "Bearer tok-cat");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": [{"id": "c1", "name": "Full tests", "testCount": 12}],
                    "pagination": {"page": 1, "pageSize": 999, "totalItems": 1, "totalPages": 1}
                }));
            })
            .await;

        let service = service_for(&server).await;
        let response = service.fetch_categories(CategoryFilter::default()).await.unwrap();

        mock.assert_async().await;
        let categories = response.data.unwrap();
        assert_eq!(categories[0].name, "Full tests");
        assert_eq!(categories[0].test_count, Some(12));
        assert_eq!(response.pagination.unwrap().total_items, Some(1));
    }

    #[tokio::test]
    async fn test_fetch_category_tests() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/categories/c1/tests")
                    .query_param("page", "2")
                    .query_param("pageSize", "10")
                    .query_param("orderAscBy", "title");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": [{"id": "t1", "title": "ETS Test 1", "categoryId": "c1", "durationMinutes": 120}]
                }));
            })
            .await;

        let service = service_for(&server).await;
        let response = service
            .fetch_category_tests(
                "c1",
                TestFilter {
                    page: Some(2),
                    page_size: Some(10),
                    order_asc_by: Some("title".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.data.unwrap()[0].duration_minutes, Some(120));
    }

    #[tokio::test]
    async fn test_invalid_category_id_never_hits_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({"success": true, "data": []}));
            })
            .await;

        let service = service_for(&server).await;
        let err = service
            .fetch_category_tests("../admin", TestFilter::default())
            .await
            .unwrap_err();

        assert!(matches!(err, crate::utils::ClientError::Query(_)));
        assert_eq!(mock.calls_async().await, 0);
    }
}
