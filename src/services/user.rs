use serde::Serialize;

use super::support::{log_failure, nested_endpoint};
use crate::api::{ApiGateway, ApiResponse};
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{Course, UserSummary};
use crate::utils::Result;

/// Query keys accepted by the user listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserFilter {
    pub fn with_defaults(mut self) -> Self {
        self.page.get_or_insert(DEFAULT_PAGE);
        self.page_size.get_or_insert(DEFAULT_PAGE_SIZE);
        self
    }
}

/// Query keys accepted by a user's course listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CourseFilter {
    pub fn with_defaults(mut self) -> Self {
        self.page.get_or_insert(DEFAULT_PAGE);
        self.page_size.get_or_insert(DEFAULT_PAGE_SIZE);
        self
    }
}

/// Users and their enrolled courses
#[derive(Debug, Clone)]
pub struct UserService {
    gateway: ApiGateway,
}

impl UserService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn fetch_users(&self, filter: UserFilter) -> Result<ApiResponse<Vec<UserSummary>>> {
        self.gateway
            .get("users", &filter.with_defaults())
            .await
            .map_err(|e| log_failure("fetch_users", None, e))
    }

    /// Courses the user is enrolled in, with lectures and their materials
    pub async fn fetch_user_courses(
        &self,
        user_id: &str,
        filter: CourseFilter,
    ) -> Result<ApiResponse<Vec<Course>>> {
        let endpoint = nested_endpoint("users", user_id, "courses")
            .map_err(|e| log_failure("fetch_user_courses", Some(user_id), e))?;
        self.gateway
            .get(&endpoint, &filter.with_defaults())
            .await
            .map_err(|e| log_failure("fetch_user_courses", Some(user_id), e))
    }
}
