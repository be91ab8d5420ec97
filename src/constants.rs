/// Constants module to avoid magic numbers in the codebase

// Network Configuration
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const API_PREFIX: &str = "api/v1";

// Timeouts
pub const HTTP_REQUEST_TIMEOUT_MS: u64 = 5000;

// Persistence
/// Storage key holding the JSON-serialized logged-in profile
pub const USER_INFO_KEY: &str = "userInfo";
pub const STORAGE_FILE_EXTENSION: &str = "json";

// Pagination defaults applied by the domain services
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 999; // effectively "fetch all" for small catalogs

// Notification texts
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out successfully";
pub const LOGIN_NOT_SAVED_MESSAGE: &str = "Logged in, but the session could not be saved";
pub const LOGOUT_NOT_SAVED_MESSAGE: &str = "Logged out, but the saved session could not be removed";

// Config
pub const APP_NAME: &str = "toeic-client";
pub const ENV_PREFIX: &str = "TOEIC_";
