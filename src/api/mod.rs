// Gateway module for api - follows the Train Station Pattern
// All network I/O must go through ApiGateway

// Private submodules - not directly accessible from outside
mod gateway;
mod query;
mod types;

// Public re-exports - the ONLY way to access api functionality
pub use gateway::ApiGateway;
pub use query::{to_query_string, FilterValue, QueryParams};
pub use types::{ApiResponse, PaginationMeta};
