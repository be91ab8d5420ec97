//! Session and data-access layer for the TOEIC practice client.
//!
//! [`SessionStore`] owns the logged-in identity and the shared loading flag,
//! [`ApiGateway`] performs every HTTP request with the session's bearer token,
//! and the domain services in [`services`] shape queries on top of it.
//! [`AppState`] wires the three together.

pub mod api;
pub mod app;
pub mod constants;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;

pub use api::{ApiGateway, ApiResponse, PaginationMeta, QueryParams};
pub use app::{load_config, AppState, Config};
pub use session::{LoadingMode, Session, SessionStore, UserProfile};
pub use utils::{init_logger, ClientError};
