use anyhow::{Context, Result};
use std::sync::Arc;

use crate::api::ApiGateway;
use crate::app::Config;
use crate::services::{CategoryService, QuestionService, ResultService, UserService};
use crate::session::{LogNotifier, Notifier, SessionStore};
use crate::storage::{FileStore, KeyValueStore};

/// Application-wide wiring: one session, one gateway, the domain services
///
/// Built once at startup and handed to the UI layer. Dropping it tears the
/// layer down; there are no globals.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// The live session
    pub session: SessionStore,
    /// HTTP access bound to `session`
    pub gateway: ApiGateway,
    pub categories: CategoryService,
    pub questions: QuestionService,
    pub results: ResultService,
    pub users: UserService,
}

impl AppState {
    /// Create app state over on-disk storage and restore the previous session
    pub async fn init(config: Config) -> Result<Self> {
        let storage = match &config.session.storage_dir {
            Some(dir) => FileStore::new(dir),
            None => FileStore::in_data_dir().context("Failed to locate session storage")?,
        };
        Self::init_with(config, Arc::new(storage), Arc::new(LogNotifier)).await
    }

    /// Create app state with explicit storage and notification sink
    pub async fn init_with(
        config: Config,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let session =
            SessionStore::with_loading_mode(storage, notifier, config.session.loading_mode);
        let gateway = ApiGateway::new(&config.api, session.clone())
            .context("Failed to create API gateway")?;

        session.restore().await;

        Ok(Self {
            categories: CategoryService::new(gateway.clone()),
            questions: QuestionService::new(gateway.clone()),
            results: ResultService::new(gateway.clone()),
            users: UserService::new(gateway.clone()),
            config,
            session,
            gateway,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::USER_INFO_KEY;
    use crate::services::CategoryFilter;
    use crate::session::{SecretString, UserProfile};
    use crate::storage::MemoryStore;
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            avatar: None,
            role: "STUDENT".to_string(),
            target: 700,
            token: SecretString::new("tok-restored".to_string()),
        }
    }

    #[tokio::test]
    async fn test_init_restores_and_authorizes() {
        let storage = MemoryStore::new();
        storage
            .set_item(USER_INFO_KEY, &profile().to_json().unwrap())
            .await
            .unwrap();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/categories")
                    .header("authorization", "Bearer tok-restored");
                then.status(200).json_body(json!({"success": true, "data": []}));
            })
            .await;

        let mut config = Config::default();
        config.api.base_url = server.base_url();
        let state = AppState::init_with(config, Arc::new(storage), Arc::new(LogNotifier))
            .await
            .unwrap();

        assert_eq!(state.session.user(), Some(profile()));
        assert!(!state.session.is_loading());

        state
            .categories
            .fetch_categories(CategoryFilter::default())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_init_with_file_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.session.storage_dir = Some(temp_dir.path().to_path_buf());

        let state = AppState::init(config.clone()).await.unwrap();
        assert!(!state.session.is_logged_in());
        state.session.login(profile()).await.unwrap();
        drop(state);

        let restarted = AppState::init(config).await.unwrap();
        assert_eq!(restarted.session.user(), Some(profile()));

        restarted.session.logout().await.unwrap();
        assert!(!temp_dir.path().join("userInfo.json").exists());
    }

    #[tokio::test]
    async fn test_init_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "::not-a-url".to_string();
        let result =
            AppState::init_with(config, Arc::new(MemoryStore::new()), Arc::new(LogNotifier)).await;
        assert!(result.is_err());
    }
}
