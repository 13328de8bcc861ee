use std::sync::Arc;
use tile_suggest_service::config::ServiceConfig;
use tile_suggest_service::services::providers::TextProvider;
use tile_suggest_service::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the app on a random port with the given upstream provider.
    pub async fn spawn(provider: Arc<dyn TextProvider>) -> Self {
        let config = test_config();

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        Self::run(app).await
    }

    /// Spawn with the real Gemini provider and an empty API key.
    pub async fn spawn_without_credentials() -> Self {
        let mut config = test_config();
        config.google.api_key.clear();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}

fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::load().expect("Failed to load configuration");
    config.common.port = 0; // Random port for testing
    config
}
