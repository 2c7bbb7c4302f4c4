use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{CompletionClient, OpenAiCompletionClient, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client: Arc<dyn CompletionClient> = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_completion_client(config, client)
    }

    /// Wiring seam used by tests to swap the completion client while keeping
    /// the rest of the pipeline intact.
    pub fn with_completion_client(
        config: Config,
        client: Arc<dyn CompletionClient>,
    ) -> AppResult<Self> {
        std::fs::create_dir_all(&config.upload_dir)?;

        let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
        let quiz_service = Arc::new(QuizService::new(sessions, client, &config));

        Ok(Self {
            quiz_service,
            config: Arc::new(config),
        })
    }
}
