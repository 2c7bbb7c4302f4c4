use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizSession;

/// Storage seam for quiz sessions. Sessions are created when a document is
/// processed and torn down after scoring; the trait keeps the storage choice
/// swappable and the services mockable.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: QuizSession) -> AppResult<()>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>>;
    async fn update(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn remove(&self, id: &Uuid) -> AppResult<Option<QuizSession>>;
}

/// Process-local store. Nothing survives a restart, matching the
/// prototype-level persistence contract.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: QuizSession) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session);
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn update(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) {
            return Err(AppError::NotFound(format!(
                "Quiz session '{}' not found",
                session.id
            )));
        }
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn remove(&self, id: &Uuid) -> AppResult<Option<QuizSession>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_questions;

    #[tokio::test]
    async fn insert_then_find_round_trips_a_session() {
        let repo = InMemorySessionRepository::new();
        let session = QuizSession::new(sample_questions(2), None);
        let id = session.id;

        repo.insert(session).await.unwrap();

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.questions.len(), 2);
    }

    #[tokio::test]
    async fn find_returns_none_for_unknown_id() {
        let repo = InMemorySessionRepository::new();
        let found = repo.find_by_id(&Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_replaces_stored_answers() {
        let repo = InMemorySessionRepository::new();
        let mut session = QuizSession::new(sample_questions(1), None);
        let id = session.id;
        repo.insert(session.clone()).await.unwrap();

        session
            .record_answers(vec![Some("Paris".to_string())])
            .unwrap();
        repo.update(session).await.unwrap();

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.answers[0].as_deref(), Some("Paris"));
    }

    #[tokio::test]
    async fn update_of_unknown_session_is_not_found() {
        let repo = InMemorySessionRepository::new();
        let session = QuizSession::new(sample_questions(1), None);

        let result = repo.update(session).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn remove_tears_the_session_down() {
        let repo = InMemorySessionRepository::new();
        let session = QuizSession::new(sample_questions(1), None);
        let id = session.id;
        repo.insert(session).await.unwrap();

        let removed = repo.remove(&id).await.unwrap();
        assert!(removed.is_some());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }
}
