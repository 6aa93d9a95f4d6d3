//! Turn dispatcher: one request/response cycle with the generation service.

use crate::service::GenerateService;
use farol_core::{ChatSession, Result, Turn};
use std::sync::Arc;

/// Mediates one request/response cycle between a session and the generation
/// service.
///
/// The dispatcher is stateless between calls; all conversation state lives
/// in the [`ChatSession`] passed to [`TurnDispatcher::handle`].
pub struct TurnDispatcher {
    service: Arc<dyn GenerateService>,
}

impl TurnDispatcher {
    /// Creates a dispatcher backed by the given generation service.
    pub fn new(service: Arc<dyn GenerateService>) -> Self {
        Self { service }
    }

    /// Handles one user submission.
    ///
    /// Appends the user turn, sends the full ordered history (system turn
    /// and the just-appended user turn included) to the generation service,
    /// and on success appends and returns the model turn.
    ///
    /// # Errors
    ///
    /// On failure the error is returned to the caller to render: no model
    /// turn is appended, there is no retry, and the session stays usable —
    /// the user turn simply remains the last entry in history.
    pub async fn handle(&self, session: &mut ChatSession, text: &str) -> Result<Turn> {
        session.append(Turn::user(text));

        match self.service.generate(session.turns()).await {
            Ok(reply) => {
                let turn = Turn::model(reply);
                session.append(turn.clone());
                Ok(turn)
            }
            Err(err) => {
                tracing::warn!(session = %session.id, error = %err, "generation call failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farol_core::{FarolError, TurnRole, persona::SYSTEM_PROMPT};
    use std::sync::Mutex;

    /// Mock generation service recording the histories it was called with.
    struct MockService {
        reply: std::result::Result<String, FarolError>,
        seen_histories: Mutex<Vec<Vec<Turn>>>,
    }

    impl MockService {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen_histories: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: FarolError) -> Self {
            Self {
                reply: Err(err),
                seen_histories: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl GenerateService for MockService {
        async fn generate(&self, history: &[Turn]) -> Result<String> {
            self.seen_histories.lock().unwrap().push(history.to_vec());
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_successful_exchange_appends_both_turns() {
        let service = Arc::new(MockService::replying(
            "Praia do Farol! 🎉 Mais alguma dúvida?",
        ));
        let dispatcher = TurnDispatcher::new(service.clone());
        let mut session = ChatSession::new("s1");

        let reply = dispatcher
            .handle(&mut session, "Quais praias você recomenda?")
            .await
            .unwrap();

        assert_eq!(reply.role, TurnRole::Model);
        assert_eq!(reply.content, "Praia do Farol! 🎉 Mais alguma dúvida?");

        let visible: Vec<_> = session.visible_turns().collect();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].content, "Quais praias você recomenda?");
        assert_eq!(visible[1].content, "Praia do Farol! 🎉 Mais alguma dúvida?");
    }

    #[tokio::test]
    async fn test_outbound_history_contains_system_turn_and_latest_once() {
        let service = Arc::new(MockService::replying("ok"));
        let dispatcher = TurnDispatcher::new(service.clone());
        let mut session = ChatSession::new("s1");

        dispatcher.handle(&mut session, "E em Paris?").await.unwrap();

        let histories = service.seen_histories.lock().unwrap();
        let sent = &histories[0];
        assert_eq!(sent[0].content, SYSTEM_PROMPT);
        // The latest user message appears exactly once, as the final entry.
        let occurrences = sent.iter().filter(|t| t.content == "E em Paris?").count();
        assert_eq!(occurrences, 1);
        assert_eq!(sent.last().unwrap().content, "E em Paris?");
    }

    #[tokio::test]
    async fn test_text_passes_through_unmodified() {
        let service = Arc::new(MockService::replying("qualquer texto"));
        let dispatcher = TurnDispatcher::new(service.clone());
        let mut session = ChatSession::new("s1");

        let text = "E em Paris?  (com espaços e 🎉)";
        dispatcher.handle(&mut session, text).await.unwrap();

        let histories = service.seen_histories.lock().unwrap();
        assert_eq!(histories[0].last().unwrap().content, text);
    }

    #[tokio::test]
    async fn test_failed_dispatch_keeps_only_the_user_turn() {
        let service = Arc::new(MockService::failing(FarolError::Http(
            "operation timed out".into(),
        )));
        let dispatcher = TurnDispatcher::new(service);
        let mut session = ChatSession::new("s1");

        let before = session.visible_turns().count();
        let err = dispatcher
            .handle(&mut session, "Quais passeios de barco?")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("operation timed out"));
        assert_eq!(session.visible_turns().count(), before + 1);
        assert_eq!(
            session.visible_turns().last().unwrap().content,
            "Quais passeios de barco?"
        );
    }

    #[tokio::test]
    async fn test_session_stays_usable_after_a_failure() {
        let failing = Arc::new(MockService::failing(FarolError::EmptyResponse));
        let mut session = ChatSession::new("s1");

        TurnDispatcher::new(failing)
            .handle(&mut session, "primeira tentativa")
            .await
            .unwrap_err();

        let working = Arc::new(MockService::replying("agora sim!"));
        TurnDispatcher::new(working)
            .handle(&mut session, "segunda tentativa")
            .await
            .unwrap();

        // Failed turn is simply absent from history: one orphan user turn,
        // then a complete exchange.
        assert_eq!(session.visible_turns().count(), 3);
    }
}
