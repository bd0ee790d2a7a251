//! Background answer requests.
//!
//! The event loop must keep drawing while the answer service works, so each
//! question runs on its own task and the loop polls for completion.

use std::sync::Arc;

use sportstalk_engine::{AnswerService, AskError, Turn};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

type Outcome = Result<String, AskError>;

/// At most one in-flight answer request.
#[derive(Debug, Default)]
pub struct RequestSlot {
    handle: Option<JoinHandle<Outcome>>,
}

impl RequestSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is in flight.
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawn a request for `turn`.
    ///
    /// Callers only get a [`Turn`] from an idle conversation, so the slot is
    /// empty here; a leftover task is aborted rather than leaked.
    pub fn dispatch(&mut self, service: &Arc<dyn AnswerService>, turn: Turn) {
        if let Some(stale) = self.handle.take() {
            warn!("aborting stale answer request");
            stale.abort();
        }
        let service = Arc::clone(service);
        debug!(question_len = turn.question.len(), "dispatching question");
        self.handle = Some(tokio::spawn(async move {
            service.ask(&turn.question).await
        }));
    }

    /// Take the outcome if the request has finished.
    ///
    /// A task that panicked or was cancelled counts as a failed request.
    pub async fn poll(&mut self) -> Option<Outcome> {
        if !self.handle.as_ref().is_some_and(JoinHandle::is_finished) {
            return None;
        }
        let handle = self.handle.take()?;
        Some(match handle.await {
            Ok(outcome) => outcome,
            Err(e) => Err(AskError::Task(e.to_string())),
        })
    }

    /// Cancel the in-flight request, if any.
    pub fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedService;
    use std::time::Duration;

    struct PanickingService;

    #[async_trait::async_trait]
    impl AnswerService for PanickingService {
        async fn ask(&self, _question: &str) -> Result<String, AskError> {
            panic!("service blew up");
        }
    }

    async fn wait_for_outcome(slot: &mut RequestSlot) -> Outcome {
        for _ in 0..200 {
            if let Some(outcome) = slot.poll().await {
                return outcome;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("request never finished");
    }

    fn turn(question: &str) -> Turn {
        Turn {
            question: question.to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_slot_polls_none() {
        let mut slot = RequestSlot::new();
        assert!(!slot.is_active());
        assert!(slot.poll().await.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_delivers_answer() {
        let scripted = Arc::new(ScriptedService::new([Some("Seven rings")]));
        let service: Arc<dyn AnswerService> = scripted.clone();
        let mut slot = RequestSlot::new();

        slot.dispatch(&service, turn("\nWho?"));
        assert!(slot.is_active());

        let outcome = wait_for_outcome(&mut slot).await;
        assert_eq!(outcome.unwrap(), "Seven rings");
        assert!(!slot.is_active());
        assert_eq!(scripted.questions(), vec!["\nWho?".to_string()]);
    }

    #[tokio::test]
    async fn test_panicking_task_becomes_task_error() {
        let service: Arc<dyn AnswerService> = Arc::new(PanickingService);
        let mut slot = RequestSlot::new();

        slot.dispatch(&service, turn("q"));
        let outcome = wait_for_outcome(&mut slot).await;
        assert!(matches!(outcome, Err(AskError::Task(_))));
    }

    #[tokio::test]
    async fn test_abort_empties_slot() {
        let service: Arc<dyn AnswerService> = Arc::new(ScriptedService::new([Some("a")]));
        let mut slot = RequestSlot::new();
        slot.dispatch(&service, turn("q"));
        slot.abort();
        assert!(!slot.is_active());
        assert!(slot.poll().await.is_none());
    }
}
