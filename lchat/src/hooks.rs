//! Observability hook contracts for session submissions.

use std::time::Duration;

use lprovider::Difficulty;

use crate::SessionError;

pub trait SessionHooks: Send + Sync {
    fn on_submit_start(&self, _difficulty: Difficulty) {}

    fn on_credential_prompt(&self) {}

    fn on_submit_success(&self, _difficulty: Difficulty, _elapsed: Duration) {}

    fn on_submit_failure(
        &self,
        _difficulty: Difficulty,
        _error: &SessionError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSessionHooks;

impl SessionHooks for NoopSessionHooks {}
