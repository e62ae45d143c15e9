//! Tracing-based observability hooks for session submissions.
//!
//! ```rust
//! use lobserve::TracingSessionHooks;
//! use lchat::SessionHooks;
//!
//! fn accepts_session_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = TracingSessionHooks;
//! accepts_session_hooks(&hooks);
//! ```

use std::time::Duration;

use lchat::{SessionError, SessionHooks};
use lprovider::Difficulty;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSessionHooks;

impl SessionHooks for TracingSessionHooks {
    fn on_submit_start(&self, difficulty: Difficulty) {
        tracing::info!(
            phase = "session",
            event = "submit_start",
            difficulty = %difficulty
        );
    }

    fn on_credential_prompt(&self) {
        tracing::info!(phase = "session", event = "credential_prompt");
    }

    fn on_submit_success(&self, difficulty: Difficulty, elapsed: Duration) {
        tracing::info!(
            phase = "session",
            event = "submit_success",
            difficulty = %difficulty,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_submit_failure(&self, difficulty: Difficulty, error: &SessionError, elapsed: Duration) {
        tracing::error!(
            phase = "session",
            event = "submit_failure",
            difficulty = %difficulty,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error
        );
    }
}
