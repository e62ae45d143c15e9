//! Metrics-based observability hooks for session submissions.
//!
//! ```rust
//! use lobserve::MetricsSessionHooks;
//! use lchat::SessionHooks;
//!
//! fn accepts_session_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = MetricsSessionHooks;
//! accepts_session_hooks(&hooks);
//! ```

use std::time::Duration;

use lchat::{SessionError, SessionHooks};
use lprovider::Difficulty;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSessionHooks;

impl SessionHooks for MetricsSessionHooks {
    fn on_submit_start(&self, difficulty: Difficulty) {
        metrics::counter!(
            "lotus_session_submit_start_total",
            "difficulty" => difficulty.to_string()
        )
        .increment(1);
    }

    fn on_credential_prompt(&self) {
        metrics::counter!("lotus_session_credential_prompt_total").increment(1);
    }

    fn on_submit_success(&self, difficulty: Difficulty, elapsed: Duration) {
        metrics::counter!(
            "lotus_session_submit_success_total",
            "difficulty" => difficulty.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "lotus_session_submit_duration_seconds",
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_submit_failure(&self, _difficulty: Difficulty, error: &SessionError, elapsed: Duration) {
        metrics::counter!(
            "lotus_session_submit_failure_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "lotus_session_submit_duration_seconds",
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
