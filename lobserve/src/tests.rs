use std::sync::{Arc, Mutex};
use std::time::Duration;

use lchat::{SessionError, SessionHooks};
use lprovider::Difficulty;

use crate::{MetricsSessionHooks, SafeSessionHooks, TracingSessionHooks};

fn drive_all_callbacks(hooks: &dyn SessionHooks) {
    let error = SessionError::provider("provider failed");

    hooks.on_submit_start(Difficulty::Beginner);
    hooks.on_credential_prompt();
    hooks.on_submit_success(Difficulty::Beginner, Duration::from_millis(10));
    hooks.on_submit_failure(Difficulty::Advanced, &error, Duration::from_millis(20));
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    drive_all_callbacks(&TracingSessionHooks);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    drive_all_callbacks(&MetricsSessionHooks);
}

#[derive(Default)]
struct PanickingHooks {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl SessionHooks for PanickingHooks {
    fn on_submit_start(&self, _difficulty: Difficulty) {
        self.calls.lock().expect("calls lock").push("start");
        panic!("start hook panicked");
    }

    fn on_credential_prompt(&self) {
        self.calls.lock().expect("calls lock").push("prompt");
        panic!("prompt hook panicked");
    }

    fn on_submit_success(&self, _difficulty: Difficulty, _elapsed: Duration) {
        self.calls.lock().expect("calls lock").push("success");
        panic!("success hook panicked");
    }

    fn on_submit_failure(
        &self,
        _difficulty: Difficulty,
        _error: &SessionError,
        _elapsed: Duration,
    ) {
        self.calls.lock().expect("calls lock").push("failure");
        panic!("failure hook panicked");
    }
}

#[test]
fn safe_hooks_swallow_panics_from_every_callback() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let hooks = SafeSessionHooks::new(PanickingHooks {
        calls: Arc::clone(&calls),
    });

    drive_all_callbacks(&hooks);

    let seen = calls.lock().expect("calls lock").clone();
    assert_eq!(seen, vec!["start", "prompt", "success", "failure"]);
}
