use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use lchat::{SessionError, SessionHooks};
use lprovider::Difficulty;

pub struct SafeSessionHooks<H> {
    inner: H,
}

impl<H> SafeSessionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> SessionHooks for SafeSessionHooks<H>
where
    H: SessionHooks,
{
    fn on_submit_start(&self, difficulty: Difficulty) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_submit_start(difficulty)
        }));
    }

    fn on_credential_prompt(&self) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_credential_prompt()));
    }

    fn on_submit_success(&self, difficulty: Difficulty, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_submit_success(difficulty, elapsed)
        }));
    }

    fn on_submit_failure(&self, difficulty: Difficulty, error: &SessionError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_submit_failure(difficulty, error, elapsed)
        }));
    }
}
