//! Conversation session state machine.
//!
//! A session owns an append-only transcript, a busy flag, and the last
//! submission error. One operation drives it: submitting user text, which
//! appends the user message immediately, runs the credential gate's
//! check/prompt/re-check sequence, and then asks the reply provider for an
//! answer. Provider and credential failures never escape the submission;
//! they land in `last_error`. Only a submission attempted while another is
//! in flight is returned to the caller as an error.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use lprovider::{CredentialGate, Difficulty, ReplyProvider, ReplyRequest};

use crate::{
    Message, NoopSessionHooks, SessionError, SessionHooks, SessionStatus, Transcript,
};

pub const DEFAULT_GREETING: &str = "Hello! I'm your AI yoga assistant. Ask me anything about \
    yoga, poses, philosophy, or meditation!";

#[derive(Debug)]
struct SessionState {
    transcript: Transcript,
    busy: bool,
    last_error: Option<String>,
    difficulty: Difficulty,
}

pub struct ChatSession {
    provider: Arc<dyn ReplyProvider>,
    gate: Arc<dyn CredentialGate>,
    hooks: Arc<dyn SessionHooks>,
    state: Mutex<SessionState>,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Result of a completed submission. A `Failed` outcome is a normal
/// return: the failure is already recorded in the session status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied { user: Message, reply: Message },
    Failed { user: Message, error: SessionError },
}

impl ChatSession {
    /// Initializes a session whose transcript starts with the default
    /// greeting message.
    pub fn new(provider: Arc<dyn ReplyProvider>, gate: Arc<dyn CredentialGate>) -> Self {
        Self::builder(provider, gate).build()
    }

    pub fn builder(
        provider: Arc<dyn ReplyProvider>,
        gate: Arc<dyn CredentialGate>,
    ) -> ChatSessionBuilder {
        ChatSessionBuilder {
            provider,
            gate,
            hooks: None,
            greeting: None,
            difficulty: Difficulty::default(),
        }
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.state().transcript.messages().to_vec()
    }

    pub fn status(&self) -> SessionStatus {
        let state = self.state();
        SessionStatus {
            busy: state.busy,
            last_error: state.last_error.clone(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state().difficulty
    }

    /// Pure assignment; never touches the transcript or busy flag.
    pub fn set_difficulty(&self, difficulty: Difficulty) {
        self.state().difficulty = difficulty;
    }

    /// Submits user text for a reply.
    ///
    /// The user message is appended before the provider is called, so it
    /// is observable in the transcript for the whole round trip. Empty or
    /// whitespace text is accepted as-is.
    ///
    /// Returns `Err` only when a submission is already in flight; in that
    /// case no state changes at all. Cancellation is out of contract: a
    /// submission resolves when the provider call settles, not before.
    pub async fn submit_user_text(
        &self,
        text: impl Into<String>,
    ) -> Result<TurnOutcome, SessionError> {
        let text = text.into();

        let (user, difficulty) = {
            let mut state = self.state();
            if state.busy {
                return Err(SessionError::busy());
            }

            state.busy = true;
            state.last_error = None;

            let user = Message::user(text.clone());
            state.transcript.push(user.clone());
            (user, state.difficulty)
        };

        self.hooks.on_submit_start(difficulty);
        let started = Instant::now();

        match self.resolve_reply(text, difficulty).await {
            Ok(reply_text) => {
                let reply = Message::bot(reply_text);
                {
                    let mut state = self.state();
                    state.transcript.push(reply.clone());
                    state.busy = false;
                }
                self.hooks.on_submit_success(difficulty, started.elapsed());
                Ok(TurnOutcome::Replied { user, reply })
            }
            Err(error) => {
                {
                    let mut state = self.state();
                    state.last_error = Some(error.message.clone());
                    state.busy = false;
                }
                self.hooks
                    .on_submit_failure(difficulty, &error, started.elapsed());
                Ok(TurnOutcome::Failed { user, error })
            }
        }
    }

    async fn resolve_reply(
        &self,
        text: String,
        difficulty: Difficulty,
    ) -> Result<String, SessionError> {
        if !self.gate.has_credential().await {
            self.hooks.on_credential_prompt();
            self.gate.request_credential().await;
            // The prompt is interactive; only the re-check knows whether
            // it changed the outcome.
            if !self.gate.has_credential().await {
                return Err(SessionError::credential_missing());
            }
        }

        let request = ReplyRequest::new(text).with_difficulty(difficulty);
        self.provider
            .send_reply(request)
            .await
            .map_err(SessionError::from)
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        // No user code runs under the lock, so a poisoned state is still
        // coherent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct ChatSessionBuilder {
    provider: Arc<dyn ReplyProvider>,
    gate: Arc<dyn CredentialGate>,
    hooks: Option<Arc<dyn SessionHooks>>,
    greeting: Option<String>,
    difficulty: Difficulty,
}

impl ChatSessionBuilder {
    pub fn hooks(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn build(self) -> ChatSession {
        let greeting = Message::bot(self.greeting.unwrap_or_else(|| DEFAULT_GREETING.to_string()));

        ChatSession {
            provider: self.provider,
            gate: self.gate,
            hooks: self
                .hooks
                .unwrap_or_else(|| Arc::new(NoopSessionHooks)),
            state: Mutex::new(SessionState {
                transcript: Transcript::seeded(greeting),
                busy: false,
                last_error: None,
                difficulty: self.difficulty,
            }),
        }
    }
}
