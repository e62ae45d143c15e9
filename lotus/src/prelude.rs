//! Common imports for most Lotus applications.

pub use crate::{build_session, build_session_with, bot_message, parse_difficulty, user_message};
pub use crate::{
    ApiKeyStore, BoxFuture, ChatSession, ChatSessionBuilder, CredentialGate, CredentialPrompt,
    Difficulty, Message, MessageId, MetricsSessionHooks, NoopSessionHooks, ProviderError,
    ProviderErrorKind, ProviderFuture, ReplyProvider, ReplyRequest, SafeSessionHooks, Sender,
    SessionError, SessionErrorKind, SessionHooks, SessionStatus, StoredCredentialGate,
    TracingSessionHooks, TurnOutcome,
};

#[cfg(feature = "provider-gemini")]
pub use crate::{GeminiHttpTransport, GeminiProvider, GeminiTransport, gemini_session};
