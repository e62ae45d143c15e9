//! Conversational session bookkeeping over reply providers.

mod error;
mod hooks;
mod session;
mod transcript;
mod types;

pub mod prelude {
    pub use crate::{
        CREDENTIAL_MISSING_MESSAGE, ChatSession, ChatSessionBuilder, DEFAULT_GREETING,
        FALLBACK_ERROR_MESSAGE, Message, NoopSessionHooks, Sender, SessionError, SessionErrorKind,
        SessionHooks, SessionStatus, Transcript, TurnOutcome,
    };
    pub use lcommon::{BoxFuture, MessageId};
    pub use lprovider::{
        CredentialGate, CredentialPrompt, Difficulty, ProviderError, ProviderErrorKind,
        ProviderFuture, ReplyProvider, ReplyRequest,
    };
}

pub use error::{
    CREDENTIAL_MISSING_MESSAGE, FALLBACK_ERROR_MESSAGE, SessionError, SessionErrorKind,
};
pub use hooks::{NoopSessionHooks, SessionHooks};
pub use session::{ChatSession, ChatSessionBuilder, DEFAULT_GREETING, TurnOutcome};
pub use transcript::Transcript;
pub use types::{Message, Sender, SessionStatus};
pub use lcommon::{BoxFuture, MessageId};
