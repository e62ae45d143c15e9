//! Unified facade over the Lotus workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the core lotus crates and provides convenience utilities for
//! wiring a conversation session to a reply provider and credential gate.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use lotus::prelude::*;
//!
//! struct EchoProvider;
//!
//! impl ReplyProvider for EchoProvider {
//!     fn send_reply<'a>(
//!         &'a self,
//!         request: ReplyRequest,
//!     ) -> ProviderFuture<'a, Result<String, ProviderError>> {
//!         Box::pin(async move { Ok(request.text) })
//!     }
//! }
//!
//! struct OpenGate;
//!
//! impl CredentialGate for OpenGate {
//!     fn has_credential(&self) -> BoxFuture<'_, bool> {
//!         Box::pin(async move { true })
//!     }
//!
//!     fn request_credential(&self) -> BoxFuture<'_, ()> {
//!         Box::pin(async move {})
//!     }
//! }
//!
//! let session = lotus::build_session(Arc::new(EchoProvider), Arc::new(OpenGate));
//! assert!(!session.status().busy);
//! ```

pub mod prelude;
pub mod runtime;
pub mod util;

pub use lchat;
pub use lcommon;
pub use lobserve;
pub use lprovider;

pub use lchat::{
    CREDENTIAL_MISSING_MESSAGE, ChatSession, ChatSessionBuilder, DEFAULT_GREETING,
    FALLBACK_ERROR_MESSAGE, Message, NoopSessionHooks, Sender, SessionError, SessionErrorKind,
    SessionHooks, SessionStatus, Transcript, TurnOutcome,
};
pub use lcommon::{BoxFuture, MessageId};
pub use lobserve::{MetricsSessionHooks, SafeSessionHooks, TracingSessionHooks};
pub use lprovider::{
    ApiKeyStore, CredentialGate, CredentialPrompt, Difficulty, ProviderError, ProviderErrorKind,
    ProviderFuture, ReplyProvider, ReplyRequest, SecretString, StoredCredentialGate,
};

#[cfg(feature = "provider-gemini")]
pub use lprovider::{GeminiHttpTransport, GeminiProvider, GeminiTransport};

pub use runtime::{build_session, build_session_with};
pub use util::{bot_message, parse_difficulty, user_message};

#[cfg(feature = "provider-gemini")]
pub use runtime::gemini_session;
