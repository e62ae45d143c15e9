//! Reply provider contracts, credentials, and upstream adapters.

mod credentials;
mod difficulty;
mod error;
mod provider;

pub mod prelude;

#[cfg(feature = "provider-gemini")]
pub mod adapters;

pub use credentials::{
    ApiKeyStore, CredentialGate, CredentialPrompt, SecretString, StoredCredentialGate,
};
pub use difficulty::Difficulty;
pub use error::{ProviderError, ProviderErrorKind};
pub use provider::{ProviderFuture, ReplyProvider, ReplyRequest};

#[cfg(feature = "provider-gemini")]
pub use adapters::{GeminiHttpTransport, GeminiProvider, GeminiTransport};
