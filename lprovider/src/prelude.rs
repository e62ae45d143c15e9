//! Common `lprovider` imports for downstream crates.

pub use crate::{
    ApiKeyStore, CredentialGate, CredentialPrompt, Difficulty, ProviderError, ProviderErrorKind,
    ProviderFuture, ReplyProvider, ReplyRequest, SecretString, StoredCredentialGate,
};
pub use lcommon::BoxFuture;

#[cfg(feature = "provider-gemini")]
pub use crate::{GeminiHttpTransport, GeminiProvider, GeminiTransport};
