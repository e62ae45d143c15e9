//! Session-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use lprovider::ProviderError;

/// Fallback description for failures that carry no message of their own.
pub const FALLBACK_ERROR_MESSAGE: &str = "an unexpected error occurred";

/// Shown when the credential gate still reports no key after the prompt.
pub const CREDENTIAL_MISSING_MESSAGE: &str =
    "API key not selected. Please select an API key to continue.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    Busy,
    CredentialMissing,
    Provider,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub kind: SessionErrorKind,
    pub message: String,
}

impl SessionError {
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn busy() -> Self {
        Self::new(SessionErrorKind::Busy, "a submission is already in flight")
    }

    pub fn credential_missing() -> Self {
        Self::new(SessionErrorKind::CredentialMissing, CREDENTIAL_MISSING_MESSAGE)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Provider, message)
    }

    pub fn unknown() -> Self {
        Self::new(SessionErrorKind::Unknown, FALLBACK_ERROR_MESSAGE)
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for SessionError {}

impl From<ProviderError> for SessionError {
    fn from(value: ProviderError) -> Self {
        if value.message.trim().is_empty() {
            SessionError::unknown()
        } else {
            SessionError::provider(value.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_ERROR_MESSAGE, SessionError, SessionErrorKind};
    use lprovider::ProviderError;

    #[test]
    fn provider_errors_keep_their_description() {
        let error = SessionError::from(ProviderError::rate_limited("quota exceeded"));
        assert_eq!(error.kind, SessionErrorKind::Provider);
        assert_eq!(error.message, "quota exceeded");
    }

    #[test]
    fn blank_provider_errors_map_to_the_fallback() {
        let error = SessionError::from(ProviderError::other("   "));
        assert_eq!(error.kind, SessionErrorKind::Unknown);
        assert_eq!(error.message, FALLBACK_ERROR_MESSAGE);
    }
}
