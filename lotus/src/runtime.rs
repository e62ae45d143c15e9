//! Runtime wiring helpers for session usage.

use std::sync::Arc;

use crate::{ChatSession, CredentialGate, ReplyProvider, SessionHooks};

#[cfg(feature = "provider-gemini")]
use crate::{ApiKeyStore, GeminiHttpTransport, GeminiProvider, ProviderError, StoredCredentialGate};

pub fn build_session(provider: Arc<dyn ReplyProvider>, gate: Arc<dyn CredentialGate>) -> ChatSession {
    ChatSession::new(provider, gate)
}

pub fn build_session_with(
    provider: Arc<dyn ReplyProvider>,
    gate: Arc<dyn CredentialGate>,
    hooks: Arc<dyn SessionHooks>,
) -> ChatSession {
    ChatSession::builder(provider, gate).hooks(hooks).build()
}

/// Wires a ready-to-use session against the Gemini HTTP adapter with the
/// given API key already stored.
#[cfg(feature = "provider-gemini")]
pub fn gemini_session(api_key: impl Into<String>) -> Result<ChatSession, ProviderError> {
    let credentials = Arc::new(ApiKeyStore::new());
    credentials.set_api_key(api_key)?;

    let transport = Arc::new(GeminiHttpTransport::new(reqwest::Client::new()));
    let provider = Arc::new(GeminiProvider::new(Arc::clone(&credentials), transport));
    let gate = Arc::new(StoredCredentialGate::new(credentials));

    Ok(ChatSession::new(provider, gate))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        BoxFuture, CredentialGate, ProviderError, ProviderFuture, ReplyProvider, ReplyRequest,
        Sender, TurnOutcome,
    };

    use super::build_session;

    #[derive(Debug)]
    struct FakeProvider;

    impl ReplyProvider for FakeProvider {
        fn send_reply<'a>(
            &'a self,
            request: ReplyRequest,
        ) -> ProviderFuture<'a, Result<String, ProviderError>> {
            Box::pin(async move { Ok(format!("echo: {}", request.text)) })
        }
    }

    #[derive(Debug)]
    struct OpenGate;

    impl CredentialGate for OpenGate {
        fn has_credential(&self) -> BoxFuture<'_, bool> {
            Box::pin(async move { true })
        }

        fn request_credential(&self) -> BoxFuture<'_, ()> {
            Box::pin(async move {})
        }
    }

    #[tokio::test]
    async fn build_session_wires_provider_and_gate() {
        let session = build_session(Arc::new(FakeProvider), Arc::new(OpenGate));

        let outcome = session
            .submit_user_text("hello")
            .await
            .expect("submission should be accepted");

        let TurnOutcome::Replied { reply, .. } = outcome else {
            panic!("expected a reply outcome");
        };
        assert_eq!(reply.text, "echo: hello");

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].sender, Sender::Bot);
    }

    #[cfg(feature = "provider-gemini")]
    #[test]
    fn gemini_session_rejects_an_empty_api_key() {
        let error = super::gemini_session("").expect_err("empty key must fail");
        assert_eq!(error.kind, crate::ProviderErrorKind::Authentication);
    }

    #[cfg(feature = "provider-gemini")]
    #[test]
    fn gemini_session_starts_idle_with_the_greeting() {
        let session = super::gemini_session("key-123").expect("session should build");
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.status().busy);
    }
}
