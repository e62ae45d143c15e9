//! Secure in-memory API-key management and the interactive credential gate.

use std::sync::{Arc, Mutex, MutexGuard};

use lcommon::BoxFuture;

use crate::ProviderError;

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Single-slot API-key store for the one upstream generative service.
#[derive(Default)]
pub struct ApiKeyStore {
    api_key: Mutex<Option<SecretString>>,
}

impl ApiKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_api_key(&self, api_key: impl Into<String>) -> Result<(), ProviderError> {
        let api_key = SecretString::new(api_key);
        if api_key.is_empty() {
            return Err(ProviderError::authentication("api key must not be empty"));
        }

        *self.slot_mut()? = Some(api_key);
        Ok(())
    }

    /// A poisoned lock reads as "no credential" so the gate stays closed
    /// instead of failing the whole submission.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn with_api_key<R>(&self, f: impl FnOnce(&str) -> R) -> Result<Option<R>, ProviderError> {
        let slot = self.slot_mut()?;
        Ok(slot.as_ref().map(|secret| f(secret.expose())))
    }

    pub fn clear(&self) -> bool {
        self.api_key
            .lock()
            .map(|mut slot| slot.take().is_some())
            .unwrap_or(false)
    }

    fn slot_mut(&self) -> Result<MutexGuard<'_, Option<SecretString>>, ProviderError> {
        self.api_key
            .lock()
            .map_err(|_| ProviderError::other("api key store lock poisoned"))
    }
}

/// Interactive credential collaborator.
///
/// Callers are expected to drive the exact check, prompt, re-check
/// sequence: `has_credential`, then `request_credential` when absent, then
/// `has_credential` again — the interactive prompt can change the outcome,
/// so the calls must not be collapsed.
pub trait CredentialGate: Send + Sync {
    fn has_credential(&self) -> BoxFuture<'_, bool>;

    fn request_credential(&self) -> BoxFuture<'_, ()>;
}

/// Host-supplied interactive prompt; `None` means the user declined.
pub trait CredentialPrompt: Send + Sync {
    fn prompt_api_key(&self) -> BoxFuture<'_, Option<String>>;
}

/// Credential gate backed by an [`ApiKeyStore`] with an optional
/// interactive prompt.
pub struct StoredCredentialGate {
    store: Arc<ApiKeyStore>,
    prompt: Option<Arc<dyn CredentialPrompt>>,
}

impl StoredCredentialGate {
    pub fn new(store: Arc<ApiKeyStore>) -> Self {
        Self {
            store,
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: Arc<dyn CredentialPrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }
}

impl CredentialGate for StoredCredentialGate {
    fn has_credential(&self) -> BoxFuture<'_, bool> {
        Box::pin(async move { self.store.has_api_key() })
    }

    fn request_credential(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            let Some(prompt) = &self.prompt else {
                return;
            };

            if let Some(api_key) = prompt.prompt_api_key().await {
                // An empty key is rejected by the store; the gate simply
                // stays closed and the re-check reports the absence.
                let _ = self.store.set_api_key(api_key);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{ApiKeyStore, CredentialGate, CredentialPrompt, SecretString, StoredCredentialGate};
    use lcommon::BoxFuture;

    struct FixedPrompt {
        api_key: Option<String>,
    }

    impl CredentialPrompt for FixedPrompt {
        fn prompt_api_key(&self) -> BoxFuture<'_, Option<String>> {
            Box::pin(async move { self.api_key.clone() })
        }
    }

    #[test]
    fn secret_string_redacts_debug_output() {
        let secret = SecretString::new("top-secret");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.expose(), "top-secret");
    }

    #[test]
    fn store_rejects_empty_keys_and_supports_lifecycle() {
        let store = ApiKeyStore::new();
        assert!(!store.has_api_key());

        let error = store.set_api_key("").expect_err("empty key must fail");
        assert_eq!(error.kind, crate::ProviderErrorKind::Authentication);
        assert!(!store.has_api_key());

        store.set_api_key("key-123").expect("key should store");
        assert!(store.has_api_key());

        let seen = store
            .with_api_key(|value| value.to_string())
            .expect("store should read");
        assert_eq!(seen.as_deref(), Some("key-123"));

        assert!(store.clear());
        assert!(!store.has_api_key());
    }

    #[tokio::test]
    async fn gate_prompt_can_open_the_gate() {
        let store = Arc::new(ApiKeyStore::new());
        let gate = StoredCredentialGate::new(Arc::clone(&store)).with_prompt(Arc::new(FixedPrompt {
            api_key: Some("key-456".to_string()),
        }));

        assert!(!gate.has_credential().await);
        gate.request_credential().await;
        assert!(gate.has_credential().await);
    }

    #[tokio::test]
    async fn declined_prompt_leaves_the_gate_closed() {
        let store = Arc::new(ApiKeyStore::new());
        let gate = StoredCredentialGate::new(store)
            .with_prompt(Arc::new(FixedPrompt { api_key: None }));

        gate.request_credential().await;
        assert!(!gate.has_credential().await);
    }

    #[tokio::test]
    async fn gate_without_prompt_is_inert() {
        let gate = StoredCredentialGate::new(Arc::new(ApiKeyStore::new()));
        gate.request_credential().await;
        assert!(!gate.has_credential().await);
    }
}
