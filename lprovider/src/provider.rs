//! Reply provider contract.
//!
//! A reply provider turns free-form user text plus a difficulty hint into
//! complete reply text. The upstream services resolve with the full reply,
//! so the contract carries no streaming surface.

use std::future::Future;
use std::pin::Pin;

use crate::{Difficulty, ProviderError};

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRequest {
    pub text: String,
    pub difficulty: Difficulty,
}

impl ReplyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            difficulty: Difficulty::default(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

pub trait ReplyProvider: Send + Sync {
    fn send_reply<'a>(
        &'a self,
        request: ReplyRequest,
    ) -> ProviderFuture<'a, Result<String, ProviderError>>;
}

#[cfg(test)]
mod tests {
    use super::{ReplyProvider, ReplyRequest};
    use crate::{Difficulty, ProviderError, ProviderFuture};

    #[derive(Debug)]
    struct EchoProvider;

    impl ReplyProvider for EchoProvider {
        fn send_reply<'a>(
            &'a self,
            request: ReplyRequest,
        ) -> ProviderFuture<'a, Result<String, ProviderError>> {
            Box::pin(async move { Ok(format!("{}:{}", request.difficulty, request.text)) })
        }
    }

    #[test]
    fn reply_request_builder_applies_difficulty() {
        let request = ReplyRequest::new("hello").with_difficulty(Difficulty::Advanced);
        assert_eq!(request.text, "hello");
        assert_eq!(request.difficulty, Difficulty::Advanced);
    }

    #[tokio::test]
    async fn provider_receives_text_and_difficulty() {
        let provider = EchoProvider;
        let request = ReplyRequest::new("tree pose").with_difficulty(Difficulty::Beginner);

        let reply = provider
            .send_reply(request)
            .await
            .expect("reply should resolve");
        assert_eq!(reply, "beginner:tree pose");
    }
}
