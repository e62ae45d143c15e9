use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ApiKeyStore, Difficulty, ProviderError, ProviderFuture, ReplyProvider, ReplyRequest,
};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const BASE_INSTRUCTION: &str = "You are a friendly and knowledgeable yoga assistant. \
    Answer questions about yoga poses, philosophy, breathing, and meditation in a \
    warm, encouraging tone.";

#[derive(Clone)]
pub struct GeminiProvider {
    credentials: Arc<ApiKeyStore>,
    transport: Arc<dyn GeminiTransport>,
    model: String,
}

impl GeminiProvider {
    pub fn new(credentials: Arc<ApiKeyStore>, transport: Arc<dyn GeminiTransport>) -> Self {
        Self {
            credentials,
            transport,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn resolve_api_key(&self) -> Result<String, ProviderError> {
        self.credentials
            .with_api_key(|value| value.to_string())?
            .ok_or_else(|| ProviderError::authentication("no Gemini API key configured"))
    }

    fn system_instruction(difficulty: Difficulty) -> String {
        match difficulty {
            Difficulty::All => BASE_INSTRUCTION.to_string(),
            level => format!(
                "{BASE_INSTRUCTION} When suggesting poses, only suggest {level} level poses."
            ),
        }
    }

    fn build_api_request(request: ReplyRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(request.text)],
            system_instruction: Some(GeminiContent::system(Self::system_instruction(
                request.difficulty,
            ))),
        }
    }
}

impl ReplyProvider for GeminiProvider {
    fn send_reply<'a>(
        &'a self,
        request: ReplyRequest,
    ) -> ProviderFuture<'a, Result<String, ProviderError>> {
        Box::pin(async move {
            let api_key = self.resolve_api_key()?;
            let api_request = Self::build_api_request(request);
            let response = self
                .transport
                .generate(self.model.clone(), api_request, api_key)
                .await?;

            extract_reply_text(response)
        })
    }
}

pub trait GeminiTransport: Send + Sync + std::fmt::Debug {
    fn generate<'a>(
        &'a self,
        model: String,
        request: GeminiRequest,
        api_key: String,
    ) -> ProviderFuture<'a, Result<GeminiResponse, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct GeminiHttpTransport {
    client: Client,
    base_url: String,
}

impl GeminiHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.base_url.trim_end_matches('/')
        )
    }

    async fn parse_error(response: Response) -> ProviderError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("Gemini request failed with status {status}"));

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::authentication(message)
            }
            StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited(message),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                ProviderError::timeout(message)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ProviderError::invalid_request(message)
            }
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                ProviderError::unavailable(message)
            }
            _ => ProviderError::transport(message),
        }
    }
}

impl GeminiTransport for GeminiHttpTransport {
    fn generate<'a>(
        &'a self,
        model: String,
        request: GeminiRequest,
        api_key: String,
    ) -> ProviderFuture<'a, Result<GeminiResponse, ProviderError>> {
        Box::pin(async move {
            let url = self.endpoint(&model);
            let response = self
                .client
                .post(url)
                .header("x-goog-api-key", api_key)
                .json(&request)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ProviderError::timeout(err.to_string())
                    } else {
                        ProviderError::transport(err.to_string())
                    }
                })?;

            if !response.status().is_success() {
                return Err(Self::parse_error(response).await);
            }

            response
                .json()
                .await
                .map_err(|err| ProviderError::malformed_response(err.to_string()))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![GeminiPart { text: text.into() }],
        }
    }

    fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}

fn extract_reply_text(response: GeminiResponse) -> Result<String, ProviderError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(ProviderError::malformed_response(
            "Gemini response carried no reply text",
        ));
    }

    Ok(text)
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    parsed
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
