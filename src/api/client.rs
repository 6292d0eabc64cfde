use crate::config::AppConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================
// Error Types
// ============================================

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("chat endpoint error {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected chat response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Wire Types
// ============================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub session_id: String,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            session_id: session_id.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub source_documents: Option<Vec<String>>,
}

// ============================================
// Backend
// ============================================

/// Anything that can answer one chat turn.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> ChatResult<String>;
}

pub struct HttpChatBackend {
    client: Client,
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_endpoint(config.chat_endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> ChatResult<String> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ChatError::Status { status, body });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        if let Some(intent) = &parsed.intent {
            tracing::debug!(intent = %intent, "chat reply classified");
        }
        Ok(parsed.response)
    }
}
