//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

enum MockReply {
    Text(String),
    UpstreamStatus { status: u16, body: String },
}

/// Canned-reply text provider that records how often it was invoked.
pub struct MockTextProvider {
    reply: Option<MockReply>,
    calls: AtomicUsize,
}

impl MockTextProvider {
    /// Reply with the given text on every call.
    pub fn with_reply(text: impl Into<String>) -> Self {
        Self {
            reply: Some(MockReply::Text(text.into())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every call as if the upstream API returned this status.
    pub fn with_upstream_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: Some(MockReply::UpstreamStatus {
                status,
                body: body.into(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn disabled() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of generate calls received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            Some(MockReply::Text(text)) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            Some(MockReply::UpstreamStatus { status, body }) => {
                if *status == 429 {
                    return Err(ProviderError::RateLimited);
                }

                Err(ProviderError::ApiError {
                    status: *status,
                    body: body.clone(),
                })
            }
            None => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.reply {
            Some(_) => Ok(()),
            None => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
        }
    }
}
