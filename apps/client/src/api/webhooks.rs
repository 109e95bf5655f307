//! Clients for the two automation webhooks. Both are opaque collaborators:
//! JSON POST in, JSON out, no schema promised beyond the request shape.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::api::read_json;
use crate::config::Config;
use crate::errors::ClientError;
use crate::submit::payload::ResumePayload;

#[derive(Serialize)]
struct ResumeWebhookRequest<'a> {
    action: &'a str,
    resume_data: &'a Value,
}

/// Client for the resume-generation webhook.
#[derive(Clone)]
pub struct ResumeWebhookClient {
    http: Client,
    url: String,
}

impl ResumeWebhookClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            url: url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.resume_webhook_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub async fn generate(
        &self,
        action: &str,
        resume_data: &ResumePayload,
    ) -> Result<Value, ClientError> {
        self.post(action, &serde_json::to_value(resume_data)?).await
    }

    pub(crate) async fn post(
        &self,
        action: &str,
        resume_data: &Value,
    ) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(&self.url)
            .json(&ResumeWebhookRequest {
                action,
                resume_data,
            })
            .send()
            .await?;
        read_json(response).await
    }
}

/// Continuity identity for the chatbot: who is talking and which server-side
/// conversation to resume. Injected by the caller — this crate never reads
/// it from ambient storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    pub email: String,
    pub session_id: String,
}

#[derive(Serialize)]
struct ChatbotRequest<'a> {
    #[serde(rename = "sessionId")]
    session_id: &'a str,
    query: &'a str,
}

/// Client for the chatbot webhook.
#[derive(Clone)]
pub struct ChatbotClient {
    http: Client,
    url: String,
    session: ChatSession,
}

impl ChatbotClient {
    pub fn new(url: impl Into<String>, session: ChatSession, timeout: Duration) -> Self {
        Self {
            http: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            url: url.into(),
            session,
        }
    }

    pub fn from_config(config: &Config, session: ChatSession) -> Self {
        Self::new(
            config.chatbot_webhook_url.clone(),
            session,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub async fn send(&self, query: &str) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(&self.url)
            .json(&ChatbotRequest {
                session_id: &self.session.session_id,
                query,
            })
            .send()
            .await?;
        read_json(response).await
    }
}
