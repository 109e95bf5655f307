//! HTTP boundary to the job-board backend.
//!
//! One client, bearer-authenticated, JSON in and out. Non-success responses
//! are converted to a single structured error carrying the status and the
//! body's error message when one can be extracted; callers decide what the
//! user sees.

pub mod webhooks;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::ClientError;
use crate::models::applicant::{Applicant, ApplicantDetail, ApplicationStatus};
use crate::models::job::{Category, EmploymentType, Job, JobSummary};
use crate::models::profile::{Profile, ProfileUpdate};
use crate::models::Page;
use crate::submit::payload::JobPostingPayload;

/// Query parameters for the job browse list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Query parameters recruiters use to narrow a job's candidate pool.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicantFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// The backend REST client.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    auth_token: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Page<JobSummary>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/jobs"))
            .bearer_auth(&self.auth_token)
            .query(filter)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn get_job(&self, id: Uuid) -> Result<Job, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/jobs/{id}")))
            .bearer_auth(&self.auth_token)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn create_job(&self, payload: &JobPostingPayload) -> Result<Job, ClientError> {
        let value = self.post_json("/api/v1/jobs", payload).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn list_applicants(
        &self,
        job_id: Uuid,
        filter: &ApplicantFilter,
    ) -> Result<Page<Applicant>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/jobs/{job_id}/applicants")))
            .bearer_auth(&self.auth_token)
            .query(filter)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn get_applicant(&self, id: Uuid) -> Result<ApplicantDetail, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/applicants/{id}")))
            .bearer_auth(&self.auth_token)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn get_profile(&self) -> Result<Profile, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/profile"))
            .bearer_auth(&self.auth_token)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ClientError> {
        let response = self
            .http
            .patch(self.url("/api/v1/profile"))
            .bearer_auth(&self.auth_token)
            .json(update)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/categories"))
            .bearer_auth(&self.auth_token)
            .send()
            .await?;
        read_json(response).await
    }

    /// POSTs an arbitrary JSON body and returns the raw JSON response.
    /// The typed wrappers above and the submission flows both sit on this.
    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.auth_token)
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Converts a response into `T`, mapping non-success statuses to
/// [`ClientError::Api`] with the best message the body offers.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message_from_body(&body),
        });
    }
    Ok(response.json::<T>().await?)
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Extracts a human-readable message from an error body. Understands both
/// `{"error": {"message": ...}}` and `{"message": ...}`; anything else is
/// passed through as-is.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.map(|d| d.message).or(envelope.message))
        .unwrap_or_else(|| body.trim().to_string())
}
