//! Wizard flows: one form, its stepper, one submission slot, and the
//! endpoint the final step submits to. The endpoint sits behind a trait
//! object so flows run against fakes in tests.
//!
//! Reset-after-success is flow-specific on purpose: the resume wizard
//! returns to a blank step 1 so the next resume starts clean, while the
//! job-posting wizard keeps its state for follow-up edits. Both behaviors
//! are pinned by tests below.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::error;

use crate::api::webhooks::ResumeWebhookClient;
use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::forms::job_posting::{job_posting_steps, JobPostingForm};
use crate::forms::resume::{resume_steps, ResumeForm};
use crate::submit::payload::{build_job_payload, build_resume_payload};
use crate::submit::{SubmissionSlot, SubmissionStatus};
use crate::wizard::Stepper;

/// Where a flow's final step sends its payload.
#[async_trait]
pub trait SubmitEndpoint: Send + Sync {
    async fn submit(&self, body: &Value) -> Result<Value, ClientError>;
}

/// Submits resume payloads to the resume-generation webhook.
pub struct ResumeGenerationEndpoint {
    client: ResumeWebhookClient,
}

impl ResumeGenerationEndpoint {
    const ACTION: &'static str = "generate_resume";

    pub fn new(client: ResumeWebhookClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubmitEndpoint for ResumeGenerationEndpoint {
    async fn submit(&self, body: &Value) -> Result<Value, ClientError> {
        self.client.post(Self::ACTION, body).await
    }
}

/// Submits job-posting payloads to the job-creation endpoint.
pub struct JobCreateEndpoint {
    api: ApiClient,
}

impl JobCreateEndpoint {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SubmitEndpoint for JobCreateEndpoint {
    async fn submit(&self, body: &Value) -> Result<Value, ClientError> {
        self.api.post_json("/api/v1/jobs", body).await
    }
}

/// The four-step resume wizard.
pub struct ResumeFlow {
    pub form: ResumeForm,
    stepper: Stepper<ResumeForm>,
    slot: SubmissionSlot,
    endpoint: Arc<dyn SubmitEndpoint>,
}

impl ResumeFlow {
    pub fn new(endpoint: Arc<dyn SubmitEndpoint>) -> Self {
        Self {
            form: ResumeForm::new(),
            stepper: Stepper::new(resume_steps()),
            slot: SubmissionSlot::new(),
            endpoint,
        }
    }

    pub fn current_step(&self) -> usize {
        self.stepper.current_step()
    }

    pub fn current_step_name(&self) -> &'static str {
        self.stepper.current_step_name()
    }

    pub fn can_advance(&self) -> bool {
        !self.stepper.is_last_step() && self.stepper.current_step_complete(&self.form)
    }

    pub fn advance(&mut self) -> bool {
        self.stepper.advance(&self.form)
    }

    pub fn retreat(&mut self) -> bool {
        self.stepper.retreat()
    }

    pub fn submission(&self) -> &SubmissionStatus {
        self.slot.status()
    }

    /// Whether the submit trigger should be enabled right now.
    pub fn can_submit(&self) -> bool {
        self.stepper.is_last_step()
            && self.stepper.all_steps_complete(&self.form)
            && !self.slot.is_pending()
    }

    /// Detaches the flow from any in-flight submission; call when the owning
    /// view goes away. A late response will be discarded, not applied.
    pub fn invalidate(&mut self) {
        self.slot.invalidate();
    }

    /// Submits the resume for generation.
    ///
    /// Validation problems come back as `Err` for inline display and never
    /// touch the submission slot; network outcomes (including failures)
    /// land in the slot. Not on the last step, or already pending: no-op.
    /// On success the form and stepper reset; the succeeded payload stays
    /// available for the summary view.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        if !self.stepper.is_last_step() || self.slot.is_pending() {
            return Ok(());
        }
        if !self.stepper.all_steps_complete(&self.form) {
            return Err(ClientError::Validation(
                "please complete all required fields".to_string(),
            ));
        }
        let body = serde_json::to_value(build_resume_payload(&self.form))?;
        let Some(ticket) = self.slot.begin() else {
            return Ok(());
        };
        let applied = match self.endpoint.submit(&body).await {
            Ok(value) => self.slot.complete(ticket, Ok(value)),
            Err(err) => {
                error!("resume submission failed: {err}");
                self.slot.complete(ticket, Err(err.display_message()))
            }
        };
        if applied && matches!(self.slot.status(), SubmissionStatus::Succeeded(_)) {
            self.form.reset();
            self.stepper.reset();
        }
        Ok(())
    }
}

/// The two-step job-posting wizard.
pub struct JobPostingFlow {
    pub form: JobPostingForm,
    stepper: Stepper<JobPostingForm>,
    slot: SubmissionSlot,
    endpoint: Arc<dyn SubmitEndpoint>,
}

impl JobPostingFlow {
    pub fn new(endpoint: Arc<dyn SubmitEndpoint>) -> Self {
        Self {
            form: JobPostingForm::new(),
            stepper: Stepper::new(job_posting_steps()),
            slot: SubmissionSlot::new(),
            endpoint,
        }
    }

    pub fn current_step(&self) -> usize {
        self.stepper.current_step()
    }

    pub fn current_step_name(&self) -> &'static str {
        self.stepper.current_step_name()
    }

    pub fn can_advance(&self) -> bool {
        !self.stepper.is_last_step() && self.stepper.current_step_complete(&self.form)
    }

    pub fn advance(&mut self) -> bool {
        self.stepper.advance(&self.form)
    }

    pub fn retreat(&mut self) -> bool {
        self.stepper.retreat()
    }

    pub fn submission(&self) -> &SubmissionStatus {
        self.slot.status()
    }

    pub fn can_submit(&self) -> bool {
        self.stepper.is_last_step()
            && self.stepper.all_steps_complete(&self.form)
            && !self.slot.is_pending()
    }

    pub fn invalidate(&mut self) {
        self.slot.invalidate();
    }

    /// Submits the posting. Same contract as [`ResumeFlow::submit`], except
    /// the form keeps its state after success — the employer lands on the
    /// posted job and may come back to tweak it.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        if !self.stepper.is_last_step() || self.slot.is_pending() {
            return Ok(());
        }
        if !self.stepper.all_steps_complete(&self.form) {
            return Err(ClientError::Validation(
                "please complete all required fields".to_string(),
            ));
        }
        let payload = build_job_payload(&self.form)?;
        let body = serde_json::to_value(payload)?;
        let Some(ticket) = self.slot.begin() else {
            return Ok(());
        };
        match self.endpoint.submit(&body).await {
            Ok(value) => {
                self.slot.complete(ticket, Ok(value));
            }
            Err(err) => {
                error!("job posting submission failed: {err}");
                self.slot.complete(ticket, Err(err.display_message()));
            }
        }
        Ok(())
    }
}
