use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status assigned by the employer or recruiter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    InReview,
    Shortlisted,
    Rejected,
    Hired,
}

/// One row in an employer's applicant list for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub id: Uuid,
    pub job_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub headline: Option<String>,
    pub years_of_experience: Option<u32>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Full applicant record for the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantDetail {
    pub id: Uuid,
    pub job_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub years_of_experience: Option<u32>,
    pub skills: Vec<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_status_serde() {
        let s: ApplicationStatus = serde_json::from_str(r#""in_review""#).unwrap();
        assert_eq!(s, ApplicationStatus::InReview);
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Shortlisted).unwrap(),
            r#""shortlisted""#
        );
    }

    #[test]
    fn test_applicant_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "job_id": "16fd2706-8baf-433b-82eb-8c7fada847da",
            "full_name": "Dana Whitcomb",
            "email": "dana@example.com",
            "headline": null,
            "years_of_experience": null,
            "status": "submitted",
            "applied_at": "2025-12-01T12:00:00Z"
        }"#;
        let a: Applicant = serde_json::from_str(json).unwrap();
        assert_eq!(a.full_name, "Dana Whitcomb");
        assert!(a.headline.is_none());
        assert_eq!(a.status, ApplicationStatus::Submitted);
    }
}
