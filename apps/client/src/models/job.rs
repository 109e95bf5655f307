use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

/// One row in the job browse list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: String,
    pub employment_type: EmploymentType,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub posted_at: DateTime<Utc>,
}

/// Full job record as returned by the detail and create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub posted_at: DateTime<Utc>,
    pub applicant_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}
