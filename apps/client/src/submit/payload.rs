//! Wire-shape transforms applied at submission time.
//!
//! Free-text fields are normalized here, not in the form containers:
//! comma-separated text becomes an ordered list, amount-like text becomes a
//! plain integer, and list rows are trimmed with blank rows dropped.

use serde::Serialize;

use crate::errors::ClientError;
use crate::forms::job_posting::JobPostingForm;
use crate::forms::resume::{EducationEntry, ExperienceEntry, ResumeForm};
use crate::models::job::EmploymentType;

/// Splits comma-separated free text into trimmed, non-empty segments.
/// "Python, Go,  , Rust" → ["Python", "Go", "Rust"].
pub fn split_list_field(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// Trims each entry and drops the ones that end up empty.
pub fn clean_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect()
}

/// Normalizes amount-like input to a plain integer.
///
/// Accepts "10000", "10,000", and "10k" (case-insensitive suffix, decimals
/// allowed before it: "7.5k" → 7500). Anything with a non-numeric remainder
/// is rejected.
pub fn parse_amount(raw: &str) -> Result<u64, ClientError> {
    let trimmed = raw.trim();
    let invalid = || ClientError::Validation(format!("'{trimmed}' is not a valid amount"));

    let (digits, thousands) = match trimmed.strip_suffix(['k', 'K']) {
        Some(prefix) => (prefix.trim_end(), true),
        None => (trimmed, false),
    };
    let digits: String = digits.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Err(invalid());
    }

    if thousands {
        if digits.chars().filter(|c| *c == '.').count() > 1
            || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        {
            return Err(invalid());
        }
        let value: f64 = digits.parse().map_err(|_| invalid())?;
        Ok((value * 1000.0).round() as u64)
    } else {
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.parse::<u64>().map_err(|_| invalid())
    }
}

/// Parses the optional salary pair and enforces min strictly below max.
pub fn parse_salary_range(
    min_raw: &str,
    max_raw: &str,
) -> Result<(Option<u64>, Option<u64>), ClientError> {
    let min = match min_raw.trim() {
        "" => None,
        raw => Some(parse_amount(raw)?),
    };
    let max = match max_raw.trim() {
        "" => None,
        raw => Some(parse_amount(raw)?),
    };
    if let (Some(min), Some(max)) = (min, max) {
        if min >= max {
            return Err(ClientError::Validation(
                "maximum salary must be greater than minimum".to_string(),
            ));
        }
    }
    Ok((min, max))
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonalPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationPayload {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperiencePayload {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
}

/// The `resume_data` body sent to the resume-generation webhook.
#[derive(Debug, Clone, Serialize)]
pub struct ResumePayload {
    pub personal: PersonalPayload,
    pub summary: String,
    pub education: Vec<EducationPayload>,
    pub experience: Vec<ExperiencePayload>,
    pub technical_skills: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

/// The body sent to the job-creation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct JobPostingPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
}

fn opt_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn education_payload(entry: &EducationEntry) -> Option<EducationPayload> {
    let all_blank = [
        &entry.degree,
        &entry.institution,
        &entry.location,
        &entry.graduation_date,
        &entry.gpa,
    ]
    .iter()
    .all(|f| f.trim().is_empty());
    if all_blank {
        return None;
    }
    Some(EducationPayload {
        degree: entry.degree.trim().to_string(),
        institution: entry.institution.trim().to_string(),
        location: entry.location.trim().to_string(),
        graduation_date: entry.graduation_date.trim().to_string(),
        gpa: opt_trimmed(&entry.gpa),
    })
}

fn experience_payload(entry: &ExperienceEntry) -> Option<ExperiencePayload> {
    let all_blank = [
        &entry.job_title,
        &entry.company,
        &entry.location,
        &entry.start_date,
        &entry.end_date,
        &entry.description,
    ]
    .iter()
    .all(|f| f.trim().is_empty());
    if all_blank {
        return None;
    }
    Some(ExperiencePayload {
        job_title: entry.job_title.trim().to_string(),
        company: entry.company.trim().to_string(),
        location: entry.location.trim().to_string(),
        start_date: entry.start_date.trim().to_string(),
        end_date: opt_trimmed(&entry.end_date),
        description: entry.description.trim().to_string(),
    })
}

/// Serializes the resume form into its wire shape. Pure passthrough plus
/// trimming — no numeric fields, so this cannot fail.
pub fn build_resume_payload(form: &ResumeForm) -> ResumePayload {
    ResumePayload {
        personal: PersonalPayload {
            full_name: form.personal.full_name.trim().to_string(),
            email: form.personal.email.trim().to_string(),
            phone: form.personal.phone.trim().to_string(),
            location: form.personal.location.trim().to_string(),
        },
        summary: form.summary.trim().to_string(),
        education: form.education.iter().filter_map(education_payload).collect(),
        experience: form
            .experience
            .iter()
            .filter_map(experience_payload)
            .collect(),
        technical_skills: split_list_field(&form.technical_skills),
        languages: split_list_field(&form.languages),
        certifications: split_list_field(&form.certifications),
    }
}

/// Serializes the job-posting form into its wire shape. Fails with a
/// validation error on a malformed amount or an inverted salary range.
pub fn build_job_payload(form: &JobPostingForm) -> Result<JobPostingPayload, ClientError> {
    let (salary_min, salary_max) = parse_salary_range(&form.salary_min, &form.salary_max)?;
    Ok(JobPostingPayload {
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        category: form.category.trim().to_string(),
        location: form.location.trim().to_string(),
        employment_type: form.employment_type.clone(),
        requirements: clean_entries(&form.requirements),
        responsibilities: clean_entries(&form.responsibilities),
        salary_min,
        salary_max,
    })
}
