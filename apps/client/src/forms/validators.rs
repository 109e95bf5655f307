//! Pure step predicates over form state.
//!
//! Every predicate trims before judging: whitespace-only input is empty
//! input. Required lists use non-empty "every element" semantics — an empty
//! list FAILS even though a naive `all()` would vacuously pass, because a
//! step that owns a required list needs at least one row to be meaningful.

use crate::forms::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

/// Minimum trimmed length for the professional summary.
pub const SUMMARY_MIN_CHARS: usize = 30;

/// Non-empty after trimming.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// At least `min` characters after trimming.
pub fn meets_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// At least one list entry that survives trimming.
pub fn has_any_entry(entries: &[String]) -> bool {
    entries.iter().any(|e| is_filled(e))
}

pub fn personal_complete(personal: &PersonalInfo) -> bool {
    is_filled(&personal.full_name)
        && is_filled(&personal.email)
        && is_filled(&personal.phone)
        && is_filled(&personal.location)
}

pub fn summary_complete(summary: &str) -> bool {
    meets_min_len(summary, SUMMARY_MIN_CHARS)
}

pub fn education_entry_complete(entry: &EducationEntry) -> bool {
    // GPA is optional.
    is_filled(&entry.degree)
        && is_filled(&entry.institution)
        && is_filled(&entry.location)
        && is_filled(&entry.graduation_date)
}

/// Requires at least one row, each row complete.
pub fn education_complete(entries: &[EducationEntry]) -> bool {
    !entries.is_empty() && entries.iter().all(education_entry_complete)
}

pub fn experience_entry_complete(entry: &ExperienceEntry) -> bool {
    // A blank end date means a current role.
    is_filled(&entry.job_title)
        && is_filled(&entry.company)
        && is_filled(&entry.location)
        && is_filled(&entry.start_date)
        && is_filled(&entry.description)
}

/// Requires at least one row, each row complete.
pub fn experience_complete(entries: &[ExperienceEntry]) -> bool {
    !entries.is_empty() && entries.iter().all(experience_entry_complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_education() -> EducationEntry {
        EducationEntry {
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            location: "Denver, CO".to_string(),
            graduation_date: "2019-05".to_string(),
            gpa: String::new(),
        }
    }

    fn complete_experience() -> ExperienceEntry {
        ExperienceEntry {
            job_title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            description: "Built the billing pipeline.".to_string(),
        }
    }

    #[test]
    fn test_is_filled_rejects_whitespace_only() {
        assert!(is_filled("x"));
        assert!(!is_filled(""));
        assert!(!is_filled("   "));
        assert!(!is_filled("\t\n"));
    }

    #[test]
    fn test_meets_min_len_trims_before_counting() {
        assert!(meets_min_len("  abcde  ", 5));
        assert!(!meets_min_len("  abcd  ", 5));
    }

    #[test]
    fn test_summary_just_under_threshold_fails() {
        assert!(!summary_complete("Built web apps for 3 years."));
    }

    #[test]
    fn test_summary_crosses_threshold_after_append() {
        let mut summary = "Built web apps for 3 years.".to_string();
        summary.push_str(" Good.");
        assert!(summary_complete(&summary));
    }

    #[test]
    fn test_summary_whitespace_padding_does_not_count() {
        let padded = format!("short summary{}", " ".repeat(40));
        assert!(!summary_complete(&padded));
    }

    #[test]
    fn test_personal_complete_requires_every_field() {
        let mut p = PersonalInfo {
            full_name: "Dana Whitcomb".to_string(),
            email: "dana@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "  ".to_string(),
        };
        assert!(!personal_complete(&p));
        p.location = "Austin, TX".to_string();
        assert!(personal_complete(&p));
    }

    #[test]
    fn test_empty_education_list_fails() {
        assert!(!education_complete(&[]));
    }

    #[test]
    fn test_education_entry_missing_institution_fails_then_passes() {
        let mut entry = complete_education();
        entry.institution.clear();
        assert!(!education_complete(std::slice::from_ref(&entry)));
        entry.institution = "State University".to_string();
        assert!(education_complete(std::slice::from_ref(&entry)));
    }

    #[test]
    fn test_education_gpa_is_optional() {
        let entry = complete_education();
        assert!(entry.gpa.is_empty());
        assert!(education_entry_complete(&entry));
    }

    #[test]
    fn test_one_bad_row_fails_the_whole_list() {
        let good = complete_education();
        let mut bad = complete_education();
        bad.graduation_date = " ".to_string();
        assert!(!education_complete(&[good, bad]));
    }

    #[test]
    fn test_experience_blank_end_date_is_allowed() {
        assert!(experience_complete(std::slice::from_ref(&complete_experience())));
    }

    #[test]
    fn test_empty_experience_list_fails() {
        assert!(!experience_complete(&[]));
    }

    #[test]
    fn test_has_any_entry_ignores_blank_strings() {
        assert!(!has_any_entry(&[]));
        assert!(!has_any_entry(&["  ".to_string()]));
        assert!(has_any_entry(&["  ".to_string(), "Rust".to_string()]));
    }
}
