use crate::forms::validators;
use crate::models::job::EmploymentType;
use crate::wizard::StepDescriptor;

/// The job posting being built across the two wizard steps.
///
/// Salary fields stay free text here ("10,000", "10k") and are normalized
/// to integers at submission; the container never judges input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPostingForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub salary_min: String,
    pub salary_max: String,
}

impl JobPostingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_requirement(&mut self, text: impl Into<String>) {
        self.requirements.push(text.into());
    }

    /// Panics if `index` is out of bounds; the view owns its indices.
    pub fn set_requirement(&mut self, index: usize, text: impl Into<String>) {
        self.requirements[index] = text.into();
    }

    pub fn remove_requirement(&mut self, index: usize) {
        self.requirements.remove(index);
    }

    pub fn append_responsibility(&mut self, text: impl Into<String>) {
        self.responsibilities.push(text.into());
    }

    pub fn set_responsibility(&mut self, index: usize, text: impl Into<String>) {
        self.responsibilities[index] = text.into();
    }

    pub fn remove_responsibility(&mut self, index: usize) {
        self.responsibilities.remove(index);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The two job-posting wizard steps, in order.
pub fn job_posting_steps() -> Vec<StepDescriptor<JobPostingForm>> {
    vec![
        StepDescriptor {
            name: "details",
            is_complete: |form| {
                validators::is_filled(&form.title)
                    && validators::is_filled(&form.description)
                    && validators::is_filled(&form.category)
                    && validators::is_filled(&form.location)
            },
        },
        StepDescriptor {
            name: "terms",
            is_complete: |form| {
                validators::has_any_entry(&form.requirements)
                    && validators::has_any_entry(&form.responsibilities)
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_setter_round_trip() {
        let mut form = JobPostingForm::new();
        form.append_requirement("3+ years of Rust");
        form.set_requirement(0, "5+ years of Rust");
        assert_eq!(form.requirements[0], "5+ years of Rust");
    }

    #[test]
    fn test_remove_responsibility_reindexes() {
        let mut form = JobPostingForm::new();
        form.append_responsibility("Own the deploy pipeline");
        form.append_responsibility("Review pull requests");
        form.append_responsibility("Mentor juniors");
        form.remove_responsibility(0);
        assert_eq!(
            form.responsibilities,
            vec!["Review pull requests", "Mentor juniors"]
        );
    }

    #[test]
    #[should_panic]
    fn test_set_requirement_out_of_bounds_panics() {
        let mut form = JobPostingForm::new();
        form.set_requirement(2, "never appended");
    }

    #[test]
    fn test_details_step_requires_all_four_fields() {
        let steps = job_posting_steps();
        let mut form = JobPostingForm::new();
        form.title = "Backend Engineer".to_string();
        form.description = "Build and run our matching services.".to_string();
        form.category = "engineering".to_string();
        assert!(!(steps[0].is_complete)(&form));
        form.location = "Remote".to_string();
        assert!((steps[0].is_complete)(&form));
    }

    #[test]
    fn test_terms_step_requires_both_lists() {
        let steps = job_posting_steps();
        let mut form = JobPostingForm::new();
        form.append_requirement("Rust");
        assert!(!(steps[1].is_complete)(&form));
        form.append_responsibility("Ship features");
        assert!((steps[1].is_complete)(&form));
    }

    #[test]
    fn test_whitespace_only_entries_do_not_satisfy_terms() {
        let steps = job_posting_steps();
        let mut form = JobPostingForm::new();
        form.append_requirement("   ");
        form.append_responsibility("\t");
        assert!(!(steps[1].is_complete)(&form));
    }
}
