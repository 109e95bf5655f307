use crate::forms::validators;
use crate::wizard::StepDescriptor;

/// Contact block collected on the first wizard step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// One education row. Rows have positional identity only: removing a row
/// re-indexes the ones after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: String,
}

/// One work-experience row. A blank `end_date` means a current role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// The resume being built across the four wizard steps.
///
/// Scalar fields are mutated directly; list rows go through the methods
/// below so out-of-bounds access fails loudly instead of growing the list.
/// No length cap is enforced anywhere — the state is ephemeral and owned by
/// a single view instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeForm {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    /// Comma-separated free text, split into a list at submission.
    pub technical_skills: String,
    pub languages: String,
    pub certifications: String,
}

impl ResumeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of `template` (usually a blank row).
    pub fn append_education(&mut self, template: &EducationEntry) {
        self.education.push(template.clone());
    }

    /// Mutable access to one education row. Panics if `index` is out of
    /// bounds — the view owns the indices it renders, so this is a defect,
    /// never user input.
    pub fn education_mut(&mut self, index: usize) -> &mut EducationEntry {
        &mut self.education[index]
    }

    /// Removes a row and re-indexes the rest. Removing the last remaining
    /// row of a required list is allowed here; the step validator is what
    /// blocks advancement afterwards.
    pub fn remove_education(&mut self, index: usize) {
        self.education.remove(index);
    }

    pub fn append_experience(&mut self, template: &ExperienceEntry) {
        self.experience.push(template.clone());
    }

    pub fn experience_mut(&mut self, index: usize) -> &mut ExperienceEntry {
        &mut self.experience[index]
    }

    pub fn remove_experience(&mut self, index: usize) {
        self.experience.remove(index);
    }

    /// Back to the initial empty shape.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The four resume wizard steps, in order.
pub fn resume_steps() -> Vec<StepDescriptor<ResumeForm>> {
    vec![
        StepDescriptor {
            name: "personal",
            is_complete: |form| validators::personal_complete(&form.personal),
        },
        StepDescriptor {
            name: "summary",
            is_complete: |form| validators::summary_complete(&form.summary),
        },
        StepDescriptor {
            name: "history",
            is_complete: |form| {
                validators::education_complete(&form.education)
                    && validators::experience_complete(&form.experience)
            },
        },
        StepDescriptor {
            name: "skills",
            is_complete: |form| validators::is_filled(&form.technical_skills),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = ResumeForm::new();
        assert!(form.personal.full_name.is_empty());
        assert!(form.education.is_empty());
        assert!(form.experience.is_empty());
    }

    #[test]
    fn test_list_entry_setter_round_trip() {
        let mut form = ResumeForm::new();
        form.append_education(&EducationEntry::default());
        form.education_mut(0).institution = "MIT".to_string();
        assert_eq!(form.education[0].institution, "MIT");
    }

    #[test]
    fn test_append_grows_by_one_and_preserves_prior_rows() {
        let mut form = ResumeForm::new();
        let first = EducationEntry {
            degree: "BSc".to_string(),
            ..Default::default()
        };
        form.append_education(&first);
        form.append_education(&EducationEntry::default());
        assert_eq!(form.education.len(), 2);
        assert_eq!(form.education[0].degree, "BSc");
        assert_eq!(form.education[1], EducationEntry::default());
    }

    #[test]
    fn test_append_pushes_a_copy_not_a_reference() {
        let mut form = ResumeForm::new();
        let template = EducationEntry::default();
        form.append_education(&template);
        form.education_mut(0).degree = "MSc".to_string();
        assert!(template.degree.is_empty());
    }

    #[test]
    fn test_remove_shifts_later_rows_down() {
        let mut form = ResumeForm::new();
        for degree in ["a", "b", "c"] {
            form.append_education(&EducationEntry {
                degree: degree.to_string(),
                ..Default::default()
            });
        }
        form.remove_education(1);
        assert_eq!(form.education.len(), 2);
        assert_eq!(form.education[0].degree, "a");
        assert_eq!(form.education[1].degree, "c");
    }

    #[test]
    fn test_remove_may_empty_a_required_list() {
        let mut form = ResumeForm::new();
        form.append_education(&EducationEntry::default());
        form.remove_education(0);
        assert!(form.education.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_row_access_panics() {
        let mut form = ResumeForm::new();
        form.education_mut(0).degree = "BSc".to_string();
    }

    #[test]
    fn test_reset_restores_initial_shape() {
        let mut form = ResumeForm::new();
        form.summary = "Ten years of backend work across three startups.".to_string();
        form.append_experience(&ExperienceEntry::default());
        form.reset();
        assert_eq!(form, ResumeForm::default());
    }

    #[test]
    fn test_step_order_is_fixed() {
        let names: Vec<&str> = resume_steps().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["personal", "summary", "history", "skills"]);
    }
}
