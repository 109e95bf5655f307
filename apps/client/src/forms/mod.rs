//! In-progress form records for the multi-step wizards.
//!
//! Each form is a strongly-typed record mutated only by its owning view.
//! The containers accept any value without judgement; whether a step's
//! fields are acceptable is decided by the pure predicates in
//! [`validators`], re-evaluated on every query.

pub mod job_posting;
pub mod resume;
pub mod validators;

pub use job_posting::JobPostingForm;
pub use resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeForm};
