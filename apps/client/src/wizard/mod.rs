//! Step controller for the multi-screen wizards.
//!
//! A wizard is an ordered list of steps and a 1-based cursor. Going forward
//! is gated by the current step's completion predicate; going backward is
//! always allowed, even when the data behind the cursor no longer passes.
//! There is no terminal state — the last step hosts the submit action.

/// One screen's worth of fields: a display name and a pure completion
/// predicate over the whole form. Predicates are re-evaluated on every
/// query; nothing is cached.
pub struct StepDescriptor<S> {
    pub name: &'static str,
    pub is_complete: fn(&S) -> bool,
}

pub struct Stepper<S> {
    steps: Vec<StepDescriptor<S>>,
    /// 1-based cursor into `steps`.
    current: usize,
}

impl<S> Stepper<S> {
    /// Panics on an empty step list; a wizard with no steps is a defect.
    pub fn new(steps: Vec<StepDescriptor<S>>) -> Self {
        assert!(!steps.is_empty(), "a wizard needs at least one step");
        Self { steps, current: 1 }
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current == self.steps.len()
    }

    pub fn current_step_name(&self) -> &'static str {
        self.steps[self.current - 1].name
    }

    /// Whether the current step's fields pass validation right now.
    pub fn current_step_complete(&self, state: &S) -> bool {
        (self.steps[self.current - 1].is_complete)(state)
    }

    /// Whether every step passes — the gate for final submission.
    pub fn all_steps_complete(&self, state: &S) -> bool {
        self.steps.iter().all(|step| (step.is_complete)(state))
    }

    /// Moves forward one step if the current step validates and there is a
    /// next step. An invalid advance is a silent no-op, not an error, even
    /// though the view normally disables the trigger.
    pub fn advance(&mut self, state: &S) -> bool {
        if self.is_last_step() || !self.current_step_complete(state) {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves back one step when not on the first. Never validates: earlier
    /// screens stay reachable even if their data has since been cleared.
    pub fn retreat(&mut self) -> bool {
        if self.current == 1 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}
