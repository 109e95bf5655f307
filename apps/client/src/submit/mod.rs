//! Submission lifecycle: one request in flight per form, one transition per
//! attempt, and a generation guard so a result can never land on state that
//! has moved on (the owning view was torn down or a newer attempt started).

pub mod payload;

use serde_json::Value;
use tracing::debug;

/// Lifecycle of the current submission attempt. Created `Pending` at
/// submission start, transitions exactly once to `Succeeded` or `Failed`,
/// and is discarded when the next attempt begins.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(Value),
    Failed(String),
}

/// Proof of which attempt a completion belongs to. Issued by
/// [`SubmissionSlot::begin`] and checked by [`SubmissionSlot::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

/// Holds the single submission slot owned by one form instance.
#[derive(Debug, Default)]
pub struct SubmissionSlot {
    status: SubmissionStatus,
    generation: u64,
}

impl SubmissionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }

    /// Starts a new attempt, discarding any previous result. Refused (returns
    /// `None`) while an attempt is already in flight — the submit trigger is
    /// expected to be disabled then, and the refusal here is the backstop.
    pub fn begin(&mut self) -> Option<SubmissionTicket> {
        if self.is_pending() {
            return None;
        }
        self.generation += 1;
        self.status = SubmissionStatus::Pending;
        Some(SubmissionTicket {
            generation: self.generation,
        })
    }

    /// Applies the outcome of the attempt identified by `ticket`. A ticket
    /// from a superseded generation is discarded: its request raced with an
    /// invalidation or a newer attempt, and applying it would resurrect
    /// state the owner already abandoned. Returns whether the result was
    /// applied.
    pub fn complete(&mut self, ticket: SubmissionTicket, result: Result<Value, String>) -> bool {
        if ticket.generation != self.generation || !self.is_pending() {
            debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                "discarding stale submission result"
            );
            return false;
        }
        self.status = match result {
            Ok(payload) => SubmissionStatus::Succeeded(payload),
            Err(message) => SubmissionStatus::Failed(message),
        };
        true
    }

    /// Detaches the slot from any in-flight request, e.g. when the owning
    /// view is torn down. The request itself may still run to completion;
    /// its result will carry a stale ticket and be discarded.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        if self.is_pending() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slot_starts_idle() {
        let slot = SubmissionSlot::new();
        assert_eq!(*slot.status(), SubmissionStatus::Idle);
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_begin_moves_to_pending() {
        let mut slot = SubmissionSlot::new();
        let ticket = slot.begin();
        assert!(ticket.is_some());
        assert!(slot.is_pending());
    }

    #[test]
    fn test_second_begin_while_pending_is_refused() {
        let mut slot = SubmissionSlot::new();
        let _ticket = slot.begin().unwrap();
        assert!(slot.begin().is_none());
    }

    #[test]
    fn test_complete_success_applies_payload() {
        let mut slot = SubmissionSlot::new();
        let ticket = slot.begin().unwrap();
        assert!(slot.complete(ticket, Ok(json!({"id": 7}))));
        assert_eq!(
            *slot.status(),
            SubmissionStatus::Succeeded(json!({"id": 7}))
        );
    }

    #[test]
    fn test_complete_failure_carries_message() {
        let mut slot = SubmissionSlot::new();
        let ticket = slot.begin().unwrap();
        slot.complete(ticket, Err("A network error occurred".to_string()));
        assert_eq!(
            *slot.status(),
            SubmissionStatus::Failed("A network error occurred".to_string())
        );
    }

    #[test]
    fn test_transition_happens_exactly_once() {
        let mut slot = SubmissionSlot::new();
        let ticket = slot.begin().unwrap();
        assert!(slot.complete(ticket, Ok(json!(1))));
        // The same ticket cannot overwrite the settled result.
        assert!(!slot.complete(ticket, Err("late failure".to_string())));
        assert_eq!(*slot.status(), SubmissionStatus::Succeeded(json!(1)));
    }

    #[test]
    fn test_next_attempt_discards_previous_result() {
        let mut slot = SubmissionSlot::new();
        let first = slot.begin().unwrap();
        slot.complete(first, Err("boom".to_string()));
        let _second = slot.begin().unwrap();
        assert!(slot.is_pending());
    }

    #[test]
    fn test_invalidate_discards_in_flight_result() {
        let mut slot = SubmissionSlot::new();
        let ticket = slot.begin().unwrap();
        slot.invalidate();
        assert!(!slot.complete(ticket, Ok(json!({"id": 7}))));
        assert_eq!(*slot.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_stale_ticket_from_older_attempt_is_discarded() {
        let mut slot = SubmissionSlot::new();
        let first = slot.begin().unwrap();
        slot.invalidate();
        let second = slot.begin().unwrap();
        assert!(!slot.complete(first, Ok(json!("old"))));
        assert!(slot.complete(second, Ok(json!("new"))));
        assert_eq!(*slot.status(), SubmissionStatus::Succeeded(json!("new")));
    }
}
