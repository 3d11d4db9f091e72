//! Boundary checks for callers assembling a roster.
//!
//! The scheduler itself assumes well-formed input; these checks belong at
//! the edge where attendee rows and the requested round count come in.

use itertools::Itertools;
use thiserror::Error;

use crate::model::entity::Attendee;

/// Upper bound a caller should enforce on the requested round count.
pub const MAX_ROUNDS: u32 = 20;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("attendee id must not be empty")]
    EmptyId,
    #[error("duplicate attendee id: {0}")]
    DuplicateId(String),
    #[error("round count {0} is outside 1..={MAX_ROUNDS}")]
    RoundCountOutOfRange(u32),
}

/// Checks id shape, id uniqueness and the round-count bound. A roster with
/// one empty category passes: that is a degenerate schedule, not an error.
pub fn validate(attendees: &[Attendee], round_count: u32) -> Result<(), RosterError> {
    if !(1..=MAX_ROUNDS).contains(&round_count) {
        return Err(RosterError::RoundCountOutOfRange(round_count));
    }
    if attendees.iter().any(|a| a.id.is_empty()) {
        return Err(RosterError::EmptyId);
    }
    if let Some(id) = attendees.iter().map(|a| &a.id).duplicates().next() {
        return Err(RosterError::DuplicateId(id.clone()));
    }
    Ok(())
}
