//! The scheduling model: events, participants and availability marks.
//!
//! An event carries an ordered list of candidate strings (see
//! [`crate::candidate`]) and an append-only list of participants. Responses
//! are keyed positionally: `availability[i]` answers `dates[i]`. Reshaping
//! the candidate list after responses exist is allowed but never migrates
//! recorded availability vectors; [`crate::tally`] defines how stale vectors
//! are counted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChoseiError, ChoseiResult};
use crate::store;

/// A schedulable event with date/time candidates and participant responses.
///
/// Field names serialize in camelCase so stored records match the payloads
/// the browser front end writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Candidate slots in voting order. Opaque text after creation; the
    /// create form allows freeform edits, so entries need not parse as dates.
    pub dates: Vec<String>,
    pub participants: Vec<Participant>,
    pub created_at: DateTime<Utc>,
}

/// One submitted response. Never edited or deleted once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// One mark per candidate, in voting order.
    pub availability: Vec<AvailabilityMark>,
    pub submitted_at: DateTime<Utc>,
}

/// A participant's answer to a single candidate.
///
/// Anything that is not an explicit yes or maybe deserializes as
/// `Unavailable`; absence of a mark is never distinguished from a no.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityMark {
    Available,
    Maybe,
    #[default]
    #[serde(other)]
    Unavailable,
}

impl Event {
    /// Create a new event with a fresh identifier and no participants.
    ///
    /// Blank candidate entries are dropped (the create form keeps empty
    /// input rows around); the remaining list must be non-empty.
    pub fn new(name: &str, description: Option<String>, dates: Vec<String>) -> ChoseiResult<Self> {
        if name.trim().is_empty() {
            return Err(ChoseiError::Validation(
                "event name must not be empty".into(),
            ));
        }

        let dates: Vec<String> = dates.into_iter().filter(|d| !d.trim().is_empty()).collect();

        if dates.is_empty() {
            return Err(ChoseiError::Validation(
                "at least one candidate date is required".into(),
            ));
        }

        Ok(Event {
            id: store::generate_id(),
            name: name.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            dates,
            participants: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Append a candidate slot at the end of the voting order.
    pub fn add_candidate(&mut self, raw: &str) {
        self.dates.push(raw.to_string());
    }

    /// Remove the candidate at `index`, shifting later candidates down.
    ///
    /// Recorded availability vectors are NOT migrated: marks submitted
    /// before the removal keep their original positions.
    pub fn remove_candidate(&mut self, index: usize) -> ChoseiResult<()> {
        if index >= self.dates.len() {
            return Err(ChoseiError::Validation(format!(
                "no candidate at index {index}"
            )));
        }
        if self.dates.len() == 1 {
            return Err(ChoseiError::Validation(
                "an event must keep at least one candidate".into(),
            ));
        }

        self.dates.remove(index);
        Ok(())
    }

    /// Replace the candidate text at `index` verbatim.
    ///
    /// Candidate text is opaque after creation, so the new value is not
    /// checked for date parseability.
    pub fn edit_candidate(&mut self, index: usize, value: &str) -> ChoseiResult<()> {
        if index >= self.dates.len() {
            return Err(ChoseiError::Validation(format!(
                "no candidate at index {index}"
            )));
        }

        self.dates[index] = value.to_string();
        Ok(())
    }

    /// Append a participant response covering every candidate.
    ///
    /// The availability vector must answer each candidate exactly once; a
    /// failed validation leaves `participants` untouched.
    pub fn add_participant(
        &mut self,
        name: &str,
        comment: Option<String>,
        availability: Vec<AvailabilityMark>,
    ) -> ChoseiResult<()> {
        if name.trim().is_empty() {
            return Err(ChoseiError::Validation(
                "participant name must not be empty".into(),
            ));
        }
        if availability.len() != self.dates.len() {
            return Err(ChoseiError::Validation(format!(
                "expected {} availability marks, got {}",
                self.dates.len(),
                availability.len()
            )));
        }

        self.participants.push(Participant {
            name: name.to_string(),
            comment: comment.filter(|c| !c.trim().is_empty()),
            availability,
            submitted_at: Utc::now(),
        });

        Ok(())
    }
}
