//! Per-candidate availability aggregation.

use serde::Serialize;

use crate::event::{AvailabilityMark, Event};

/// Aggregate counts for one candidate slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlotTally {
    pub available: usize,
    pub maybe: usize,
    pub unavailable: usize,
}

impl SlotTally {
    /// Total responses counted into this slot.
    pub fn total(&self) -> usize {
        self.available + self.maybe + self.unavailable
    }
}

/// Tally every participant's marks per candidate slot.
///
/// Pure function of the event snapshot, cheap enough to recompute on every
/// render. A participant whose availability vector no longer lines up with
/// the candidate list (possible after the list was reshaped) counts as
/// unavailable for uncovered slots; marks past the end of the list are
/// ignored. Each slot's counts therefore always sum to the participant
/// count.
pub fn tally(event: &Event) -> Vec<SlotTally> {
    (0..event.dates.len())
        .map(|index| {
            let mut slot = SlotTally::default();
            for participant in &event.participants {
                let mark = participant
                    .availability
                    .get(index)
                    .copied()
                    .unwrap_or(AvailabilityMark::Unavailable);
                match mark {
                    AvailabilityMark::Available => slot.available += 1,
                    AvailabilityMark::Maybe => slot.maybe += 1,
                    AvailabilityMark::Unavailable => slot.unavailable += 1,
                }
            }
            slot
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AvailabilityMark::{Available, Maybe, Unavailable};

    fn make_event(dates: &[&str]) -> Event {
        Event::new(
            "チーム会議",
            None,
            dates.iter().map(|d| d.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn tallies_the_two_participant_scenario() {
        let mut event = make_event(&["2025/04/01 19:00～", "2025/04/02 19:00～"]);
        event
            .add_participant("Aさん", None, vec![Available, Maybe])
            .unwrap();
        event
            .add_participant("Bさん", None, vec![Unavailable, Available])
            .unwrap();

        assert_eq!(
            tally(&event),
            vec![
                SlotTally {
                    available: 1,
                    maybe: 0,
                    unavailable: 1,
                },
                SlotTally {
                    available: 1,
                    maybe: 1,
                    unavailable: 0,
                },
            ]
        );
    }

    #[test]
    fn empty_event_tallies_to_zeroes() {
        let event = make_event(&["2025/04/01 19:00～"]);
        assert_eq!(tally(&event), vec![SlotTally::default()]);
    }

    #[test]
    fn one_entry_per_candidate() {
        let event = make_event(&["2025/04/01 19:00～", "2025/04/02 19:00～", "未定"]);
        assert_eq!(tally(&event).len(), 3);
    }

    #[test]
    fn counts_sum_to_participant_count_at_every_index() {
        let mut event = make_event(&["2025/04/01 19:00～", "2025/04/02 19:00～"]);
        event
            .add_participant("Aさん", None, vec![Available, Available])
            .unwrap();
        event
            .add_participant("Bさん", None, vec![Maybe, Unavailable])
            .unwrap();
        event
            .add_participant("Cさん", None, vec![Unavailable, Maybe])
            .unwrap();

        for slot in tally(&event) {
            assert_eq!(slot.total(), 3);
        }
    }

    #[test]
    fn short_vector_counts_as_unavailable_for_uncovered_slots() {
        let mut event = make_event(&["2025/04/01 19:00～"]);
        event.add_participant("Aさん", None, vec![Available]).unwrap();

        // A candidate appended after the response leaves the vector short.
        event.add_candidate("2025/04/03 19:00～");

        let tallies = tally(&event);
        assert_eq!(tallies[0].available, 1);
        assert_eq!(tallies[1].unavailable, 1);
        assert_eq!(tallies[1].total(), 1);
    }

    #[test]
    fn sums_stay_intact_after_candidate_removal() {
        let mut event = make_event(&["2025/04/01 19:00～", "2025/04/02 19:00～"]);
        event
            .add_participant("Aさん", None, vec![Available, Maybe])
            .unwrap();

        // The documented escape hatch: stale vectors are not migrated.
        event.remove_candidate(0).unwrap();

        let tallies = tally(&event);
        assert_eq!(tallies.len(), 1);
        // The mark at index 0 was recorded for the removed candidate.
        assert_eq!(tallies[0].available, 1);
        assert_eq!(tallies[0].total(), 1);
    }
}
