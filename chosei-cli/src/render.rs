//! Terminal rendering for chosei types.
//!
//! Extension traits adding colored output to chosei-core types using
//! owo_colors, plus the availability grid that `chosei show` prints.

use chosei_core::candidate::parse_candidate;
use chosei_core::event::{AvailabilityMark, Event};
use chosei_core::tally::{SlotTally, tally};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for AvailabilityMark {
    fn render(&self) -> String {
        match self {
            AvailabilityMark::Available => "○".green().to_string(),
            AvailabilityMark::Maybe => "△".yellow().to_string(),
            AvailabilityMark::Unavailable => "×".red().to_string(),
        }
    }
}

impl Render for SlotTally {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            format!("○{}", self.available).green(),
            format!("△{}", self.maybe).yellow(),
            format!("×{}", self.unavailable).red(),
        )
    }
}

/// Render the full availability view: each candidate with its tally, then
/// one row of marks per participant in voting order.
pub fn render_grid(event: &Event) -> String {
    let mut lines = Vec::new();

    lines.push(event.name.bold().to_string());
    if let Some(description) = &event.description {
        lines.push(description.dimmed().to_string());
    }
    lines.push(String::new());

    let tallies = tally(event);
    for (date, slot) in event.dates.iter().zip(&tallies) {
        lines.push(format!("  {}   {}", parse_candidate(date), slot.render()));
    }

    if event.participants.is_empty() {
        lines.push(String::new());
        lines.push("  No responses yet".dimmed().to_string());
        return lines.join("\n");
    }

    lines.push(String::new());
    for participant in &event.participants {
        // Undefined marks render as ×, mirroring how they are tallied.
        let marks: String = (0..event.dates.len())
            .map(|index| {
                participant
                    .availability
                    .get(index)
                    .copied()
                    .unwrap_or(AvailabilityMark::Unavailable)
                    .render()
            })
            .collect();

        let mut line = format!("  {} {}", marks, participant.name);
        if let Some(comment) = &participant.comment {
            line.push_str(&format!("  {}", comment.dimmed()));
        }
        lines.push(line);
    }

    lines.join("\n")
}
