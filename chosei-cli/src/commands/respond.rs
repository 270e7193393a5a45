use anyhow::Result;
use chosei_core::candidate::parse_candidate;
use chosei_core::event::AvailabilityMark;
use chosei_core::store::{EventStore, KeyValue};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

pub fn run<S: KeyValue>(
    store: &mut EventStore<S>,
    id: &str,
    name: Option<String>,
    comment: Option<String>,
    marks: Option<String>,
) -> Result<()> {
    let mut event = store.load(id)?;

    let name = match name {
        Some(n) => n,
        None => Input::<String>::new().with_prompt("  Name").interact_text()?,
    };

    let availability = match marks {
        Some(raw) => parse_marks(&raw)?,
        None => prompt_marks(&event.dates)?,
    };

    event.add_participant(&name, comment, availability)?;
    store.save(&event)?;

    println!("{}", format!("Recorded response from {}", name).green());
    Ok(())
}

/// Parse a marks string: one mark per candidate in voting order.
/// `o`/`○` available, `m`/`△` maybe, `x`/`×` unavailable; marks may be
/// separated by commas or spaces, or run together ("omx").
fn parse_marks(raw: &str) -> Result<Vec<AvailabilityMark>> {
    raw.chars()
        .filter(|c| !matches!(c, ',' | ' '))
        .map(|c| match c {
            'o' | 'O' | '○' => Ok(AvailabilityMark::Available),
            'm' | 'M' | '△' => Ok(AvailabilityMark::Maybe),
            'x' | 'X' | '×' => Ok(AvailabilityMark::Unavailable),
            other => Err(anyhow::anyhow!("Unknown mark '{}'. Use o, m or x", other)),
        })
        .collect()
}

/// Ask for a mark per candidate, in voting order. Defaults to unavailable,
/// matching the response form's initial state.
fn prompt_marks(dates: &[String]) -> Result<Vec<AvailabilityMark>> {
    let items = ["○ available", "△ maybe", "× unavailable"];
    let mut availability = Vec::with_capacity(dates.len());

    for date in dates {
        let selection = Select::new()
            .with_prompt(format!("  {}", parse_candidate(date)))
            .items(&items)
            .default(2)
            .interact()?;

        availability.push(match selection {
            0 => AvailabilityMark::Available,
            1 => AvailabilityMark::Maybe,
            _ => AvailabilityMark::Unavailable,
        });
    }

    Ok(availability)
}
