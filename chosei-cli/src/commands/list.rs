use anyhow::Result;
use chosei_core::store::{EventStore, KeyValue};
use owo_colors::OwoColorize;

pub fn run<S: KeyValue>(store: &EventStore<S>, json: bool) -> Result<()> {
    let events = store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &events {
        let counts = format!(
            "({} candidates, {} responses)",
            event.dates.len(),
            event.participants.len()
        );
        println!(
            "{}  {} {}",
            event.created_at.format("%Y-%m-%d"),
            event.name.bold(),
            counts.dimmed()
        );
        println!("            {}", event.id.dimmed());
    }

    Ok(())
}
