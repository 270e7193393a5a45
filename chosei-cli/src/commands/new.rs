use anyhow::Result;
use chosei_core::candidate::{format_candidate, parse_candidate};
use chosei_core::config::ChoseiConfig;
use chosei_core::event::Event;
use chosei_core::store::{EventStore, KeyValue};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::share::participate_url;

/// Fallback time label when none was ever remembered.
const DEFAULT_TIME_LABEL: &str = "19:00～";

pub fn run<S: KeyValue>(
    store: &mut EventStore<S>,
    config: &ChoseiConfig,
    name: String,
    description: Option<String>,
    dates: Vec<String>,
    slots: Vec<String>,
    time: Option<String>,
) -> Result<()> {
    let time_label = time
        .or_else(|| store.last_time_label())
        .unwrap_or_else(|| DEFAULT_TIME_LABEL.to_string());

    let mut candidates = Vec::with_capacity(dates.len() + slots.len());
    for raw in &dates {
        let date = parse_calendar_date(raw)?;
        candidates.push(format_candidate(date, &time_label));
    }
    candidates.extend(slots);

    let event = Event::new(&name, description, candidates)?;
    store.save(&event)?;
    store.remember_time_label(&time_label)?;

    println!("{}", format!("Created: {}", event.name).green());
    println!("  id:          {}", event.id);
    println!("  participate: {}", participate_url(config, &event.id));
    for date in &event.dates {
        println!("  {}", parse_candidate(date));
    }

    Ok(())
}

/// Parse a strict YYYY/MM/DD calendar date.
fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y/%m/%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY/MM/DD", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_separated_dates() {
        let date = parse_calendar_date("2025/04/01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn rejects_other_separators_and_nonsense() {
        assert!(parse_calendar_date("2025-04-01").is_err());
        assert!(parse_calendar_date("April 1st").is_err());
        assert!(parse_calendar_date("2025/13/01").is_err());
    }
}
