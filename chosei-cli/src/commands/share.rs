use anyhow::Result;
use chosei_core::config::ChoseiConfig;
use chosei_core::store::{EventStore, KeyValue};

/// Participate link for an event id. Possession of the link is the only
/// authorization there is.
pub fn participate_url(config: &ChoseiConfig, id: &str) -> String {
    format!(
        "{}/event/{}/participate",
        config.share_base_url.trim_end_matches('/'),
        id
    )
}

pub fn run<S: KeyValue>(store: &EventStore<S>, config: &ChoseiConfig, id: &str) -> Result<()> {
    let event = store.load(id)?;
    println!("{}", participate_url(config, &event.id));
    Ok(())
}
