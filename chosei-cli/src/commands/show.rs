use anyhow::Result;
use chosei_core::store::{EventStore, KeyValue};

use crate::render::render_grid;

pub fn run<S: KeyValue>(store: &EventStore<S>, id: &str) -> Result<()> {
    let event = store.load(id)?;
    println!("{}", render_grid(&event));
    Ok(())
}
