//! Event endpoints mirroring the browser app's navigation targets.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chosei_core::event::{AvailabilityMark, Event};
use chosei_core::tally::{SlotTally, tally};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", get(get_event))
        .route("/events/{id}/tally", get(get_tally))
        .route("/events/{id}/participants", post(add_participant))
}

/// Request body for creating an event
#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub dates: Vec<String>,
}

/// Summary row returned by GET /events
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub name: String,
    pub dates: usize,
    pub participants: usize,
    pub created_at: DateTime<Utc>,
}

/// POST /events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<Event>, AppError> {
    let event = Event::new(&req.name, req.description, req.dates)?;
    state.store().save(&event)?;

    tracing::info!(id = %event.id, "created event");
    Ok(Json(event))
}

/// GET /events - List stored events in creation order
async fn list_events(State(state): State<AppState>) -> Json<Vec<EventSummary>> {
    let summaries = state
        .store()
        .list()
        .into_iter()
        .map(|event| EventSummary {
            id: event.id,
            name: event.name,
            dates: event.dates.len(),
            participants: event.participants.len(),
            created_at: event.created_at,
        })
        .collect();

    Json(summaries)
}

/// GET /events/:id - Fetch one event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let event = state.store().load(&id)?;
    Ok(Json(event))
}

/// GET /events/:id/tally - Per-candidate availability counts
async fn get_tally(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SlotTally>>, AppError> {
    let event = state.store().load(&id)?;
    Ok(Json(tally(&event)))
}

/// Request body for submitting a response
#[derive(Deserialize)]
pub struct AddParticipantRequest {
    pub name: String,
    pub comment: Option<String>,
    pub availability: Vec<AvailabilityMark>,
}

/// POST /events/:id/participants - Append a participant response
async fn add_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddParticipantRequest>,
) -> Result<Json<Event>, AppError> {
    let mut store = state.store();

    let mut event = store.load(&id)?;
    event.add_participant(&req.name, req.comment, req.availability)?;
    store.save(&event)?;

    tracing::info!(id = %event.id, participants = event.participants.len(), "recorded response");
    Ok(Json(event))
}
