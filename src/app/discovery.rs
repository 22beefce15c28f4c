use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::models::{event::Event, venue::Venue};
use crate::domain::services::eligibility::{self, EligibilityResult};
use crate::error::AppError;
use crate::state::AppState;

pub const UNKNOWN_VENUE: &str = "Unknown Venue";
pub const UNKNOWN_ADDRESS: &str = "TBD";

/// One card in the discovery grid: the event joined with its venue plus the
/// eligibility-derived status line.
#[derive(Debug, Clone)]
pub struct EventSummary {
    pub event: Event,
    pub venue: Option<Venue>,
    pub venue_name: String,
    pub venue_address: String,
    pub eligibility: EligibilityResult,
    pub status_line: String,
}

/// Loads events and venues in parallel and joins them client-side; an event
/// whose venue lookup misses still renders, with fallback labels.
pub async fn load_event_grid(
    state: &AppState,
    now: DateTime<Utc>,
) -> Result<Vec<EventSummary>, AppError> {
    let (events, venues) = tokio::try_join!(state.events_api.list(), state.venues_api.list())?;

    let venues_by_id: HashMap<String, Venue> =
        venues.into_iter().map(|v| (v.id.clone(), v)).collect();

    Ok(events
        .into_iter()
        .map(|event| summarize(event, &venues_by_id, now))
        .collect())
}

fn summarize(event: Event, venues_by_id: &HashMap<String, Venue>, now: DateTime<Utc>) -> EventSummary {
    let venue = event
        .venue_id
        .as_ref()
        .and_then(|id| venues_by_id.get(id))
        .cloned();
    let venue_name = venue
        .as_ref()
        .map(|v| v.venue_name.clone())
        .unwrap_or_else(|| UNKNOWN_VENUE.to_string());
    let venue_address = venue
        .as_ref()
        .filter(|v| !v.address.is_empty())
        .map(|v| v.address.clone())
        .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string());

    let eligibility = eligibility::evaluate(&event, now);
    let status_line = eligibility::status_message(&event, &eligibility);

    EventSummary {
        event,
        venue,
        venue_name,
        venue_address,
        eligibility,
        status_line,
    }
}
