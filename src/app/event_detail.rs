use chrono::{DateTime, Utc};
use tracing::warn;

use crate::app::discovery::{UNKNOWN_ADDRESS, UNKNOWN_VENUE};
use crate::domain::models::{event::Event, venue::Venue};
use crate::domain::services::eligibility::{self, EligibilityResult};
use crate::domain::services::presentation::{action_state, ActionState, SubmissionState};
use crate::error::AppError;
use crate::state::AppState;

/// Detail screen for a single event.
#[derive(Debug, Clone)]
pub struct EventDetailView {
    pub event: Event,
    pub venue: Option<Venue>,
    pub venue_name: String,
    pub venue_address: String,
    pub base_price: Option<f64>,
    pub eligibility: EligibilityResult,
    pub status_line: String,
    pub action: ActionState,
}

pub async fn load_event_detail(
    state: &AppState,
    event_id: &str,
    now: DateTime<Utc>,
) -> Result<EventDetailView, AppError> {
    let event = state.events_api.get(event_id).await?;

    // The venue is decoration here; a failed lookup falls back instead of
    // taking the screen down.
    let venue = match &event.venue_id {
        Some(id) => match state.venues_api.get(id).await {
            Ok(venue) => Some(venue),
            Err(e) => {
                warn!(venue_id = %id, "Venue lookup failed: {}", e);
                None
            }
        },
        None => None,
    };

    let eligibility = eligibility::evaluate(&event, now);
    let status_line = eligibility::status_message(&event, &eligibility);
    let action = action_state(&eligibility, SubmissionState::Idle);

    Ok(EventDetailView {
        venue_name: venue
            .as_ref()
            .map(|v| v.venue_name.clone())
            .unwrap_or_else(|| UNKNOWN_VENUE.to_string()),
        venue_address: venue
            .as_ref()
            .filter(|v| !v.address.is_empty())
            .map(|v| v.address.clone())
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
        base_price: event.base_price(),
        venue,
        eligibility,
        status_line,
        action,
        event,
    })
}
