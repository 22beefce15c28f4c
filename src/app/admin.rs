use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::models::booking::BookingStatus;
use crate::domain::models::event::{Event, EventType, NewEvent, TicketPricing, TicketTier};
use crate::domain::models::user::User;
use crate::domain::models::venue::NewVenue;
use crate::error::AppError;
use crate::state::AppState;

/// Flat form the create/edit screens collect. Venue and event are captured
/// together; submission creates the venue first and then the event.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub event_name: String,
    pub description: String,
    pub category: String,
    pub event_type: EventType,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub venue_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub ticket_name: String,
    pub ticket_price: f64,
    pub ticket_quantity: Option<i64>,
    pub contact: Option<String>,
    pub additional_message: Option<String>,
    pub event_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
}

impl EventForm {
    /// The tier's pricing class is forced by the event type, never chosen
    /// independently.
    fn ticket_tier(&self) -> TicketTier {
        TicketTier {
            ticket_name: self.ticket_name.clone(),
            ticket_price: self.ticket_price,
            ticket_price_details: match self.event_type {
                EventType::PaidLimited => TicketPricing::Paid,
                _ => TicketPricing::Free,
            },
            ticket_quantity: self.ticket_quantity,
        }
    }

    fn validate(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        if self.event_name.trim().is_empty() {
            return Err(AppError::Validation("Event name is required".into()));
        }
        if self.start_date_time <= now {
            return Err(AppError::Validation(
                "Event must start in the future".into(),
            ));
        }
        if self.end_date_time <= self.start_date_time {
            return Err(AppError::Validation("Event must end after it starts".into()));
        }
        match self.event_type {
            EventType::PaidLimited => {
                if self.ticket_price <= 0.0 {
                    return Err(AppError::Validation(
                        "Paid events need a ticket price above zero".into(),
                    ));
                }
                if self.ticket_quantity.is_none() {
                    return Err(AppError::Validation(
                        "Limited events need a ticket quantity".into(),
                    ));
                }
            }
            EventType::FreeLimited => {
                if self.ticket_price != 0.0 {
                    return Err(AppError::Validation("Free events cannot have a price".into()));
                }
                if self.ticket_quantity.is_none() {
                    return Err(AppError::Validation(
                        "Limited events need a ticket quantity".into(),
                    ));
                }
            }
            EventType::FreeUnlimited => {
                if self.ticket_price != 0.0 {
                    return Err(AppError::Validation("Free events cannot have a price".into()));
                }
                if self.ticket_quantity.is_some() {
                    return Err(AppError::Validation(
                        "Unlimited events cannot carry a ticket quantity".into(),
                    ));
                }
            }
            EventType::Unknown => {
                return Err(AppError::Validation("Unrecognized event type".into()));
            }
        }
        if let Some(quantity) = self.ticket_quantity {
            if quantity < 0 {
                return Err(AppError::Validation(
                    "Ticket quantity cannot be negative".into(),
                ));
            }
        }
        Ok(())
    }

    fn into_payload(self, venue_id: String) -> NewEvent {
        let tier = self.ticket_tier();
        NewEvent {
            event_name: self.event_name,
            event_description: self.description,
            event_category: self.category.to_uppercase(),
            event_type: self.event_type,
            start_date_time: self.start_date_time,
            end_date_time: self.end_date_time,
            venue_id,
            ticket_details: vec![tier],
            contact: self.contact,
            additional_message: self.additional_message,
            event_photo_url: self.event_photo_url,
            cover_photo_url: self.cover_photo_url,
        }
    }
}

fn require_manager(state: &AppState) -> Result<User, AppError> {
    let user = state.auth.require_user()?;
    if !user.role.can_manage_events() {
        return Err(AppError::Forbidden(
            "Only admins and managers can manage events".into(),
        ));
    }
    Ok(user)
}

/// Creates the venue, then the event pointing at it. The venue's capacity is
/// the ticket quantity and the session user becomes its manager.
pub async fn create_event(state: &AppState, form: EventForm) -> Result<Event, AppError> {
    let user = require_manager(state)?;
    let now = Utc::now();
    form.validate(now)?;

    let venue_id = state
        .venues_api
        .create(&NewVenue {
            venue_name: form.venue_name.clone(),
            capacity: form.ticket_quantity.unwrap_or(0),
            address: form.address.clone(),
            city: form.city.clone(),
            zip_code: form.zip_code.clone(),
            manager: user.id.clone(),
        })
        .await?;
    info!(%venue_id, "venue created");

    let event = state
        .events_api
        .create(&form.into_payload(venue_id))
        .await?;
    info!(event_id = %event.id, "event created");
    Ok(event)
}

/// Rewrites an existing event in place, keeping its current venue.
pub async fn update_event(
    state: &AppState,
    event_id: &str,
    form: EventForm,
) -> Result<Event, AppError> {
    require_manager(state)?;
    form.validate(Utc::now())?;

    let existing = state.events_api.get(event_id).await?;
    let venue_id = existing.venue_id.ok_or_else(|| {
        AppError::Validation(format!("Event {} has no venue to keep", event_id))
    })?;
    state
        .events_api
        .update(event_id, &form.into_payload(venue_id))
        .await
}

pub async fn delete_event(state: &AppState, event_id: &str) -> Result<(), AppError> {
    require_manager(state)?;
    state.events_api.delete(event_id).await?;
    info!(event_id, "event deleted");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub total_attendees: u64,
    pub total_revenue: f64,
    pub upcoming_events: usize,
}

/// Aggregates across all bookings on the platform. Cancelled bookings still
/// count toward the booking total but not toward attendees or revenue.
pub async fn load_dashboard(state: &AppState, now: DateTime<Utc>) -> Result<DashboardStats, AppError> {
    require_manager(state)?;

    let (bookings, events) = tokio::try_join!(state.bookings_api.list(), state.events_api.list())?;

    let starts_by_event: HashMap<&str, DateTime<Utc>> = events
        .iter()
        .map(|e| (e.id.as_str(), e.start_date_time))
        .collect();

    let mut stats = DashboardStats {
        total_bookings: bookings.len(),
        total_attendees: 0,
        total_revenue: 0.0,
        upcoming_events: 0,
    };
    for booking in &bookings {
        if booking.booking_status == BookingStatus::Confirmed {
            stats.total_attendees += booking.number_of_tickets as u64;
            stats.total_revenue += booking.total_amount;
        }
        if let Some(start) = starts_by_event.get(booking.event_id.as_str()) {
            if *start > now {
                stats.upcoming_events += 1;
            }
        }
    }
    Ok(stats)
}

/// Poster/cover image suggestions. The collaborator is best-effort: any
/// failure degrades to no suggestions, never an error the form has to handle.
pub async fn search_event_images(state: &AppState, query: &str) -> Vec<String> {
    match state.image_search.search(query).await {
        Ok(urls) => urls,
        Err(e) => {
            warn!("Image search failed: {}", e);
            Vec::new()
        }
    }
}
