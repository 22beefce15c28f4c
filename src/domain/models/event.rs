use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pricing/capacity class of an event. The server may grow new variants
/// before this client does; those deserialize as `Unknown`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    PaidLimited,
    FreeLimited,
    FreeUnlimited,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketPricing {
    Free,
    Paid,
}

/// A priced or free ticket category. `ticket_quantity` absent means
/// unlimited capacity, which is only valid for FREE_UNLIMITED events.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TicketTier {
    pub ticket_name: String,
    pub ticket_price: f64,
    pub ticket_price_details: TicketPricing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_quantity: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub event_name: String,
    #[serde(default)]
    pub event_description: String,
    #[serde(default)]
    pub event_category: String,
    pub event_type: EventType,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub ticket_details: Vec<TicketTier>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub additional_message: Option<String>,
    #[serde(default)]
    pub event_photo_url: Option<String>,
    #[serde(default)]
    pub cover_photo_url: Option<String>,
}

impl Event {
    /// The schema allows several tiers but only tier 0 is ever consulted.
    pub fn primary_tier(&self) -> Option<&TicketTier> {
        self.ticket_details.first()
    }

    pub fn base_price(&self) -> Option<f64> {
        self.primary_tier().map(|t| t.ticket_price)
    }

    pub fn is_free(&self) -> bool {
        self.primary_tier()
            .map(|t| t.ticket_price_details == TicketPricing::Free)
            .unwrap_or(false)
    }
}

/// Creation/update payload. The server assigns the id.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub event_name: String,
    pub event_description: String,
    pub event_category: String,
    pub event_type: EventType,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub venue_id: String,
    pub ticket_details: Vec<TicketTier>,
    pub contact: Option<String>,
    pub additional_message: Option<String>,
    pub event_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
}
